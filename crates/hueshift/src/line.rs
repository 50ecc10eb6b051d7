//! Line classification and section tracking.
//!
//! Theme files are processed one physical line at a time. Each line is
//! classified on its trimmed text, where a byte order mark counts as
//! whitespace:
//!
//! | Trimmed line                     | Kind                       |
//! |----------------------------------|----------------------------|
//! | empty                            | [`LineKind::Blank`]        |
//! | starts with `/*` or `//`         | [`LineKind::Comment`]      |
//! | contains `@layer base`           | [`LineKind::WrapperOpen`]  |
//! | `:root {`                        | [`LineKind::RootOpen`]     |
//! | `.dark {`                        | [`LineKind::AlternateOpen`]|
//! | `}`                              | [`LineKind::Close`]        |
//! | starts with `--`, has a `:`      | [`LineKind::Declaration`]  |
//! | anything else                    | [`LineKind::Other`]        |
//!
//! Block nesting is tracked by [`Scope`]. Only one level of wrapping is
//! understood; deeper nesting is not.

use std::fmt;

/// Opening line of the v3 wrapping block, as emitted.
pub const WRAPPER_OPENER: &str = "@layer base {";
/// Marker that identifies a wrapping block opener.
pub const WRAPPER_MARKER: &str = "@layer base";
/// Opening line of the root (light theme) block.
pub const ROOT_OPENER: &str = ":root {";
/// Opening line of the alternate (dark theme) block.
pub const ALTERNATE_OPENER: &str = ".dark {";
/// A line closing any block.
pub const CLOSER: &str = "}";
/// Declaration that is never treated as a color.
pub const RADIUS_PROPERTY: &str = "--radius";

/// One physical line of input with its 1-based line number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    pub number: usize,
    pub text: &'a str,
}

impl<'a> Line<'a> {
    pub fn kind(&self) -> LineKind<'a> {
        classify(self.text)
    }
}

/// Splits a document into numbered lines on `\n`.
///
/// An empty document yields one empty line, so joining the lines back with
/// `\n` reproduces the input exactly.
pub fn lines(text: &str) -> impl Iterator<Item = Line<'_>> {
    text.split('\n').enumerate().map(|(i, text)| Line {
        number: i + 1,
        text,
    })
}

/// What a line is, as far as conversion is concerned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    Blank,
    Comment,
    WrapperOpen,
    RootOpen,
    AlternateOpen,
    Close,
    Declaration(Declaration<'a>),
    Other,
}

/// A `--name: value;` custom-property declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration<'a> {
    /// Property name including the leading `--`, trimmed.
    pub property: &'a str,
    /// Value with the first `;` removed, trimmed.
    pub value: String,
    /// Leading whitespace of the source line.
    pub indent: &'a str,
}

impl Declaration<'_> {
    /// `--radius` is a length, never a color.
    pub fn is_radius(&self) -> bool {
        self.property == RADIUS_PROPERTY
    }

    /// Builds the replacement line `{indent}{property}: {value};`.
    pub fn rewrite(&self, value: impl fmt::Display) -> String {
        format!("{}{}: {};", self.indent, self.property, value)
    }
}

/// Whitespace for trimming and indentation, including U+FEFF.
pub fn is_space(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

/// `text` without leading or trailing [`is_space`] characters.
pub fn trim(text: &str) -> &str {
    text.trim_matches(is_space)
}

/// Classifies a single line.
pub fn classify(line: &str) -> LineKind<'_> {
    let trimmed = trim(line);

    if trimmed.is_empty() {
        return LineKind::Blank;
    }
    if trimmed.starts_with("/*") || trimmed.starts_with("//") {
        return LineKind::Comment;
    }
    if trimmed.contains(WRAPPER_MARKER) {
        return LineKind::WrapperOpen;
    }

    match trimmed {
        ROOT_OPENER => LineKind::RootOpen,
        ALTERNATE_OPENER => LineKind::AlternateOpen,
        CLOSER => LineKind::Close,
        _ => match parse_declaration(line, trimmed) {
            Some(declaration) => LineKind::Declaration(declaration),
            None => LineKind::Other,
        },
    }
}

fn parse_declaration<'a>(line: &'a str, trimmed: &'a str) -> Option<Declaration<'a>> {
    if !trimmed.starts_with("--") {
        return None;
    }
    let (property, rest) = trimmed.split_once(':')?;

    Some(Declaration {
        property: trim(property),
        value: trim(&rest.replacen(';', "", 1)).to_string(),
        indent: indent_of(line),
    })
}

/// Leading whitespace of `line`.
pub fn indent_of(line: &str) -> &str {
    let body = line.trim_start_matches(is_space);
    &line[..line.len() - body.len()]
}

// ─── Scope tracking ─────────────────────────────────────────────────────────

/// Where in the block structure the current line sits.
///
/// Root and alternate blocks remember whether they were opened inside the
/// wrapping block, so closing them returns to the right place. Being inside
/// both the root and the alternate block at once cannot be expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scope {
    #[default]
    Outside,
    /// Inside `@layer base { ... }` but not inside a selector block.
    Wrapper,
    Root {
        wrapped: bool,
    },
    Alternate {
        wrapped: bool,
    },
}

impl Scope {
    pub fn is_wrapped(self) -> bool {
        match self {
            Scope::Outside => false,
            Scope::Wrapper => true,
            Scope::Root { wrapped } | Scope::Alternate { wrapped } => wrapped,
        }
    }

    pub fn enter_wrapper(self) -> Scope {
        match self {
            Scope::Outside | Scope::Wrapper => Scope::Wrapper,
            Scope::Root { .. } => Scope::Root { wrapped: true },
            Scope::Alternate { .. } => Scope::Alternate { wrapped: true },
        }
    }

    pub fn enter_root(self) -> Scope {
        Scope::Root {
            wrapped: self.is_wrapped(),
        }
    }

    pub fn enter_alternate(self) -> Scope {
        Scope::Alternate {
            wrapped: self.is_wrapped(),
        }
    }

    /// The scope after a `}` line.
    pub fn close(self) -> Scope {
        match self {
            Scope::Outside | Scope::Wrapper => Scope::Outside,
            Scope::Root { wrapped } | Scope::Alternate { wrapped } => {
                if wrapped {
                    Scope::Wrapper
                } else {
                    Scope::Outside
                }
            }
        }
    }

    /// The theme section this scope belongs to.
    pub fn section(self) -> Section {
        match self {
            Scope::Root { .. } => Section::Root,
            Scope::Alternate { .. } => Section::Alternate,
            Scope::Outside | Scope::Wrapper => Section::Other,
        }
    }
}

/// Output group a line belongs to when re-wrapping v4 input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Root,
    Alternate,
    Other,
}
