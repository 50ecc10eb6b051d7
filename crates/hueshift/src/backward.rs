//! v4 → v3: `oklch()` literals to HSL triples.
//!
//! v4 themes put `:root` and `.dark` at the top level; v3 expects them inside
//! `@layer base`. Every retained line is tagged with the [`Section`] it was
//! found in, the source's own block delimiters are dropped, and the document is
//! reassembled at the end:
//!
//! ```text
//! @layer base {
//!   :root {
//!   <root lines>
//!   }
//!
//!   .dark {
//!   <dark lines>
//!   }
//! }
//!
//! <other lines>
//! ```
//!
//! The wrapper is only written when the input had a `:root` block. Without one
//! the output is just the other lines.

use tracing::debug;

use crate::color::oklch_to_hsl;
use crate::line::{
    lines, LineKind, Scope, Section, ALTERNATE_OPENER, CLOSER, ROOT_OPENER, WRAPPER_OPENER,
};
use crate::outcome::ConversionOutcome;
use crate::value::parse_oklch;

/// Converts a v4 document to v3.
///
/// ```rust
/// let outcome = hueshift::convert_backward(":root {\n  --x: oklch(0.5 0.2 180);\n}");
/// assert_eq!(
///     outcome.converted_text(),
///     "@layer base {\n  :root {\n  --x: 180 20% 50%;\n  }\n\n  .dark {\n  }\n}\n"
/// );
/// ```
pub fn convert_backward(source: &str) -> ConversionOutcome {
    let mut tagged: Vec<(Section, String)> = Vec::new();
    let mut diagnostics = Vec::new();
    let mut scope = Scope::default();
    let mut needs_wrapper = false;

    for line in lines(source) {
        let text = match line.kind() {
            LineKind::RootOpen => {
                scope = scope.enter_root();
                needs_wrapper = true;
                continue;
            }
            LineKind::AlternateOpen => {
                scope = scope.enter_alternate();
                continue;
            }
            LineKind::Close => {
                scope = Scope::Outside;
                continue;
            }
            LineKind::Declaration(decl) if !decl.is_radius() => match parse_oklch(&decl.value) {
                Some(oklch) => {
                    if oklch.has_extra() {
                        debug!(
                            line = line.number,
                            dropped = %oklch.extra.join(" "),
                            "OKLCH value has trailing tokens; they are not carried over"
                        );
                    }
                    match oklch.triple().and_then(oklch_to_hsl) {
                        Ok(hsl) => decl.rewrite(hsl),
                        Err(err) => {
                            debug!(line = line.number, error = %err, "OKLCH value not converted");
                            diagnostics.push(format!(
                                "Line {}: Failed to convert OKLCH value \"{}\"",
                                line.number, decl.value
                            ));
                            line.text.to_string()
                        }
                    }
                }
                None => line.text.to_string(),
            },
            // v4 sources have no wrapper, so a stray `@layer base` line is
            // ordinary content.
            LineKind::WrapperOpen
            | LineKind::Blank
            | LineKind::Comment
            | LineKind::Declaration(_)
            | LineKind::Other => line.text.to_string(),
        };
        tagged.push((scope.section(), text));
    }

    let output = assemble(tagged, needs_wrapper);
    debug!(
        wrapped = needs_wrapper,
        failures = diagnostics.len(),
        "converted v4 document to v3"
    );
    ConversionOutcome::new(output, diagnostics)
}

fn assemble(tagged: Vec<(Section, String)>, wrap: bool) -> String {
    let mut root = Vec::new();
    let mut alternate = Vec::new();
    let mut other = Vec::new();
    for (section, text) in tagged {
        match section {
            Section::Root => root.push(text),
            Section::Alternate => alternate.push(text),
            Section::Other => other.push(text),
        }
    }

    if !wrap {
        return other.join("\n");
    }

    let mut out: Vec<String> = Vec::with_capacity(root.len() + alternate.len() + other.len() + 9);
    out.push(WRAPPER_OPENER.to_string());
    out.push(format!("  {ROOT_OPENER}"));
    out.extend(root);
    out.push(format!("  {CLOSER}"));
    out.push(String::new());
    out.push(format!("  {ALTERNATE_OPENER}"));
    out.extend(alternate);
    out.push(format!("  {CLOSER}"));
    out.push(CLOSER.to_string());
    out.push(String::new());
    out.extend(other);
    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_root_and_dark_sections() {
        let input = ":root {\n  --a: oklch(0.5 0.2 180);\n}\n\n.dark {\n  --a: oklch(0.1 0.05 20);\n}";
        let outcome = convert_backward(input);
        assert!(outcome.succeeded());
        assert_eq!(
            outcome.converted_text(),
            "@layer base {\n  :root {\n  --a: 180 20% 50%;\n  }\n\n  .dark {\n  --a: 20 5% 10%;\n  }\n}\n\n"
        );
    }

    #[test]
    fn blank_line_between_blocks_lands_in_other() {
        let outcome = convert_backward(":root {\n}\n\n.dark {\n}");
        assert_eq!(
            outcome.converted_text(),
            "@layer base {\n  :root {\n  }\n\n  .dark {\n  }\n}\n\n"
        );
    }

    #[test]
    fn no_root_block_means_no_wrapper() {
        let input = ".dark {\n  --a: oklch(0.5 0.2 180);\n}\nbody {}";
        let outcome = convert_backward(input);
        assert_eq!(outcome.converted_text(), "body {}");
    }

    #[test]
    fn other_content_follows_wrapper() {
        let input = "/* theme */\n:root {\n  --radius: 0.65rem;\n}\n@theme inline {";
        let outcome = convert_backward(input);
        assert_eq!(
            outcome.converted_text(),
            "@layer base {\n  :root {\n  --radius: 0.65rem;\n  }\n\n  .dark {\n  }\n}\n\n/* theme */\n@theme inline {"
        );
    }

    #[test]
    fn alpha_suffix_is_dropped() {
        let outcome = convert_backward("--border: oklch(1 0 0 / 10%);");
        assert_eq!(outcome.converted_text(), "--border: 0 0% 100%;");
        assert!(outcome.succeeded());
    }

    #[test]
    fn non_numeric_component_is_reported() {
        let input = ":root {\n  --a: oklch(0.5 0.2 180);\n  --b: oklch(none 0.1 20);\n}";
        let outcome = convert_backward(input);
        assert!(!outcome.succeeded());
        assert_eq!(
            outcome.diagnostics(),
            ["Line 3: Failed to convert OKLCH value \"oklch(none 0.1 20)\"".to_string()]
        );
        assert!(outcome
            .converted_text()
            .contains("\n  --b: oklch(none 0.1 20);\n"));
    }

    #[test]
    fn non_oklch_values_pass_through() {
        let outcome = convert_backward("--font: Inter;\n--x: 0 0% 100%;");
        assert_eq!(outcome.converted_text(), "--font: Inter;\n--x: 0 0% 100%;");
    }
}
