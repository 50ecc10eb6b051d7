//! Advisory checks over a theme document.
//!
//! Validation runs independently of conversion and never changes its result.
//! Two things are checked:
//!
//! - Brace balance over the whole document. Braces are counted character by
//!   character, including any that appear inside comments or strings.
//! - Syntax of every line that starts with `--`.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::line::trim;

/// Reported once when `{` and `}` do not balance.
pub const UNMATCHED_BRACES: &str = "Unmatched braces in CSS";

static VARIABLE_SYNTAX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*--[A-Za-z0-9_-]+:\s*[^;]+;?\s*$").expect("variable syntax pattern is valid")
});

/// Returns advisory diagnostics for `source`, in line order.
///
/// ```rust
/// assert!(hueshift::validate(":root { --a: 1 1% 1%; }").is_empty());
/// assert_eq!(
///     hueshift::validate("--a 1 1% 1%"),
///     vec!["Line 1: Invalid CSS variable syntax".to_string()]
/// );
/// ```
pub fn validate(source: &str) -> Vec<String> {
    let mut diagnostics = Vec::new();
    let mut depth: i64 = 0;

    for (index, line) in source.split('\n').enumerate() {
        let trimmed = trim(line);
        if trimmed.is_empty() {
            continue;
        }

        for ch in line.chars() {
            match ch {
                '{' => depth += 1,
                '}' => depth -= 1,
                _ => {}
            }
        }

        if trimmed.starts_with("--") && !VARIABLE_SYNTAX.is_match(trimmed) {
            diagnostics.push(format!("Line {}: Invalid CSS variable syntax", index + 1));
        }
    }

    if depth != 0 {
        diagnostics.push(UNMATCHED_BRACES.to_string());
    }

    diagnostics
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balanced_single_line_is_clean() {
        assert!(validate(":root { --a: 1 1% 1%; }").is_empty());
    }

    #[test]
    fn missing_closer_is_reported_once() {
        assert_eq!(
            validate(":root { --a: 1 1% 1%;"),
            vec![UNMATCHED_BRACES.to_string()]
        );
    }

    #[test]
    fn extra_closer_is_unbalanced_too() {
        assert_eq!(validate(":root {\n}\n}"), vec![UNMATCHED_BRACES.to_string()]);
    }

    #[test]
    fn braces_in_comments_count() {
        assert_eq!(
            validate("/* { */\n:root {\n}"),
            vec![UNMATCHED_BRACES.to_string()]
        );
    }

    #[test]
    fn malformed_declarations_are_numbered() {
        let source = ":root {\n  --ok: 0 0% 100%;\n  --missing-colon 1 1% 1%;\n\n  --empty:;\n  --two: a; b;\n}";
        assert_eq!(
            validate(source),
            vec![
                "Line 3: Invalid CSS variable syntax".to_string(),
                "Line 5: Invalid CSS variable syntax".to_string(),
                "Line 6: Invalid CSS variable syntax".to_string(),
            ]
        );
    }

    #[test]
    fn declarations_without_semicolon_are_valid() {
        assert!(validate("--a: oklch(1 0 0)").is_empty());
        assert!(validate("--a_b-c: 12px ;").is_empty());
    }

    #[test]
    fn non_ascii_property_names_are_rejected() {
        assert_eq!(
            validate("--café: 1 1% 1%;"),
            vec!["Line 1: Invalid CSS variable syntax".to_string()]
        );
    }

    #[test]
    fn leading_byte_order_mark_is_ignored() {
        assert!(validate("\u{feff}--a: 1 1% 1%;\n\u{feff}").is_empty());
    }

    #[test]
    fn empty_document_is_clean() {
        assert!(validate("").is_empty());
        assert!(validate("\n\n   \n").is_empty());
    }
}
