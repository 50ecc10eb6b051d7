//! v3 → v4: HSL triples to `oklch()` literals.
//!
//! The `@layer base { ... }` wrapper is removed (its opening line and the `}`
//! that closes it are dropped); everything else keeps its line and position.
//! Declarations whose value is an HSL triple are rewritten in place with their
//! original indentation.

use tracing::debug;

use crate::color::hsl_to_oklch;
use crate::line::{lines, LineKind, Scope};
use crate::outcome::ConversionOutcome;
use crate::value::parse_hsl;

/// Converts a v3 document to v4.
///
/// ```rust
/// let outcome = hueshift::convert_forward(":root {\n  --background: 0 0% 100%;\n}");
/// assert!(outcome.succeeded());
/// assert_eq!(
///     outcome.converted_text(),
///     ":root {\n  --background: oklch(1.000 0.000 0.000);\n}"
/// );
/// ```
pub fn convert_forward(source: &str) -> ConversionOutcome {
    let mut output = Vec::new();
    let mut diagnostics = Vec::new();
    let mut scope = Scope::default();

    for line in lines(source) {
        match line.kind() {
            LineKind::WrapperOpen => {
                scope = scope.enter_wrapper();
            }
            LineKind::RootOpen => {
                scope = scope.enter_root();
                output.push(line.text.to_string());
            }
            LineKind::AlternateOpen => {
                scope = scope.enter_alternate();
                output.push(line.text.to_string());
            }
            LineKind::Close => {
                // The wrapper's own closer goes away with its opener.
                if scope != Scope::Wrapper {
                    output.push(line.text.to_string());
                }
                scope = scope.close();
            }
            LineKind::Declaration(decl) if !decl.is_radius() => match parse_hsl(&decl.value) {
                Some(hsl) => match hsl_to_oklch(hsl) {
                    Ok(oklch) => output.push(decl.rewrite(oklch)),
                    Err(err) => {
                        debug!(line = line.number, error = %err, "HSL value not converted");
                        diagnostics.push(format!(
                            "Line {}: Failed to convert HSL value \"{}\"",
                            line.number, decl.value
                        ));
                        output.push(line.text.to_string());
                    }
                },
                None => output.push(line.text.to_string()),
            },
            LineKind::Blank
            | LineKind::Comment
            | LineKind::Declaration(_)
            | LineKind::Other => output.push(line.text.to_string()),
        }
    }

    debug!(
        lines = output.len(),
        failures = diagnostics.len(),
        "converted v3 document to v4"
    );
    ConversionOutcome::new(output.join("\n"), diagnostics)
}
