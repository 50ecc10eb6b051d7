//! # hueshift - Tailwind theme color conversion
//!
//! `hueshift` converts blocks of theme custom properties between two dialects:
//!
//! - **v3**: colors are bare HSL triples (`--primary: 221.2 83.2% 53.3%;`) and
//!   the `:root` / `.dark` blocks sit inside `@layer base { ... }`.
//! - **v4**: colors are `oklch()` literals (`--primary: oklch(0.623 0.214
//!   259.815);`) and the blocks are at the top level.
//!
//! The color math is an approximation (see [`color`]); it is stable, but it is
//! not a colorimetric conversion and round trips are lossy.
//!
//! ## Quick Start
//!
//! ```rust
//! use hueshift::{convert, Direction};
//!
//! let report = convert(":root {\n  --background: 0 0% 100%;\n}", Direction::V3ToV4);
//! assert!(report.outcome.succeeded());
//! assert!(report.validation.is_empty());
//! assert!(report
//!     .outcome
//!     .converted_text()
//!     .contains("--background: oklch(1.000 0.000 0.000);"));
//! ```
//!
//! ## Two kinds of diagnostics
//!
//! - [`ConversionOutcome::diagnostics`]: values that looked like colors but
//!   could not be converted. Any of these makes the conversion unsuccessful.
//! - [`validate`]: advisory findings (unbalanced braces, malformed
//!   declarations). They never affect the conversion.
//!
//! Input that is not recognized at all is copied through silently.
//!
//! All functions are pure and synchronous; they can be called from any number
//! of threads at once.

mod backward;
pub mod color;
mod error;
mod forward;
pub mod line;
mod outcome;
pub mod samples;
mod validate;
pub mod value;

pub use backward::convert_backward;
pub use color::{hsl_to_oklch, oklch_to_hsl, HslTriple, OklchTriple};
pub use error::ColorError;
pub use forward::convert_forward;
pub use outcome::{
    ConversionOutcome, ConversionReport, ConversionStats, Direction, ParseDirectionError,
};
pub use validate::{validate, UNMATCHED_BRACES};
pub use value::{parse_hsl, parse_oklch, OklchValue};

/// Converts `source` in `direction` and validates it.
///
/// Validation and conversion look at the same input independently; the report
/// carries both results.
pub fn convert(source: &str, direction: Direction) -> ConversionReport {
    let validation = validate(source);
    let outcome = match direction {
        Direction::V3ToV4 => convert_forward(source),
        Direction::V4ToV3 => convert_backward(source),
    };
    tracing::debug!(
        %direction,
        succeeded = outcome.succeeded(),
        advisories = validation.len(),
        "conversion finished"
    );

    ConversionReport {
        direction,
        outcome,
        validation,
    }
}
