//! Recognizing color values in custom-property declarations.
//!
//! Two shapes are recognized:
//!
//! - v3 HSL triples: `222.2 84% 4.9%`
//! - v4 OKLCH literals: `oklch(0.141 0.005 285.823)`, optionally followed by
//!   extra tokens such as an alpha marker (`oklch(1 0 0 / 10%)`)
//!
//! A value that does not have either shape is not an error: the caller leaves
//! it alone. Only [`OklchValue::triple`] can fail, when the literal has the
//! right shape but a component is not a number.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::color::{HslTriple, OklchTriple};
use crate::error::{ColorError, Result};

static HSL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]+(?:\.[0-9]+)?)\s+([0-9]+(?:\.[0-9]+)?)%\s+([0-9]+(?:\.[0-9]+)?)%$")
        .expect("HSL pattern is valid")
});

static OKLCH_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^oklch\(([^)]+)\)$").expect("OKLCH pattern is valid"));

/// Parses a v3 HSL triple such as `210 40% 96.1%`.
///
/// Returns `None` when the value does not have that shape.
pub fn parse_hsl(value: &str) -> Option<HslTriple> {
    let caps = HSL_PATTERN.captures(value.trim())?;
    // Digit runs always parse; very long ones come back as infinity, which the
    // color math rejects.
    let component = |i: usize| caps[i].parse::<f64>().ok();
    Some(HslTriple::new(component(1)?, component(2)?, component(3)?))
}

/// A recognized `oklch(...)` literal, before numeric interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OklchValue<'a> {
    /// The lightness, chroma and hue tokens, in order.
    pub components: [&'a str; 3],
    /// Tokens after the third component, e.g. `["/", "10%"]`.
    ///
    /// Conversion ignores them; they are kept so callers can see what is lost.
    pub extra: Vec<&'a str>,
}

impl OklchValue<'_> {
    /// Interprets the three component tokens as numbers.
    pub fn triple(&self) -> Result<OklchTriple> {
        let [l, c, h] = self.components;
        Ok(OklchTriple::new(number(l)?, number(c)?, number(h)?))
    }

    /// True when tokens beyond the three components were present.
    pub fn has_extra(&self) -> bool {
        !self.extra.is_empty()
    }
}

/// Parses a v4 `oklch(L C H ...)` literal.
///
/// At least three whitespace-separated tokens are required inside the
/// parentheses. Returns `None` when the value does not have that shape.
pub fn parse_oklch(value: &str) -> Option<OklchValue<'_>> {
    let caps = OKLCH_PATTERN.captures(value.trim())?;
    let inner = caps.get(1)?.as_str();

    let mut tokens = inner.split_whitespace();
    let components = [tokens.next()?, tokens.next()?, tokens.next()?];

    Some(OklchValue {
        components,
        extra: tokens.collect(),
    })
}

fn number(token: &str) -> Result<f64> {
    token
        .parse::<f64>()
        .map_err(|_| ColorError::not_a_number(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hsl_with_fractions() {
        let hsl = parse_hsl("222.2 84% 4.9%").unwrap();
        assert_eq!(hsl, HslTriple::new(222.2, 84.0, 4.9));
    }

    #[test]
    fn hsl_tolerates_surrounding_and_repeated_whitespace() {
        let hsl = parse_hsl("  0   0%\t100%  ").unwrap();
        assert_eq!(hsl, HslTriple::new(0.0, 0.0, 100.0));
    }

    #[test]
    fn hsl_rejects_other_shapes() {
        assert_eq!(parse_hsl("0.65rem"), None);
        assert_eq!(parse_hsl("0 0 100%"), None);
        assert_eq!(parse_hsl("hsl(0 0% 100%)"), None);
        assert_eq!(parse_hsl("-10 20% 30%"), None);
        assert_eq!(parse_hsl("oklch(1.000 0.000 0.000)"), None);
        assert_eq!(parse_hsl(""), None);
    }

    #[test]
    fn oklch_three_components() {
        let value = parse_oklch("oklch(0.141 0.005 285.823)").unwrap();
        assert_eq!(value.components, ["0.141", "0.005", "285.823"]);
        assert!(!value.has_extra());
        assert_eq!(
            value.triple().unwrap(),
            OklchTriple::new(0.141, 0.005, 285.823)
        );
    }

    #[test]
    fn oklch_keeps_alpha_tokens_aside() {
        let value = parse_oklch("oklch(1 0 0 / 10%)").unwrap();
        assert_eq!(value.components, ["1", "0", "0"]);
        assert_eq!(value.extra, vec!["/", "10%"]);
        assert_eq!(value.triple().unwrap(), OklchTriple::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn oklch_requires_three_tokens() {
        assert_eq!(parse_oklch("oklch(1 0)"), None);
        assert_eq!(parse_oklch("oklch()"), None);
        assert_eq!(parse_oklch("oklch(   )"), None);
    }

    #[test]
    fn oklch_rejects_other_shapes() {
        assert_eq!(parse_oklch("0 0% 100%"), None);
        assert_eq!(parse_oklch("OKLCH(1 0 0)"), None);
        assert_eq!(parse_oklch("oklch(1 0 0) !important"), None);
    }

    #[test]
    fn oklch_non_numeric_component_is_recognized_but_fails() {
        let value = parse_oklch("oklch(var(--l 0.1 20)").unwrap();
        let err = value.triple().unwrap_err();
        assert_eq!(err, ColorError::not_a_number("var(--l"));
    }
}
