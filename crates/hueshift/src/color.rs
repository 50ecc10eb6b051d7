//! Approximate HSL ⇄ OKLCH color math.
//!
//! # Known limitation
//!
//! Neither direction is a colorimetric conversion. The forward map goes through
//! sRGB and then estimates lightness with the Rec. 601 luma weights and chroma
//! with the distance of the RGB point from its own luma; hue is carried over
//! unchanged. The reverse map simply rescales lightness and chroma to percents.
//! The two are not inverses of each other, so converting v3 → v4 → v3 does not
//! give back the original numbers. Output files produced this way should be
//! reviewed by eye; the formulas are kept as they are so converted themes stay
//! stable across releases.
//!
//! # Example
//!
//! ```rust
//! use hueshift::color::{hsl_to_oklch, HslTriple};
//!
//! let white = HslTriple::new(0.0, 0.0, 100.0);
//! let oklch = hsl_to_oklch(white).unwrap();
//! assert_eq!(oklch.to_string(), "oklch(1.000 0.000 0.000)");
//! ```

use std::fmt;

use serde::Serialize;

use crate::error::{ColorError, Result};

// ─── Triples ────────────────────────────────────────────────────────────────

/// An HSL color: hue in degrees, saturation and lightness in percent.
///
/// Values are not clamped. A hue of `400` or a negative saturation is carried
/// through the math as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HslTriple {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl HslTriple {
    pub fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }
}

/// Renders as the v3 value syntax `H S% L%`.
///
/// Whole numbers are printed without a fractional part, so the output of
/// [`oklch_to_hsl`] reads `180 20% 50%`.
impl fmt::Display for HslTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}% {}%",
            Plain(self.hue),
            Plain(self.saturation),
            Plain(self.lightness)
        )
    }
}

/// An OKLCH-like color: lightness, chroma and hue in degrees.
///
/// Produced by [`hsl_to_oklch`], which only approximates real OKLCH.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OklchTriple {
    pub lightness: f64,
    pub chroma: f64,
    pub hue: f64,
}

impl OklchTriple {
    pub fn new(lightness: f64, chroma: f64, hue: f64) -> Self {
        Self {
            lightness,
            chroma,
            hue,
        }
    }
}

/// Renders as `oklch(L C H)` with three fractional digits per component.
impl fmt::Display for OklchTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "oklch({} {} {})",
            Fixed3(self.lightness),
            Fixed3(self.chroma),
            Fixed3(self.hue)
        )
    }
}

// ─── Conversions ────────────────────────────────────────────────────────────

/// Map an HSL triple to an approximate OKLCH triple.
///
/// Fails only when an input or a computed component is not finite.
pub fn hsl_to_oklch(hsl: HslTriple) -> Result<OklchTriple> {
    let h = ColorError::check_finite("hue", hsl.hue)?;
    let s = ColorError::check_finite("saturation", hsl.saturation)?;
    let l = ColorError::check_finite("lightness", hsl.lightness)?;

    let (r, g, b) = hsl_to_rgb(h, s, l);

    let lightness = 0.299 * r + 0.587 * g + 0.114 * b;
    let chroma =
        ((r - lightness).powi(2) + (g - lightness).powi(2) + (b - lightness).powi(2)).sqrt();

    Ok(OklchTriple {
        lightness: ColorError::check_finite("lightness", lightness)?,
        chroma: ColorError::check_finite("chroma", chroma)?,
        hue: h,
    })
}

/// Map an OKLCH triple back to an HSL triple.
///
/// Lightness and chroma are scaled to whole percents and the hue is rounded to
/// whole degrees. Halves round toward positive infinity.
pub fn oklch_to_hsl(oklch: OklchTriple) -> Result<HslTriple> {
    let l = ColorError::check_finite("lightness", oklch.lightness)?;
    let c = ColorError::check_finite("chroma", oklch.chroma)?;
    let h = ColorError::check_finite("hue", oklch.hue)?;

    Ok(HslTriple {
        hue: ColorError::check_finite("hue", round_half_up(h))?,
        saturation: ColorError::check_finite("saturation", round_half_up(c * 100.0))?,
        lightness: ColorError::check_finite("lightness", round_half_up(l * 100.0))?,
    })
}

/// sRGB channels (nominally 0.0–1.0) for an HSL color.
///
/// A hue outside `[0, 360)` falls in no sector, leaving only the lightness
/// offset on every channel.
fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    let c = (1.0 - (2.0 * l / 100.0 - 1.0).abs()) * s / 100.0;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l / 100.0 - c / 2.0;

    let (r, g, b) = if (0.0..60.0).contains(&h) {
        (c, x, 0.0)
    } else if (60.0..120.0).contains(&h) {
        (x, c, 0.0)
    } else if (120.0..180.0).contains(&h) {
        (0.0, c, x)
    } else if (180.0..240.0).contains(&h) {
        (0.0, x, c)
    } else if (240.0..300.0).contains(&h) {
        (x, 0.0, c)
    } else if (300.0..360.0).contains(&h) {
        (c, 0.0, x)
    } else {
        (0.0, 0.0, 0.0)
    };

    (r + m, g + m, b + m)
}

fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

fn positive_zero(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

/// Values that print as zero at three digits print without a sign.
fn unsigned_zero(value: f64) -> f64 {
    if value.abs() < 0.0005 {
        0.0
    } else {
        value
    }
}

/// Three fractional digits. A value exactly halfway between two outputs
/// rounds away from zero (`0.0625` prints `0.063`).
struct Fixed3(f64);

impl Fixed3 {
    /// Whether the exact binary value ends in `5` at the fourth decimal.
    fn is_tie(magnitude: f64) -> bool {
        let exact = format!("{:.40}", magnitude);
        match exact.split_once('.') {
            Some((_, digits)) => {
                digits.as_bytes().get(3) == Some(&b'5') && digits[4..].bytes().all(|d| d == b'0')
            }
            None => false,
        }
    }
}

impl fmt::Display for Fixed3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = unsigned_zero(self.0);
        if !value.is_finite() || !Self::is_tie(value.abs()) {
            return write!(f, "{:.3}", value);
        }
        let sign = if value < 0.0 { "-" } else { "" };
        write!(f, "{}{:.3}", sign, value.abs() + 0.0001)
    }
}

/// Shortest decimal rendering, without `.0` on whole numbers.
struct Plain(f64);

impl fmt::Display for Plain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = positive_zero(self.0);
        if value.fract() == 0.0 && value.abs() < 1e15 {
            write!(f, "{:.0}", value)
        } else {
            write!(f, "{}", value)
        }
    }
}
