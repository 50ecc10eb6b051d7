//! Human and JSON renderings of a [`ConversionReport`].

use console::Style;
use hueshift::{ConversionReport, ConversionStats};
use serde::Serialize;

/// Applies styles only when the destination supports them.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    styled: bool,
}

impl Palette {
    pub fn new(styled: bool) -> Self {
        Self { styled }
    }

    fn paint(&self, style: Style, text: &str) -> String {
        if self.styled {
            style.force_styling(true).apply_to(text).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn error(&self, text: &str) -> String {
        self.paint(Style::new().red().bold(), text)
    }

    pub fn warning(&self, text: &str) -> String {
        self.paint(Style::new().yellow(), text)
    }

    pub fn success(&self, text: &str) -> String {
        self.paint(Style::new().green(), text)
    }

    pub fn dim(&self, text: &str) -> String {
        self.paint(Style::new().dim(), text)
    }
}

/// Conversion diagnostics, then validation advisories, then the stats line
/// (omitted for empty output).
pub fn render_text(report: &ConversionReport, palette: Palette) -> String {
    let mut out = String::new();
    for diagnostic in report.outcome.diagnostics() {
        out.push_str(&palette.error("error:"));
        out.push(' ');
        out.push_str(diagnostic);
        out.push('\n');
    }
    out.push_str(&render_advisories(&report.validation, palette));
    let stats = report.stats();
    if stats.lines > 0 {
        out.push_str(&palette.dim(&stats.to_string()));
        out.push('\n');
    }
    out
}

pub fn render_advisories(advisories: &[String], palette: Palette) -> String {
    let mut out = String::new();
    for advisory in advisories {
        out.push_str(&palette.warning("warning:"));
        out.push(' ');
        out.push_str(advisory);
        out.push('\n');
    }
    out
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    report: &'a ConversionReport,
    stats: ConversionStats,
}

pub fn render_json(report: &ConversionReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonReport {
        report,
        stats: report.stats(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use hueshift::{convert, Direction};

    #[test]
    fn plain_text_lists_everything_in_order() {
        let report = convert(
            ":root {\n  --a: oklch(none 0 0);\n  --b 1;\n",
            Direction::V4ToV3,
        );
        let text = render_text(&report, Palette::new(false));
        assert_eq!(
            text,
            "error: Line 2: Failed to convert OKLCH value \"oklch(none 0 0)\"\n\
             warning: Line 3: Invalid CSS variable syntax\n\
             warning: Unmatched braces in CSS\n\
             8 lines, 1 variables converted\n"
        );
    }

    #[test]
    fn clean_report_is_just_stats() {
        let report = convert("--a: 0 0% 0%;", Direction::V3ToV4);
        assert_eq!(
            render_text(&report, Palette::new(false)),
            "1 lines, 1 variables converted\n"
        );
    }

    #[test]
    fn styled_text_carries_escapes() {
        let palette = Palette::new(true);
        assert!(palette.error("error:").contains('\u{1b}'));
        assert_eq!(Palette::new(false).error("error:"), "error:");
    }

    #[test]
    fn json_includes_stats() {
        let report = convert("--a: 0 0% 0%;", Direction::V3ToV4);
        let value: serde_json::Value = serde_json::from_str(&render_json(&report).unwrap()).unwrap();
        assert_eq!(value["direction"], "v3-to-v4");
        assert_eq!(value["stats"]["variables"], 1);
        assert_eq!(value["outcome"]["succeeded"], true);
    }
}
