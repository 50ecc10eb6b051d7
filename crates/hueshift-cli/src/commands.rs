//! One function per subcommand.

use std::io::Write;
use std::path::Path;

use hueshift::{samples, ConversionReport, Direction};

use crate::cli::{ConvertArgs, Format, InputArgs, SwapArgs, WatchArgs};
use crate::clipboard::Clipboard;
use crate::config::{Config, Target};
use crate::error::CliError;
use crate::input::{read_file, read_input};
use crate::output::Destination;
use crate::report::{render_advisories, render_json, render_text, Palette};
use crate::watch::{FileWatch, WAIT_INTERVAL};
use crate::{Context, Exit};

/// Converts `source`, treating whitespace-only input as empty.
pub fn run_conversion(source: &str, direction: Direction, validate: bool) -> ConversionReport {
    let source = if hueshift::line::trim(source).is_empty() { "" } else { source };
    let mut report = hueshift::convert(source, direction);
    if !validate {
        report.validation.clear();
    }
    report
}

fn exit_for(report: &ConversionReport, strict: bool) -> Exit {
    if !report.outcome.succeeded() || (strict && !report.validation.is_empty()) {
        Exit::Diagnostics
    } else {
        Exit::Success
    }
}

pub fn convert(
    args: &ConvertArgs,
    config: &Config,
    ctx: &Context<'_>,
    clipboard: &dyn Clipboard,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<Exit, CliError> {
    let source = read_input(&args.input, ctx.stdin, clipboard)?;
    let direction = args.to.unwrap_or(config.target).direction();
    let report = run_conversion(&source, direction, config.validate && !args.no_validate);
    let text = report.outcome.converted_text();
    let destination =
        Destination::resolve(args.output.as_deref(), args.save, direction, &ctx.cwd);

    match args.format {
        Format::Text => {
            destination.write(text, out)?;
            err.write_all(render_text(&report, Palette::new(ctx.styled)).as_bytes())?;
        }
        Format::Json => {
            if destination != Destination::Stdout {
                destination.write(text, out)?;
            }
            writeln!(out, "{}", render_json(&report)?)?;
        }
    }

    if args.copy {
        clipboard.copy(text)?;
    }
    Ok(exit_for(&report, args.strict))
}

pub fn validate(
    args: &InputArgs,
    ctx: &Context<'_>,
    clipboard: &dyn Clipboard,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<Exit, CliError> {
    let source = read_input(args, ctx.stdin, clipboard)?;
    let advisories = hueshift::validate(&source);
    let palette = Palette::new(ctx.styled);

    if advisories.is_empty() {
        writeln!(err, "{}", palette.success("no problems found"))?;
        return Ok(Exit::Success);
    }
    out.write_all(render_advisories(&advisories, Palette::new(false)).as_bytes())?;
    Ok(Exit::Diagnostics)
}

/// Without an explicit version, prints the sample that converts into the
/// configured target.
pub fn sample(version: Option<Target>, config: &Config, out: &mut dyn Write) -> Result<Exit, CliError> {
    let text = match version {
        Some(Target::V3) => samples::V3_SAMPLE,
        Some(Target::V4) => samples::V4_SAMPLE,
        None => samples::for_direction(config.target.direction()),
    };
    Destination::Stdout.write(text, out)?;
    Ok(Exit::Success)
}

/// Converts, then feeds a successful result back through the reverse direction.
pub fn swap(
    args: &SwapArgs,
    config: &Config,
    ctx: &Context<'_>,
    clipboard: &dyn Clipboard,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<Exit, CliError> {
    let source = read_input(&args.input, ctx.stdin, clipboard)?;
    let direction = args.to.unwrap_or(config.target).direction();
    let palette = Palette::new(ctx.styled);

    let first = run_conversion(&source, direction, config.validate);
    if !first.outcome.succeeded() {
        err.write_all(render_text(&first, palette).as_bytes())?;
        return Ok(Exit::Diagnostics);
    }
    tracing::info!(%direction, "first pass succeeded; converting back");

    let second = run_conversion(first.outcome.converted_text(), direction.reverse(), false);
    Destination::Stdout.write(second.outcome.converted_text(), out)?;
    err.write_all(render_advisories(&first.validation, palette).as_bytes())?;
    err.write_all(render_text(&second, palette).as_bytes())?;
    Ok(exit_for(&second, false))
}

/// Converts `args.input` now and again after every settled change, until
/// `stop` returns true.
pub fn watch(
    args: &WatchArgs,
    config: &Config,
    ctx: &Context<'_>,
    stop: &dyn Fn() -> bool,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<Exit, CliError> {
    let direction = args.to.unwrap_or(config.target).direction();
    let delay = args
        .debounce_ms
        .map(std::time::Duration::from_millis)
        .unwrap_or_else(|| config.debounce());
    let destination = Destination::resolve(args.output.as_deref(), false, direction, &ctx.cwd);

    std::fs::metadata(&args.input).map_err(|source| CliError::ReadInput {
        path: args.input.clone(),
        source,
    })?;
    let mut watch = FileWatch::new(&args.input, delay).map_err(|source| CliError::Watch {
        path: args.input.clone(),
        source,
    })?;
    tracing::info!(path = %args.input.display(), ?delay, %direction, "watching");

    let mut last = convert_file(watch.path(), direction, config, ctx, &destination, out, err)?;
    while !stop() {
        if watch.wait(WAIT_INTERVAL) {
            last = convert_file(watch.path(), direction, config, ctx, &destination, out, err)?;
        }
    }
    Ok(last)
}

fn convert_file(
    path: &Path,
    direction: Direction,
    config: &Config,
    ctx: &Context<'_>,
    destination: &Destination,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<Exit, CliError> {
    let source = match read_file(path) {
        Ok(source) => source,
        Err(error) => {
            tracing::warn!(%error, "skipping conversion");
            return Ok(Exit::Diagnostics);
        }
    };
    let report = run_conversion(&source, direction, config.validate);
    destination.write(report.outcome.converted_text(), out)?;
    err.write_all(render_text(&report, Palette::new(ctx.styled)).as_bytes())?;
    Ok(exit_for(&report, false))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_only_input_converts_to_nothing() {
        for direction in [Direction::V3ToV4, Direction::V4ToV3] {
            let report = run_conversion("  \n\t\n", direction, true);
            assert_eq!(report.outcome.converted_text(), "");
            assert!(report.is_clean());

            let report = run_conversion("\u{feff}\n  ", direction, true);
            assert_eq!(report.outcome.converted_text(), "");
        }
    }

    #[test]
    fn validation_can_be_skipped() {
        let report = run_conversion("--a 1", Direction::V3ToV4, false);
        assert!(report.validation.is_empty());
        let report = run_conversion("--a 1", Direction::V3ToV4, true);
        assert_eq!(report.validation.len(), 1);
    }

    #[test]
    fn strict_turns_advisories_into_failures() {
        let report = run_conversion("--a 1", Direction::V3ToV4, true);
        assert_eq!(exit_for(&report, false), Exit::Success);
        assert_eq!(exit_for(&report, true), Exit::Diagnostics);
    }

    #[test]
    fn conversion_failures_always_fail() {
        let report = run_conversion("--a: oklch(x 0 0);", Direction::V4ToV3, false);
        assert_eq!(exit_for(&report, false), Exit::Diagnostics);
    }
}
