//! # hueshift-cli - command-line host for `hueshift`
//!
//! Reads a theme from a file, stdin or the clipboard, converts it with
//! [`hueshift::convert`], and writes the result to stdout, a file or the
//! clipboard. Diagnostics go to stderr.
//!
//! Exit status: `0` on success, `2` when the conversion reported diagnostics
//! (or, with `--strict`, validation advisories), `1` for any other error.
//!
//! Everything that touches the process (stdin, environment, clipboard,
//! working directory) comes in through [`Context`], so [`run`] can be driven
//! entirely from tests.

pub mod cli;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod env;
pub mod error;
pub mod input;
pub mod logging;
pub mod output;
pub mod report;
mod shell;
pub mod watch;

use std::io::Write;
use std::path::PathBuf;

pub use cli::{Cli, Command};
pub use error::{CliError, ConfigError, ShellError};

use crate::clipboard::{Clipboard, SystemClipboard};
use crate::config::Config;
use crate::env::{EnvReader, StdinReader};

/// Process outcome of a command that ran to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    Success,
    /// Conversion diagnostics, or advisories under `--strict`.
    Diagnostics,
}

impl Exit {
    pub fn code(self) -> u8 {
        match self {
            Exit::Success => 0,
            Exit::Diagnostics => 2,
        }
    }
}

/// The process surroundings a command runs in.
pub struct Context<'a> {
    pub stdin: &'a dyn StdinReader,
    pub env: &'a dyn EnvReader,
    /// `None` uses the platform clipboard configured from [`Config`].
    pub clipboard: Option<&'a dyn Clipboard>,
    pub cwd: PathBuf,
    /// Whether stderr output may carry ANSI styling.
    pub styled: bool,
}

/// Loads configuration and runs the selected subcommand.
pub fn run(
    cli: &Cli,
    ctx: &Context<'_>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<Exit, CliError> {
    let config = Config::load(cli.config.as_deref(), &ctx.cwd, ctx.env)?;
    tracing::debug!(?config, "configuration resolved");

    let system;
    let clipboard: &dyn Clipboard = match ctx.clipboard {
        Some(clipboard) => clipboard,
        None => {
            system = SystemClipboard::new(
                config.clipboard_command.clone(),
                config.clipboard_timeout(),
            );
            &system
        }
    };

    match &cli.command {
        Command::Convert(args) => commands::convert(args, &config, ctx, clipboard, out, err),
        Command::Validate(args) => commands::validate(args, ctx, clipboard, out, err),
        Command::Sample { version } => commands::sample(*version, &config, out),
        Command::Swap(args) => commands::swap(args, &config, ctx, clipboard, out, err),
        Command::Watch(args) => commands::watch(args, &config, ctx, &|| false, out, err),
    }
}
