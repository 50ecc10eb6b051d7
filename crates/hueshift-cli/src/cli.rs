use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::Target;

/// Convert Tailwind theme variables between the v3 (HSL) and v4 (OKLCH) dialects.
#[derive(Debug, Parser)]
#[command(name = "hueshift", version)]
pub struct Cli {
    /// More logging on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (default: $HUESHIFT_CONFIG, then ./.hueshift.yaml)
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert a theme to the other dialect
    Convert(ConvertArgs),

    /// Check brace balance and declaration syntax
    Validate(InputArgs),

    /// Print a sample theme
    Sample {
        /// Dialect of the sample (default: the source dialect for the configured target)
        #[arg(value_enum)]
        version: Option<Target>,
    },

    /// Convert, then convert the result back the other way
    Swap(SwapArgs),

    /// Re-convert a file whenever it changes
    Watch(WatchArgs),
}

#[derive(Debug, Clone, Default, Args)]
pub struct InputArgs {
    /// Input file, or `-` for stdin (default: stdin)
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Read the input from the clipboard
    #[arg(long, conflicts_with = "input")]
    pub from_clipboard: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Default, Args)]
pub struct ConvertArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Dialect to produce
    #[arg(long, value_enum)]
    pub to: Option<Target>,

    /// Write the result to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Write the result to tailwind-v{3,4}-variables.css
    #[arg(long, conflicts_with = "output")]
    pub save: bool,

    /// Also copy the result to the clipboard
    #[arg(long)]
    pub copy: bool,

    #[arg(long, value_enum, default_value_t)]
    pub format: Format,

    /// Exit with status 2 on validation advisories too
    #[arg(long)]
    pub strict: bool,

    /// Skip validation
    #[arg(long)]
    pub no_validate: bool,
}

#[derive(Debug, Clone, Default, Args)]
pub struct SwapArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Dialect of the first conversion
    #[arg(long, value_enum)]
    pub to: Option<Target>,
}

#[derive(Debug, Clone, Args)]
pub struct WatchArgs {
    /// File to watch
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    #[arg(long, value_enum)]
    pub to: Option<Target>,

    /// Write each result to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Quiet period before re-converting
    #[arg(long, value_name = "MS")]
    pub debounce_ms: Option<u64>,
}
