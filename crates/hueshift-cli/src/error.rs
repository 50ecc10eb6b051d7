use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Failures running an external clipboard command.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Command `{0}` timed out after {1:?}")]
    Timeout(String, Duration),
    #[error("Command `{0}` failed with status {1}")]
    CommandFailed(String, std::process::ExitStatus),
    #[error("Command output was not valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
    #[error("No clipboard command is known for this platform; set `clipboard_command`")]
    Unsupported,
}

/// Failures loading the YAML config file or its environment overrides.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("invalid value {value:?} for {key}")]
    InvalidValue { key: &'static str, value: String },
}

/// Everything that stops a command before it can report a conversion.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read {path}: {source}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read stdin: {0}")]
    Stdin(#[source] std::io::Error),
    #[error("no input: {0}")]
    NoInput(&'static str),
    #[error("failed to watch {path}: {source}")]
    Watch {
        path: PathBuf,
        #[source]
        source: notify::Error,
    },
    #[error("clipboard: {0}")]
    Clipboard(#[from] ShellError),
    #[error("failed to write {path}: {source}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_path() {
        let err = CliError::ReadInput {
            path: PathBuf::from("theme.css"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(err.to_string(), "failed to read theme.css: gone");
    }

    #[test]
    fn config_errors_pass_through() {
        let err: CliError = ConfigError::InvalidValue {
            key: "HUESHIFT_TARGET",
            value: "v5".into(),
        }
        .into();
        assert_eq!(err.to_string(), "invalid value \"v5\" for HUESHIFT_TARGET");
    }

    #[test]
    fn shell_errors_are_prefixed() {
        let err: CliError = ShellError::Timeout("pbcopy".into(), Duration::from_secs(5)).into();
        assert_eq!(err.to_string(), "clipboard: Command `pbcopy` timed out after 5s");
    }
}
