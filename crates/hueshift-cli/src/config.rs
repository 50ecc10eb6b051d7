//! Settings from an optional YAML file, then the environment.
//!
//! Lookup order for the file: `--config PATH`, then `$HUESHIFT_CONFIG`, then
//! `.hueshift.yaml` in the working directory when it exists. Missing keys
//! keep their defaults:
//!
//! ```yaml
//! target: v4              # or v3
//! debounce_ms: 500
//! clipboard_command: wl-copy
//! clipboard_timeout_secs: 5
//! validate: true
//! ```
//!
//! `HUESHIFT_TARGET` and `HUESHIFT_DEBOUNCE_MS` override the file. Command-line
//! flags override both and are applied by the commands themselves.

use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::ValueEnum;
use hueshift::Direction;
use serde::Deserialize;

use crate::clipboard::DEFAULT_TIMEOUT_SECS;
use crate::env::EnvReader;
use crate::error::ConfigError;

pub const CONFIG_ENV: &str = "HUESHIFT_CONFIG";
pub const TARGET_ENV: &str = "HUESHIFT_TARGET";
pub const DEBOUNCE_ENV: &str = "HUESHIFT_DEBOUNCE_MS";
pub const DEFAULT_CONFIG_FILE: &str = ".hueshift.yaml";

pub const DEFAULT_DEBOUNCE_MS: u64 = 500;

/// The dialect to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    V3,
    #[default]
    V4,
}

impl Target {
    pub fn direction(self) -> Direction {
        match self {
            Target::V4 => Direction::V3ToV4,
            Target::V3 => Direction::V4ToV3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub target: Target,
    pub debounce_ms: u64,
    pub clipboard_command: Option<String>,
    pub clipboard_timeout_secs: u64,
    pub validate: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target: Target::default(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            clipboard_command: None,
            clipboard_timeout_secs: DEFAULT_TIMEOUT_SECS,
            validate: true,
        }
    }
}

impl Config {
    /// Loads the config file (if any) and applies environment overrides.
    pub fn load(
        explicit: Option<&Path>,
        cwd: &Path,
        env: &dyn EnvReader,
    ) -> Result<Self, ConfigError> {
        let path = explicit
            .map(Path::to_path_buf)
            .or_else(|| env.setting(CONFIG_ENV).map(PathBuf::from))
            .or_else(|| {
                let local = cwd.join(DEFAULT_CONFIG_FILE);
                local.is_file().then_some(local)
            });

        let mut config = match path {
            Some(path) => Self::read(&path)?,
            None => Self::default(),
        };
        config.apply_env(env)?;
        Ok(config)
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Self::parse(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parses YAML text; an empty document yields the defaults.
    pub fn parse(text: &str) -> Result<Self, serde_yaml::Error> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text)
    }

    fn apply_env(&mut self, env: &dyn EnvReader) -> Result<(), ConfigError> {
        if let Some(value) = env.setting(TARGET_ENV) {
            self.target = Target::from_str(&value, true).map_err(|_| {
                ConfigError::InvalidValue {
                    key: TARGET_ENV,
                    value: value.clone(),
                }
            })?;
        }
        if let Some(value) = env.setting(DEBOUNCE_ENV) {
            self.debounce_ms = value
                .parse()
                .map_err(|_| ConfigError::InvalidValue {
                    key: DEBOUNCE_ENV,
                    value: value.clone(),
                })?;
        }
        Ok(())
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn clipboard_timeout(&self) -> Duration {
        Duration::from_secs(self.clipboard_timeout_secs)
    }
}
