//! Process-level inputs behind traits, so commands can run against mocks.
//!
//! `hueshift` reads two things from its surroundings besides files: a theme
//! document piped on stdin, and `HUESHIFT_*` settings from the environment.

use std::collections::HashMap;
use std::io::{self, IsTerminal, Read};

/// Source of a theme document piped on stdin.
pub trait StdinReader: Send + Sync {
    /// The whole piped document, or `None` when stdin is an interactive
    /// terminal and there is nothing to read.
    fn piped_document(&self) -> io::Result<Option<String>>;
}

/// Environment lookups for `HUESHIFT_*` settings.
pub trait EnvReader: Send + Sync {
    fn var(&self, name: &str) -> Option<String>;

    /// The trimmed value of `name`; blank values count as unset.
    fn setting(&self, name: &str) -> Option<String> {
        self.var(name)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RealStdin;

impl StdinReader for RealStdin {
    fn piped_document(&self) -> io::Result<Option<String>> {
        let mut stdin = io::stdin();
        if stdin.is_terminal() {
            return Ok(None);
        }
        let mut document = String::new();
        stdin.read_to_string(&mut document)?;
        Ok(Some(document))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RealEnv;

impl EnvReader for RealEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Stdin stand-in: an interactive terminal, or a fixed piped document.
#[derive(Debug, Clone)]
pub struct MockStdin {
    document: Option<String>,
}

impl MockStdin {
    pub fn terminal() -> Self {
        Self { document: None }
    }

    pub fn piped(document: impl Into<String>) -> Self {
        Self {
            document: Some(document.into()),
        }
    }
}

impl StdinReader for MockStdin {
    fn piped_document(&self) -> io::Result<Option<String>> {
        Ok(self.document.clone())
    }
}

/// Environment stand-in holding only the variables a test sets.
#[derive(Debug, Clone, Default)]
pub struct MockEnv {
    vars: HashMap<String, String>,
}

impl MockEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl EnvReader for MockEnv {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}
