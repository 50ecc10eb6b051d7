//! Where converted text goes.

use std::io::Write;
use std::path::{Path, PathBuf};

use hueshift::Direction;

use crate::error::CliError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
}

impl Destination {
    /// `-o FILE` wins; `--save` picks the conventional file name for the
    /// target dialect inside `cwd`.
    pub fn resolve(output: Option<&Path>, save: bool, direction: Direction, cwd: &Path) -> Self {
        match output {
            Some(path) => Destination::File(path.to_path_buf()),
            None if save => Destination::File(cwd.join(direction.output_file_name())),
            None => Destination::Stdout,
        }
    }

    /// Writes `text`. Files get the exact bytes; stdout gets a trailing
    /// newline when the text lacks one.
    pub fn write(&self, text: &str, stdout: &mut dyn Write) -> Result<(), CliError> {
        match self {
            Destination::Stdout => {
                stdout.write_all(text.as_bytes())?;
                if !text.is_empty() && !text.ends_with('\n') {
                    stdout.write_all(b"\n")?;
                }
                stdout.flush()?;
            }
            Destination::File(path) => {
                std::fs::write(path, text).map_err(|source| CliError::WriteOutput {
                    path: path.clone(),
                    source,
                })?;
                tracing::info!(path = %path.display(), bytes = text.len(), "wrote output file");
            }
        }
        Ok(())
    }
}
