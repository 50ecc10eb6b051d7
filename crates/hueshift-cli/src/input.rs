//! Where the source document comes from.

use std::path::Path;

use crate::cli::InputArgs;
use crate::clipboard::Clipboard;
use crate::env::StdinReader;
use crate::error::CliError;

/// Reads the document named by `args`: the clipboard, a file, or stdin.
///
/// `-` and a missing path both mean stdin, which must be piped. The text is
/// returned exactly as read.
pub fn read_input(
    args: &InputArgs,
    stdin: &dyn StdinReader,
    clipboard: &dyn Clipboard,
) -> Result<String, CliError> {
    if args.from_clipboard {
        tracing::debug!("reading input from clipboard");
        return clipboard
            .paste()?
            .ok_or(CliError::NoInput("the clipboard is empty"));
    }

    match args.input.as_deref() {
        Some(path) if path != Path::new("-") => read_file(path),
        _ => stdin
            .piped_document()
            .map_err(CliError::Stdin)?
            .ok_or(CliError::NoInput(
                "pass a file, pipe a document on stdin, or use --from-clipboard",
            )),
    }
}

pub fn read_file(path: &Path) -> Result<String, CliError> {
    tracing::debug!(path = %path.display(), "reading input file");
    std::fs::read_to_string(path).map_err(|source| CliError::ReadInput {
        path: path.to_path_buf(),
        source,
    })
}
