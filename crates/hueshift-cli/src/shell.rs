//! Runs a clipboard helper through the platform shell.

use std::io::{Read, Write};
use std::process::{Command, Stdio};
use std::thread;
use std::time::Duration;

use wait_timeout::ChildExt;

use crate::error::ShellError;

fn shell(command_line: &str) -> Command {
    let mut cmd = if cfg!(target_os = "windows") {
        let mut c = Command::new("cmd");
        c.arg("/C");
        c
    } else {
        let mut c = Command::new("sh");
        c.arg("-c");
        c
    };
    cmd.arg(command_line);
    cmd
}

/// Runs `command_line`, feeding it `input` on stdin when given, and returns
/// what it printed.
///
/// The child is killed once `timeout` passes. Its stdout is drained on a
/// separate thread so a large paste cannot block the wait.
pub fn run(command_line: &str, input: Option<&str>, timeout: Duration) -> Result<String, ShellError> {
    let mut cmd = shell(command_line);
    cmd.stdin(if input.is_some() {
        Stdio::piped()
    } else {
        Stdio::null()
    })
    .stdout(Stdio::piped())
    .stderr(Stdio::inherit());

    tracing::debug!(command = command_line, ?timeout, "spawning clipboard command");
    let mut child = cmd.spawn()?;

    let reader = child.stdout.take().map(|mut stdout| {
        thread::spawn(move || {
            let mut bytes = Vec::new();
            stdout.read_to_end(&mut bytes).map(|_| bytes)
        })
    });

    if let (Some(text), Some(mut stdin)) = (input, child.stdin.take()) {
        stdin.write_all(text.as_bytes())?;
    }

    match child.wait_timeout(timeout)? {
        Some(status) if status.success() => {}
        Some(status) => return Err(ShellError::CommandFailed(command_line.to_string(), status)),
        None => {
            child.kill()?;
            let _ = child.wait();
            return Err(ShellError::Timeout(command_line.to_string(), timeout));
        }
    }

    let bytes = match reader {
        Some(handle) => handle
            .join()
            .map_err(|_| std::io::Error::other("stdout reader panicked"))??,
        None => Vec::new(),
    };
    Ok(String::from_utf8(bytes)?)
}
