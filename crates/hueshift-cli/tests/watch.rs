use std::cell::Cell;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use hueshift_cli::cli::WatchArgs;
use hueshift_cli::commands;
use hueshift_cli::config::{Config, Target};
use hueshift_cli::env::{MockEnv, MockStdin};
use hueshift_cli::{CliError, Context, Exit};

fn context(dir: PathBuf) -> (MockStdin, MockEnv, PathBuf) {
    (MockStdin::terminal(), MockEnv::new(), dir)
}

#[test]
fn watch_converts_once_up_front() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("theme.css");
    let output = dir.path().join("theme.v3.css");
    std::fs::write(&input, ":root {\n  --x: oklch(0.5 0.2 180);\n}").unwrap();

    let (stdin, env, cwd) = context(dir.path().to_path_buf());
    let ctx = Context {
        stdin: &stdin,
        env: &env,
        clipboard: None,
        cwd,
        styled: false,
    };
    let args = WatchArgs {
        input: input.clone(),
        to: Some(Target::V3),
        output: Some(output.clone()),
        debounce_ms: Some(0),
    };

    let turns = Cell::new(0);
    let stop = || {
        turns.set(turns.get() + 1);
        turns.get() > 2
    };
    let mut stderr: Vec<u8> = Vec::new();
    let exit = commands::watch(&args, &Config::default(), &ctx, &stop, &mut Vec::<u8>::new(), &mut stderr)
        .unwrap();

    assert_eq!(exit, Exit::Success);
    assert!(std::fs::read_to_string(&output)
        .unwrap()
        .contains("--x: 180 20% 50%;"));
    assert!(String::from_utf8(stderr).unwrap().contains("variables converted"));
}

#[test]
fn watch_needs_an_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let (stdin, env, cwd) = context(dir.path().to_path_buf());
    let ctx = Context {
        stdin: &stdin,
        env: &env,
        clipboard: None,
        cwd,
        styled: false,
    };
    let args = WatchArgs {
        input: dir.path().join("missing.css"),
        to: None,
        output: None,
        debounce_ms: None,
    };

    let err = commands::watch(&args, &Config::default(), &ctx, &|| true, &mut Vec::<u8>::new(), &mut Vec::<u8>::new())
        .unwrap_err();
    assert!(matches!(err, CliError::ReadInput { .. }));
}

#[test]
fn settled_changes_convert_again_with_the_latest_contents() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("theme.css");
    std::fs::write(&input, "--a: 0 0% 0%;").unwrap();

    let (stdin, env, cwd) = context(dir.path().to_path_buf());
    let ctx = Context {
        stdin: &stdin,
        env: &env,
        clipboard: None,
        cwd,
        styled: false,
    };
    let args = WatchArgs {
        input: input.clone(),
        to: Some(Target::V4),
        output: None,
        debounce_ms: Some(300),
    };

    // The first edit is replaced by the second before the quiet period ends.
    let start = Instant::now();
    let turns = Cell::new(0);
    let stop = || {
        turns.set(turns.get() + 1);
        match turns.get() {
            1 => std::fs::write(&input, "--b: 0 0% 100%;").unwrap(),
            2 => std::fs::write(&input, "--c: 0 0% 100%;").unwrap(),
            _ => {}
        }
        start.elapsed() > Duration::from_secs(2)
    };
    let mut stdout: Vec<u8> = Vec::new();
    let mut stderr: Vec<u8> = Vec::new();
    let exit = commands::watch(&args, &Config::default(), &ctx, &stop, &mut stdout, &mut stderr)
        .unwrap();

    assert_eq!(exit, Exit::Success);
    assert_eq!(
        String::from_utf8(stdout).unwrap(),
        "--a: oklch(0.000 0.000 0.000);\n--c: oklch(1.000 0.000 0.000);\n"
    );
    assert_eq!(
        String::from_utf8(stderr).unwrap().matches("variables converted").count(),
        2
    );
}
