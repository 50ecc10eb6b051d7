use std::io;
use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser;

use hueshift_cli::env::{RealEnv, RealStdin};
use hueshift_cli::{logging, run, Cli, Context};

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    logging::install(cli.verbose, &RealEnv);

    let ctx = Context {
        stdin: &RealStdin,
        env: &RealEnv,
        clipboard: None,
        cwd: std::env::current_dir().context("cannot determine the working directory")?,
        styled: console::Term::stderr().features().colors_supported(),
    };

    let exit = run(&cli, &ctx, &mut io::stdout().lock(), &mut io::stderr().lock())?;
    Ok(ExitCode::from(exit.code()))
}
