use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use linecmp::{build_options, exit_status, run, Args};

fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let opts = build_options(&args)?;

    let stdout = io::stdout();
    let equal = run(&opts, &mut stdout.lock())?;

    Ok(ExitCode::from(exit_status(&opts, equal)))
}
