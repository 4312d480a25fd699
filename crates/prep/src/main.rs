//! Command-line entry point for the `prep` content reader.

use std::process::ExitCode;

use clap::Parser as _;
use prep::cli::{self, args::Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli::run(cli)
}
