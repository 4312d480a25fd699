//! CLI support for the `prep` binary.

pub mod args;
pub mod commands;
pub mod context;

use std::process::ExitCode;

use args::{Cli, Commands};
pub use context::CommandContext;

/// Builds the command context and dispatches to the selected subcommand.
pub fn run(cli: Cli) -> ExitCode {
    // `init` and `check` must work even when the manifest is missing or
    // invalid, so they skip catalog loading here and handle it themselves.
    let ctx = match cli.command {
        Commands::Init(_) | Commands::Check => CommandContext::load_cwd_only(),
        _ => CommandContext::load(),
    };

    match ctx {
        Ok(ctx) => commands::run(cli.command, &ctx),
        Err(code) => code,
    }
}
