//! Implementation of `prep init`.

use std::{fs, process::ExitCode};

use prep_catalog::{MANIFEST_FILENAME, manifest_template};
use prep_highlight::{Highlighter, indent_content, subheader};

use crate::cli::{args::InitCommand, context::CommandContext};

/// Initializes a `prep.toml` manifest in the current directory.
pub fn run(ctx: &CommandContext, cmd: &InitCommand) -> ExitCode {
    let manifest_path = ctx.cwd.join(MANIFEST_FILENAME);

    if manifest_path.exists() && !cmd.force {
        eprintln!(
            "error: manifest already exists: {}",
            manifest_path.display()
        );
        eprintln!("use --force to overwrite");
        return ExitCode::FAILURE;
    }

    let template = manifest_template();

    if let Err(e) = fs::write(&manifest_path, &template) {
        eprintln!("error: failed to write {}: {e}", manifest_path.display());
        return ExitCode::FAILURE;
    }

    println!("Created {}", manifest_path.display());

    let highlighter = Highlighter::new();
    println!();
    println!("{}", subheader("Manifest written:"));
    let highlighted = highlighter.highlight_toml(&template);
    println!("{}", indent_content(&highlighted));

    ExitCode::SUCCESS
}
