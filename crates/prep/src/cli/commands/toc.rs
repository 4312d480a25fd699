//! Implementation of `prep toc`.

use std::process::ExitCode;

use prep_highlight::dim;
use prep_outline::Outline;

use crate::{
    cli::{args::TocCommand, context::CommandContext},
    loader::Loader as _,
};

/// Prints the outline of an entry.
pub fn run(ctx: &CommandContext, cmd: &TocCommand) -> ExitCode {
    if let Err(code) = ctx.require_manifest() {
        return code;
    }

    let language = cmd.listing.language.as_deref();
    let Some(entry) = ctx
        .catalog
        .select(cmd.category, language, cmd.topic.as_deref())
    else {
        match &cmd.topic {
            Some(topic) => {
                eprintln!(
                    "error: content not found: no topic '{topic}' in {}",
                    cmd.category
                );
            }
            None => eprintln!("error: content not found: no entries in {}", cmd.category),
        }
        eprintln!("Run 'prep ls {}' to see available topics.", cmd.category);
        return ExitCode::FAILURE;
    };

    let loader = match ctx.loader() {
        Ok(loader) => loader,
        Err(code) => return code,
    };

    let content = match loader.load(&entry.locator) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let outline = Outline::extract(&content);

    if cmd.json {
        return match serde_json::to_string_pretty(outline.headings()) {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("error: failed to serialize outline: {e}");
                ExitCode::FAILURE
            }
        };
    }

    // No headings: print nothing at all, not an empty panel.
    for heading in &outline {
        let indent = "  ".repeat(usize::from(heading.level.saturating_sub(1)));
        println!("{indent}{} {}", heading.text, dim(&heading.id));
    }

    ExitCode::SUCCESS
}
