//! Implementation of `prep show`.

use std::process::ExitCode;

use prep_highlight::{Highlighter, dim, header, rule, subheader};
use prep_outline::Outline;

use crate::{
    cli::{args::ShowCommand, context::CommandContext},
    loader::{LoadError, Loader as _},
};

/// Width of the rule separating the entry header from its content.
const RULE_WIDTH: usize = 60;

/// Renders an entry's content with an outline and syntax highlighting.
pub fn run(ctx: &CommandContext, cmd: &ShowCommand) -> ExitCode {
    if let Err(code) = ctx.require_manifest() {
        return code;
    }

    let language = cmd.listing.language.as_deref();
    let Some(entry) = ctx
        .catalog
        .select(cmd.category, language, cmd.topic.as_deref())
    else {
        return content_not_found(cmd);
    };

    let loader = match ctx.loader() {
        Ok(loader) => loader,
        Err(code) => return code,
    };

    let content = match loader.load(&entry.locator) {
        Ok(content) => content,
        Err(e @ LoadError::NotFound { .. }) => {
            eprintln!("error: {e}");
            eprintln!("Run 'prep check' to verify the manifest against the content files.");
            return ExitCode::FAILURE;
        }
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("{}", header(&entry.title));
    if !entry.description.is_empty() {
        println!("{}", dim(&entry.description));
    }
    println!("{}", rule(RULE_WIDTH));

    let outline = Outline::extract(&content);
    if !outline.is_empty() {
        println!("{}", subheader("On this page"));
        for heading in &outline {
            let indent = "  ".repeat(usize::from(heading.level.saturating_sub(1)));
            println!("  {indent}{}", heading.text);
        }
        println!("{}", rule(RULE_WIDTH));
    }

    if cmd.plain {
        print!("{content}");
    } else {
        let highlighter = Highlighter::with_theme(cmd.theme);
        print!("{}", highlighter.highlight_markdown(&content));
    }
    println!();

    ExitCode::SUCCESS
}

/// Prints the "content not found" message with a recovery hint.
fn content_not_found(cmd: &ShowCommand) -> ExitCode {
    match &cmd.topic {
        Some(topic) => eprintln!("error: content not found: no topic '{topic}' in {}", cmd.category),
        None => eprintln!("error: content not found: no entries in {}", cmd.category),
    }
    eprintln!("Run 'prep ls {}' to see available topics.", cmd.category);
    ExitCode::FAILURE
}
