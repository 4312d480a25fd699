//! Implementation of `prep ls`.

use std::process::ExitCode;

use comfy_table::{Cell, Table, presets::UTF8_FULL_CONDENSED};
use prep_catalog::{Category, Entry};
use prep_highlight::{dim, header, subheader};
use serde::Serialize;

use crate::cli::{args::LsCommand, context::CommandContext};

/// Lists categories or the entries of one category.
pub fn run(ctx: &CommandContext, cmd: &LsCommand) -> ExitCode {
    match cmd.category {
        Some(category) => ls_category(ctx, category, cmd),
        None => ls_summary(ctx, cmd.json),
    }
}

/// JSON payload for a category listing.
#[derive(Serialize)]
struct JsonListing<'a> {
    /// The listed category.
    category: &'a str,
    /// The language narrowing, if any.
    language: Option<&'a str>,
    /// Entries in display order.
    entries: Vec<&'a Entry>,
}

/// Prints a summary of all categories.
fn ls_summary(ctx: &CommandContext, json: bool) -> ExitCode {
    let catalog = &ctx.catalog;

    if json {
        let mut categories = serde_json::Map::new();
        for category in Category::ALL {
            categories.insert(
                category.as_str().to_string(),
                serde_json::json!(catalog.list(category, None).len()),
            );
        }
        let payload = serde_json::json!({
            "categories": categories,
            "languages": catalog.languages(),
        });
        return print_json(&payload);
    }

    if catalog.is_empty() {
        println!("{}", dim("No entries in the catalog."));
        return ExitCode::SUCCESS;
    }

    for category in Category::ALL {
        let count = catalog.list(category, None).len();
        println!(
            "{} {}",
            header(category.as_str()),
            dim(&format!("({count} entries)"))
        );
    }

    let languages = catalog.languages();
    if !languages.is_empty() {
        println!();
        println!("{} {}", subheader("languages:"), languages.join(", "));
    }

    ExitCode::SUCCESS
}

/// Lists the entries of one category in display order.
fn ls_category(ctx: &CommandContext, category: Category, cmd: &LsCommand) -> ExitCode {
    let language = cmd.listing.language.as_deref();
    let listing = ctx.catalog.list(category, language);

    if cmd.json {
        let payload = JsonListing {
            category: category.as_str(),
            language,
            entries: listing,
        };
        return print_json(&payload);
    }

    if listing.is_empty() {
        println!("{}", dim("No entries."));
        return ExitCode::SUCCESS;
    }

    if cmd.long {
        print_listing_table(&listing);
        return ExitCode::SUCCESS;
    }

    let mut current_group: Option<&str> = None;
    for entry in listing {
        if entry.group.as_deref() != current_group {
            current_group = entry.group.as_deref();
            if let Some(group) = current_group {
                println!("{}", subheader(group));
            }
        }

        let indent = if entry.group.is_some() { "  " } else { "" };
        println!(
            "{indent}{} {} {}",
            header(&entry.topic),
            dim("—"),
            entry.title
        );
    }

    ExitCode::SUCCESS
}

/// Prints the long-form listing as a table.
fn print_listing_table(listing: &[&Entry]) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        "Topic",
        "Title",
        "Description",
        "Group",
        "Order",
        "Locator",
    ]);

    for entry in listing {
        table.add_row(vec![
            Cell::new(&entry.topic),
            Cell::new(&entry.title),
            Cell::new(&entry.description),
            Cell::new(entry.group.as_deref().unwrap_or("")),
            Cell::new(entry.order.to_string()),
            Cell::new(&entry.locator),
        ]);
    }

    println!("{table}");
}

/// Serializes a payload as pretty JSON to stdout.
fn print_json<T: Serialize>(payload: &T) -> ExitCode {
    match serde_json::to_string_pretty(payload) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize output: {e}");
            ExitCode::FAILURE
        }
    }
}
