//! Implementation of `prep check`.

use std::process::ExitCode;

use prep_catalog::{Catalog, Category, discover_manifest};
use prep_highlight::{dim, header, success, warning};

use crate::{
    cli::context::CommandContext,
    loader::{FsLoader, Loader as _},
};

/// Validates the manifest and reports catalog statistics.
///
/// Runs its own discovery and loading so that it can report problems with a
/// manifest that the normal context loading would have rejected.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let Some(manifest_path) = discover_manifest(&ctx.cwd) else {
        eprintln!("error: no prep.toml manifest found");
        eprintln!("Run 'prep init' to create one, then add content entries.");
        return ExitCode::FAILURE;
    };

    println!("{} {}", header("manifest"), manifest_path.display());

    let catalog = match Catalog::load(&manifest_path) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if catalog.is_empty() {
        println!("{}", dim("No entries in the catalog."));
        return ExitCode::SUCCESS;
    }

    for category in Category::ALL {
        let count = catalog.list(category, None).len();
        println!("  {} {}", category, dim(&format!("{count} entries")));
    }

    let languages = catalog.languages();
    if !languages.is_empty() {
        println!("  languages: {}", languages.join(", "));
    }

    // Verify every locator resolves, so broken references surface here
    // rather than when a reader opens the entry.
    let Some(root) = manifest_path.parent() else {
        eprintln!("error: manifest has no parent directory");
        return ExitCode::FAILURE;
    };
    let loader = FsLoader::new(root);

    let mut missing = 0usize;
    for entry in catalog.entries() {
        if loader.load(&entry.locator).is_err() {
            println!(
                "  {} {}",
                warning("missing content:"),
                dim(&entry.locator)
            );
            missing += 1;
        }
    }

    if missing == 0 {
        println!("{}", success("All locators resolve."));
        ExitCode::SUCCESS
    } else {
        eprintln!("error: {missing} locator(s) do not resolve");
        ExitCode::FAILURE
    }
}
