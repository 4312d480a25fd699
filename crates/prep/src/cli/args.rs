//! Clap argument definitions for the `prep` CLI.

use clap::{Args, Parser, Subcommand};
use prep_catalog::Category;
use prep_highlight::Theme;

/// Parses a category name from the command line.
fn parse_category(s: &str) -> Result<Category, String> {
    s.parse().map_err(|e: prep_catalog::ParseCategoryError| e.to_string())
}

/// Parses a theme name from the command line.
fn parse_theme(s: &str) -> Result<Theme, String> {
    s.parse()
}

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "prep")]
#[command(about = "Terminal reader for tutorial and interview-prep content")]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Shared flag narrowing a listing to one language.
#[derive(Args, Debug, Clone, Default)]
pub struct ListingArgs {
    /// Language to narrow the languages category (ignored elsewhere)
    #[arg(short = 'l', long)]
    pub language: Option<String>,
}

/// Arguments for `prep ls`.
#[derive(Args, Debug, Clone)]
pub struct LsCommand {
    /// Category to list; omit for a summary of all categories
    #[arg(value_parser = parse_category)]
    pub category: Option<Category>,

    #[command(flatten)]
    /// Language narrowing.
    pub listing: ListingArgs,

    /// Show descriptions and locators
    #[arg(long)]
    pub long: bool,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `prep show`.
#[derive(Args, Debug, Clone)]
pub struct ShowCommand {
    /// Category of the entry
    #[arg(value_parser = parse_category)]
    pub category: Category,

    /// Topic slug; omit for the first topic in the listing
    pub topic: Option<String>,

    #[command(flatten)]
    /// Language narrowing.
    pub listing: ListingArgs,

    /// Color theme: light or dark
    #[arg(long, value_parser = parse_theme, default_value = "dark")]
    pub theme: Theme,

    /// Print raw markdown without highlighting
    #[arg(long)]
    pub plain: bool,
}

/// Arguments for `prep toc`.
#[derive(Args, Debug, Clone)]
pub struct TocCommand {
    /// Category of the entry
    #[arg(value_parser = parse_category)]
    pub category: Category,

    /// Topic slug; omit for the first topic in the listing
    pub topic: Option<String>,

    #[command(flatten)]
    /// Language narrowing.
    pub listing: ListingArgs,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `prep init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Overwrite an existing manifest
    #[arg(long)]
    pub force: bool,
}

/// Supported `prep` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// List categories, or the entries of one category
    Ls(LsCommand),

    /// Render an entry's content
    Show(ShowCommand),

    /// Print an entry's outline
    Toc(TocCommand),

    /// Create a prep.toml manifest in the current directory
    Init(InitCommand),

    /// Validate the manifest and report catalog statistics
    Check,
}
