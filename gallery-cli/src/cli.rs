//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "gallery",
    version,
    about = "Browse gallery back-office exports",
    long_about = "Browse JSON exports of gallery collections (products, artists, \
                  orders, ...) as searchable, sortable, paginated tables, and pick \
                  categories from nested option trees.\n\n\
                  Sample exports live in demos/:\n  \
                  gallery table demos/products.json --column title:Title --sort price\n  \
                  gallery tree demos/categories.json --query post"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Increase log verbosity (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (default: platform config directory).
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show a collection export as a table.
    Table(TableArgs),
    /// Select options from a category or menu tree.
    Tree(TreeArgs),
}

#[derive(Args)]
pub struct TableArgs {
    /// JSON array of records.
    #[arg(value_name = "RECORDS")]
    pub records: PathBuf,

    /// Column to show, as `ID` or `ID:Header`. Repeat for more columns.
    /// Defaults to every field of the first record.
    #[arg(long = "column", value_name = "ID[:HEADER]")]
    pub columns: Vec<String>,

    /// Free-text search.
    #[arg(long)]
    pub search: Option<String>,

    /// Use fuzzy matching instead of substring matching.
    #[arg(long)]
    pub fuzzy: bool,

    /// Click a column header. Repeat to cycle ascending, descending, unsorted.
    #[arg(long = "sort", value_name = "ID")]
    pub sort: Vec<String>,

    /// Page to show (1-based).
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Rows per page (must be one of the configured options).
    #[arg(long = "page-size")]
    pub page_size: Option<usize>,

    /// Print the full record at this visible row (0-based).
    #[arg(long, value_name = "ROW")]
    pub open: Option<usize>,
}

#[derive(Args)]
pub struct TreeArgs {
    /// JSON array of options, flat (parentId) or nested (children).
    #[arg(value_name = "OPTIONS")]
    pub options: PathBuf,

    /// Search query.
    #[arg(long)]
    pub query: Option<String>,

    /// Initially selected id. Repeat for more.
    #[arg(long = "select", value_name = "ID")]
    pub selected: Vec<String>,

    /// Toggle an id after loading. Applied in order.
    #[arg(long = "toggle", value_name = "ID")]
    pub toggle: Vec<String>,

    /// Expand a node. Repeat for more.
    #[arg(long = "expand", value_name = "ID")]
    pub expand: Vec<String>,

    /// Expand every node.
    #[arg(long)]
    pub expand_all: bool,

    /// Clear the selection (applied before toggles).
    #[arg(long)]
    pub clear: bool,

    /// Title shown above the tree.
    #[arg(long)]
    pub title: Option<String>,

    /// Text shown when nothing is selected.
    #[arg(long)]
    pub placeholder: Option<String>,
}
