//! CLI error type.

use std::path::PathBuf;

use gallery_views::TableError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("expected a JSON array in {}", .0.display())]
    NotAnArray(PathBuf),
    #[error("invalid config: {0}")]
    Config(String),
    #[error("unknown column {0:?}")]
    UnknownColumn(String),
    #[error(transparent)]
    Table(#[from] TableError),
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
