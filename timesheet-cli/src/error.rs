//! CLI error types

use std::io;
use std::path::PathBuf;

use timesheet_lib::error::{RetryError, TableError};

/// Errors reported to the user by the CLI.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The rows file could not be read, even after retrying.
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: RetryError<io::Error>,
    },

    /// The rows file is not a JSON array of objects.
    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The table rejected the requested columns or state.
    #[error(transparent)]
    Table(#[from] TableError),

    /// The `--sort` argument could not be understood.
    #[error("Invalid sort '{0}': expected COLUMN, COLUMN:asc or COLUMN:desc")]
    InvalidSort(String),
}
