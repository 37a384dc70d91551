//! `timesheet view`: print one page of a JSON rows file.

use std::collections::BTreeSet;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Args;
use timesheet_lib::model::Row;
use timesheet_lib::retry::{CancellationToken, RetryPolicy, run_with_retry_when};
use timesheet_lib::table::{ColumnDef, SortDirection, TableConfig, TabularView};

use crate::error::CliError;
use crate::render::render_table;

/// Arguments for the `view` subcommand.
#[derive(Debug, Args)]
pub struct ViewArgs {
    /// JSON file containing an array of row objects
    pub file: PathBuf,

    /// Case-insensitive text filter across visible columns
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Sort column, optionally suffixed with :asc or :desc
    #[arg(short, long)]
    pub sort: Option<String>,

    /// Page to show (1-based)
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,

    /// Rows per page
    #[arg(long, default_value_t = 10)]
    pub page_size: usize,

    /// Columns to show, in order (defaults to every field found)
    #[arg(short, long, value_delimiter = ',')]
    pub columns: Vec<String>,

    /// Columns to hide
    #[arg(long)]
    pub hide: Vec<String>,

    #[command(flatten)]
    pub retry: RetryArgs,
}

/// Retry settings for reading the rows file.
#[derive(Debug, Args)]
pub struct RetryArgs {
    /// Maximum read attempts
    #[arg(long, env = "TIMESHEET_RETRY_ATTEMPTS", default_value_t = 3)]
    pub attempts: u32,

    /// Delay before the first retry, in milliseconds
    #[arg(long, env = "TIMESHEET_RETRY_DELAY_MS", default_value_t = 200)]
    pub delay_ms: u64,

    /// Keep the delay constant instead of doubling it
    #[arg(long)]
    pub no_backoff: bool,
}

impl RetryArgs {
    fn policy(&self) -> RetryPolicy {
        RetryPolicy::new(
            self.attempts,
            Duration::from_millis(self.delay_ms),
            !self.no_backoff,
        )
    }
}

/// Runs the `view` subcommand.
pub async fn run(args: ViewArgs, cancel: &CancellationToken) -> Result<(), CliError> {
    let rows = load_rows(&args.file, &args.retry.policy(), cancel).await?;
    let view = build_view(rows, &args)?;
    print!("{}", render_table(&view));
    Ok(())
}

async fn load_rows(
    path: &Path,
    policy: &RetryPolicy,
    cancel: &CancellationToken,
) -> Result<Vec<Row>, CliError> {
    let mut attempt = 0;
    let contents = run_with_retry_when(
        || {
            attempt += 1;
            log::debug!("Reading {} (attempt {})", path.display(), attempt);
            tokio::fs::read_to_string(path)
        },
        policy,
        cancel,
        |err: &std::io::Error| {
            let retry = !matches!(err.kind(), ErrorKind::NotFound | ErrorKind::PermissionDenied);
            if retry {
                log::warn!("Reading {} failed: {}", path.display(), err);
            }
            retry
        },
    )
    .await
    .map_err(|source| {
        log::error!(
            "Giving up on {} after {} attempt(s)",
            path.display(),
            source.attempts()
        );
        CliError::Read {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let rows: Vec<Row> = serde_json::from_str(&contents).map_err(|source| CliError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("Loaded {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

fn build_view(rows: Vec<Row>, args: &ViewArgs) -> Result<TabularView, CliError> {
    let ids: Vec<String> = if args.columns.is_empty() {
        infer_columns(&rows)
    } else {
        args.columns.clone()
    };
    let columns = ids
        .iter()
        .map(|id| ColumnDef::field(id.as_str(), id.as_str()))
        .collect();

    let config = args
        .hide
        .iter()
        .fold(TableConfig::default().with_page_size(args.page_size), |config, id| {
            config.with_visibility(id.as_str(), false)
        });

    let mut view = TabularView::new(rows, columns, config)?;

    if let Some(filter) = &args.filter {
        view.set_filter(filter.as_str());
    }

    if let Some(sort) = &args.sort {
        let (column, direction) = parse_sort(sort)?;
        while view.view_state().sort_direction(column) != direction {
            view.toggle_sort(column)?;
        }
    }

    view.set_page(args.page.saturating_sub(1));
    Ok(view)
}

/// Collects every field name found in the rows, alphabetically.
fn infer_columns(rows: &[Row]) -> Vec<String> {
    rows.iter()
        .flat_map(|row| row.fields().keys().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn parse_sort(sort: &str) -> Result<(&str, SortDirection), CliError> {
    let (column, direction) = match sort.rsplit_once(':') {
        Some((column, "asc")) => (column, SortDirection::Ascending),
        Some((column, "desc")) => (column, SortDirection::Descending),
        Some(_) => return Err(CliError::InvalidSort(sort.to_string())),
        None => (sort, SortDirection::Ascending),
    };
    if column.is_empty() {
        return Err(CliError::InvalidSort(sort.to_string()));
    }
    Ok((column, direction))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sort() {
        assert_eq!(parse_sort("name").unwrap(), ("name", SortDirection::Ascending));
        assert_eq!(parse_sort("hours:desc").unwrap(), ("hours", SortDirection::Descending));
        assert!(parse_sort("hours:sideways").is_err());
        assert!(parse_sort(":desc").is_err());
    }

    #[test]
    fn test_infer_columns_unions_fields() {
        let rows = vec![
            Row::new().set("name", "Ann"),
            Row::new().set("hours", 3).set("name", "Bob"),
        ];
        assert_eq!(infer_columns(&rows), vec!["hours", "name"]);
    }
}
