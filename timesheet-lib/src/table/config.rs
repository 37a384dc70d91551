//! Table configuration

use std::collections::HashMap;

/// Configuration for a [`TabularView`](super::TabularView).
///
/// # Example
///
/// ```
/// use timesheet_lib::table::TableConfig;
///
/// let config = TableConfig::default()
///     .with_page_size(25)
///     .with_visibility("notes", false);
/// assert_eq!(config.page_size, 25);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    /// Number of rows per page.
    ///
    /// Default: 10
    pub page_size: usize,

    /// Initial column visibility by column id.
    ///
    /// Columns not listed use their own default (visible unless marked
    /// hidden).
    pub visibility: HashMap<String, bool>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size: 10,
            visibility: HashMap::new(),
        }
    }
}

impl TableConfig {
    /// Creates a new table config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page size.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Sets the initial visibility of one column.
    pub fn with_visibility(mut self, column: impl Into<String>, visible: bool) -> Self {
        self.visibility.insert(column.into(), visible);
        self
    }

    /// Replaces the whole visibility map.
    pub fn with_visibility_map(mut self, visibility: HashMap<String, bool>) -> Self {
        self.visibility = visibility;
        self
    }
}
