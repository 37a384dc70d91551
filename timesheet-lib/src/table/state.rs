//! View state for tabular views.

use std::collections::HashMap;

use super::SortDirection;
use super::SortState;

/// The user-facing state of one table: sort, filter, visibility and page.
///
/// Created fresh with each [`TabularView`](super::TabularView) and never
/// persisted. Mutate it through the view so invariants (page clamping,
/// single-column sort) are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub(crate) sort: Option<SortState>,
    pub(crate) filter: String,
    pub(crate) visibility: HashMap<String, bool>,
    pub(crate) page_index: usize,
    pub(crate) page_size: usize,
}

impl ViewState {
    pub(crate) fn new(page_size: usize, visibility: HashMap<String, bool>) -> Self {
        Self {
            sort: None,
            filter: String::new(),
            visibility,
            page_index: 0,
            page_size,
        }
    }

    /// Returns the active sort, if any.
    pub fn sort(&self) -> Option<&SortState> {
        self.sort.as_ref()
    }

    /// Returns the sort direction of a column.
    pub fn sort_direction(&self, column: &str) -> SortDirection {
        match &self.sort {
            Some(sort) if sort.column == column => sort.direction,
            _ => SortDirection::None,
        }
    }

    /// Returns the global filter text.
    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Returns `true` if the column is visible.
    pub fn is_visible(&self, column: &str) -> bool {
        self.visibility.get(column).copied().unwrap_or(true)
    }

    /// Returns the visibility map.
    pub fn visibility(&self) -> &HashMap<String, bool> {
        &self.visibility
    }

    /// Returns the current zero-based page index.
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// Returns the page size.
    pub fn page_size(&self) -> usize {
        self.page_size
    }
}
