//! Page type for tabular view results.

use crate::model::Row;

/// One page of rows from a [`TabularView`](super::TabularView).
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a> {
    rows: Vec<&'a Row>,
    index: usize,
    page_count: usize,
    /// Rows left after filtering, across all pages.
    total_count: usize,
    /// Position of the first row of this page within the filtered rows.
    offset: usize,
}

impl<'a> Page<'a> {
    pub(crate) fn new(
        rows: Vec<&'a Row>,
        index: usize,
        page_count: usize,
        total_count: usize,
        offset: usize,
    ) -> Self {
        Self {
            rows,
            index,
            page_count,
            total_count,
            offset,
        }
    }

    /// Returns the rows on this page.
    pub fn rows(&self) -> &[&'a Row] {
        &self.rows
    }

    /// Returns the zero-based page index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the number of pages.
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Returns the number of rows matching the filter, across all pages.
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Returns the one-based position range of this page's rows, e.g.
    /// `21..=23` for the third page of 23 rows with page size 10.
    pub fn row_range(&self) -> std::ops::RangeInclusive<usize> {
        (self.offset + 1)..=(self.offset + self.rows.len())
    }

    /// Returns the number of rows on this page.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if this page has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns `true` if there are more pages after this one.
    pub fn has_more(&self) -> bool {
        self.index + 1 < self.page_count
    }
}

/// The result of deriving the rows to render.
///
/// An empty table is reported explicitly instead of as an empty page, so the
/// host can show "no rows" or "no matches" without inspecting counts.
#[derive(Debug, Clone, PartialEq)]
pub enum VisibleRows<'a> {
    /// A non-empty page of rows.
    Page(Page<'a>),
    /// The table has no rows at all.
    NoRows,
    /// The table has rows, but none match the filter.
    NoMatches,
}

impl<'a> VisibleRows<'a> {
    /// Returns the rows to render; empty for `NoRows` and `NoMatches`.
    pub fn rows(&self) -> &[&'a Row] {
        match self {
            Self::Page(page) => page.rows(),
            Self::NoRows | Self::NoMatches => &[],
        }
    }

    /// Returns the page, if there is one.
    pub fn page(&self) -> Option<&Page<'a>> {
        match self {
            Self::Page(page) => Some(page),
            Self::NoRows | Self::NoMatches => None,
        }
    }

    /// Returns `true` if there is nothing to render.
    pub fn is_empty(&self) -> bool {
        !matches!(self, Self::Page(_))
    }
}
