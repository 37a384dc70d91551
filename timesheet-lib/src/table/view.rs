//! Sortable, filterable, paginated view over dynamic rows.

use std::collections::HashMap;
use std::collections::HashSet;

use super::ColumnDef;
use super::Page;
use super::SortDirection;
use super::SortState;
use super::TableConfig;
use super::ViewState;
use super::VisibleRows;
use crate::error::TableError;
use crate::model::Row;

/// A table model independent of any rendering technology.
///
/// `TabularView` owns the rows, the column definitions and a [`ViewState`].
/// Mutators update the state in response to user actions; [`visible_rows`]
/// derives the page to render by filtering, then sorting, then slicing.
///
/// # Example
///
/// ```
/// use timesheet_lib::model::Row;
/// use timesheet_lib::table::{ColumnDef, TableConfig, TabularView};
///
/// let rows = vec![
///     Row::new().set("name", "Bob").set("hours", 3),
///     Row::new().set("name", "Ann").set("hours", 5),
/// ];
/// let columns = vec![ColumnDef::field("name", "Name"), ColumnDef::field("hours", "Hours")];
/// let mut view = TabularView::new(rows, columns, TableConfig::default()).unwrap();
///
/// view.toggle_sort("name").unwrap();
/// let names: Vec<String> = view
///     .visible_rows()
///     .rows()
///     .iter()
///     .map(|row| row.get("name").to_string())
///     .collect();
/// assert_eq!(names, ["Ann", "Bob"]);
/// ```
///
/// [`visible_rows`]: TabularView::visible_rows
#[derive(Debug, Clone)]
pub struct TabularView {
    rows: Vec<Row>,
    columns: Vec<ColumnDef>,
    state: ViewState,
}

impl TabularView {
    /// Creates a view over `rows` with the given columns.
    ///
    /// Fails if a column has an empty id or no accessor, if two columns share
    /// an id, or if the page size is zero.
    pub fn new(rows: Vec<Row>, columns: Vec<ColumnDef>, config: TableConfig) -> Result<Self, TableError> {
        validate_columns(&columns)?;
        if config.page_size == 0 {
            return Err(TableError::InvalidPageSize);
        }

        for id in config.visibility.keys() {
            if !columns.iter().any(|c| &c.id == id) {
                log::warn!("Ignoring visibility for unknown column '{}'", id);
            }
        }

        let visibility: HashMap<String, bool> = columns
            .iter()
            .map(|c| {
                let visible = config
                    .visibility
                    .get(&c.id)
                    .copied()
                    .unwrap_or(c.default_visible);
                (c.id.clone(), visible)
            })
            .collect();

        log::debug!(
            "Created table with {} rows, {} columns, page size {}",
            rows.len(),
            columns.len(),
            config.page_size
        );

        Ok(Self {
            rows,
            columns,
            state: ViewState::new(config.page_size, visibility),
        })
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// Returns the current view state.
    pub fn view_state(&self) -> &ViewState {
        &self.state
    }

    /// Returns all rows in their original order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Returns all column definitions.
    pub fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }

    /// Returns the column with the given id.
    pub fn column(&self, id: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.id == id)
    }

    /// Returns the columns to render, in definition order.
    pub fn visible_columns(&self) -> Vec<&ColumnDef> {
        self.columns
            .iter()
            .filter(|c| self.state.is_visible(&c.id))
            .collect()
    }

    /// Returns the number of rows matching the current filter.
    pub fn filtered_count(&self) -> usize {
        if self.state.filter.is_empty() {
            return self.rows.len();
        }
        self.filtered_indices().len()
    }

    /// Returns the number of pages for the current filter (0 when empty).
    pub fn page_count(&self) -> usize {
        self.filtered_count().div_ceil(self.state.page_size)
    }

    // -------------------------------------------------------------------------
    // Mutators
    // -------------------------------------------------------------------------

    /// Replaces the global filter text and returns to the first page.
    pub fn set_filter(&mut self, text: impl Into<String>) {
        self.state.filter = text.into();
        self.state.page_index = 0;
        log::debug!("Table filter set to {:?}", self.state.filter);
    }

    /// Advances the sort cycle of a column and returns its new direction.
    ///
    /// Sorting is single-column: activating a column clears the sort of any
    /// other column, and that column starts at ascending.
    pub fn toggle_sort(&mut self, column: &str) -> Result<SortDirection, TableError> {
        let def = self
            .column(column)
            .ok_or_else(|| TableError::unknown_column(column))?;
        if !def.sortable {
            return Err(TableError::NotSortable {
                column: column.to_string(),
            });
        }

        let direction = self.state.sort_direction(column).next();
        self.state.sort = direction.is_active().then(|| SortState {
            column: column.to_string(),
            direction,
        });

        log::debug!("Table sort on '{}' is now {:?}", column, direction);
        Ok(direction)
    }

    /// Flips a column's visibility and returns whether it is now visible.
    ///
    /// Hidden columns keep their data but are not rendered or scanned by the
    /// global filter.
    pub fn toggle_column_visibility(&mut self, column: &str) -> Result<bool, TableError> {
        let visible = self
            .state
            .visibility
            .get_mut(column)
            .ok_or_else(|| TableError::unknown_column(column))?;
        *visible = !*visible;
        let visible = *visible;

        log::debug!("Table column '{}' visible: {}", column, visible);
        self.clamp_page();
        Ok(visible)
    }

    /// Moves to the next page. Returns `false` if already on the last page.
    pub fn next_page(&mut self) -> bool {
        if !self.can_next_page() {
            log::trace!("Cannot page past {}", self.state.page_index);
            return false;
        }
        self.state.page_index += 1;
        true
    }

    /// Moves to the previous page. Returns `false` if already on the first page.
    pub fn previous_page(&mut self) -> bool {
        if !self.can_previous_page() {
            log::trace!("Cannot page before 0");
            return false;
        }
        self.state.page_index -= 1;
        true
    }

    /// Returns `true` if there is a page after the current one.
    pub fn can_next_page(&self) -> bool {
        self.state.page_index + 1 < self.page_count()
    }

    /// Returns `true` if there is a page before the current one.
    pub fn can_previous_page(&self) -> bool {
        self.state.page_index > 0
    }

    /// Jumps to a page, clamped to the valid range. Returns the new index.
    pub fn set_page(&mut self, index: usize) -> usize {
        self.state.page_index = index;
        self.clamp_page();
        self.state.page_index
    }

    /// Replaces the rows, keeping sort, filter and visibility.
    pub fn set_rows(&mut self, rows: Vec<Row>) {
        self.rows = rows;
        self.clamp_page();
        log::debug!("Table rows replaced ({} rows)", self.rows.len());
    }

    // -------------------------------------------------------------------------
    // Derivation
    // -------------------------------------------------------------------------

    /// Derives the rows to render for the current state.
    ///
    /// Rows are filtered by the global filter, sorted by the active column
    /// (original order when unsorted; ties keep original order), then sliced
    /// to the current page.
    pub fn visible_rows(&self) -> VisibleRows<'_> {
        if self.rows.is_empty() {
            return VisibleRows::NoRows;
        }

        let ordered = self.ordered_indices();
        if ordered.is_empty() {
            return VisibleRows::NoMatches;
        }

        let total = ordered.len();
        let page_size = self.state.page_size;
        let page_count = total.div_ceil(page_size);
        let index = self.state.page_index.min(page_count - 1);
        let offset = index * page_size;

        let rows = ordered[offset..(offset + page_size).min(total)]
            .iter()
            .map(|&i| &self.rows[i])
            .collect();

        VisibleRows::Page(Page::new(rows, index, page_count, total, offset))
    }

    /// Indices of rows matching the filter, in original order.
    fn filtered_indices(&self) -> Vec<usize> {
        if self.state.filter.is_empty() {
            return (0..self.rows.len()).collect();
        }

        let needle = self.state.filter.to_lowercase();
        let scanned = self.visible_columns();

        self.rows
            .iter()
            .enumerate()
            .filter(|(_, row)| scanned.iter().any(|c| c.matches(row, &needle)))
            .map(|(i, _)| i)
            .collect()
    }

    /// Indices of filtered rows in display order.
    fn ordered_indices(&self) -> Vec<usize> {
        let mut indices = self.filtered_indices();

        let Some(sort) = &self.state.sort else {
            return indices;
        };
        let Some(column) = self.column(&sort.column) else {
            return indices;
        };

        // `sort_by` is stable, so equal keys keep their original order.
        match sort.direction {
            SortDirection::Ascending => {
                indices.sort_by(|&a, &b| column.compare(&self.rows[a], &self.rows[b]))
            }
            SortDirection::Descending => {
                indices.sort_by(|&a, &b| column.compare_desc(&self.rows[a], &self.rows[b]))
            }
            SortDirection::None => {}
        }
        indices
    }

    fn clamp_page(&mut self) {
        let last = self.page_count().saturating_sub(1);
        if self.state.page_index > last {
            log::trace!("Clamping page {} to {}", self.state.page_index, last);
            self.state.page_index = last;
        }
    }
}

fn validate_columns(columns: &[ColumnDef]) -> Result<(), TableError> {
    let mut seen = HashSet::new();
    for column in columns {
        if column.id.is_empty() {
            return Err(TableError::invalid_column(&column.label, "empty column id"));
        }
        if column.accessor.is_none() {
            return Err(TableError::invalid_column(&column.id, "missing accessor"));
        }
        if !seen.insert(column.id.as_str()) {
            return Err(TableError::DuplicateColumn {
                column: column.id.clone(),
            });
        }
    }
    Ok(())
}
