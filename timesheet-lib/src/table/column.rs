//! Column definitions for tabular views.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use crate::model::Row;
use crate::model::Value;

/// Extracts a column's value from a row.
pub type Accessor = Arc<dyn Fn(&Row) -> Value + Send + Sync>;

/// Custom row comparison used when sorting a column ascending.
pub type Comparator = Arc<dyn Fn(&Row, &Row) -> Ordering + Send + Sync>;

/// Custom filter match. Receives the row and the lowercased filter text.
pub type FilterPredicate = Arc<dyn Fn(&Row, &str) -> bool + Send + Sync>;

/// Column configuration.
///
/// A column identifies how to read one value from a row, how to label it,
/// and how it takes part in sorting and filtering.
///
/// # Examples
///
/// ```
/// use timesheet_lib::model::{Row, Value};
/// use timesheet_lib::table::ColumnDef;
///
/// let columns = vec![
///     ColumnDef::field("name", "Name"),
///     ColumnDef::field("hours", "Hours").searchable(false),
///     ColumnDef::derived("overtime", "Overtime", |row: &Row| {
///         let hours = row.get("hours").as_f64().unwrap_or(0.0);
///         Value::from((hours - 40.0).max(0.0))
///     })
///     .hidden(),
/// ];
/// assert_eq!(columns.len(), 3);
/// ```
#[derive(Clone)]
pub struct ColumnDef {
    pub(crate) id: String,
    pub(crate) label: String,
    pub(crate) accessor: Option<Accessor>,
    pub(crate) default_visible: bool,
    pub(crate) searchable: bool,
    pub(crate) sortable: bool,
    pub(crate) comparator: Option<Comparator>,
    pub(crate) filter: Option<FilterPredicate>,
}

impl ColumnDef {
    /// Creates a column without an accessor.
    ///
    /// An accessor must be attached with [`accessor`](Self::accessor) before
    /// the column is handed to a table.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            accessor: None,
            default_visible: true,
            searchable: true,
            sortable: true,
            comparator: None,
            filter: None,
        }
    }

    /// Creates a column reading the row field named like its id.
    pub fn field(id: impl Into<String>, label: impl Into<String>) -> Self {
        let id = id.into();
        let field = id.clone();
        Self::new(id, label).accessor(move |row: &Row| row.get(&field).clone())
    }

    /// Creates a column whose value is computed from the whole row.
    pub fn derived<F>(id: impl Into<String>, label: impl Into<String>, accessor: F) -> Self
    where
        F: Fn(&Row) -> Value + Send + Sync + 'static,
    {
        Self::new(id, label).accessor(accessor)
    }

    /// Sets the accessor.
    pub fn accessor<F>(mut self, accessor: F) -> Self
    where
        F: Fn(&Row) -> Value + Send + Sync + 'static,
    {
        self.accessor = Some(Arc::new(accessor));
        self
    }

    /// Hides the column unless the table's visibility map says otherwise.
    pub fn hidden(mut self) -> Self {
        self.default_visible = false;
        self
    }

    /// Sets whether the column is scanned by the global filter.
    pub fn searchable(mut self, searchable: bool) -> Self {
        self.searchable = searchable;
        self
    }

    /// Sets whether the column can be sorted.
    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    /// Replaces the default value ordering with a custom comparator.
    ///
    /// The comparator defines ascending order and should be a total order.
    pub fn comparator<F>(mut self, comparator: F) -> Self
    where
        F: Fn(&Row, &Row) -> Ordering + Send + Sync + 'static,
    {
        self.comparator = Some(Arc::new(comparator));
        self
    }

    /// Replaces the default substring match with a custom predicate.
    pub fn filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(&Row, &str) -> bool + Send + Sync + 'static,
    {
        self.filter = Some(Arc::new(filter));
        self
    }

    /// Returns the column id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns whether the column is visible by default.
    pub fn default_visible(&self) -> bool {
        self.default_visible
    }

    /// Returns whether the column takes part in the default filter scan.
    pub fn is_searchable(&self) -> bool {
        self.searchable
    }

    /// Returns whether the column can be sorted.
    pub fn is_sortable(&self) -> bool {
        self.sortable
    }

    /// Reads this column's value from a row.
    ///
    /// Returns `Null` for a column without accessor; tables reject such
    /// columns at construction.
    pub fn value(&self, row: &Row) -> Value {
        self.accessor
            .as_ref()
            .map(|accessor| accessor(row))
            .unwrap_or_default()
    }

    /// Returns `true` if the row matches the lowercased filter text.
    pub(crate) fn matches(&self, row: &Row, needle_lower: &str) -> bool {
        match &self.filter {
            Some(filter) => filter(row, needle_lower),
            None => self.searchable && self.value(row).matches_filter(needle_lower),
        }
    }

    /// Compares two rows ascending by this column.
    pub(crate) fn compare(&self, a: &Row, b: &Row) -> Ordering {
        match &self.comparator {
            Some(comparator) => comparator(a, b),
            None => self.value(a).sort_cmp(&self.value(b)),
        }
    }

    /// Compares two rows descending by this column.
    pub(crate) fn compare_desc(&self, a: &Row, b: &Row) -> Ordering {
        match &self.comparator {
            Some(comparator) => comparator(b, a),
            None => self.value(a).sort_cmp_desc(&self.value(b)),
        }
    }
}

impl fmt::Debug for ColumnDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDef")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("has_accessor", &self.accessor.is_some())
            .field("default_visible", &self.default_visible)
            .field("searchable", &self.searchable)
            .field("sortable", &self.sortable)
            .field("has_comparator", &self.comparator.is_some())
            .field("has_filter", &self.filter.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_accessor() {
        let column = ColumnDef::field("name", "Name");
        let row = Row::new().set("name", "Ann");
        assert_eq!(column.value(&row), Value::from("Ann"));
        assert!(column.value(&Row::new()).is_null());
    }

    #[test]
    fn test_custom_filter_overrides_searchable() {
        let column = ColumnDef::field("status", "Status")
            .searchable(false)
            .filter(|row, needle| needle == "open" && row.get("status").as_str() == Some("pending"));
        let row = Row::new().set("status", "pending");
        assert!(column.matches(&row, "open"));
        assert!(!column.matches(&row, "pend"));
    }

    #[test]
    fn test_unsearchable_column_never_matches() {
        let column = ColumnDef::field("name", "Name").searchable(false);
        assert!(!column.matches(&Row::new().set("name", "Ann"), "ann"));
    }
}
