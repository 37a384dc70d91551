//! Table error types

/// Errors raised by [`TabularView`](crate::table::TabularView).
///
/// Construction errors indicate a programming mistake in the column
/// definitions and are not meant to be recovered from at runtime.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// A column has no usable accessor or an empty id.
    #[error("Invalid column definition '{column}': {reason}")]
    InvalidColumnDefinition { column: String, reason: &'static str },

    /// Two columns share the same id.
    #[error("Duplicate column id '{column}'")]
    DuplicateColumn { column: String },

    /// The requested column does not exist.
    #[error("Unknown column '{column}'")]
    UnknownColumn { column: String },

    /// The requested column cannot be sorted.
    #[error("Column '{column}' is not sortable")]
    NotSortable { column: String },

    /// Page size must be at least one row.
    #[error("Page size must be at least 1")]
    InvalidPageSize,
}

impl TableError {
    /// Creates a new invalid column definition error.
    pub fn invalid_column(column: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidColumnDefinition {
            column: column.into(),
            reason,
        }
    }

    /// Creates a new unknown column error.
    pub fn unknown_column(column: impl Into<String>) -> Self {
        Self::UnknownColumn {
            column: column.into(),
        }
    }
}
