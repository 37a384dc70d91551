//! Sort direction and state.

/// Sort direction for a table column.
///
/// Activating a column header cycles `None → Ascending → Descending → None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Not sorted; rows keep their original order.
    #[default]
    None,
    /// Ascending order (A-Z, 0-9).
    Ascending,
    /// Descending order (Z-A, 9-0).
    Descending,
}

impl SortDirection {
    /// Returns the next direction in the activation cycle.
    pub fn next(self) -> Self {
        match self {
            Self::None => Self::Ascending,
            Self::Ascending => Self::Descending,
            Self::Descending => Self::None,
        }
    }

    /// Returns `true` if this direction sorts rows.
    pub fn is_active(self) -> bool {
        !matches!(self, Self::None)
    }

    /// Returns a header indicator for this direction.
    pub fn indicator(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Ascending => "▲",
            Self::Descending => "▼",
        }
    }
}

/// The active sort of a table: one column and its direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    /// Id of the sorted column.
    pub column: String,
    /// Direction; never [`SortDirection::None`] while stored.
    pub direction: SortDirection,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle() {
        let start = SortDirection::None;
        assert_eq!(start.next(), SortDirection::Ascending);
        assert_eq!(start.next().next(), SortDirection::Descending);
        assert_eq!(start.next().next().next(), SortDirection::None);
    }
}
