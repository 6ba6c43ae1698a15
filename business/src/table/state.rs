//! Interactive state owned by one table instance.

use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn arrow(self) -> &'static str {
        match self {
            Self::Ascending => "⏶",
            Self::Descending => "⏷",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    pub column: String,
    pub direction: SortDirection,
}

/// Search text, sort, pagination, visibility and selection.
///
/// Never persisted; a fresh table starts from [`TableState::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableState {
    pub search: String,
    pub sort: Option<SortState>,
    pub page_index: usize,
    pub page_size: usize,
    pub hidden_columns: BTreeSet<String>,
    /// Positions in the table's data.
    pub selected_rows: BTreeSet<usize>,
}

impl TableState {
    pub fn new(page_size: usize) -> Self {
        Self {
            search: String::new(),
            sort: None,
            page_index: 0,
            page_size: page_size.max(1),
            hidden_columns: BTreeSet::new(),
            selected_rows: BTreeSet::new(),
        }
    }

    pub fn sort_direction(&self, column: &str) -> Option<SortDirection> {
        self.sort
            .as_ref()
            .filter(|sort| sort.column == column)
            .map(|sort| sort.direction)
    }

    /// Ascending becomes descending; anything else becomes ascending.
    pub fn toggle_sort(&mut self, column: &str) {
        let direction = match self.sort_direction(column) {
            Some(SortDirection::Ascending) => SortDirection::Descending,
            Some(SortDirection::Descending) | None => SortDirection::Ascending,
        };
        self.sort = Some(SortState {
            column: column.to_owned(),
            direction,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_sort_cycles_between_directions() {
        let mut state = TableState::new(10);
        state.toggle_sort("name");
        assert_eq!(state.sort_direction("name"), Some(SortDirection::Ascending));
        state.toggle_sort("name");
        assert_eq!(state.sort_direction("name"), Some(SortDirection::Descending));
        state.toggle_sort("name");
        assert_eq!(state.sort_direction("name"), Some(SortDirection::Ascending));
    }

    #[test]
    fn test_toggle_other_column_starts_ascending() {
        let mut state = TableState::new(10);
        state.toggle_sort("name");
        state.toggle_sort("name");
        state.toggle_sort("created");
        assert_eq!(state.sort_direction("name"), None);
        assert_eq!(state.sort_direction("created"), Some(SortDirection::Ascending));
    }

    #[test]
    fn test_zero_page_size_is_clamped() {
        assert_eq!(TableState::new(0).page_size, 1);
    }
}
