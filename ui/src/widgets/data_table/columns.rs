//! Layout constants for rendered data tables.

use egui_extras::Column;

pub const SELECT_WIDTH: f32 = 28.0;
pub const ACTIONS_WIDTH: f32 = 44.0;
pub const MIN_COLUMN_WIDTH: f32 = 90.0;
pub const ROW_HEIGHT: f32 = 40.0;
pub const HEADER_HEIGHT: f32 = 26.0;
pub const SEARCH_WIDTH: f32 = 280.0;

/// Egui columns for the visible data columns, preceded by the selection
/// checkbox column. The last data column takes the remaining width.
pub fn layout_columns(actions: &[bool]) -> Vec<Column> {
    let mut columns = vec![Column::exact(SELECT_WIDTH)];
    let last = actions.len().saturating_sub(1);
    for (position, is_actions) in actions.iter().enumerate() {
        let column = if *is_actions {
            Column::exact(ACTIONS_WIDTH)
        } else if position == last {
            Column::remainder().at_least(MIN_COLUMN_WIDTH)
        } else {
            Column::auto().at_least(MIN_COLUMN_WIDTH).resizable(true)
        };
        columns.push(column);
    }
    columns
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_has_selection_column() {
        assert_eq!(layout_columns(&[true, false, false]).len(), 4);
        assert_eq!(layout_columns(&[]).len(), 1);
    }
}
