//! Generic data table engine.
//!
//! A [`DataTable`] owns rows of any type together with its column
//! descriptors, a [`DataTableConfig`] and a [`TableState`]. Every read runs
//! the same pipeline over positions in the data: global filter, then sort,
//! then pagination. Front ends only walk the resulting positions and render
//! the [`Cell`]s the columns produce, so the rows themselves are never
//! reordered or mutated.

mod column;
mod config;
mod filter;
mod state;

pub use column::{Badge, Cell, ColumnDef, SortValue, Tone};
pub use config::{AddButton, DEFAULT_PAGE_SIZE, DataTableConfig, PAGE_SIZE_OPTIONS};
pub use filter::{GlobalFilterFn, Searchable, contains_any, default_global_filter};
pub use state::{SortDirection, SortState, TableState};

pub struct DataTable<T> {
    columns: Vec<ColumnDef<T>>,
    config: DataTableConfig<T>,
    state: TableState,
    data: Vec<T>,
}

impl<T> DataTable<T> {
    pub fn new(columns: Vec<ColumnDef<T>>, config: DataTableConfig<T>) -> Self {
        let state = TableState::new(config.page_size);
        Self {
            columns,
            config,
            state,
            data: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_data(mut self, data: Vec<T>) -> Self {
        self.set_data(data);
        self
    }

    pub fn columns(&self) -> &[ColumnDef<T>] {
        &self.columns
    }

    pub fn config(&self) -> &DataTableConfig<T> {
        &self.config
    }

    pub fn state(&self) -> &TableState {
        &self.state
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn row(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    /// Replaces the rows.
    ///
    /// The page index is kept as is, even if it now points past the last
    /// page. Selection is keyed by position, so it is cleared.
    pub fn set_data(&mut self, data: Vec<T>) {
        self.data = data;
        self.state.selected_rows.clear();
    }

    pub fn search(&self) -> &str {
        &self.state.search
    }

    /// Updates the search text and returns to the first page when it changed.
    pub fn set_search(&mut self, query: impl Into<String>) {
        let query = query.into();
        if query != self.state.search {
            self.state.search = query;
            self.state.page_index = 0;
        }
    }

    /// Positions of rows matching the search text, in data order.
    pub fn filtered_rows(&self) -> Vec<usize> {
        let query = self.state.search.as_str();
        if query.is_empty() {
            return (0..self.data.len()).collect();
        }

        let filter = self.config.global_filter;
        self.data
            .iter()
            .enumerate()
            .filter(|(_, row)| self.columns.iter().any(|col| filter(row, col.id, query)))
            .map(|(index, _)| index)
            .collect()
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered_rows().len()
    }

    /// Filtered positions in display order.
    ///
    /// Ascending order is a stable sort on the column's key; descending is
    /// its exact reverse.
    pub fn sorted_rows(&self) -> Vec<usize> {
        let mut rows = self.filtered_rows();
        if !self.config.enable_sorting {
            return rows;
        }
        let Some(sort) = &self.state.sort else {
            return rows;
        };
        let Some(key) = self
            .columns
            .iter()
            .find(|col| col.id == sort.column)
            .and_then(|col| col.sort_key)
        else {
            return rows;
        };

        rows.sort_by_cached_key(|&index| key(&self.data[index]));
        if sort.direction == SortDirection::Descending {
            rows.reverse();
        }
        rows
    }

    /// `ceil(filtered / page_size)`; zero when nothing matches.
    pub fn page_count(&self) -> usize {
        let filtered = self.filtered_count();
        if self.config.enable_pagination {
            filtered.div_ceil(self.state.page_size)
        } else {
            usize::from(filtered > 0)
        }
    }

    /// Positions shown on the current page, in display order.
    pub fn page_rows(&self) -> Vec<usize> {
        let rows = self.sorted_rows();
        if !self.config.enable_pagination {
            return rows;
        }
        rows.into_iter()
            .skip(self.state.page_index * self.state.page_size)
            .take(self.state.page_size)
            .collect()
    }

    /// True when the current page has nothing to show.
    pub fn is_empty_view(&self) -> bool {
        self.page_rows().is_empty()
    }

    pub fn empty_state_message(&self) -> &str {
        &self.config.empty_state_message
    }

    pub fn page_index(&self) -> usize {
        self.state.page_index
    }

    pub fn page_size(&self) -> usize {
        self.state.page_size
    }

    pub fn can_previous_page(&self) -> bool {
        self.state.page_index > 0
    }

    pub fn can_next_page(&self) -> bool {
        self.state.page_index + 1 < self.page_count()
    }

    pub fn next_page(&mut self) {
        if self.can_next_page() {
            self.state.page_index += 1;
        }
    }

    pub fn previous_page(&mut self) {
        if self.can_previous_page() {
            self.state.page_index -= 1;
        }
    }

    pub fn first_page(&mut self) {
        self.state.page_index = 0;
    }

    pub fn last_page(&mut self) {
        self.state.page_index = self.page_count().saturating_sub(1);
    }

    /// Jumps to `index`, clamped to the last page.
    pub fn set_page_index(&mut self, index: usize) {
        self.state.page_index = index.min(self.page_count().saturating_sub(1));
    }

    /// Changes the page size, keeping the current top row on screen.
    pub fn set_page_size(&mut self, size: usize) {
        let size = size.max(1);
        let top_row = self.state.page_index * self.state.page_size;
        self.state.page_size = size;
        self.state.page_index = top_row / size;
    }

    pub fn page_label(&self) -> String {
        format!(
            "Page {} of {}",
            self.state.page_index + 1,
            self.page_count().max(1)
        )
    }

    pub fn sort_direction(&self, column_id: &str) -> Option<SortDirection> {
        self.state.sort_direction(column_id)
    }

    pub fn can_sort(&self, column_id: &str) -> bool {
        self.config.enable_sorting
            && self
                .column(column_id)
                .is_some_and(ColumnDef::is_sortable)
    }

    /// Header click. Ignored for columns that cannot sort.
    pub fn toggle_sort(&mut self, column_id: &str) {
        if self.can_sort(column_id) {
            self.state.toggle_sort(column_id);
        }
    }

    /// Returns false when the column cannot sort.
    pub fn set_sort(&mut self, column_id: &str, direction: SortDirection) -> bool {
        if !self.can_sort(column_id) {
            return false;
        }
        self.state.sort = Some(SortState {
            column: column_id.to_owned(),
            direction,
        });
        true
    }

    pub fn clear_sort(&mut self) {
        self.state.sort = None;
    }

    pub fn column(&self, column_id: &str) -> Option<&ColumnDef<T>> {
        self.columns.iter().find(|col| col.id == column_id)
    }

    pub fn is_column_visible(&self, column_id: &str) -> bool {
        !self.state.hidden_columns.contains(column_id)
    }

    pub fn can_hide(&self, column_id: &str) -> bool {
        self.config.enable_column_visibility
            && self.column(column_id).is_some_and(|col| col.can_hide)
    }

    /// Returns false when the column is fixed or visibility is disabled.
    pub fn set_column_visible(&mut self, column_id: &str, visible: bool) -> bool {
        if !self.can_hide(column_id) {
            return false;
        }
        if visible {
            self.state.hidden_columns.remove(column_id);
        } else {
            self.state.hidden_columns.insert(column_id.to_owned());
        }
        true
    }

    pub fn toggle_column(&mut self, column_id: &str) {
        let visible = self.is_column_visible(column_id);
        self.set_column_visible(column_id, !visible);
    }

    /// Columns listed in the visibility menu.
    pub fn hideable_columns(&self) -> impl Iterator<Item = &ColumnDef<T>> {
        self.columns.iter().filter(|col| col.can_hide)
    }

    pub fn visible_columns(&self) -> Vec<&ColumnDef<T>> {
        self.columns
            .iter()
            .filter(|col| self.is_column_visible(col.id))
            .collect()
    }

    pub fn header_labels(&self) -> Vec<&'static str> {
        self.visible_columns()
            .into_iter()
            .map(|col| col.header)
            .collect()
    }

    /// Body cells of one row for the visible columns.
    pub fn row_cells(&self, index: usize) -> Vec<Cell> {
        let Some(row) = self.data.get(index) else {
            return Vec::new();
        };
        self.visible_columns()
            .into_iter()
            .map(|col| col.render(row))
            .collect()
    }

    pub fn is_row_selected(&self, index: usize) -> bool {
        self.state.selected_rows.contains(&index)
    }

    pub fn toggle_row_selected(&mut self, index: usize) {
        if index >= self.data.len() {
            return;
        }
        if !self.state.selected_rows.remove(&index) {
            self.state.selected_rows.insert(index);
        }
    }

    /// True when the current page is non-empty and every row on it is selected.
    pub fn is_page_selected(&self) -> bool {
        let rows = self.page_rows();
        !rows.is_empty() && rows.iter().all(|index| self.is_row_selected(*index))
    }

    pub fn toggle_page_selected(&mut self) {
        let rows = self.page_rows();
        if self.is_page_selected() {
            for index in rows {
                self.state.selected_rows.remove(&index);
            }
        } else {
            self.state.selected_rows.extend(rows);
        }
    }

    pub fn clear_selection(&mut self) {
        self.state.selected_rows.clear();
    }

    /// Selected rows that pass the current search.
    pub fn selected_count(&self) -> usize {
        self.filtered_rows()
            .into_iter()
            .filter(|index| self.is_row_selected(*index))
            .count()
    }

    pub fn selected_rows(&self) -> Vec<&T> {
        self.state
            .selected_rows
            .iter()
            .filter_map(|index| self.data.get(*index))
            .collect()
    }

    pub fn selection_label(&self) -> String {
        format!(
            "{} of {} row(s) selected",
            self.selected_count(),
            self.filtered_count()
        )
    }
}

impl<T> std::fmt::Debug for DataTable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataTable")
            .field("columns", &self.columns)
            .field("state", &self.state)
            .field("rows", &self.data.len())
            .finish_non_exhaustive()
    }
}
