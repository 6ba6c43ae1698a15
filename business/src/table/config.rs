//! Per-table configuration.

use super::filter::{GlobalFilterFn, Searchable, default_global_filter};

/// Choices offered by the rows-per-page selector.
pub const PAGE_SIZE_OPTIONS: [usize; 5] = [10, 20, 30, 40, 50];

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Navigation affordance shown next to the search box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddButton {
    pub label: String,
    pub href: String,
}

/// Options recognised by [`DataTable`](super::DataTable).
#[derive(Debug, Clone)]
pub struct DataTableConfig<T> {
    pub search_placeholder: String,
    pub global_filter: GlobalFilterFn<T>,
    pub enable_pagination: bool,
    pub page_size: usize,
    pub enable_sorting: bool,
    pub enable_column_visibility: bool,
    pub add_button: Option<AddButton>,
    pub empty_state_message: String,
}

impl<T: Searchable> Default for DataTableConfig<T> {
    fn default() -> Self {
        Self::with_filter(default_global_filter::<T>)
    }
}

impl<T> DataTableConfig<T> {
    /// Default options with an explicit search predicate.
    pub fn with_filter(global_filter: GlobalFilterFn<T>) -> Self {
        Self {
            search_placeholder: "Search...".to_owned(),
            global_filter,
            enable_pagination: true,
            page_size: DEFAULT_PAGE_SIZE,
            enable_sorting: true,
            enable_column_visibility: true,
            add_button: None,
            empty_state_message: "No results.".to_owned(),
        }
    }

    #[must_use]
    pub fn search_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.search_placeholder = placeholder.into();
        self
    }

    #[must_use]
    pub fn pagination(mut self, enabled: bool) -> Self {
        self.enable_pagination = enabled;
        self
    }

    /// Zero is treated as one.
    #[must_use]
    pub fn page_size(mut self, size: usize) -> Self {
        self.page_size = size.max(1);
        self
    }

    #[must_use]
    pub fn sorting(mut self, enabled: bool) -> Self {
        self.enable_sorting = enabled;
        self
    }

    #[must_use]
    pub fn column_visibility(mut self, enabled: bool) -> Self {
        self.enable_column_visibility = enabled;
        self
    }

    #[must_use]
    pub fn add_button(mut self, label: impl Into<String>, href: impl Into<String>) -> Self {
        self.add_button = Some(AddButton {
            label: label.into(),
            href: href.into(),
        });
        self
    }

    #[must_use]
    pub fn empty_state(mut self, message: impl Into<String>) -> Self {
        self.empty_state_message = message.into();
        self
    }
}
