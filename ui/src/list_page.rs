//! Fetch state for one entity list.

use tipdesk_business::ApiResult;
use tipdesk_business::table::DataTable;

/// A data table plus the status of the request that fills it.
///
/// Rows from the last successful fetch stay visible while a refetch is in
/// flight. A failed fetch replaces the table with an error until retried.
pub struct ListPage<T> {
    pub table: DataTable<T>,
    loaded: bool,
    fetching: bool,
    error: Option<String>,
}

impl<T> ListPage<T> {
    pub fn new(table: DataTable<T>) -> Self {
        Self {
            table,
            loaded: false,
            fetching: false,
            error: None,
        }
    }

    /// Nothing fetched yet and nothing in flight.
    pub fn needs_fetch(&self) -> bool {
        !self.loaded && !self.fetching && self.error.is_none()
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn is_fetching(&self) -> bool {
        self.fetching
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_fetching(&mut self) {
        self.fetching = true;
        self.error = None;
    }

    pub fn finish(&mut self, result: ApiResult<Vec<T>>) {
        self.fetching = false;
        match result {
            Ok(rows) => {
                self.table.set_data(rows);
                self.loaded = true;
                self.error = None;
            }
            Err(err) => {
                self.error = Some(err.to_string());
            }
        }
    }

    /// Forget fetched rows, e.g. after signing out.
    pub fn reset(&mut self) {
        self.table.set_data(Vec::new());
        self.loaded = false;
        self.fetching = false;
        self.error = None;
    }
}
