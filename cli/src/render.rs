//! Applying command-line view options to a table and printing it.

use anyhow::{Result, bail};
use tabled::builder::Builder;
use tabled::settings::Style;
use tipdesk_business::table::{DataTable, SortDirection};

use crate::cli::TableArgs;

impl TableArgs {
    /// Search first, then sort, visibility, page size and finally the page,
    /// so the page number is checked against the filtered row count.
    pub fn apply<T>(&self, table: &mut DataTable<T>) -> Result<()> {
        if let Some(search) = &self.search {
            table.set_search(search.as_str());
        }
        if let Some(column) = &self.sort {
            let direction = if self.desc {
                SortDirection::Descending
            } else {
                SortDirection::Ascending
            };
            if !table.set_sort(column, direction) {
                bail!(
                    "cannot sort by `{column}`; sortable columns: {}",
                    sortable_ids(table).join(", ")
                );
            }
        }
        for column in &self.hide {
            if !table.set_column_visible(column, false) {
                bail!(
                    "cannot hide `{column}`; hideable columns: {}",
                    hideable_ids(table).join(", ")
                );
            }
        }
        table.set_page_size(self.page_size as usize);

        let page = self.page as usize;
        let pages = table.page_count().max(1);
        if page > pages {
            bail!("page {page} is out of range; there are {pages} page(s)");
        }
        table.set_page_index(page - 1);
        Ok(())
    }
}

fn sortable_ids<T>(table: &DataTable<T>) -> Vec<&'static str> {
    table
        .columns()
        .iter()
        .filter(|column| table.can_sort(column.id))
        .map(|column| column.id)
        .collect()
}

fn hideable_ids<T>(table: &DataTable<T>) -> Vec<&'static str> {
    table.hideable_columns().map(|column| column.id).collect()
}

/// The current page as a rounded table, without action columns.
///
/// Returns the empty-state message when no row survives the filter.
pub fn render_table<T>(table: &DataTable<T>) -> String {
    if table.is_empty_view() {
        return table.empty_state_message().to_owned();
    }
    let columns: Vec<_> = table
        .visible_columns()
        .into_iter()
        .filter(|column| !column.is_actions())
        .collect();

    let mut builder = Builder::default();
    builder.push_record(columns.iter().map(|column| header_label(table, column.id, column.header)));
    for index in table.page_rows() {
        let Some(row) = table.row(index) else {
            continue;
        };
        builder.push_record(columns.iter().map(|column| column.render(row).plain_text()));
    }

    let mut rendered = builder.build();
    rendered.with(Style::rounded());
    rendered.to_string()
}

fn header_label<T>(table: &DataTable<T>, id: &str, header: &str) -> String {
    match table.sort_direction(id) {
        Some(direction) => format!("{header} {}", direction.arrow()),
        None => header.to_owned(),
    }
}

/// `Page 2 of 3 · 25 row(s)`
pub fn render_footer<T>(table: &DataTable<T>) -> String {
    format!("{} · {} row(s)", table.page_label(), table.filtered_count())
}

#[cfg(test)]
mod tests {
    use tipdesk_business::columns::users_table;
    use tipdesk_business::entities::User;

    use super::*;

    fn user(first: &str, email: &str) -> User {
        User {
            id: format!("id-{first}"),
            first_name: first.to_owned(),
            email: email.to_owned(),
            ..User::default()
        }
    }

    fn table() -> DataTable<User> {
        users_table().with_data(vec![
            user("Chandra", "c@tipdesk.io"),
            user("Asha", "a@tipdesk.io"),
            user("Bala", "b@tipdesk.io"),
        ])
    }

    fn args() -> TableArgs {
        TableArgs::default()
    }

    #[test]
    fn test_sorted_render_orders_rows() {
        let mut table = table();
        TableArgs {
            sort: Some("name".to_owned()),
            ..args()
        }
        .apply(&mut table)
        .expect("valid view");

        let text = render_table(&table);
        let asha = text.find("Asha").expect("asha rendered");
        let bala = text.find("Bala").expect("bala rendered");
        let chandra = text.find("Chandra").expect("chandra rendered");
        assert!(asha < bala && bala < chandra);
        assert!(text.contains("Name ⏶"));
    }

    #[test]
    fn test_hidden_column_is_not_rendered() {
        let mut table = table();
        TableArgs {
            hide: vec!["email".to_owned()],
            ..args()
        }
        .apply(&mut table)
        .expect("valid view");

        let text = render_table(&table);
        assert!(!text.contains("Email"));
        assert!(!text.contains("a@tipdesk.io"));
        assert!(text.contains("Asha"));
    }

    #[test]
    fn test_unknown_sort_column_lists_choices() {
        let mut table = table();
        let err = TableArgs {
            sort: Some("email".to_owned()),
            ..args()
        }
        .apply(&mut table)
        .unwrap_err();
        assert!(err.to_string().contains("name, created"));
    }

    #[test]
    fn test_page_past_the_end_is_an_error() {
        let mut table = table();
        let err = TableArgs {
            page: 2,
            ..args()
        }
        .apply(&mut table)
        .unwrap_err();
        assert!(err.to_string().contains("1 page(s)"));
    }

    #[test]
    fn test_search_without_matches_renders_empty_message() {
        let mut table = table();
        TableArgs {
            search: Some("zed".to_owned()),
            ..args()
        }
        .apply(&mut table)
        .expect("page 1 always exists");

        assert_eq!(render_table(&table), "No users found.");
        assert_eq!(render_footer(&table), "Page 1 of 1 · 0 row(s)");
    }

    #[test]
    fn test_actions_column_is_skipped() {
        let table = table();
        let header = render_table(&table)
            .lines()
            .nth(1)
            .unwrap_or_default()
            .to_owned();
        assert!(header.starts_with("│ Name"));
    }
}
