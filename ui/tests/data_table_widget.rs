use egui_kittest::Harness;
use kittest::Queryable;
use tipdesk_business::columns::{user_columns, user_table_config, users_table};
use tipdesk_business::entities::User;
use tipdesk_business::table::DataTable;
use tipdesk_ui::widgets::{DataTableOutput, data_table};

fn users(count: usize) -> Vec<User> {
    (1..=count)
        .map(|n| User {
            id: format!("u-{n}"),
            first_name: "User".to_owned(),
            last_name: n.to_string(),
            email: format!("user{n}@tipdesk.io"),
            ..User::default()
        })
        .collect()
}

struct TableHarnessState {
    table: DataTable<User>,
    last: Option<String>,
}

fn harness(count: usize) -> Harness<'static, TableHarnessState> {
    harness_for(users_table().with_data(users(count)))
}

fn harness_for(table: DataTable<User>) -> Harness<'static, TableHarnessState> {
    let state = TableHarnessState { table, last: None };
    Harness::builder()
        .with_size(egui::vec2(1400.0, 900.0))
        .build_ui_state(
            |ui, state: &mut TableHarnessState| {
                let output: DataTableOutput<()> =
                    data_table(ui, "users", &mut state.table, |_, _| None);
                if let Some(path) = output.add_clicked {
                    state.last = Some(path);
                }
            },
            state,
        )
}

#[test]
fn test_footer_reflects_table_state() {
    let mut harness = harness(12);
    harness.step();

    assert!(harness.query_by_label("Page 1 of 2").is_some());
    assert!(harness.query_by_label("0 of 12 row(s) selected").is_some());
    assert!(harness.query_by_label("Rows per page").is_some());
}

#[test]
fn test_previous_and_first_disabled_on_first_page() {
    let mut harness = harness(12);
    harness.step();

    harness.get_by_label("Previous").click();
    harness.step();
    assert_eq!(harness.state().table.page_index(), 0);

    harness.get_by_label("Next").click();
    harness.step();
    assert_eq!(harness.state().table.page_index(), 1);
    assert!(harness.query_by_label("Page 2 of 2").is_some());
}

#[test]
fn test_add_button_reports_target() {
    let mut harness = harness(1);
    harness.step();

    harness.get_by_label("➕ Add New User").click();
    harness.step();
    assert_eq!(
        harness.state().last.as_deref(),
        Some("/dashboard/users/add")
    );
}

#[test]
fn test_empty_table_shows_message() {
    let mut harness = harness(0);
    harness.step();

    assert!(harness.query_by_label("No users found.").is_some());
    assert!(harness.query_by_label("Page 1 of 1").is_some());
    assert!(harness.query_by_label("0 of 0 row(s) selected").is_some());
}

#[test]
fn test_empty_table_keeps_sortable_header() {
    let mut harness = harness(3);
    harness.state_mut().table.set_search("nobody matches this");
    harness.step();

    assert!(harness.query_by_label("No users found.").is_some());
    assert!(harness.query_by_label("Name ⇅").is_some());
    assert!(harness.query_by_label("Created ⇅").is_some());
}

#[test]
fn test_footer_hidden_without_pagination() {
    let config = user_table_config().pagination(false);
    let mut harness = harness_for(DataTable::new(user_columns(), config).with_data(users(3)));
    harness.step();

    assert!(harness.query_by_label("User 1").is_some());
    assert!(harness.query_by_label("0 of 3 row(s) selected").is_none());
    assert!(harness.query_by_label("Rows per page").is_none());
}
