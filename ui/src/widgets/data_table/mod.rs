//! Egui front end for [`DataTable`].
//!
//! The widget owns no state of its own: search text, sorting, visibility,
//! selection and the current page all live in the table, so a page keeps
//! its view across frames simply by keeping the table around.

mod cells;
mod columns;
mod footer;
mod header;

use egui::{Button, RichText, TextEdit, Ui};
use egui_extras::TableBuilder;
use tipdesk_business::table::{Cell, DataTable};

pub use cells::{render_badge, render_cell};
use columns::{HEADER_HEIGHT, ROW_HEIGHT, SEARCH_WIDTH, layout_columns};
use footer::render_footer;
use header::{HeaderColumn, render_table_header};

/// What the operator asked for while the table was drawn.
#[derive(Debug)]
pub struct DataTableOutput<A> {
    /// Target of the add button, when it was clicked.
    pub add_clicked: Option<String>,
    /// Action picked from a row's actions cell.
    pub action: Option<A>,
}

impl<A> Default for DataTableOutput<A> {
    fn default() -> Self {
        Self {
            add_clicked: None,
            action: None,
        }
    }
}

/// Draws the toolbar, the current page and the footer.
///
/// `row_actions` renders the contents of an actions cell and may return
/// an action for the page to handle.
pub fn data_table<T, A>(
    ui: &mut Ui,
    id: &str,
    table: &mut DataTable<T>,
    mut row_actions: impl FnMut(&mut Ui, &T) -> Option<A>,
) -> DataTableOutput<A> {
    let mut output = DataTableOutput::default();

    render_toolbar(ui, table, &mut output);
    ui.add_space(6.0);

    let rows = table.page_rows();
    let headers: Vec<HeaderColumn> = table
        .visible_columns()
        .into_iter()
        .map(|column| HeaderColumn {
            id: column.id,
            header: column.header,
            sortable: table.can_sort(column.id),
            direction: table.sort_direction(column.id),
        })
        .collect();
    let actions: Vec<bool> = table
        .visible_columns()
        .iter()
        .map(|column| column.is_actions())
        .collect();
    let page_selected = table.is_page_selected();

    let mut toggle_page = false;
    let mut sort = None;
    let mut toggle_row = None;

    let view: &DataTable<T> = table;
    let mut builder = TableBuilder::new(ui)
        .id_salt(id)
        .striped(true)
        .resizable(true)
        .vscroll(false);
    for column in layout_columns(&actions) {
        builder = builder.column(column);
    }
    builder
        .header(HEADER_HEIGHT, |mut header| {
            let result = render_table_header(&mut header, &headers, page_selected);
            toggle_page = result.toggle_page;
            sort = result.sort;
        })
        .body(|mut body| {
            for &index in &rows {
                let Some(item) = view.row(index) else {
                    continue;
                };
                body.row(ROW_HEIGHT, |mut row| {
                    row.col(|ui| {
                        let mut selected = view.is_row_selected(index);
                        if ui.checkbox(&mut selected, "").changed() {
                            toggle_row = Some(index);
                        }
                    });
                    for column in view.visible_columns() {
                        row.col(|ui| match column.render(item) {
                            Cell::Actions => {
                                if let Some(action) = row_actions(ui, item) {
                                    output.action = Some(action);
                                }
                            }
                            cell => render_cell(ui, &cell),
                        });
                    }
                });
            }
        });

    if toggle_page {
        table.toggle_page_selected();
    }
    if let Some(index) = toggle_row {
        table.toggle_row_selected(index);
    }
    if let Some(column) = sort {
        table.toggle_sort(column);
    }

    // Shown under the header row, which is drawn even for an empty page.
    if rows.is_empty() {
        ui.add_space(24.0);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(table.empty_state_message()).weak());
        });
        ui.add_space(24.0);
    }

    ui.add_space(6.0);
    render_footer(ui, id, table);
    output
}

fn render_toolbar<T, A>(ui: &mut Ui, table: &mut DataTable<T>, output: &mut DataTableOutput<A>) {
    ui.horizontal(|ui| {
        let mut search = table.search().to_owned();
        let response = ui.add(
            TextEdit::singleline(&mut search)
                .hint_text(table.config().search_placeholder.as_str())
                .desired_width(SEARCH_WIDTH),
        );
        if response.changed() {
            table.set_search(search);
        }

        if table.config().enable_column_visibility {
            ui.menu_button("Columns", |ui| {
                let hideable: Vec<(&'static str, &'static str)> = table
                    .hideable_columns()
                    .map(|column| (column.id, column.header))
                    .collect();
                for (id, header) in hideable {
                    let mut visible = table.is_column_visible(id);
                    if ui.checkbox(&mut visible, header).changed() {
                        table.set_column_visible(id, visible);
                    }
                }
            });
        }

        if let Some(add) = &table.config().add_button {
            if ui.add(Button::new(format!("➕ {}", add.label))).clicked() {
                output.add_clicked = Some(add.href.clone());
            }
        }
    });
}
