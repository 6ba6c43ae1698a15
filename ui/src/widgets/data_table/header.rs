//! Header row: page selection checkbox and sortable column titles.

use egui::Ui;
use egui_extras::TableRow;
use tipdesk_business::table::SortDirection;

/// What the header needs to know about one visible column.
pub struct HeaderColumn {
    pub id: &'static str,
    pub header: &'static str,
    pub sortable: bool,
    pub direction: Option<SortDirection>,
}

#[derive(Debug, Default)]
pub struct HeaderResult {
    pub toggle_page: bool,
    pub sort: Option<&'static str>,
}

pub fn render_table_header(
    header: &mut TableRow<'_, '_>,
    columns: &[HeaderColumn],
    page_selected: bool,
) -> HeaderResult {
    let mut result = HeaderResult::default();
    header.col(|ui| {
        let mut checked = page_selected;
        if ui.checkbox(&mut checked, "").changed() {
            result.toggle_page = true;
        }
    });
    for column in columns {
        header.col(|ui| {
            if render_header_cell(ui, column) {
                result.sort = Some(column.id);
            }
        });
    }
    result
}

/// Returns true when a sortable title was clicked.
fn render_header_cell(ui: &mut Ui, column: &HeaderColumn) -> bool {
    if !column.sortable {
        ui.strong(column.header);
        return false;
    }
    let title = match column.direction {
        Some(direction) => format!("{} {}", column.header, direction.arrow()),
        None => format!("{} ⇅", column.header),
    };
    ui.add(egui::Button::new(egui::RichText::new(title).strong()).frame(false))
        .on_hover_text("Sort")
        .clicked()
}
