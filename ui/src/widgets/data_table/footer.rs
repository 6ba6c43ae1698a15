//! Selection summary and pagination controls.

use egui::{Button, ComboBox, Ui};
use tipdesk_business::table::{DataTable, PAGE_SIZE_OPTIONS};

pub fn render_footer<T>(ui: &mut Ui, id: &str, table: &mut DataTable<T>) {
    if !table.config().enable_pagination {
        return;
    }
    ui.horizontal(|ui| {
        ui.label(table.selection_label());
        ui.separator();

        ui.label("Rows per page");
        let mut page_size = table.page_size();
        ComboBox::from_id_salt((id, "page_size"))
            .selected_text(page_size.to_string())
            .width(56.0)
            .show_ui(ui, |ui| {
                for size in PAGE_SIZE_OPTIONS {
                    ui.selectable_value(&mut page_size, size, size.to_string());
                }
            });
        if page_size != table.page_size() {
            table.set_page_size(page_size);
        }

        ui.separator();
        ui.label(table.page_label());

        let back = table.can_previous_page();
        let forward = table.can_next_page();
        if ui.add_enabled(back, Button::new("First")).clicked() {
            table.first_page();
        }
        if ui.add_enabled(back, Button::new("Previous")).clicked() {
            table.previous_page();
        }
        if ui.add_enabled(forward, Button::new("Next")).clicked() {
            table.next_page();
        }
        if ui.add_enabled(forward, Button::new("Last")).clicked() {
            table.last_page();
        }
    });
}
