//! Page body for an entity list: loading, error or table.

use egui::{Color32, CornerRadius, Frame, Margin, RichText, Ui};

use super::data_table::{DataTableOutput, data_table};
use crate::list_page::ListPage;

pub struct ListViewOutput<A> {
    pub retry: bool,
    pub table: DataTableOutput<A>,
}

pub fn list_view<T, A>(
    ui: &mut Ui,
    id: &str,
    title: &str,
    subtitle: &str,
    page: &mut ListPage<T>,
    row_actions: impl FnMut(&mut Ui, &T) -> Option<A>,
) -> ListViewOutput<A> {
    let mut output = ListViewOutput {
        retry: false,
        table: DataTableOutput::default(),
    };

    ui.horizontal(|ui| {
        ui.heading(title);
        if page.is_fetching() && page.is_loaded() {
            ui.spinner();
        }
    });
    ui.label(RichText::new(subtitle).weak());
    ui.add_space(8.0);

    if let Some(error) = page.error() {
        Frame::NONE
            .fill(Color32::from_rgb(254, 242, 242))
            .corner_radius(CornerRadius::same(6))
            .inner_margin(Margin::same(10))
            .show(ui, |ui| {
                ui.colored_label(Color32::RED, error);
                if ui.button("Retry").clicked() {
                    output.retry = true;
                }
            });
        return output;
    }

    if !page.is_loaded() {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label("Loading...");
        });
        return output;
    }

    output.table = data_table(ui, id, &mut page.table, row_actions);
    output
}
