//! Tip recipients.

use egui::Ui;
use tipdesk_business::entities::Tippee;
use tipdesk_business::query::QueryKey;

use crate::state::State;
use crate::widgets::list_view;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TippeeAction {
    CopyId(String),
    ViewDetails(String),
}

pub fn tippees_page(state: &mut State, ui: &mut Ui) {
    let output = list_view(
        ui,
        "tippees_table",
        "Tippees",
        "People receiving tips, independent or linked to a partner.",
        &mut state.tippees,
        tippee_actions,
    );
    let ctx = ui.ctx().clone();
    if output.retry {
        state.fetch(QueryKey::Tippees, &ctx);
    }
    if let Some(path) = output.table.add_clicked {
        state.open_path(&path);
    }
    match output.table.action {
        Some(TippeeAction::CopyId(id)) => state.copy_id(&ctx, &id),
        Some(TippeeAction::ViewDetails(id)) => state.open_user_details(&id, &ctx),
        None => {}
    }
}

fn tippee_actions(ui: &mut Ui, tippee: &Tippee) -> Option<TippeeAction> {
    let mut action = None;
    ui.menu_button("⋯", |ui| {
        if ui.button("Copy ID").clicked() {
            action = Some(TippeeAction::CopyId(tippee.id.clone()));
        }
        if ui.button("View details").clicked() {
            action = Some(TippeeAction::ViewDetails(tippee.id.clone()));
        }
        if action.is_some() {
            ui.close();
        }
    });
    action
}
