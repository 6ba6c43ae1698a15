//! Sign-ups waiting for approval.

use egui::Ui;
use tipdesk_business::entities::PendingUser;
use tipdesk_business::query::QueryKey;

use crate::state::State;
use crate::widgets::list_view;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    CopyId(String),
    ViewDetails(String),
}

pub fn pending_page(state: &mut State, ui: &mut Ui) {
    let output = list_view(
        ui,
        "pending_table",
        "Pending Approvals",
        "New accounts waiting for an administrator.",
        &mut state.pending,
        pending_actions,
    );
    let ctx = ui.ctx().clone();
    if output.retry {
        state.fetch(QueryKey::PendingUsers, &ctx);
    }
    match output.table.action {
        Some(PendingAction::CopyId(id)) => state.copy_id(&ctx, &id),
        Some(PendingAction::ViewDetails(id)) => state.open_user_details(&id, &ctx),
        None => {}
    }
}

fn pending_actions(ui: &mut Ui, user: &PendingUser) -> Option<PendingAction> {
    let mut action = None;
    ui.menu_button("⋯", |ui| {
        if ui.button("Copy ID").clicked() {
            action = Some(PendingAction::CopyId(user.id.clone()));
        }
        if ui.button("View details").clicked() {
            action = Some(PendingAction::ViewDetails(user.id.clone()));
        }
        if action.is_some() {
            ui.close();
        }
    });
    action
}
