//! Partner businesses.

use egui::Ui;
use tipdesk_business::entities::Business;
use tipdesk_business::query::QueryKey;

use crate::state::State;
use crate::widgets::{Dialog, list_view};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartnerAction {
    CopyId(String),
    CopyOwnerId(String),
    SetVerified {
        business_id: String,
        name: String,
        verified: bool,
    },
}

pub fn partners_page(state: &mut State, ui: &mut Ui) {
    let output = list_view(
        ui,
        "partners_table",
        "Partners",
        "Businesses accepting tips on the platform.",
        &mut state.partners,
        partner_actions,
    );
    let ctx = ui.ctx().clone();
    if output.retry {
        state.fetch(QueryKey::Businesses, &ctx);
    }
    if let Some(path) = output.table.add_clicked {
        state.open_path(&path);
    }
    match output.table.action {
        Some(PartnerAction::CopyId(id) | PartnerAction::CopyOwnerId(id)) => {
            state.copy_id(&ctx, &id);
        }
        Some(PartnerAction::SetVerified {
            business_id,
            name,
            verified,
        }) => state.dialog.open(Dialog::VerifyBusiness {
            business_id,
            name,
            verified,
        }),
        None => {}
    }
}

fn partner_actions(ui: &mut Ui, business: &Business) -> Option<PartnerAction> {
    let mut action = None;
    ui.menu_button("⋯", |ui| {
        if ui.button("Copy ID").clicked() {
            action = Some(PartnerAction::CopyId(business.id.clone()));
        }
        if !business.user.id.is_empty() && ui.button("Copy owner ID").clicked() {
            action = Some(PartnerAction::CopyOwnerId(business.user.id.clone()));
        }
        ui.separator();
        let (label, verified) = if business.is_verified {
            ("Mark as unverified", false)
        } else {
            ("Mark as verified", true)
        };
        if ui.button(label).clicked() {
            action = Some(PartnerAction::SetVerified {
                business_id: business.id.clone(),
                name: business.legal_name.clone(),
                verified,
            });
        }
        if action.is_some() {
            ui.close();
        }
    });
    action
}
