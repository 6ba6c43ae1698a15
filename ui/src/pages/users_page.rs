//! All platform users.

use egui::Ui;
use tipdesk_business::entities::{User, UserRole};
use tipdesk_business::query::QueryKey;

use crate::state::State;
use crate::widgets::{Dialog, list_view};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    CopyId(String),
    ViewDetails(String),
    EditStatus(User),
    AddRole(User),
    RemoveRole(User, UserRole),
    SetPrimaryRole(User, UserRole),
    Delete(User),
    Restore(User),
}

pub fn users_page(state: &mut State, ui: &mut Ui) {
    let output = list_view(
        ui,
        "users_table",
        "Users",
        "Manage accounts, roles and status across the platform.",
        &mut state.users,
        user_actions,
    );
    let ctx = ui.ctx().clone();
    if output.retry {
        state.fetch(QueryKey::Users, &ctx);
    }
    if let Some(path) = output.table.add_clicked {
        state.open_path(&path);
    }
    let Some(action) = output.table.action else {
        return;
    };
    match action {
        UserAction::CopyId(id) => state.copy_id(&ctx, &id),
        UserAction::ViewDetails(id) => state.open_user_details(&id, &ctx),
        UserAction::EditStatus(user) => state.dialog.open(Dialog::edit_status(user)),
        UserAction::AddRole(user) => state.dialog.open(Dialog::add_role(user)),
        UserAction::RemoveRole(user, role) => {
            state.dialog.open(Dialog::RemoveRole { user, role });
        }
        UserAction::SetPrimaryRole(user, role) => {
            state.dialog.open(Dialog::SetPrimaryRole { user, role });
        }
        UserAction::Delete(user) => state.dialog.open(Dialog::DeleteUser { user }),
        UserAction::Restore(user) => state.dialog.open(Dialog::RestoreUser { user }),
    }
}

fn user_actions(ui: &mut Ui, user: &User) -> Option<UserAction> {
    let mut action = None;
    ui.menu_button("⋯", |ui| {
        if ui.button("Copy ID").clicked() {
            action = Some(UserAction::CopyId(user.id.clone()));
        }
        if ui.button("View details").clicked() {
            action = Some(UserAction::ViewDetails(user.id.clone()));
        }
        ui.separator();
        if ui.button("Edit status").clicked() {
            action = Some(UserAction::EditStatus(user.clone()));
        }
        if ui
            .add_enabled(
                !user.assignable_roles().is_empty(),
                egui::Button::new("Add role"),
            )
            .clicked()
        {
            action = Some(UserAction::AddRole(user.clone()));
        }
        if !user.user_roles.is_empty() {
            ui.menu_button("Remove role", |ui| {
                for role in &user.user_roles {
                    if ui.button(&role.role).clicked() {
                        action = Some(UserAction::RemoveRole(user.clone(), role.clone()));
                    }
                }
            });
        }
        let secondary: Vec<&UserRole> = user.user_roles.iter().filter(|r| !r.is_primary).collect();
        if !secondary.is_empty() {
            ui.menu_button("Set primary role", |ui| {
                for role in secondary {
                    if ui.button(&role.role).clicked() {
                        action = Some(UserAction::SetPrimaryRole(user.clone(), role.clone()));
                    }
                }
            });
        }
        ui.separator();
        if user.is_deleted {
            if ui.button("Restore user").clicked() {
                action = Some(UserAction::Restore(user.clone()));
            }
        } else if ui.button("Delete user").clicked() {
            action = Some(UserAction::Delete(user.clone()));
        }
        if action.is_some() {
            ui.close();
        }
    });
    action
}
