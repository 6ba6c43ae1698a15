//! Confirmation and edit dialogs opened from row actions.

use egui::{Align2, Button, Color32, Id, RichText, Ui, Window};
use tipdesk_business::UserStatusUpdate;
use tipdesk_business::entities::{User, UserRole, format_date};
use tipdesk_business::table::{Badge, Tone};

use super::data_table::render_badge;
use crate::tasks::Command;

pub enum Dialog {
    /// Filled once `GET /admin/users/{id}` answers.
    UserDetails {
        user_id: String,
        user: Option<User>,
    },
    EditStatus {
        user: User,
        is_active: bool,
        is_verified: bool,
    },
    AddRole {
        user: User,
        role: String,
        is_primary: bool,
    },
    RemoveRole {
        user: User,
        role: UserRole,
    },
    SetPrimaryRole {
        user: User,
        role: UserRole,
    },
    DeleteUser {
        user: User,
    },
    RestoreUser {
        user: User,
    },
    VerifyBusiness {
        business_id: String,
        name: String,
        verified: bool,
    },
}

impl Dialog {
    pub fn edit_status(user: User) -> Self {
        Self::EditStatus {
            is_active: user.is_active,
            is_verified: user.is_verified,
            user,
        }
    }

    pub fn add_role(user: User) -> Self {
        let role = user
            .assignable_roles()
            .first()
            .map(|role| (*role).to_owned())
            .unwrap_or_default();
        Self::AddRole {
            user,
            role,
            is_primary: false,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::UserDetails { .. } => "User Details",
            Self::EditStatus { .. } => "Edit Status",
            Self::AddRole { .. } => "Add Role",
            Self::RemoveRole { .. } => "Remove Role",
            Self::SetPrimaryRole { .. } => "Set Primary Role",
            Self::DeleteUser { .. } => "Delete User",
            Self::RestoreUser { .. } => "Restore User",
            Self::VerifyBusiness { verified: true, .. } => "Verify Business",
            Self::VerifyBusiness { verified: false, .. } => "Unverify Business",
        }
    }
}

#[derive(Default)]
pub struct DialogState {
    pub current: Option<Dialog>,
    pub submitting: bool,
    pub error: Option<String>,
}

impl DialogState {
    pub fn open(&mut self, dialog: Dialog) {
        self.current = Some(dialog);
        self.submitting = false;
        self.error = None;
    }

    pub fn close(&mut self) {
        *self = Self::default();
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    pub fn title(&self) -> Option<&'static str> {
        self.current.as_ref().map(Dialog::title)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum DialogOutcome {
    Keep,
    Close,
    Submit(Command),
}

/// Draws the open dialog, if any.
pub fn show_dialog(ctx: &egui::Context, state: &mut DialogState) -> DialogOutcome {
    let submitting = state.submitting;
    let error = state.error.clone();
    let Some(dialog) = state.current.as_mut() else {
        return DialogOutcome::Keep;
    };

    let mut open = true;
    let mut outcome = DialogOutcome::Keep;
    Window::new(dialog.title())
        .id(Id::new("tipdesk_dialog"))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            outcome = dialog_body(ui, dialog, submitting);
            if let Some(error) = &error {
                ui.add_space(4.0);
                ui.colored_label(Color32::RED, error);
            }
        });

    if open {
        outcome
    } else {
        DialogOutcome::Close
    }
}

fn dialog_body(ui: &mut Ui, dialog: &mut Dialog, submitting: bool) -> DialogOutcome {
    match dialog {
        Dialog::UserDetails { user, .. } => {
            match user {
                Some(user) => user_details(ui, user),
                None => {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label("Loading user...");
                    });
                }
            }
            ui.add_space(8.0);
            if ui.button("Done").clicked() {
                DialogOutcome::Close
            } else {
                DialogOutcome::Keep
            }
        }
        Dialog::EditStatus {
            user,
            is_active,
            is_verified,
        } => {
            ui.label(format!("Update the status of {}.", user.full_name()));
            ui.checkbox(is_active, "Active");
            ui.checkbox(is_verified, "Verified");
            let changed = *is_active != user.is_active || *is_verified != user.is_verified;
            confirm_buttons(ui, "Save", changed && !submitting, || Command::UpdateStatus {
                user_id: user.id.clone(),
                update: UserStatusUpdate {
                    is_active: *is_active,
                    is_verified: *is_verified,
                },
            })
        }
        Dialog::AddRole {
            user,
            role,
            is_primary,
        } => {
            let roles = user.assignable_roles();
            if roles.is_empty() {
                ui.label("This user already has every role.");
            } else {
                ui.label(format!("Assign a role to {}.", user.full_name()));
                egui::ComboBox::from_id_salt("add_role_choice")
                    .selected_text(role.as_str())
                    .show_ui(ui, |ui| {
                        for choice in &roles {
                            ui.selectable_value(role, (*choice).to_owned(), *choice);
                        }
                    });
                ui.checkbox(is_primary, "Make primary role");
            }
            let ready = roles.iter().any(|choice| *choice == role.as_str()) && !submitting;
            confirm_buttons(ui, "Add Role", ready, || Command::AddRole {
                user_id: user.id.clone(),
                role: role.clone(),
                is_primary: *is_primary,
            })
        }
        Dialog::RemoveRole { user, role } => {
            ui.label(format!(
                "Remove the {} role from {}?",
                role.role,
                user.full_name()
            ));
            confirm_buttons(ui, "Remove", !submitting, || Command::RemoveRole {
                user_id: user.id.clone(),
                role_id: role.id.clone(),
            })
        }
        Dialog::SetPrimaryRole { user, role } => {
            ui.label(format!(
                "Make {} the primary role of {}?",
                role.role,
                user.full_name()
            ));
            confirm_buttons(ui, "Set Primary", !submitting, || Command::SetPrimaryRole {
                user_id: user.id.clone(),
                role_id: role.id.clone(),
            })
        }
        Dialog::DeleteUser { user } => {
            ui.label(format!(
                "Delete {}? The account can be restored later.",
                user.full_name()
            ));
            confirm_buttons(ui, "Delete", !submitting, || Command::DeleteUser {
                user_id: user.id.clone(),
            })
        }
        Dialog::RestoreUser { user } => {
            ui.label(format!("Restore {}?", user.full_name()));
            confirm_buttons(ui, "Restore", !submitting, || Command::RestoreUser {
                user_id: user.id.clone(),
            })
        }
        Dialog::VerifyBusiness {
            business_id,
            name,
            verified,
        } => {
            let (question, label) = if *verified {
                (format!("Mark {name} as verified?"), "Verify")
            } else {
                (format!("Mark {name} as unverified?"), "Unverify")
            };
            ui.label(question);
            confirm_buttons(ui, label, !submitting, || Command::SetBusinessVerified {
                business_id: business_id.clone(),
                verified: *verified,
            })
        }
    }
}

fn confirm_buttons(
    ui: &mut Ui,
    confirm: &str,
    enabled: bool,
    command: impl FnOnce() -> Command,
) -> DialogOutcome {
    ui.add_space(8.0);
    let mut outcome = DialogOutcome::Keep;
    ui.horizontal(|ui| {
        if ui.button("Cancel").clicked() {
            outcome = DialogOutcome::Close;
        }
        if ui
            .add_enabled(enabled, Button::new(RichText::new(confirm).strong()))
            .clicked()
        {
            outcome = DialogOutcome::Submit(command());
        }
    });
    outcome
}

fn user_details(ui: &mut Ui, user: &User) {
    egui::Grid::new("user_details")
        .num_columns(2)
        .spacing([12.0, 4.0])
        .show(ui, |ui| {
            let rows = [
                ("ID", user.id.clone()),
                ("Name", user.full_name()),
                ("Username", user.user_name.clone()),
                ("Email", user.email.clone()),
                (
                    "Mobile",
                    format!("{} {}", user.country_code, user.mobile_number)
                        .trim()
                        .to_owned(),
                ),
                ("Created", format_date(&user.created_at)),
            ];
            for (label, value) in rows {
                ui.label(RichText::new(label).weak());
                ui.label(value);
                ui.end_row();
            }

            ui.label(RichText::new("Status").weak());
            ui.horizontal(|ui| {
                render_badge(ui, &Badge::flag(user.is_active, "Active", "Inactive"));
                render_badge(ui, &Badge::flag(user.is_verified, "Verified", "Unverified"));
                render_badge(ui, &Badge::flag(user.is_approved, "Approved", "Pending"));
                if user.is_deleted {
                    render_badge(ui, &Badge::new("Deleted", Tone::Negative));
                }
            });
            ui.end_row();

            ui.label(RichText::new("Roles").weak());
            ui.horizontal(|ui| {
                if user.user_roles.is_empty() {
                    ui.label(RichText::new("No roles").weak());
                }
                for role in &user.user_roles {
                    let badge = Badge::new(&role.role, Tone::Neutral);
                    let badge = if role.is_primary { badge.starred() } else { badge };
                    render_badge(ui, &badge);
                }
            });
            ui.end_row();
        });
}
