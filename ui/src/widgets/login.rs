//! Staff sign-in form.

use egui::{Button, Color32, RichText, TextEdit, Ui};
use tipdesk_business::forms::SigninForm;

const FIELD_WIDTH: f32 = 280.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoginMethod {
    /// Email address or user name in one field.
    #[default]
    Identity,
    Mobile,
}

#[derive(Debug, Clone, Default)]
pub struct LoginState {
    pub method: LoginMethod,
    pub identity: String,
    pub country_code: String,
    pub mobile_number: String,
    pub password: String,
    pub error: Option<String>,
    pub in_progress: bool,
}

impl LoginState {
    pub fn form(&self) -> SigninForm {
        match self.method {
            LoginMethod::Identity => SigninForm::with_login(&self.identity, &self.password),
            LoginMethod::Mobile => SigninForm {
                country_code: self.country_code.trim().to_owned(),
                mobile_number: self.mobile_number.trim().to_owned(),
                password: self.password.clone(),
                ..SigninForm::default()
            },
        }
    }

    /// Clears everything but the chosen method and identity.
    pub fn finish(&mut self, error: Option<String>) {
        self.in_progress = false;
        self.password.clear();
        self.error = error;
    }
}

/// Returns true when the operator submitted the form.
pub fn login_form(ui: &mut Ui, state: &mut LoginState) -> bool {
    ui.horizontal(|ui| {
        ui.radio_value(&mut state.method, LoginMethod::Identity, "Email or username");
        ui.radio_value(&mut state.method, LoginMethod::Mobile, "Mobile number");
    });
    ui.add_space(8.0);

    let mut submitted = false;
    match state.method {
        LoginMethod::Identity => {
            ui.label("Email or username");
            ui.add(
                TextEdit::singleline(&mut state.identity)
                    .hint_text("admin@example.com")
                    .desired_width(FIELD_WIDTH),
            );
        }
        LoginMethod::Mobile => {
            ui.label("Mobile number");
            ui.horizontal(|ui| {
                ui.add(
                    TextEdit::singleline(&mut state.country_code)
                        .hint_text("+91")
                        .desired_width(56.0),
                );
                ui.add(
                    TextEdit::singleline(&mut state.mobile_number)
                        .hint_text("9876543210")
                        .desired_width(FIELD_WIDTH - 64.0),
                );
            });
        }
    }

    ui.label("Password");
    let password = ui.add(
        TextEdit::singleline(&mut state.password)
            .password(true)
            .desired_width(FIELD_WIDTH),
    );
    if password.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
        submitted = true;
    }

    ui.add_space(8.0);
    if let Some(error) = &state.error {
        ui.colored_label(Color32::RED, error);
        ui.add_space(4.0);
    }

    ui.horizontal(|ui| {
        let label = if state.in_progress {
            "Signing in..."
        } else {
            "Sign In"
        };
        if ui
            .add_enabled(!state.in_progress, Button::new(RichText::new(label).strong()))
            .clicked()
        {
            submitted = true;
        }
        if state.in_progress {
            ui.spinner();
        }
    });

    submitted && !state.in_progress
}
