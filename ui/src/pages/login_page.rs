//! Login page for unauthenticated users.
//!
//! Displays the login form centered on the screen.

use egui::{RichText, Ui};

use crate::{state::State, widgets};

pub fn login_page(state: &mut State, ui: &mut Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.2);
        ui.heading("Tipdesk Admin");
        ui.label(RichText::new("Sign in with your staff account").weak());
        ui.add_space(16.0);
    });
    ui.vertical_centered(|ui| {
        ui.set_max_width(300.0);
        ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
            if widgets::login_form(ui, &mut state.login) {
                state.submit_login(ui.ctx());
            }
        });
    });
}
