use egui::{Color32, RichText};

use crate::pages;
use crate::route::Route;
use crate::state::State;
use crate::widgets::{DialogOutcome, show_dialog};

pub struct TipdeskApp {
    state: State,
}

impl TipdeskApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }
}

impl eframe::App for TipdeskApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.poll(ctx);

        if !self.state.is_signed_in() {
            egui::CentralPanel::default().show(ctx, |ui| {
                pages::login_page(&mut self.state, ui);
            });
            return;
        }

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.strong("Tipdesk Admin");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Sign Out").clicked() {
                        self.state.sign_out(ui.ctx());
                        return;
                    }
                    if let Some(session) = self.state.session() {
                        ui.label(RichText::new(session.user.display_name()).weak());
                    }
                });
            });
        });

        if !self.state.is_signed_in() {
            ctx.request_repaint();
            return;
        }

        egui::SidePanel::left("navigation")
            .resizable(false)
            .exact_width(180.0)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                let current = self.state.route.nav_parent();
                for route in Route::NAV {
                    if ui
                        .selectable_label(current == route, route.label())
                        .clicked()
                    {
                        self.state.navigate(route);
                    }
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            notice_bar(ui, &mut self.state);
            egui::ScrollArea::vertical().show(ui, |ui| {
                pages::current_page(&mut self.state, ui);
            });
        });

        match show_dialog(ctx, &mut self.state.dialog) {
            DialogOutcome::Keep => {}
            DialogOutcome::Close => self.state.dialog.close(),
            DialogOutcome::Submit(command) => self.state.run_command(command, ctx),
        }
    }
}

fn notice_bar(ui: &mut egui::Ui, state: &mut State) {
    let Some(notice) = &state.notice else {
        return;
    };
    let color = if notice.is_error {
        Color32::RED
    } else {
        Color32::from_rgb(22, 101, 52)
    };
    let mut dismissed = false;
    ui.horizontal(|ui| {
        ui.colored_label(color, &notice.message);
        if ui.small_button("✖").clicked() {
            dismissed = true;
        }
    });
    ui.separator();
    if dismissed {
        state.notice = None;
    }
}
