//! Cell rendering for data tables.

use egui::{Color32, CornerRadius, Frame, Margin, RichText, Ui};
use tipdesk_business::table::{Badge, Cell, Tone};

pub fn render_cell(ui: &mut Ui, cell: &Cell) {
    match cell {
        Cell::Text(text) => {
            ui.label(text);
        }
        Cell::Muted(text) => {
            ui.label(RichText::new(text).weak());
        }
        Cell::Stacked { primary, secondary } => {
            ui.vertical(|ui| {
                ui.label(primary);
                if !secondary.is_empty() {
                    ui.label(RichText::new(secondary).small().weak());
                }
            });
        }
        Cell::Badges(badges) => {
            ui.horizontal(|ui| {
                for badge in badges {
                    render_badge(ui, badge);
                }
            });
        }
        // Filled in by the caller's row actions.
        Cell::Actions => {}
    }
}

pub fn render_badge(ui: &mut Ui, badge: &Badge) {
    let (fill, text) = tone_colors(badge.tone);
    Frame::NONE
        .fill(fill)
        .corner_radius(CornerRadius::same(4))
        .inner_margin(Margin::symmetric(6, 2))
        .show(ui, |ui| {
            ui.label(RichText::new(badge.display()).small().color(text));
        });
}

fn tone_colors(tone: Tone) -> (Color32, Color32) {
    match tone {
        Tone::Positive => (Color32::from_rgb(220, 245, 226), Color32::from_rgb(22, 101, 52)),
        Tone::Negative => (Color32::from_rgb(254, 226, 226), Color32::from_rgb(153, 27, 27)),
        Tone::Neutral => (Color32::from_rgb(235, 235, 240), Color32::from_rgb(60, 60, 70)),
    }
}
