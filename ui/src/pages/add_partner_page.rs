//! Form for onboarding a partner business.

use egui::{Button, Color32, ComboBox, RichText, TextEdit, Ui};
use tipdesk_business::forms::{CreateBusinessForm, EntityType};

use crate::route::Route;
use crate::state::State;

const FIELD_WIDTH: f32 = 320.0;

pub fn add_partner_page(state: &mut State, ui: &mut Ui) {
    ui.heading("Add Partner");
    ui.label(RichText::new("Create a business for an existing user account.").weak());
    ui.add_space(8.0);

    let submitting = state.add_partner.submitting;
    partner_form(ui, &mut state.add_partner.form);

    ui.add_space(8.0);
    if let Some(error) = &state.add_partner.error {
        ui.colored_label(Color32::RED, error);
    }
    ui.horizontal(|ui| {
        if ui.button("Cancel").clicked() {
            state.navigate(Route::Partners);
        }
        if ui
            .add_enabled(!submitting, Button::new(RichText::new("Create Partner").strong()))
            .clicked()
        {
            state.submit_partner(ui.ctx());
        }
        if submitting {
            ui.spinner();
        }
    });
}

fn partner_form(ui: &mut Ui, form: &mut CreateBusinessForm) {
    egui::Grid::new("add_partner_form")
        .num_columns(2)
        .spacing([12.0, 6.0])
        .show(ui, |ui| {
            field(ui, "Owner user ID *", &mut form.user_id, "");
            field(ui, "Legal name *", &mut form.legal_name, "Acme Private Limited");
            field(ui, "Brand name *", &mut form.brand_name, "Acme");
            field(ui, "Business type *", &mut form.business_type, "restaurant");

            ui.label("Entity type");
            ComboBox::from_id_salt("entity_type")
                .selected_text(form.entity_type.map_or("Not specified", EntityType::label))
                .width(FIELD_WIDTH)
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut form.entity_type, None, "Not specified");
                    for kind in EntityType::ALL {
                        ui.selectable_value(&mut form.entity_type, Some(*kind), kind.label());
                    }
                });
            ui.end_row();

            field(ui, "PAN number *", &mut form.pan_number, "ABCDE1234F");
            field(ui, "GST number", &mut form.gst_number, "");
            field(ui, "Address", &mut form.address, "");
            field(ui, "City", &mut form.city, "");
            field(ui, "State", &mut form.state, "");
            field(ui, "Pincode", &mut form.pincode, "");
        });
}

fn field(ui: &mut Ui, label: &str, value: &mut String, hint: &str) {
    ui.label(label);
    ui.add(
        TextEdit::singleline(value)
            .hint_text(hint)
            .desired_width(FIELD_WIDTH),
    );
    ui.end_row();
}
