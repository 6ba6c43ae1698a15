//! Pages module for the application.
//!
//! - `login_page`: sign-in form shown until a session exists
//! - the dashboard pages, one per entity list, plus the add-partner form

mod add_partner_page;
mod login_page;
mod partners_page;
mod pending_page;
mod tippees_page;
mod users_page;

pub use add_partner_page::add_partner_page;
pub use login_page::login_page;
pub use partners_page::{PartnerAction, partners_page};
pub use pending_page::{PendingAction, pending_page};
pub use tippees_page::{TippeeAction, tippees_page};
pub use users_page::{UserAction, users_page};

use egui::Ui;

use crate::route::Route;
use crate::state::State;

/// Renders the page for the current route.
pub fn current_page(state: &mut State, ui: &mut Ui) {
    state.fetch_current(ui.ctx());
    match state.route {
        Route::Users => users_page(state, ui),
        Route::PendingApprovals => pending_page(state, ui),
        Route::Partners => partners_page(state, ui),
        Route::AddPartner => add_partner_page(state, ui),
        Route::Tippees => tippees_page(state, ui),
    }
}
