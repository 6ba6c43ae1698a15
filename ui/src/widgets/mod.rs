pub mod data_table;
pub mod dialogs;
pub mod list_view;
pub mod login;

pub use data_table::{DataTableOutput, data_table};
pub use dialogs::{Dialog, DialogOutcome, DialogState, show_dialog};
pub use list_view::{ListViewOutput, list_view};
pub use login::{LoginMethod, LoginState, login_form};
