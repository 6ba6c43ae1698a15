//! Command implementations for the tipdesk CLI.
//!
//! Each command group lives in its own module. Functions that talk to the
//! API return data so they can be exercised against a mock server; the
//! `run_*` functions around them handle prompts and printing.

pub mod auth;
pub mod completions;
pub mod list;
pub mod partner;
pub mod user;

pub use auth::{run_login, run_logout, run_whoami};
pub use completions::generate_completions;
pub use list::{run_partners, run_pending, run_tippees, run_users};
pub use partner::run_partner;
pub use user::run_user;

use crate::output::Output;

/// Prints the server's message, or `fallback` when it sent none.
fn report(out: &Output, message: &str, fallback: &str) {
    if message.is_empty() {
        out.success(fallback);
    } else {
        out.success(message);
    }
}
