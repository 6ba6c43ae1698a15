//! Command-line admin console for the tipping platform.
//!
//! Lists are fetched from the admin API and run through the same table
//! engine the desktop console uses, then printed with `tabled`.

pub mod cli;
pub mod commands;
pub mod config;
pub mod output;
pub mod render;
pub mod session;
pub mod timing;
