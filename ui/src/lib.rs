#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod list_page;
pub mod pages;
pub mod route;
pub mod state;
pub mod tasks;
pub mod widgets;

pub use app::TipdeskApp;
