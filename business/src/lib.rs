//! Domain layer of the tipdesk admin console.
//!
//! - [`table`]: the generic data table engine (search, sort, paging,
//!   column visibility, selection).
//! - [`entities`], [`filters`], [`columns`]: the records listed by the
//!   console and how each one is searched and displayed.
//! - [`api`]: the authenticated admin API client, with [`query`] and
//!   [`forms`] validating what gets sent.

pub mod api;
pub mod columns;
pub mod config;
pub mod entities;
pub mod error;
pub mod filters;
pub mod forms;
pub mod http;
pub mod query;
pub mod table;

pub use api::{ApiClient, Session, SigninData, UserStatusUpdate};
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult, ValidationError};
