//! Web layer for the campus navigator.
//!
//! Provides HTML pages for browsing routes and a small JSON API.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
