//! Web layer for the commute route finder.
//!
//! Provides JSON endpoints for route search, school comparison and
//! commute simulation.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::{AppState, AppStore};
