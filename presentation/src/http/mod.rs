//! HTTP surface: routes, handlers and error responses.

pub mod error;
mod handlers;
pub mod router;

pub use error::ApiError;
pub use router::{AppState, build_router, serve, shutdown_signal};
