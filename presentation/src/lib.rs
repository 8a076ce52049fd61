//! Presentation layer for brain-api
//!
//! This crate contains the HTTP routes served by the binary and the
//! command-line definition used to start it.

pub mod cli;
pub mod http;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use http::{ApiError, AppState, build_router, serve, shutdown_signal};
