//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: the Gemini model the service talks to
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod model;
