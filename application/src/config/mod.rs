//! Application-level configuration.
//!
//! - [`BrainConfig`]: model and default sampling parameters shared by all requests

pub mod brain_config;

pub use brain_config::BrainConfig;
