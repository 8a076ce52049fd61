//! Query domain: what callers send and what they get back.

pub mod request;
pub mod response;

pub use request::BrainRequest;
pub use response::{BrainResponse, ResponseMetadata};
