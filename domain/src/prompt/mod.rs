//! Prompt domain
//!
//! The request [`Mode`] and the [`PromptComposer`] that turns it into the
//! system instruction seeded into every session.

mod composer;
pub mod mode;

pub use composer::PromptComposer;
pub use mode::Mode;
