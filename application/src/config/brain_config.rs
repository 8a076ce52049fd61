//! Process-wide defaults for query processing.
//!
//! [`BrainConfig`] is built once at startup and shared read-only by every
//! request. Per-request overrides are applied to a copy of
//! [`generation`](BrainConfig::generation), never to this value.

use brain_domain::{GenerationConfig, Model};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BrainConfig {
    /// Model every session is created against.
    pub model: Model,
    /// Default sampling parameters.
    pub generation: GenerationConfig,
}

impl BrainConfig {
    // ==================== Builder Methods ====================

    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    pub fn with_generation(mut self, generation: GenerationConfig) -> Self {
        self.generation = generation;
        self
    }

    /// Sampling parameters for a single call.
    pub fn generation_for(&self, temperature: Option<f32>) -> GenerationConfig {
        self.generation.with_temperature(temperature)
    }
}
