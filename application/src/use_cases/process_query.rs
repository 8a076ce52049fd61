//! Process Query use case.
//!
//! The request orchestrator: composes the system instruction for the
//! requested mode, seeds a fresh session with it, sends the caller's input
//! once, and normalizes the model's answer into a [`BrainResponse`].
//!
//! Every call is isolated. The seed history and the sampling parameters are
//! built per call from the shared [`BrainConfig`] and dropped when the call
//! returns; nothing is written back.

use crate::config::BrainConfig;
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use brain_domain::util::truncate_str;
use brain_domain::{BrainRequest, BrainResponse, Mode, ResponseMetadata, SeedConversation};
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while processing a query.
#[derive(Error, Debug)]
pub enum ProcessQueryError {
    /// The model call failed; the cause is surfaced unchanged.
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// Use case for processing a single brain query.
///
/// Flow:
/// 1. Compose the system instruction for the request's [`Mode`]
/// 2. Derive request-scoped sampling parameters
/// 3. Create a session seeded with the instruction/acknowledgment pair
/// 4. Send the input once (no retry, no fallback)
/// 5. Take the first text part of the first candidate, or `""`
#[derive(Clone)]
pub struct ProcessQueryUseCase {
    gateway: Arc<dyn LlmGateway>,
    config: Arc<BrainConfig>,
}

impl ProcessQueryUseCase {
    pub fn new(gateway: Arc<dyn LlmGateway>) -> Self {
        Self::with_config(gateway, BrainConfig::default())
    }

    pub fn with_config(gateway: Arc<dyn LlmGateway>, config: BrainConfig) -> Self {
        Self {
            gateway,
            config: Arc::new(config),
        }
    }

    /// Shared defaults this use case was built with.
    pub fn config(&self) -> &BrainConfig {
        &self.config
    }

    /// Process a request in the mode it declares.
    pub async fn execute(&self, request: BrainRequest) -> Result<BrainResponse, ProcessQueryError> {
        let mode = request.mode;
        let model = &self.config.model;
        let generation = self.config.generation_for(request.requested_temperature());

        info!(
            mode = %mode,
            model = %model,
            temperature = generation.temperature,
            "Processing query: {}",
            truncate_str(&request.input, 100)
        );

        let seed = SeedConversation::for_mode(mode);
        debug!(
            system_prompt_bytes = seed.system_prompt().len(),
            "Seeding session with system instruction"
        );

        let started = Instant::now();
        let session = self
            .gateway
            .create_session(model, &generation, seed.into_messages())
            .await?;

        let response = session.send(&request.input).await.map_err(|e| {
            warn!(mode = %mode, "Model call failed: {}", e);
            ProcessQueryError::Gateway(e)
        })?;

        let output = response.output_text();
        if output.is_empty() {
            warn!(
                mode = %mode,
                candidates = response.candidates.len(),
                finish_reason = ?response.finish_reason(),
                "Model returned no text output"
            );
        }

        info!(
            mode = %mode,
            elapsed_ms = started.elapsed().as_millis() as u64,
            output_bytes = output.len(),
            "Query completed"
        );

        Ok(BrainResponse::new(
            output,
            ResponseMetadata {
                model: model.to_string(),
                mode,
                temperature: request.reported_temperature(),
            },
        ))
    }

    /// Process a request as code generation, whatever mode it declares.
    pub async fn generate_code(
        &self,
        request: BrainRequest,
    ) -> Result<BrainResponse, ProcessQueryError> {
        self.execute(request.with_mode(Mode::Code)).await
    }

    /// Process a request as code analysis, whatever mode it declares.
    pub async fn analyze_code(
        &self,
        request: BrainRequest,
    ) -> Result<BrainResponse, ProcessQueryError> {
        self.execute(request.with_mode(Mode::Analysis)).await
    }
}
