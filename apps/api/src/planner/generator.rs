//! Text generation seam.
//!
//! `AppState` holds an `Arc<dyn TextGenerator>`; production wires in
//! `LlmClient`, tests wire in a canned fake.

use std::time::Instant;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::llm_client::LlmError;

/// Free text in, free text out. Implementations must not retry or cache.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str, temperature: f32) -> Result<String, LlmError>;
}

/// Sends `prompt` once and returns the reply verbatim.
/// Failures become `AppError::Llm` carrying the upstream message.
pub async fn invoke(
    generator: &dyn TextGenerator,
    prompt: &str,
    temperature: f32,
) -> Result<String, AppError> {
    let started = Instant::now();
    match generator.generate(prompt, temperature).await {
        Ok(text) => {
            info!(
                "Generated {} chars from {} char prompt in {}ms",
                text.len(),
                prompt.len(),
                started.elapsed().as_millis()
            );
            Ok(text)
        }
        Err(e) => {
            warn!("Generation failed after {}ms: {e}", started.elapsed().as_millis());
            Err(AppError::Llm(e))
        }
    }
}
