use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    error::ServiceError,
    prompt::{Creativity, GenerationConfig, Mode, build_prompt},
};

/// Seam between the orchestrator and the remote text-generation backend.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(
        &self,
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<String, ServiceError>;
}

/// Renders the instruction template for the requested mode and submits it to
/// the backend in a single attempt. On success the backend's text is returned
/// unmodified; on failure the error is returned as-is with no partial result,
/// retry, or fallback.
pub struct PromptOrchestrator {
    backend: Arc<dyn TextGenerator>,
}

impl PromptOrchestrator {
    pub fn new(backend: Arc<dyn TextGenerator>) -> Self {
        Self { backend }
    }

    pub async fn generate(
        &self,
        snippet: &str,
        mode: Mode,
        creativity: Creativity,
    ) -> Result<String, ServiceError> {
        let config = GenerationConfig::for_creativity(creativity);
        let prompt = build_prompt(mode, snippet);
        self.backend.generate(&prompt, &config).await
    }
}
