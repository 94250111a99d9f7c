use tracing::{instrument, warn};

use crate::domain::gateway::{
    entities::{GatewayError, GatewayState},
    ports::LLMClient,
};

/// Owns the single model client of a process and its configuration state.
#[derive(Debug)]
pub struct Gateway<L: LLMClient> {
    state: GatewayState,
    client: Option<L>,
}

impl<L: LLMClient> Gateway<L> {
    /// Classifies the credential and builds the client only when it is usable.
    pub fn configure<F>(credential: Option<&str>, build_client: F) -> Self
    where
        F: FnOnce(&str) -> L,
    {
        let state = GatewayState::classify(credential);
        let client = match (state, credential) {
            (GatewayState::Configured, Some(key)) => Some(build_client(key.trim())),
            _ => {
                warn!(
                    reason = state.status_message(),
                    "Gemini API key not configured, AI features disabled"
                );
                None
            }
        };

        Self { state, client }
    }

    pub fn state(&self) -> &GatewayState {
        &self.state
    }

    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    #[instrument(skip_all, fields(prompt_len = prompt.len()))]
    pub async fn call(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> Result<String, GatewayError> {
        let client = self.client.as_ref().ok_or(GatewayError::Unconfigured)?;

        client
            .generate_with_text(prompt, response_schema)
            .await
            .map_err(|e| {
                tracing::error!("AI service error: {}", e);
                GatewayError::UpstreamFailure(e.to_string())
            })
    }
}
