use tracing::info;

use crate::{
    domain::{
        common::{RecetarioConfig, services::Service},
        gateway::services::Gateway,
    },
    infrastructure::{
        catalog::static_catalog::StaticRecipeCatalog, llm::gemini_client::GeminiLLMClient,
    },
};

pub type RecetarioService = Service<GeminiLLMClient, StaticRecipeCatalog>;

/// Wires the production adapters. The Gemini client is only built when the
/// configured key passes classification.
pub fn create_service(config: RecetarioConfig) -> RecetarioService {
    let llm = config.llm;
    let model = llm.gemini_model.clone();
    let base_url = llm.gemini_base_url.clone();

    let gateway = Gateway::configure(llm.gemini_api_key.as_deref(), |key| {
        info!(model = %model, "Gemini client initialized");
        GeminiLLMClient::new(key.to_string(), model.clone(), base_url.clone())
    });

    Service::new(gateway, StaticRecipeCatalog::new())
}
