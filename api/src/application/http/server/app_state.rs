use std::sync::Arc;

use recetario_core::{
    application::RecetarioService,
    domain::contract::{
        entities::{ContractRequest, Endpoint},
        handle,
    },
};

use crate::{application::http::server::api_entities::response::ContractReply, args::Args};

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: Arc<RecetarioService>,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: RecetarioService) -> Self {
        Self {
            args,
            service: Arc::new(service),
        }
    }

    /// Runs the shared endpoint contract against this process' service.
    pub async fn dispatch(&self, endpoint: Endpoint, request: ContractRequest) -> ContractReply {
        handle(self.service.as_ref(), &endpoint, request).await.into()
    }
}
