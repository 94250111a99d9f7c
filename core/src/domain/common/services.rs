use crate::domain::{
    catalog::ports::RecipeCatalog,
    gateway::{ports::LLMClient, services::Gateway},
};

/// Request-scoped context shared by every handler.
///
/// Built once per process (server) or once per invocation (function) and only
/// read afterwards, so it can be shared across tasks without locking.
#[derive(Debug)]
pub struct Service<LLM, RC>
where
    LLM: LLMClient,
    RC: RecipeCatalog,
{
    pub(crate) gateway: Gateway<LLM>,
    pub(crate) recipe_catalog: RC,
}

impl<LLM, RC> Service<LLM, RC>
where
    LLM: LLMClient,
    RC: RecipeCatalog,
{
    pub fn new(gateway: Gateway<LLM>, recipe_catalog: RC) -> Self {
        Self {
            gateway,
            recipe_catalog,
        }
    }

    pub fn gateway(&self) -> &Gateway<LLM> {
        &self.gateway
    }
}
