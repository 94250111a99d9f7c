use std::future::Future;

use crate::domain::common::entities::app_errors::CoreError;

/// Outbound port to a text-completion model.
///
/// One call is one round trip: implementations must not retry or stream.
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn generate_with_text(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}
