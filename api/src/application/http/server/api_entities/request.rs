use std::collections::HashMap;

use axum::{body::Bytes, http::Method};
use recetario_core::domain::contract::entities::{ContractRequest, RequestMethod};

/// Builds the transport-neutral request. Bodies that are not UTF-8 are kept
/// lossily so they fail JSON parsing like any other malformed body.
pub fn contract_request(
    method: &Method,
    body: &Bytes,
    query: HashMap<String, String>,
) -> ContractRequest {
    let request = ContractRequest::new(RequestMethod::parse(method.as_str())).with_query(query);

    if body.is_empty() {
        request
    } else {
        request.with_body(String::from_utf8_lossy(body).into_owned())
    }
}
