use axum::{
    body::Body,
    http::{HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use recetario_core::domain::contract::entities::ContractResponse;

/// Axum rendering of a [`ContractResponse`]: same status, same headers, same
/// body bytes as the function surface.
#[derive(Debug)]
pub struct ContractReply(pub ContractResponse);

impl From<ContractResponse> for ContractReply {
    fn from(response: ContractResponse) -> Self {
        Self(response)
    }
}

impl IntoResponse for ContractReply {
    fn into_response(self) -> Response {
        let contract = self.0;
        let status =
            StatusCode::from_u16(contract.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let mut response = Response::new(Body::from(contract.body_text()));
        *response.status_mut() = status;

        let headers = response.headers_mut();
        for (name, value) in contract.headers() {
            if let Ok(name) = HeaderName::from_bytes(name.as_bytes()) {
                headers.insert(name, HeaderValue::from_static(value));
            }
        }

        response
    }
}
