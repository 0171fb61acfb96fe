//! Mapping of gateway errors onto HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use gateway_types::{BackendError, GatewayError};

/// Wrapper to implement IntoResponse for GatewayError (orphan rule workaround).
#[derive(Debug)]
pub struct ApiError(pub GatewayError);

impl From<GatewayError> for ApiError {
    fn from(err: GatewayError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            GatewayError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            GatewayError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            GatewayError::Unauthorized(err) => {
                (StatusCode::UNAUTHORIZED, err.client_message().to_string())
            }
            GatewayError::Backend {
                source: BackendError::InvalidPayload(detail),
                ..
            } => {
                tracing::debug!(%detail, "backend rejected request payload");
                (StatusCode::BAD_REQUEST, "Invalid request".to_string())
            }
            GatewayError::Backend { operation, source } => {
                // Backend detail stays in the logs.
                tracing::error!(operation, error = %source, "backend call failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("failed to {operation}"),
                )
            }
            GatewayError::EncodingFailure(detail) => {
                tracing::error!(
                    target: "gateway::encoding",
                    %detail,
                    "backend call succeeded but the response could not be encoded"
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "failed to encode response".to_string(),
                )
            }
        };

        let body = serde_json::json!({
            "error": message,
            "code": status.as_u16()
        });

        (status, Json(body)).into_response()
    }
}
