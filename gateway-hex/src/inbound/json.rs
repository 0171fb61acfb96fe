//! JSON request and response bodies.
//!
//! Axum's `Json` extractor answers 415/422 for some malformed bodies; the
//! gateway answers 400 for all of them.

use axum::{
    body::{Body, Bytes},
    extract::{FromRequest, Request},
    http::{HeaderValue, StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use serde::{Serialize, de::DeserializeOwned};

use gateway_types::GatewayError;

use super::ApiError;

/// JSON body extractor that rejects any malformed body with 400.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|_| GatewayError::invalid_request())?;
        decode(&bytes).map(JsonBody).map_err(ApiError::from)
    }
}

/// Decodes a JSON body, rejecting anything malformed as a bad request.
pub(crate) fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, GatewayError> {
    serde_json::from_slice(bytes).map_err(|err| {
        tracing::debug!(error = %err, "rejecting malformed request body");
        GatewayError::invalid_request()
    })
}

/// Like [`decode`], but an empty body yields `T::default()`.
pub(crate) fn decode_or_default<T: DeserializeOwned + Default>(
    bytes: &[u8],
) -> Result<T, GatewayError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    decode(bytes)
}

/// Serializes `value` into a JSON response.
///
/// Serialization failures surface as [`GatewayError::EncodingFailure`] so
/// they are never confused with a failed backend call.
pub(crate) fn respond<T: Serialize>(
    status: StatusCode,
    value: &T,
) -> Result<Response, GatewayError> {
    let body = serde_json::to_vec(value)
        .map_err(|err| GatewayError::EncodingFailure(err.to_string()))?;
    Ok((
        status,
        [(CONTENT_TYPE, HeaderValue::from_static("application/json"))],
        Body::from(body),
    )
        .into_response())
}
