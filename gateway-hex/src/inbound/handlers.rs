//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Extension, Json,
    body::Bytes,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;
use chrono::Utc;
use serde_json::Value;

use gateway_types::{
    CallContext, CredentialBackend, GatewayError, InventoryBackend, InventoryOperation,
    LoginRequest, REFRESH_COOKIE, RefreshRequest, RegisterRequest, RevokeRequest, RevokeResponse,
    ports::UnknownOperation,
};

use super::ApiError;
use super::json::{self, JsonBody};
use crate::AuthService;
use crate::auth::issuance;

/// Application state shared across handlers.
pub struct AppState<A: CredentialBackend, I: InventoryBackend> {
    pub auth: AuthService<A>,
    pub inventory: I,
}

type SharedState<A, I> = State<Arc<AppState<A, I>>>;

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

// ─────────────────────────────────────────────────────────────────────────────
// Auth
// ─────────────────────────────────────────────────────────────────────────────

pub async fn login<A: CredentialBackend, I: InventoryBackend>(
    State(state): SharedState<A, I>,
    headers: HeaderMap,
    uri: Uri,
    JsonBody(req): JsonBody<LoginRequest>,
) -> Result<Response, ApiError> {
    let pair = state.auth.login(req).await?;
    tracing::info!(user_id = %pair.user_id, "user logged in");
    let secure = issuance::is_secure_transport(&headers, &uri);
    Ok(issuance::respond(&pair, secure, Utc::now())?)
}

pub async fn register<A: CredentialBackend, I: InventoryBackend>(
    State(state): SharedState<A, I>,
    headers: HeaderMap,
    uri: Uri,
    JsonBody(req): JsonBody<RegisterRequest>,
) -> Result<Response, ApiError> {
    let pair = state.auth.register(req).await?;
    tracing::info!(user_id = %pair.user_id, "user registered");
    let secure = issuance::is_secure_transport(&headers, &uri);
    Ok(issuance::respond(&pair, secure, Utc::now())?)
}

/// Refresh accepts the token in the body or, failing that, the cookie.
pub async fn refresh<A: CredentialBackend, I: InventoryBackend>(
    State(state): SharedState<A, I>,
    jar: CookieJar,
    headers: HeaderMap,
    uri: Uri,
    body: Bytes,
) -> Result<Response, ApiError> {
    let req: RefreshRequest = json::decode_or_default(&body)?;
    let pair = state
        .auth
        .refresh(req.refresh_token, refresh_cookie(&jar))
        .await?;
    let secure = issuance::is_secure_transport(&headers, &uri);
    Ok(issuance::respond(&pair, secure, Utc::now())?)
}

pub async fn revoke<A: CredentialBackend, I: InventoryBackend>(
    State(state): SharedState<A, I>,
    jar: CookieJar,
    headers: HeaderMap,
    uri: Uri,
    body: Bytes,
) -> Result<Response, ApiError> {
    let req: RevokeRequest = json::decode_or_default(&body)?;
    state
        .auth
        .revoke(req.refresh_token, refresh_cookie(&jar), req.user_id)
        .await?;

    let response = json::respond(StatusCode::OK, &RevokeResponse::revoked())?;
    let secure = issuance::is_secure_transport(&headers, &uri);
    Ok((issuance::clear(secure), response).into_response())
}

fn refresh_cookie(jar: &CookieJar) -> Option<String> {
    jar.get(REFRESH_COOKIE).map(|cookie| cookie.value().to_string())
}

// ─────────────────────────────────────────────────────────────────────────────
// Inventory
// ─────────────────────────────────────────────────────────────────────────────

/// Relays one inventory operation. Only reachable behind the expiry gate,
/// which is what puts the [`CallContext`] extension in place.
#[tracing::instrument(skip_all, fields(operation = %operation))]
pub async fn inventory<A: CredentialBackend, I: InventoryBackend>(
    State(state): SharedState<A, I>,
    Path(operation): Path<String>,
    Extension(ctx): Extension<CallContext>,
    JsonBody(payload): JsonBody<Value>,
) -> Result<Response, ApiError> {
    let operation: InventoryOperation = operation
        .parse()
        .map_err(|err: UnknownOperation| GatewayError::NotFound(err.to_string()))?;

    let result = state
        .inventory
        .call(operation, payload, &ctx)
        .await
        .map_err(GatewayError::backend(operation.description()))?;

    Ok(json::respond(StatusCode::OK, &result)?)
}
