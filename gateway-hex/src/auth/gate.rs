//! Expiry gate middleware.
//!
//! Admits a request when it carries a well-formed bearer credential whose
//! `exp` lies in the future. The check is stateless: no cache, no shared
//! state, nothing remembered between requests.

use axum::{
    Router,
    body::Body,
    http::Request,
    middleware::{self, Next},
    response::{IntoResponse, Response},
};
use chrono::Utc;

use gateway_types::{CredentialError, GatewayError};

use super::{claims, extract, propagate};
use crate::inbound::ApiError;

/// Decides whether the bearer value `presented` is admissible at `now`
/// (seconds since the Unix epoch).
///
/// A credential expiring at exactly `now` is already expired.
pub fn admit(presented: &str, now: i64) -> Result<(), CredentialError> {
    let token = extract::strip_bearer(presented)?;
    let exp = claims::decode_expiry(token)?;
    if now >= exp {
        return Err(CredentialError::Expired);
    }
    Ok(())
}

/// Middleware guarding protected routes.
///
/// Rejections are always 401 with a message telling the client whether to
/// refresh (`access token expired`) or to authenticate again. On admission
/// the credential is propagated into the request's [`CallContext`].
///
/// [`CallContext`]: gateway_types::CallContext
pub async fn expiry_gate(mut request: Request<Body>, next: Next) -> Response {
    let outcome = extract::extract_credential(request.headers()).and_then(|presented| {
        admit(&presented.value, Utc::now().timestamp()).map(|()| presented)
    });

    match outcome {
        Ok(presented) => {
            tracing::debug!(source = ?presented.source, "access token admitted");
            propagate::attach(&mut request, presented.value);
            next.run(request).await
        }
        Err(err) => {
            tracing::info!(
                path = %request.uri().path(),
                reason = %err,
                "request rejected by expiry gate"
            );
            ApiError::from(GatewayError::Unauthorized(err)).into_response()
        }
    }
}

/// Puts every route of `router` behind the expiry gate.
pub fn protect<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.route_layer(middleware::from_fn(expiry_gate))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    use axum::{
        Extension,
        http::{StatusCode, header::AUTHORIZATION},
        routing::get,
    };
    use base64::{Engine as _, engine::general_purpose};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use gateway_types::CallContext;

    use super::*;

    fn token_expiring_at(exp: i64) -> String {
        let payload = general_purpose::URL_SAFE_NO_PAD.encode(format!(r#"{{"exp":{exp}}}"#));
        format!("eyJhbGciOiJIUzI1NiJ9.{payload}.sig")
    }

    #[test]
    fn test_admit_future_expiry() {
        let now = 1_700_000_000;
        assert_eq!(admit(&format!("Bearer {}", token_expiring_at(now + 1)), now), Ok(()));
    }

    #[test]
    fn test_expiry_boundary_is_inclusive() {
        let now = 1_700_000_000;
        for exp in [now, now - 1, 0] {
            assert_eq!(
                admit(&format!("Bearer {}", token_expiring_at(exp)), now),
                Err(CredentialError::Expired)
            );
        }
    }

    #[test]
    fn test_admit_rejects_missing_prefix_even_for_valid_token() {
        let now = 1_700_000_000;
        assert!(matches!(
            admit(&token_expiring_at(now + 60), now),
            Err(CredentialError::MalformedCredential(_))
        ));
    }

    fn gated_app(invoked: Arc<AtomicBool>) -> Router {
        protect(Router::new().route(
            "/protected",
            get(move |Extension(ctx): Extension<CallContext>| {
                let invoked = invoked.clone();
                async move {
                    invoked.store(true, Ordering::SeqCst);
                    ctx.authorization().unwrap_or_default().to_string()
                }
            }),
        ))
    }

    async fn call(app: Router, authorization: Option<&str>) -> (StatusCode, String) {
        let mut builder = Request::builder().uri("/protected");
        if let Some(value) = authorization {
            builder = builder.header(AUTHORIZATION, value);
        }
        let response = app.oneshot(builder.body(Body::empty()).unwrap()).await.unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_gate_admits_and_propagates_verbatim() {
        let invoked = Arc::new(AtomicBool::new(false));
        let value = format!("bearer {}", token_expiring_at(Utc::now().timestamp() + 300));

        let (status, body) = call(gated_app(invoked.clone()), Some(&value)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, value);
        assert!(invoked.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_gate_rejects_expired_without_invoking_handler() {
        let invoked = Arc::new(AtomicBool::new(false));
        let value = format!("Bearer {}", token_expiring_at(Utc::now().timestamp() - 1));

        let (status, body) = call(gated_app(invoked.clone()), Some(&value)).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(body.contains("access token expired"));
        assert!(!invoked.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_gate_rejects_missing_credential() {
        let invoked = Arc::new(AtomicBool::new(false));
        let (status, body) = call(gated_app(invoked.clone()), None).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(body.contains("missing access token"));
        assert!(!invoked.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_gate_rejects_malformed_credential() {
        let invoked = Arc::new(AtomicBool::new(false));
        let (status, body) = call(gated_app(invoked.clone()), Some("Bearer invalid-token")).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(body.contains("invalid access token"));
        assert!(!invoked.load(Ordering::SeqCst));
    }
}
