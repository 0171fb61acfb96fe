//! Token issuance responder.
//!
//! Turns a [`TokenPair`] from the credential backend into the HTTP response a
//! browser or API client needs: a JSON body, cookies for whichever tokens
//! were issued, and the access credential echoed in `Authorization`.

use std::time::Duration;

use axum::{
    body::Body,
    http::{
        HeaderMap, HeaderValue, Uri,
        header::{ACCESS_CONTROL_EXPOSE_HEADERS, AUTHORIZATION, CONTENT_TYPE},
    },
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use chrono::{DateTime, Utc};
use time::OffsetDateTime;

use gateway_types::{
    ACCESS_COOKIE, BEARER_PREFIX, DEFAULT_ACCESS_LIFETIME, GatewayError, REFRESH_COOKIE,
    TokenPair, TokenResponse,
};

/// Builds the success response for login, register and refresh.
///
/// The body is serialized before anything else is assembled, so an encoding
/// failure never leaves a half-written response behind.
pub fn respond(
    pair: &TokenPair,
    secure: bool,
    now: DateTime<Utc>,
) -> Result<Response, GatewayError> {
    let body = serde_json::to_vec(&TokenResponse::from(pair))
        .map_err(|err| GatewayError::EncodingFailure(err.to_string()))?;

    let mut jar = CookieJar::new();
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    if let Some(refresh) = &pair.refresh_token {
        let expires = pair
            .refresh_expires_in
            .and_then(|lifetime| expires_at(now, lifetime));
        jar = jar.add(credential_cookie(REFRESH_COOKIE, refresh.clone(), secure, expires));
    }

    if let Some(access) = &pair.access_token {
        // An access cookie always carries an expiry, even when the issued
        // lifetime does not fit in a cookie date.
        let expires = pair
            .access_expires_in
            .and_then(|lifetime| expires_at(now, lifetime))
            .or_else(|| expires_at(now, DEFAULT_ACCESS_LIFETIME));
        jar = jar.add(credential_cookie(ACCESS_COOKIE, access.clone(), secure, expires));

        let bearer = HeaderValue::from_str(&format!("{BEARER_PREFIX}{access}"))
            .map_err(|err| GatewayError::EncodingFailure(err.to_string()))?;
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(
            ACCESS_CONTROL_EXPOSE_HEADERS,
            HeaderValue::from_static("Authorization"),
        );
    }

    Ok((jar, headers, Body::from(body)).into_response())
}

/// Cookies that make the client drop both credentials.
pub fn clear(secure: bool) -> CookieJar {
    [ACCESS_COOKIE, REFRESH_COOKIE]
        .into_iter()
        .fold(CookieJar::new(), |jar, name| {
            let mut cookie = credential_cookie(name, String::new(), secure, None);
            cookie.set_max_age(time::Duration::ZERO);
            cookie.set_expires(OffsetDateTime::UNIX_EPOCH);
            jar.add(cookie)
        })
}

/// Whether the request reached the gateway over TLS, directly or through a
/// terminating proxy that says so in `X-Forwarded-Proto`.
pub fn is_secure_transport(headers: &HeaderMap, uri: &Uri) -> bool {
    if uri.scheme_str() == Some("https") {
        return true;
    }
    headers
        .get("x-forwarded-proto")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .is_some_and(|proto| proto.trim().eq_ignore_ascii_case("https"))
}

fn credential_cookie(
    name: &'static str,
    value: String,
    secure: bool,
    expires: Option<OffsetDateTime>,
) -> Cookie<'static> {
    let mut cookie = Cookie::build((name, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .build();
    // No expiry means a session cookie.
    if let Some(at) = expires {
        cookie.set_expires(at);
    }
    cookie
}

fn expires_at(now: DateTime<Utc>, lifetime: Duration) -> Option<OffsetDateTime> {
    let secs = i64::try_from(lifetime.as_secs()).ok()?;
    OffsetDateTime::from_unix_timestamp(now.timestamp().checked_add(secs)?).ok()
}
