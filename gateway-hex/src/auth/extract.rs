//! Locating the bearer credential on an inbound request.

use std::fmt;

use axum::http::{HeaderMap, header::AUTHORIZATION};
use axum_extra::extract::cookie::CookieJar;

use gateway_types::{ACCESS_COOKIE, BEARER_PREFIX, CredentialError};

/// Where a credential was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    Header,
    Cookie,
}

/// A bearer value as presented by the client, before validation.
#[derive(Clone, PartialEq, Eq)]
pub struct PresentedCredential {
    /// Full `Authorization` value, prefix included.
    pub value: String,
    pub source: CredentialSource,
}

impl fmt::Debug for PresentedCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PresentedCredential")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

/// Finds the credential in the `Authorization` header, falling back to the
/// `access_token` cookie.
///
/// A cookie value is rewritten as `Bearer <value>` so that both sources go
/// through the same prefix check.
pub fn extract_credential(headers: &HeaderMap) -> Result<PresentedCredential, CredentialError> {
    let header = headers
        .get(AUTHORIZATION)
        .and_then(|value| match value.to_str() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::debug!("skipping non-ASCII authorization header");
                None
            }
        })
        .filter(|value| !value.is_empty());

    if let Some(value) = header {
        return Ok(PresentedCredential {
            value: value.to_string(),
            source: CredentialSource::Header,
        });
    }

    let jar = CookieJar::from_headers(headers);
    match jar.get(ACCESS_COOKIE).map(|cookie| cookie.value()) {
        Some(token) if !token.is_empty() => Ok(PresentedCredential {
            value: format!("{BEARER_PREFIX}{token}"),
            source: CredentialSource::Cookie,
        }),
        _ => Err(CredentialError::NoCredential),
    }
}

/// Strips the bearer prefix, returning the raw token.
///
/// The prefix is matched case-insensitively. A value no longer than the
/// prefix, or one that is blank after it, is malformed.
pub fn strip_bearer(value: &str) -> Result<&str, CredentialError> {
    let prefix_len = BEARER_PREFIX.len();
    let rest = match value.get(..prefix_len) {
        Some(prefix) if value.len() > prefix_len && prefix.eq_ignore_ascii_case(BEARER_PREFIX) => {
            &value[prefix_len..]
        }
        _ => return Err(CredentialError::MalformedCredential("missing bearer prefix")),
    };

    match rest.trim() {
        "" => Err(CredentialError::MalformedCredential("empty token")),
        token => Ok(token),
    }
}

#[cfg(test)]
mod tests {
    use axum::http::{HeaderValue, header::COOKIE};

    use super::*;

    fn headers(pairs: &[(axum::http::HeaderName, &str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.append(name.clone(), HeaderValue::from_str(value).unwrap());
        }
        map
    }

    #[test]
    fn test_header_wins_over_cookie() {
        let map = headers(&[
            (AUTHORIZATION, "Bearer from-header"),
            (COOKIE, "access_token=from-cookie"),
        ]);
        let presented = extract_credential(&map).unwrap();
        assert_eq!(presented.value, "Bearer from-header");
        assert_eq!(presented.source, CredentialSource::Header);
    }

    #[test]
    fn test_cookie_fallback_adds_prefix() {
        let map = headers(&[(COOKIE, "theme=dark; access_token=a.b.c")]);
        let presented = extract_credential(&map).unwrap();
        assert_eq!(presented.value, "Bearer a.b.c");
        assert_eq!(presented.source, CredentialSource::Cookie);
    }

    #[test]
    fn test_empty_header_falls_back_to_cookie() {
        let map = headers(&[(AUTHORIZATION, ""), (COOKIE, "access_token=a.b.c")]);
        assert_eq!(extract_credential(&map).unwrap().source, CredentialSource::Cookie);
    }

    #[test]
    fn test_opaque_header_falls_back_to_cookie() {
        let mut map = headers(&[(COOKIE, "access_token=a.b.c")]);
        map.insert(AUTHORIZATION, HeaderValue::from_bytes(b"Bearer \xff").unwrap());

        let presented = extract_credential(&map).unwrap();
        assert_eq!(presented.value, "Bearer a.b.c");
        assert_eq!(presented.source, CredentialSource::Cookie);
    }

    #[test]
    fn test_nothing_presented() {
        assert_eq!(
            extract_credential(&HeaderMap::new()),
            Err(CredentialError::NoCredential)
        );
        let map = headers(&[(COOKIE, "access_token=")]);
        assert_eq!(extract_credential(&map), Err(CredentialError::NoCredential));
    }

    #[test]
    fn test_strip_bearer() {
        assert_eq!(strip_bearer("Bearer abc"), Ok("abc"));
        assert_eq!(strip_bearer("bearer abc"), Ok("abc"));
        assert_eq!(strip_bearer("BEARER  abc "), Ok("abc"));
    }

    #[test]
    fn test_strip_bearer_rejects_bad_prefix() {
        for value in ["abc.def.ghi", "Bearer ", "Bear", "Basic dXNlcjpwYXNz", "Bearer    "] {
            assert!(
                matches!(strip_bearer(value), Err(CredentialError::MalformedCredential(_))),
                "{value:?} should be malformed"
            );
        }
    }

    #[test]
    fn test_strip_bearer_handles_multibyte_input() {
        assert!(strip_bearer("Beäre token").is_err());
    }
}
