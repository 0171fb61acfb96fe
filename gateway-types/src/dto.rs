//! Data Transfer Objects (DTOs) for requests and responses.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::TokenPair;

// ─────────────────────────────────────────────────────────────────────────────
// Auth request DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to authenticate with a username and password.
///
/// Missing fields deserialize as empty strings so that "absent" and "empty"
/// are rejected by the same validation.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Request to create a new user.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Request to mint a new access credential.
///
/// The refresh token may be omitted when it is carried by the
/// `refresh_token` cookie instead.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct RefreshRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

/// Request to revoke a refresh credential.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct RevokeRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub user_id: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("username", &self.username)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

impl fmt::Debug for RefreshRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RefreshRequest")
            .field("refresh_token", &self.refresh_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl fmt::Debug for RevokeRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RevokeRequest")
            .field("refresh_token", &self.refresh_token.as_ref().map(|_| "<redacted>"))
            .field("user_id", &self.user_id)
            .finish()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Response DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Body returned by login, register and refresh.
///
/// `access_token` and `access_expires_in_seconds` are omitted (not nulled)
/// when the backend did not issue them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_expires_in_seconds: Option<u64>,
}

impl From<&TokenPair> for TokenResponse {
    fn from(pair: &TokenPair) -> Self {
        Self {
            user_id: pair.user_id.clone(),
            access_token: pair.access_token.clone(),
            access_expires_in_seconds: pair.access_expires_in_seconds(),
        }
    }
}

/// Confirmation returned by revoke.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevokeResponse {
    pub message: String,
}

impl RevokeResponse {
    pub fn revoked() -> Self {
        Self {
            message: "Token revoked".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn token_response_omits_absent_access_fields() {
        let body = TokenResponse::from(&TokenPair::subject_only("u1"));
        assert_eq!(serde_json::to_string(&body).unwrap(), r#"{"user_id":"u1"}"#);
    }

    #[test]
    fn token_response_includes_present_access_fields() {
        let pair = TokenPair {
            access_token: Some("h.p.s".into()),
            access_expires_in: Some(Duration::from_secs(300)),
            ..TokenPair::subject_only("u1")
        };
        assert_eq!(
            serde_json::to_string(&TokenResponse::from(&pair)).unwrap(),
            r#"{"user_id":"u1","access_token":"h.p.s","access_expires_in_seconds":300}"#
        );
    }

    #[test]
    fn login_request_tolerates_missing_fields() {
        let req: LoginRequest = serde_json::from_str(r#"{"password":"x"}"#).unwrap();
        assert!(req.username.is_empty());
        assert_eq!(req.password, "x");
    }

    #[test]
    fn login_request_debug_hides_password() {
        let req = LoginRequest {
            username: "alice".into(),
            password: "hunter2".into(),
        };
        let rendered = format!("{req:?}");
        assert!(rendered.contains("alice"));
        assert!(!rendered.contains("hunter2"));
    }
}
