//! Token pair domain type.

use std::fmt;
use std::time::Duration;

/// Credentials minted by the credential backend for one subject.
///
/// Returned by login, register and refresh. Every field except the subject
/// is optional: a registration may answer with the subject alone. The pair
/// lives only as long as it takes to write it into the response.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct TokenPair {
    /// Subject identifier
    pub user_id: String,
    pub access_token: Option<String>,
    pub access_expires_in: Option<Duration>,
    pub refresh_token: Option<String>,
    pub refresh_expires_in: Option<Duration>,
}

impl TokenPair {
    /// A pair that carries only the subject, with no credentials.
    pub fn subject_only(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            ..Self::default()
        }
    }

    /// Remaining access lifetime in whole seconds (floored).
    pub fn access_expires_in_seconds(&self) -> Option<u64> {
        self.access_expires_in.map(|lifetime| lifetime.as_secs())
    }
}

impl fmt::Debug for TokenPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenPair")
            .field("user_id", &self.user_id)
            .field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
            .field("access_expires_in", &self.access_expires_in)
            .field("refresh_token", &self.refresh_token.as_ref().map(|_| "<redacted>"))
            .field("refresh_expires_in", &self.refresh_expires_in)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_seconds_are_floored() {
        let pair = TokenPair {
            access_expires_in: Some(Duration::from_millis(299_999)),
            ..TokenPair::subject_only("u1")
        };
        assert_eq!(pair.access_expires_in_seconds(), Some(299));
    }

    #[test]
    fn debug_output_redacts_tokens() {
        let pair = TokenPair {
            access_token: Some("h.p.s".into()),
            refresh_token: Some("r1".into()),
            ..TokenPair::subject_only("u1")
        };
        let rendered = format!("{pair:?}");
        assert!(rendered.contains("u1"));
        assert!(!rendered.contains("h.p.s"));
        assert!(!rendered.contains("r1"));
    }
}
