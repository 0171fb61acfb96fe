//! Outgoing call context.

use std::fmt;

/// Metadata key under which the credential travels to downstream services.
pub const AUTHORIZATION_METADATA_KEY: &str = "authorization";

/// Per-request carrier of outgoing RPC metadata.
///
/// Built by the expiry gate once a request is admitted, and consumed by the
/// RPC adapters when they issue downstream calls. The value is the bearer
/// string exactly as the client presented it, prefix included.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct CallContext {
    authorization: Option<String>,
}

impl CallContext {
    /// A context that forwards no credential.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A context forwarding `authorization` verbatim.
    pub fn with_authorization(authorization: impl Into<String>) -> Self {
        Self {
            authorization: Some(authorization.into()),
        }
    }

    pub fn authorization(&self) -> Option<&str> {
        self.authorization.as_deref()
    }

    /// Metadata pairs to attach to an outgoing call.
    pub fn metadata(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.authorization
            .as_deref()
            .map(|value| (AUTHORIZATION_METADATA_KEY, value))
            .into_iter()
    }
}

impl fmt::Debug for CallContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallContext")
            .field("authorization", &self.authorization.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_context_has_no_metadata() {
        assert_eq!(CallContext::anonymous().metadata().count(), 0);
    }

    #[test]
    fn authorization_is_kept_verbatim() {
        let ctx = CallContext::with_authorization("bearer abc.def.ghi");
        let pairs: Vec<_> = ctx.metadata().collect();
        assert_eq!(pairs, vec![("authorization", "bearer abc.def.ghi")]);
    }
}
