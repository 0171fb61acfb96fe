//! Error types for the edge gateway.

/// Problems with the credential a client presented.
///
/// Always the client's problem: every variant maps to 401, never to 5xx.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CredentialError {
    #[error("no credential presented")]
    NoCredential,

    #[error("malformed credential: {0}")]
    MalformedCredential(&'static str),

    #[error("credential has no exp claim")]
    MissingExpiry,

    #[error("credential exp claim is not numeric")]
    InvalidExpiryType,

    #[error("credential expired")]
    Expired,
}

impl CredentialError {
    /// Message returned to the client.
    ///
    /// `Expired` is distinguishable so a client knows a refresh is worth
    /// attempting; everything else calls for re-authentication.
    pub fn client_message(&self) -> &'static str {
        match self {
            CredentialError::NoCredential => "missing access token",
            CredentialError::Expired => "access token expired",
            CredentialError::MalformedCredential(_)
            | CredentialError::MissingExpiry
            | CredentialError::InvalidExpiryType => "invalid access token",
        }
    }
}

/// Backend-level errors (RPC call failures).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    /// The call failed in transport or the backend answered with an error status.
    #[error("backend unavailable: {0}")]
    Unavailable(String),

    /// The request payload could not be translated into a backend message.
    #[error("invalid payload: {0}")]
    InvalidPayload(String),

    /// The backend answered with something the adapter could not translate.
    #[error("protocol error: {0}")]
    Protocol(String),
}

/// Application-level errors (for HTTP responses).
///
/// Maps cleanly to HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Unauthorized(#[from] CredentialError),

    /// A backend call failed. `operation` names it for the client message.
    #[error("failed to {operation}: {source}")]
    Backend {
        operation: &'static str,
        #[source]
        source: BackendError,
    },

    /// The backend call succeeded but the response could not be written.
    #[error("failed to encode response: {0}")]
    EncodingFailure(String),
}

impl GatewayError {
    pub fn invalid_request() -> Self {
        GatewayError::BadRequest("Invalid request".into())
    }

    pub fn backend(operation: &'static str) -> impl FnOnce(BackendError) -> Self {
        move |source| GatewayError::Backend { operation, source }
    }
}
