//! Credential backend port.
//!
//! The authentication service is the authority on credentials. The gateway
//! only relays these operations and shapes their results.

use crate::domain::TokenPair;
use crate::dto::{LoginRequest, RegisterRequest};
use crate::error::BackendError;

/// Port for the authentication backend.
///
/// Implementations must not retry; a failed call surfaces immediately.
#[async_trait::async_trait]
pub trait CredentialBackend: Send + Sync + 'static {
    /// Exchanges a username and password for a token pair.
    async fn login(&self, req: LoginRequest) -> Result<TokenPair, BackendError>;

    /// Creates a user. The returned pair may carry only the subject.
    async fn register(&self, req: RegisterRequest) -> Result<TokenPair, BackendError>;

    /// Exchanges a refresh credential for a new token pair.
    async fn refresh(&self, refresh_token: String) -> Result<TokenPair, BackendError>;

    /// Revokes a refresh credential belonging to `user_id`.
    async fn revoke(&self, refresh_token: String, user_id: String) -> Result<(), BackendError>;
}
