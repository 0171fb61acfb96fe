//! Auth Application Service
//!
//! Validates auth requests and relays them through the credential backend port.
//! Contains NO transport logic: cookies and headers are the inbound adapter's job.

use gateway_types::{CredentialBackend, GatewayError, LoginRequest, RegisterRequest, TokenPair};

/// Application service for auth operations.
///
/// Generic over `B: CredentialBackend` - the adapter is injected at compile time,
/// so the gRPC client and the in-memory test double are interchangeable.
pub struct AuthService<B: CredentialBackend> {
    backend: B,
}

impl<B: CredentialBackend> AuthService<B> {
    /// Creates a new auth service with the given backend.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Returns a reference to the underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    #[tracing::instrument(skip_all, fields(username = %req.username))]
    pub async fn login(&self, req: LoginRequest) -> Result<TokenPair, GatewayError> {
        require_credentials(&req.username, &req.password)?;

        self.backend
            .login(req)
            .await
            .map_err(GatewayError::backend("log in"))
    }

    #[tracing::instrument(skip_all, fields(username = %req.username))]
    pub async fn register(&self, req: RegisterRequest) -> Result<TokenPair, GatewayError> {
        require_credentials(&req.username, &req.password)?;

        self.backend
            .register(req)
            .await
            .map_err(GatewayError::backend("register user"))
    }

    /// Mints a new access credential. The body's token wins over the cookie's.
    #[tracing::instrument(skip_all)]
    pub async fn refresh(
        &self,
        from_body: Option<String>,
        from_cookie: Option<String>,
    ) -> Result<TokenPair, GatewayError> {
        let refresh_token = resolve_refresh_token(from_body, from_cookie)?;

        self.backend
            .refresh(refresh_token)
            .await
            .map_err(GatewayError::backend("refresh token"))
    }

    #[tracing::instrument(skip_all, fields(user_id = %user_id))]
    pub async fn revoke(
        &self,
        from_body: Option<String>,
        from_cookie: Option<String>,
        user_id: String,
    ) -> Result<(), GatewayError> {
        if user_id.trim().is_empty() {
            return Err(GatewayError::invalid_request());
        }
        let refresh_token = resolve_refresh_token(from_body, from_cookie)?;

        self.backend
            .revoke(refresh_token, user_id)
            .await
            .map_err(GatewayError::backend("revoke token"))
    }
}

fn require_credentials(username: &str, password: &str) -> Result<(), GatewayError> {
    if username.trim().is_empty() || password.is_empty() {
        return Err(GatewayError::invalid_request());
    }
    Ok(())
}

fn resolve_refresh_token(
    from_body: Option<String>,
    from_cookie: Option<String>,
) -> Result<String, GatewayError> {
    from_body
        .filter(|token| !token.is_empty())
        .or(from_cookie.filter(|token| !token.is_empty()))
        .ok_or_else(|| GatewayError::BadRequest("missing refresh token".into()))
}
