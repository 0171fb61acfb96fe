//! gRPC adapter for the credential backend port.

use std::time::Duration;

use async_trait::async_trait;
use tonic::transport::Channel;

use gateway_types::{
    BackendError, CallContext, CredentialBackend, LoginRequest, RegisterRequest, TokenPair,
};

use crate::metadata::outgoing;
use crate::proto::auth::{self as pb, AuthServiceClient};
use crate::status_error;

/// Relays auth operations to `auth.AuthService`.
#[derive(Debug, Clone)]
pub struct GrpcCredentialBackend {
    client: AuthServiceClient,
}

impl GrpcCredentialBackend {
    pub fn new(channel: Channel) -> Self {
        Self {
            client: AuthServiceClient::new(channel),
        }
    }
}

#[async_trait]
impl CredentialBackend for GrpcCredentialBackend {
    async fn login(&self, req: LoginRequest) -> Result<TokenPair, BackendError> {
        let message = pb::LoginRequest {
            username: req.username,
            password: req.password,
        };
        let response = self
            .client
            .clone()
            .login(anonymous(message)?)
            .await
            .map_err(status_error)?;
        token_pair(response.into_inner())
    }

    async fn register(&self, req: RegisterRequest) -> Result<TokenPair, BackendError> {
        let message = pb::RegisterRequest {
            username: req.username,
            password: req.password,
            email: req.email.unwrap_or_default(),
        };
        let response = self
            .client
            .clone()
            .register(anonymous(message)?)
            .await
            .map_err(status_error)?;
        Ok(TokenPair::subject_only(response.into_inner().user_id))
    }

    async fn refresh(&self, refresh_token: String) -> Result<TokenPair, BackendError> {
        let response = self
            .client
            .clone()
            .refresh(anonymous(pb::RefreshRequest { refresh_token })?)
            .await
            .map_err(status_error)?;
        token_pair(response.into_inner())
    }

    async fn revoke(&self, refresh_token: String, user_id: String) -> Result<(), BackendError> {
        self.client
            .clone()
            .revoke(anonymous(pb::RevokeRequest {
                refresh_token,
                user_id,
            })?)
            .await
            .map_err(status_error)?;
        Ok(())
    }
}

fn anonymous<T>(message: T) -> Result<tonic::Request<T>, BackendError> {
    outgoing(message, &CallContext::anonymous())
}

fn token_pair(response: pb::TokenResponse) -> Result<TokenPair, BackendError> {
    Ok(TokenPair {
        user_id: response.user_id,
        access_token: non_empty(response.access_token),
        access_expires_in: lifetime(response.access_expires_in)?,
        refresh_token: non_empty(response.refresh_token),
        refresh_expires_in: lifetime(response.refresh_expires_in)?,
    })
}

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}

fn lifetime(duration: Option<prost_types::Duration>) -> Result<Option<Duration>, BackendError> {
    duration
        .map(|d| {
            Duration::try_from(d)
                .map_err(|err| BackendError::Protocol(format!("invalid token lifetime: {err}")))
        })
        .transpose()
}
