//! `auth.AuthService` messages and client.

use tonic::client::Grpc;
use tonic::transport::Channel;

#[derive(Clone, PartialEq, prost::Message)]
pub struct LoginRequest {
    #[prost(string, tag = "1")]
    pub username: String,
    #[prost(string, tag = "2")]
    pub password: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct RegisterRequest {
    #[prost(string, tag = "1")]
    pub username: String,
    #[prost(string, tag = "2")]
    pub password: String,
    #[prost(string, tag = "3")]
    pub email: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct RegisterResponse {
    #[prost(string, tag = "1")]
    pub user_id: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct RefreshRequest {
    #[prost(string, tag = "1")]
    pub refresh_token: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct RevokeRequest {
    #[prost(string, tag = "1")]
    pub refresh_token: String,
    #[prost(string, tag = "2")]
    pub user_id: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct RevokeResponse {}

/// Returned by login and refresh. Empty strings mean "not issued".
#[derive(Clone, PartialEq, prost::Message)]
pub struct TokenResponse {
    #[prost(string, tag = "1")]
    pub access_token: String,
    #[prost(string, tag = "2")]
    pub refresh_token: String,
    #[prost(string, tag = "3")]
    pub user_id: String,
    #[prost(message, optional, tag = "4")]
    pub access_expires_in: Option<prost_types::Duration>,
    #[prost(message, optional, tag = "5")]
    pub refresh_expires_in: Option<prost_types::Duration>,
}

/// Unary client for `auth.AuthService`.
#[derive(Debug, Clone)]
pub struct AuthServiceClient {
    inner: Grpc<Channel>,
}

impl AuthServiceClient {
    pub fn new(channel: Channel) -> Self {
        Self {
            inner: Grpc::new(channel),
        }
    }

    pub async fn login(
        &mut self,
        request: tonic::Request<LoginRequest>,
    ) -> Result<tonic::Response<TokenResponse>, tonic::Status> {
        super::unary(&mut self.inner, "/auth.AuthService/Login", request).await
    }

    pub async fn register(
        &mut self,
        request: tonic::Request<RegisterRequest>,
    ) -> Result<tonic::Response<RegisterResponse>, tonic::Status> {
        super::unary(&mut self.inner, "/auth.AuthService/Register", request).await
    }

    pub async fn refresh(
        &mut self,
        request: tonic::Request<RefreshRequest>,
    ) -> Result<tonic::Response<TokenResponse>, tonic::Status> {
        super::unary(&mut self.inner, "/auth.AuthService/Refresh", request).await
    }

    pub async fn revoke(
        &mut self,
        request: tonic::Request<RevokeRequest>,
    ) -> Result<tonic::Response<RevokeResponse>, tonic::Status> {
        super::unary(&mut self.inner, "/auth.AuthService/Revoke", request).await
    }
}
