//! # Gateway gRPC
//!
//! Outbound adapters implementing the gateway's backend ports over gRPC.
//!
//! ## Architecture
//!
//! - `proto/` - Wire messages and unary clients for the auth and inventory services
//! - `credential` - [`GrpcCredentialBackend`], the `CredentialBackend` adapter
//! - `inventory` - [`GrpcInventoryBackend`], the `InventoryBackend` adapter
//! - `channel` - Lazily connected channels with connect and request timeouts
//!
//! Calls are never retried; a failed RPC surfaces as a `BackendError`.

pub mod channel;
pub mod credential;
pub mod inventory;
mod metadata;
pub mod proto;

pub use channel::{ChannelConfig, ChannelError};
pub use credential::GrpcCredentialBackend;
pub use inventory::GrpcInventoryBackend;

use gateway_types::BackendError;

/// Collapses an RPC status into a backend error, keeping code and message
/// for the logs.
pub(crate) fn status_error(status: tonic::Status) -> BackendError {
    BackendError::Unavailable(format!("{:?}: {}", status.code(), status.message()))
}
