//! # Gateway Types
//!
//! Domain types and port traits for the edge gateway.
//! This crate has ZERO external IO dependencies - only data structures,
//! error taxonomies, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Credentials, token pairs and the outgoing call context
//! - `ports/` - Trait definitions the RPC adapters must implement
//! - `dto/` - Request and response bodies for the HTTP boundary
//! - `error/` - Credential, backend and gateway error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    ACCESS_COOKIE, AUTHORIZATION_METADATA_KEY, BEARER_PREFIX, CallContext, DEFAULT_ACCESS_LIFETIME,
    REFRESH_COOKIE, TokenPair,
};
pub use dto::*;
pub use error::{BackendError, CredentialError, GatewayError};
pub use ports::{CredentialBackend, InventoryBackend, InventoryOperation};
