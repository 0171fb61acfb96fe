//! # Gateway Hex
//!
//! Credential handling core and HTTP adapter for the edge gateway.
//!
//! ## Architecture
//!
//! - `auth/` - Claim decoding, credential extraction, the expiry gate,
//!   token issuance and downstream credential propagation
//! - `service/` - Application service (validates and relays auth operations)
//! - `inbound/` - HTTP adapter (Axum server)
//!
//! The server is generic over `A: CredentialBackend` and
//! `I: InventoryBackend`, allowing different RPC adapters to be injected.

pub mod auth;
pub mod inbound;
pub mod service;


pub use service::AuthService;
