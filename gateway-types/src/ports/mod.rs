//! Port traits (interfaces for adapters).
//!
//! These are the contracts that adapters must implement.
//! The HTTP layer depends on these traits, not on concrete RPC clients.

mod credential;
mod inventory;

pub use credential::CredentialBackend;
pub use inventory::{InventoryBackend, InventoryOperation, UnknownOperation};
