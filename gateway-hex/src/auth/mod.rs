//! Authentication token lifecycle.
//!
//! Request path: [`extract`] finds the bearer credential, [`claims`] reads
//! its expiry without verifying the signature, [`gate`] admits or rejects,
//! and [`propagate`] hands the admitted credential to downstream calls.
//! Response path: [`issuance`] writes minted tokens into cookies, headers
//! and the JSON body.

pub mod claims;
pub mod extract;
pub mod gate;
pub mod issuance;
pub mod propagate;

pub use gate::{expiry_gate, protect};
