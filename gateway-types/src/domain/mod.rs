//! Domain types for credentials and their propagation.

mod call_context;
mod credential;
mod token;

pub use call_context::{AUTHORIZATION_METADATA_KEY, CallContext};
pub use credential::{ACCESS_COOKIE, BEARER_PREFIX, DEFAULT_ACCESS_LIFETIME, REFRESH_COOKIE};
pub use token::TokenPair;
