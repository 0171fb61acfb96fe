//! Credential carriers shared by the HTTP edge and the RPC adapters.

use std::time::Duration;

/// Cookie carrying the short-lived access credential.
pub const ACCESS_COOKIE: &str = "access_token";

/// Cookie carrying the long-lived refresh credential.
pub const REFRESH_COOKIE: &str = "refresh_token";

/// Scheme prefix of an `Authorization` value. Compared case-insensitively.
pub const BEARER_PREFIX: &str = "Bearer ";

/// Lifetime given to an access cookie when the backend does not supply one.
///
/// An access cookie is never issued without an expiry.
pub const DEFAULT_ACCESS_LIFETIME: Duration = Duration::from_secs(5 * 60);
