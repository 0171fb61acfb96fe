//! Optimistic claim decoding for bearer credentials.
//!
//! The payload segment is decoded WITHOUT verifying the signature. The
//! result is advisory: it lets the gateway turn away expired credentials
//! without a round trip, while the credential backend remains the authority
//! on everything else.

use base64::{Engine as _, engine::general_purpose};
use serde_json::{Map, Value};

use gateway_types::CredentialError;

/// Claims decoded from the payload segment of a credential.
pub type ClaimSet = Map<String, Value>;

/// Decodes the payload segment of `token` into a flat claim set.
///
/// The token must have at least a header and a payload segment. The payload
/// is read as unpadded base64url, falling back to padded standard base64.
pub fn decode_claims(token: &str) -> Result<ClaimSet, CredentialError> {
    let mut segments = token.split('.');
    let payload = match (segments.next(), segments.next()) {
        (Some(_header), Some(payload)) => payload,
        _ => {
            return Err(CredentialError::MalformedCredential(
                "expected header.payload.signature",
            ));
        }
    };

    let raw = general_purpose::URL_SAFE_NO_PAD
        .decode(payload)
        .or_else(|_| general_purpose::STANDARD.decode(payload))
        .map_err(|_| CredentialError::MalformedCredential("payload is not base64"))?;

    match serde_json::from_slice::<Value>(&raw) {
        Ok(Value::Object(claims)) => Ok(claims),
        _ => Err(CredentialError::MalformedCredential(
            "payload is not a JSON object",
        )),
    }
}

/// Reads the `exp` claim as seconds since the Unix epoch.
///
/// Fractional values are truncated toward zero. A missing claim is an
/// error, never "does not expire".
pub fn expiry(claims: &ClaimSet) -> Result<i64, CredentialError> {
    match claims.get("exp") {
        None => Err(CredentialError::MissingExpiry),
        Some(Value::Number(exp)) => exp
            .as_i64()
            .or_else(|| exp.as_f64().map(|secs| secs as i64))
            .ok_or(CredentialError::InvalidExpiryType),
        Some(_) => Err(CredentialError::InvalidExpiryType),
    }
}

/// Decodes `token` and returns its expiry.
pub fn decode_expiry(token: &str) -> Result<i64, CredentialError> {
    expiry(&decode_claims(token)?)
}

#[cfg(test)]
mod tests {
    use base64::Engine;
    use serde_json::json;

    use super::*;

    const HEADER: &str = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9";

    fn token_with(payload: &Value, engine: &impl Engine) -> String {
        let encoded = engine.encode(serde_json::to_vec(payload).unwrap());
        format!("{HEADER}.{encoded}.signature")
    }

    #[test]
    fn test_expiry_round_trips_through_base64url() {
        for exp in [0_i64, 1_700_000_000, 4_102_444_800] {
            let token = token_with(
                &json!({"exp": exp, "sub": "user-1"}),
                &general_purpose::URL_SAFE_NO_PAD,
            );
            assert_eq!(decode_expiry(&token), Ok(exp));
        }
    }

    #[test]
    fn test_padded_standard_base64_is_accepted() {
        // 13 bytes of JSON needs padding in standard base64.
        let token = token_with(&json!({"exp": 12345}), &general_purpose::STANDARD);
        assert!(token.contains('='));
        assert_eq!(decode_expiry(&token), Ok(12345));
    }

    #[test]
    fn test_two_segments_are_enough() {
        let payload = general_purpose::URL_SAFE_NO_PAD.encode(br#"{"exp":42}"#);
        assert_eq!(decode_expiry(&format!("{HEADER}.{payload}")), Ok(42));
    }

    #[test]
    fn test_single_segment_is_malformed() {
        assert!(matches!(
            decode_expiry("invalid-token"),
            Err(CredentialError::MalformedCredential(_))
        ));
    }

    #[test]
    fn test_non_base64_payload_is_malformed() {
        assert!(matches!(
            decode_expiry("header.!!not-base64!!.sig"),
            Err(CredentialError::MalformedCredential(_))
        ));
    }

    #[test]
    fn test_non_object_payload_is_malformed() {
        let token = token_with(&json!([1, 2, 3]), &general_purpose::URL_SAFE_NO_PAD);
        assert!(matches!(
            decode_expiry(&token),
            Err(CredentialError::MalformedCredential(_))
        ));
    }

    #[test]
    fn test_missing_exp() {
        let token = token_with(&json!({"sub": "user-1"}), &general_purpose::URL_SAFE_NO_PAD);
        assert_eq!(decode_expiry(&token), Err(CredentialError::MissingExpiry));
    }

    #[test]
    fn test_non_numeric_exp() {
        let token = token_with(&json!({"exp": "tomorrow"}), &general_purpose::URL_SAFE_NO_PAD);
        assert_eq!(decode_expiry(&token), Err(CredentialError::InvalidExpiryType));
    }

    #[test]
    fn test_fractional_exp_is_truncated() {
        let token = token_with(&json!({"exp": 1000.9}), &general_purpose::URL_SAFE_NO_PAD);
        assert_eq!(decode_expiry(&token), Ok(1000));
    }
}
