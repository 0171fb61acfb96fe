//! Outgoing request metadata.

use tonic::metadata::AsciiMetadataValue;

use gateway_types::{BackendError, CallContext};

/// Wraps `message` in a request carrying the context's metadata.
pub(crate) fn outgoing<T>(
    message: T,
    ctx: &CallContext,
) -> Result<tonic::Request<T>, BackendError> {
    let mut request = tonic::Request::new(message);
    for (key, value) in ctx.metadata() {
        let value = AsciiMetadataValue::try_from(value)
            .map_err(|_| BackendError::InvalidPayload(format!("{key} is not valid metadata")))?;
        request.metadata_mut().insert(key, value);
    }
    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorization_is_forwarded_verbatim() {
        let ctx = CallContext::with_authorization("bearer h.p.s");

        let request = outgoing((), &ctx).unwrap();

        assert_eq!(
            request.metadata().get("authorization").unwrap(),
            "bearer h.p.s"
        );
    }

    #[test]
    fn test_anonymous_context_adds_nothing() {
        let request = outgoing((), &CallContext::anonymous()).unwrap();
        assert!(request.metadata().is_empty());
    }
}
