//! Downstream credential propagation.
//!
//! The only place an HTTP credential becomes RPC metadata. Handlers receive
//! the result as `Extension<CallContext>` and pass it to the backend ports
//! untouched.

use axum::http::Request;

use gateway_types::CallContext;

/// Attaches the admitted bearer value to the request as its outgoing call
/// context. The value is forwarded verbatim, prefix included.
pub fn attach<B>(request: &mut Request<B>, authorization: String) {
    request
        .extensions_mut()
        .insert(CallContext::with_authorization(authorization));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attach_inserts_verbatim_context() {
        let mut request = Request::new(());
        attach(&mut request, "bearer h.p.s".to_string());

        let ctx = request.extensions().get::<CallContext>().unwrap();
        assert_eq!(ctx.authorization(), Some("bearer h.p.s"));
    }
}
