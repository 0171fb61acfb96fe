//! HTTP Server configuration and startup.

use std::future::IntoFuture;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    routing::{get, post},
};
use tokio::sync::Notify;
use tower_http::trace::TraceLayer;

use gateway_types::{CredentialBackend, InventoryBackend};

use super::handlers::{self, AppState};
use crate::AuthService;
use crate::auth::protect;

/// How long in-flight requests may run after a shutdown signal.
pub const DEFAULT_SHUTDOWN_GRACE: Duration = Duration::from_secs(15);

/// HTTP Server for the edge gateway.
pub struct HttpServer<A: CredentialBackend, I: InventoryBackend> {
    state: Arc<AppState<A, I>>,
    shutdown_grace: Duration,
}

impl<A: CredentialBackend, I: InventoryBackend> HttpServer<A, I> {
    /// Creates a new HTTP server over the given auth service and inventory backend.
    pub fn new(auth: AuthService<A>, inventory: I) -> Self {
        Self {
            state: Arc::new(AppState { auth, inventory }),
            shutdown_grace: DEFAULT_SHUTDOWN_GRACE,
        }
    }

    pub fn with_shutdown_grace(mut self, grace: Duration) -> Self {
        self.shutdown_grace = grace;
        self
    }

    /// Builds the Axum router with all routes.
    ///
    /// Auth routes are public; everything under `/inventory` sits behind the
    /// expiry gate.
    pub fn router(&self) -> Router {
        let protected: Router<Arc<AppState<A, I>>> = protect(Router::new().route(
            "/inventory/{operation}",
            post(handlers::inventory::<A, I>),
        ));

        Router::new()
            .route("/auth/login", post(handlers::login::<A, I>))
            .route("/auth/register", post(handlers::register::<A, I>))
            .route("/auth/refresh", post(handlers::refresh::<A, I>))
            .route("/auth/revoke", post(handlers::revoke::<A, I>))
            .route("/auth/health", get(handlers::health))
            .merge(protected)
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Runs the server on the given address with graceful shutdown.
    ///
    /// After a shutdown signal, in-flight requests get the configured grace
    /// period; whatever is still running after that is abandoned.
    pub async fn run(self, addr: &str) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Server listening on {}", listener.local_addr()?);

        let stop = Arc::new(Notify::new());
        let drain = {
            let stop = stop.clone();
            async move { stop.notified().await }
        };

        let server = axum::serve(listener, self.router())
            .with_graceful_shutdown(drain)
            .into_future();
        tokio::pin!(server);

        tokio::select! {
            result = &mut server => return result.map_err(Into::into),
            _ = shutdown_signal() => {}
        }

        stop.notify_one();
        match tokio::time::timeout(self.shutdown_grace, server).await {
            Ok(result) => result?,
            Err(_) => tracing::warn!(
                grace_secs = self.shutdown_grace.as_secs(),
                "grace period elapsed with requests still in flight"
            ),
        }

        tracing::info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
