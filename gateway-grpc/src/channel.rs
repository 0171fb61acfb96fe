//! Channel construction.

use std::time::Duration;

use tonic::transport::{Channel, Endpoint};

#[derive(Debug, thiserror::Error)]
pub enum ChannelError {
    #[error("invalid backend address {address}: {source}")]
    InvalidAddress {
        address: String,
        #[source]
        source: tonic::transport::Error,
    },
}

/// Where and how to reach one backend.
#[derive(Debug, Clone)]
pub struct ChannelConfig {
    pub address: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl ChannelConfig {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            connect_timeout: Duration::from_secs(5),
            request_timeout: Duration::from_secs(30),
        }
    }

    pub fn with_timeouts(mut self, connect: Duration, request: Duration) -> Self {
        self.connect_timeout = connect;
        self.request_timeout = request;
        self
    }

    /// The address as a URI. Bare `host:port` addresses are taken as plaintext
    /// HTTP/2.
    pub fn uri(&self) -> String {
        if self.address.contains("://") {
            self.address.clone()
        } else {
            format!("http://{}", self.address)
        }
    }

    /// Builds a channel that connects on first use, so the gateway can start
    /// before its backends are reachable.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn connect_lazy(&self) -> Result<Channel, ChannelError> {
        let endpoint = Endpoint::from_shared(self.uri()).map_err(|source| {
            ChannelError::InvalidAddress {
                address: self.address.clone(),
                source,
            }
        })?;

        tracing::debug!(address = %self.address, "creating lazy gRPC channel");
        Ok(endpoint
            .connect_timeout(self.connect_timeout)
            .timeout(self.request_timeout)
            .tcp_nodelay(true)
            .connect_lazy())
    }
}
