//! Configuration loading from flags and environment.

use std::time::Duration;

use clap::{Parser, ValueEnum};

use gateway_grpc::ChannelConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Json,
    Pretty,
}

/// Application configuration.
///
/// Every flag falls back to an environment variable, which may come from a
/// `.env` file.
#[derive(Debug, Clone, Parser)]
#[command(name = "gateway-server")]
#[command(version, about = "HTTP edge gateway for the auth and inventory gRPC services")]
pub struct Config {
    /// Address the HTTP server listens on
    #[arg(long = "http", env = "HTTP_ADDR", default_value = "0.0.0.0:8080")]
    pub http_addr: String,

    /// Address of the auth gRPC service
    #[arg(long = "grpc", env = "GRPC_ADDR")]
    pub grpc_addr: String,

    /// Address of the inventory gRPC service (defaults to --grpc)
    #[arg(long = "inventory-grpc", env = "INVENTORY_GRPC_ADDR")]
    pub inventory_grpc_addr: Option<String>,

    #[arg(long, env = "GRPC_CONNECT_TIMEOUT_SECS", default_value_t = 5)]
    pub connect_timeout_secs: u64,

    #[arg(long, env = "GRPC_REQUEST_TIMEOUT_SECS", default_value_t = 30)]
    pub request_timeout_secs: u64,

    /// Seconds in-flight requests may run after a shutdown signal
    #[arg(long, env = "SHUTDOWN_GRACE_SECS", default_value_t = 15)]
    pub shutdown_grace_secs: u64,

    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Json)]
    pub log_format: LogFormat,

    /// Export spans over OTLP (endpoint from OTEL_EXPORTER_OTLP_ENDPOINT)
    #[arg(long, env = "OTLP_ENABLED")]
    pub otlp: bool,
}

impl Config {
    pub fn inventory_addr(&self) -> &str {
        self.inventory_grpc_addr.as_deref().unwrap_or(&self.grpc_addr)
    }

    pub fn channel(&self, address: &str) -> ChannelConfig {
        ChannelConfig::new(address).with_timeouts(
            Duration::from_secs(self.connect_timeout_secs),
            Duration::from_secs(self.request_timeout_secs),
        )
    }

    pub fn shutdown_grace(&self) -> Duration {
        Duration::from_secs(self.shutdown_grace_secs)
    }
}
