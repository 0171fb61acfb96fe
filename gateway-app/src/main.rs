//! # Edge Gateway Application
//!
//! Binary that wires together all the components:
//! - Load configuration from flags, environment and `.env`
//! - Initialize logging and optional trace export
//! - Open lazy channels to the auth and inventory services
//! - Start the HTTP server

mod config;
mod telemetry;

use clap::Parser;

use gateway_grpc::{GrpcCredentialBackend, GrpcInventoryBackend};
use gateway_hex::{AuthService, inbound::HttpServer};

use config::Config;
use telemetry::Telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::parse();
    let telemetry = Telemetry::init(config.log_format, config.otlp)?;

    tracing::info!(
        http = %config.http_addr,
        auth = %config.grpc_addr,
        inventory = %config.inventory_addr(),
        "Starting edge gateway"
    );

    let auth_channel = config.channel(&config.grpc_addr).connect_lazy()?;
    let inventory_channel = if config.inventory_addr() == config.grpc_addr {
        auth_channel.clone()
    } else {
        config.channel(config.inventory_addr()).connect_lazy()?
    };

    let service = AuthService::new(GrpcCredentialBackend::new(auth_channel));
    let server = HttpServer::new(service, GrpcInventoryBackend::new(inventory_channel))
        .with_shutdown_grace(config.shutdown_grace());

    let result = server.run(&config.http_addr).await;

    // Ensure traces are flushed before exit
    telemetry.shutdown();
    result
}
