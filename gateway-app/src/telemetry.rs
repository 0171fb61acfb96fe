//! Logging and trace export.

use opentelemetry::global;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::{propagation::TraceContextPropagator, trace as sdktrace};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LogFormat;

const DEFAULT_FILTER: &str = "info,gateway_app=debug,gateway_hex=debug,gateway_grpc=debug";

/// Owns the global subscriber's exporters; call [`Telemetry::shutdown`]
/// before exit so buffered spans are flushed.
pub struct Telemetry {
    provider: Option<sdktrace::SdkTracerProvider>,
}

impl Telemetry {
    pub fn init(format: LogFormat, otlp: bool) -> anyhow::Result<Self> {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());

        let (otel, provider) = if otlp {
            let (tracer, provider) = init_tracer()?;
            (
                Some(tracing_opentelemetry::layer().with_tracer(tracer)),
                Some(provider),
            )
        } else {
            (None, None)
        };

        let (json, pretty) = match format {
            LogFormat::Json => (Some(fmt::layer().json()), None),
            LogFormat::Pretty => (None, Some(fmt::layer().pretty())),
        };

        tracing_subscriber::registry()
            .with(filter)
            .with(otel)
            .with(json)
            .with(pretty)
            .try_init()?;

        Ok(Self { provider })
    }

    pub fn shutdown(self) {
        if let Some(provider) = self.provider {
            if let Err(err) = provider.shutdown() {
                tracing::warn!(error = %err, "failed to flush spans");
            }
        }
    }
}

fn init_tracer() -> anyhow::Result<(sdktrace::Tracer, sdktrace::SdkTracerProvider)> {
    global::set_text_map_propagator(TraceContextPropagator::new());

    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .build()?;

    let provider = sdktrace::SdkTracerProvider::builder()
        .with_batch_exporter(exporter)
        .build();

    global::set_tracer_provider(provider.clone());

    Ok((provider.tracer("edge-gateway"), provider))
}
