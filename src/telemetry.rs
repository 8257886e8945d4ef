use opentelemetry::KeyValue;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{trace as sdktrace, Resource};
use opentelemetry_semantic_conventions::resource;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "info,campuspulse_server=info,tower_http=info";

/// Installs the global tracing subscriber: env-driven filter, text or
/// flattened-JSON formatting (RUST_LOG_FORMAT), and OTLP span export when
/// OTEL_EXPORTER_OTLP_ENDPOINT is set.
pub fn init_telemetry(service_name: &str) {
    let env_filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_FILTER.into()),
    );
    let registry = tracing_subscriber::registry().with(env_filter);

    let otel_layer = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
        .ok()
        .map(|endpoint| {
            let resource = Resource::new(vec![KeyValue::new(
                resource::SERVICE_NAME,
                service_name.to_string(),
            )]);

            let tracer = opentelemetry_otlp::new_pipeline()
                .tracing()
                .with_exporter(
                    opentelemetry_otlp::new_exporter()
                        .tonic()
                        .with_endpoint(endpoint),
                )
                .with_trace_config(
                    sdktrace::config()
                        .with_resource(resource)
                        .with_sampler(sdktrace::Sampler::AlwaysOn),
                )
                .install_batch(opentelemetry_sdk::runtime::Tokio)
                .expect("failed to install OpenTelemetry tracer");

            tracing_opentelemetry::layer().with_tracer(tracer)
        });

    let log_format = std::env::var("RUST_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    if log_format == "json" {
        // flatten_event lifts the event fields to the top level for the log
        // pipeline; timestamps come from the collector side.
        let fmt_layer = tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .without_time();
        registry.with(otel_layer).with(fmt_layer).init();
    } else {
        let fmt_layer = tracing_subscriber::fmt::layer();
        registry.with(otel_layer).with(fmt_layer).init();
    }
}
