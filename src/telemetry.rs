use anyhow::Context;
use opentelemetry::KeyValue;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::trace::{self, Tracer};
use opentelemetry_sdk::Resource;
use secrecy::ExposeSecret;
use tonic::metadata::MetadataMap;
use tracing::subscriber::set_global_default;
use tracing_log::LogTracer;
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::{layer::SubscriberExt, EnvFilter, Registry};

use crate::configuration::TelemetrySettings;

/// Installs the global subscriber: env filter, fmt output to `sink`, and
/// OTLP export when enabled in `settings`.
pub fn init_subscriber<Sink>(
    name: String,
    env_filter: String,
    sink: Sink,
    settings: &TelemetrySettings,
) where
    Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    LogTracer::init().expect("Failed to set logger");

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(env_filter));
    let formatting_layer = fmt::layer().with_writer(sink);

    let registry = Registry::default().with(env_filter).with(formatting_layer);
    let tracer = telemetry_layer(name, settings).expect("Failed to build the OTLP tracer");
    if let Some(open_telemetry_tracer) = tracer {
        let telemetry_layer = tracing_opentelemetry::layer().with_tracer(open_telemetry_tracer);
        let registry = registry.with(telemetry_layer);

        set_global_default(registry).expect("Failed to set subscriber");
    } else {
        set_global_default(registry).expect("Failed to set subscriber");
    }
}

pub fn telemetry_layer(
    name: String,
    settings: &TelemetrySettings,
) -> anyhow::Result<Option<Tracer>> {
    if !settings.enabled {
        return Ok(None);
    }
    let mut meta_data = MetadataMap::new();
    meta_data.insert(
        "x-honeycomb-team",
        settings
            .api_key
            .expose_secret()
            .parse()
            .context("Failed to parse honeycomb api key")?,
    );
    let resource = Resource::new(vec![KeyValue::new("service.name", name)]);
    let open_telemetry_tracer = opentelemetry_otlp::new_pipeline()
        .tracing()
        .with_exporter(
            opentelemetry_otlp::new_exporter()
                .tonic()
                .with_metadata(meta_data)
                .with_endpoint(&settings.endpoint)
                .with_tls_config(Default::default()),
        )
        .with_trace_config(trace::config().with_resource(resource))
        .install_batch(opentelemetry_sdk::runtime::Tokio)
        .context("Failed to install the opentelemetry tracer")?;
    Ok(Some(open_telemetry_tracer))
}
