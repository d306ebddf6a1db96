//! Subscriber setup.

use super::exporter;
use crate::infrastructure::paths;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service name recorded on the trace resource.
pub const SERVICE_NAME: &str = "zshelf";

/// Installs the global subscriber when `config.trace_level` is set.
///
/// The level string is an [`EnvFilter`] directive (`"debug"`,
/// `"zshelf=trace"`, ...). Spans go to
/// `/host/.local/share/zellij/zshelf/zshelf-otlp.json`.
///
/// Tracing is optional: an unset level, an invalid directive, a data
/// directory that cannot be created, or an already installed subscriber all
/// leave the plugin running without it.
pub fn init_tracing(config: &Config) {
    let Some(level) = config.trace_level.as_deref() else {
        return;
    };
    let Ok(filter) = EnvFilter::try_new(level) else {
        return;
    };

    if std::fs::create_dir_all(paths::get_data_dir()).is_err() {
        return;
    }

    let resource = Resource::new(vec![KeyValue::new("service.name", SERVICE_NAME)]);
    let provider = exporter::create_tracer_provider(paths::trace_file_path(), resource);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .try_init();
}
