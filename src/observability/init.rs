//! Tracing initialization and subscriber setup.

use super::exporter;
use crate::domain::Result;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const SERVICE_NAME: &str = "staffdesk";

/// Installs the global tracing subscriber.
///
/// The pipeline is:
/// 1. An [`EnvFilter`] built from `RUST_LOG` when set, otherwise from
///    `config.trace_level`
/// 2. A `fmt` layer writing human-readable events to stderr
/// 3. When `config.trace_file` is set, an OpenTelemetry layer exporting each
///    finished span as a JSON line to that file
///
/// Calling it again after a subscriber is installed is a no-op.
///
/// # Errors
///
/// Returns an I/O error if the directory of `trace_file` cannot be created.
///
/// # Example
///
/// ```rust
/// use staffdesk::observability::init_tracing;
/// use staffdesk::Config;
///
/// let config = Config {
///     trace_level: "debug".to_string(),
///     ..Default::default()
/// };
/// init_tracing(&config)?;
/// tracing::debug!("tracing is now active");
/// # Ok::<(), staffdesk::ConsoleError>(())
/// ```
pub fn init_tracing(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.trace_level));

    let otel_layer = match &config.trace_file {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            let provider = exporter::file_tracer_provider(path, SERVICE_NAME);
            let tracer = provider.tracer(SERVICE_NAME);
            opentelemetry::global::set_tracer_provider(provider);
            Some(OpenTelemetryLayer::new(tracer))
        }
        None => None,
    };

    let initialized = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(otel_layer)
        .try_init();

    if initialized.is_ok() {
        tracing::debug!(
            level = %config.trace_level,
            trace_file = ?config.trace_file,
            "tracing initialized"
        );
    }
    Ok(())
}
