//! Logging and span export.
//!
//! Events go through `tracing` everywhere in the crate. [`init_tracing`]
//! installs the subscriber: filtered by level, printed to stderr, and
//! optionally exported through OpenTelemetry to a local file.
//!
//! ```text
//! tracing → EnvFilter ─┬─ fmt layer → stderr
//!                      └─ tracing-opentelemetry → SDK → FileSpanExporter → JSON lines
//! ```
//!
//! # Configuration
//!
//! The level comes from:
//! 1. `RUST_LOG` (highest priority)
//! 2. `trace_level` in [`Config`](crate::Config)
//! 3. Default: `"info"`
//!
//! Span export is enabled by setting `trace_file`. The file rotates at
//! [`MAX_FILE_BYTES`] and keeps [`MAX_BACKUPS`] old copies.

mod exporter;
mod init;

pub use exporter::{file_tracer_provider, MAX_BACKUPS, MAX_FILE_BYTES};
pub use init::init_tracing;
