//! Trace export for a sandboxed plugin.
//!
//! There is no network collector available inside Zellij, so spans are
//! encoded as OTLP JSON and appended to a rotating file under the plugin's
//! data directory:
//!
//! ```text
//! tracing spans → OpenTelemetryLayer → FileSpanExporter → SpanFormatter → FileWriter
//! ```
//!
//! Tracing is off unless the `trace_level` plugin option is set.
//!
//! ```rust
//! let config = zshelf::Config::default();
//! zshelf::observability::init_tracing(&config); // no-op: trace_level unset
//! ```

mod exporter;
mod file_writer;
mod init;
mod span_formatter;

pub use init::init_tracing;
