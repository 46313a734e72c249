// src/utils/logging.rs
use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global `tracing` subscriber, filtered by `RUST_LOG` (default "info").
///
/// Log lines go to stderr. stdout carries the extracted text and nothing else,
/// so `pdf_text doc.pdf > doc.txt` never mixes diagnostics into the output.
pub fn setup_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
