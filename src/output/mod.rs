// src/output/mod.rs
use crate::extractors::{ExtractedDocument, PageText};
use crate::utils::error::AppError;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// How the extraction result is written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// The concatenated text, exactly as extracted
    #[default]
    Text,
    /// A JSON report with per-page text and metadata
    Json,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    source: &'a Path, // must be valid UTF-8
    page_count: usize,
    pages: &'a [PageText],
    text: &'a str,
    extracted_at: String,
}

/// Renders the document in the requested format
pub fn render(document: &ExtractedDocument, format: OutputFormat) -> Result<String, AppError> {
    match format {
        OutputFormat::Text => Ok(document.text.clone()),
        OutputFormat::Json => {
            let report = JsonReport {
                source: &document.source,
                page_count: document.page_count(),
                pages: &document.pages,
                text: &document.text,
                extracted_at: chrono::Utc::now().to_rfc3339(),
            };

            let mut rendered = serde_json::to_string_pretty(&report)
                .map_err(|e| AppError::Serialization(e.to_string()))?;
            rendered.push('\n');
            Ok(rendered)
        }
    }
}

/// Writes the rendered document to `out` in a single write
pub fn write_document<W: Write>(
    out: &mut W,
    document: &ExtractedDocument,
    format: OutputFormat,
) -> Result<(), AppError> {
    let rendered = render(document, format)?;
    out.write_all(rendered.as_bytes())?;
    out.flush()?;

    tracing::debug!("Wrote {} bytes of {:?} output", rendered.len(), format);
    Ok(())
}
