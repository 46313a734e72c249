// src/extractors/pdf.rs

// --- Imports ---
use crate::extractors::backend::{LopdfBackend, PdfBackend};
use crate::utils::error::ExtractError;
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

// --- Data Structures ---
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageText {
    pub number: u32, // 1-based, physical order
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExtractedDocument {
    pub source: PathBuf,
    pub pages: Vec<PageText>,
    pub text: String, // All page texts in order, joined by the extractor's separator
}

impl ExtractedDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

// --- Main Extractor Structure ---
/// Pulls the plain text out of every page of a PDF and concatenates it.
///
/// By default pages are joined with no delimiter at all, so a page ending in
/// "foo" followed by a page starting with "bar" yields "foobar".
/// [`PdfTextExtractor::with_separator`] opts into a delimiter between pages.
pub struct PdfTextExtractor<B = LopdfBackend> {
    backend: B,
    separator: String,
}

impl PdfTextExtractor<LopdfBackend> {
    pub fn new() -> Self {
        Self::with_backend(LopdfBackend::new())
    }
}

impl Default for PdfTextExtractor<LopdfBackend> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: PdfBackend> PdfTextExtractor<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend, separator: String::new() }
    }

    /// Inserts `separator` between consecutive pages (never after the last one).
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Extracts the concatenated text of every page in `path`.
    pub fn extract<P: AsRef<Path>>(&self, path: P) -> Result<String, ExtractError> {
        self.extract_document(path).map(|document| document.text)
    }

    /// Extracts every page of `path`, keeping the per-page texts alongside the
    /// concatenated result.
    ///
    /// Any failure (unreadable file, malformed document, one bad page) aborts
    /// the whole call; no partial result is returned.
    pub fn extract_document<P: AsRef<Path>>(&self, path: P) -> Result<ExtractedDocument, ExtractError> {
        let path = path.as_ref();
        tracing::info!("Extracting text from PDF: {}", path.display());

        // 1. Read the file; the handle is released at the end of the block.
        //    A directory opens fine and only fails here, so both steps map to Io
        let io_error = |source| ExtractError::Io {
            path: path.to_path_buf(),
            source,
        };
        let mut bytes = Vec::new();
        {
            let mut reader = BufReader::new(File::open(path).map_err(io_error)?);
            reader.read_to_end(&mut bytes).map_err(io_error)?;
        }
        tracing::debug!("Read {} bytes from {}", bytes.len(), path.display());

        // 2. Hand the byte stream to the backend
        let document = self.backend.open(&bytes[..])?;

        // 3. Walk the pages in physical order, appending each page's text
        let mut pages = Vec::new();
        let mut text = String::new();
        for number in self.backend.pages(&document) {
            let page_text = self.backend.page_text(&document, number)?;
            tracing::debug!("Page {}: {} bytes of text", number, page_text.len());

            if !pages.is_empty() {
                text.push_str(&self.separator);
            }
            text.push_str(&page_text);
            pages.push(PageText { number, text: page_text });
        }

        tracing::info!("Extracted {} pages ({} bytes) from {}", pages.len(), text.len(), path.display());
        Ok(ExtractedDocument {
            source: path.to_path_buf(),
            pages,
            text,
        })
    }
}
