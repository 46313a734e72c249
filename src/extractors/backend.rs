// src/extractors/backend.rs

// --- Imports ---
use crate::utils::error::ExtractError;
use std::io::Read;

/// The seam to the PDF-parsing library.
///
/// A backend knows how to open a document from a byte stream, list its pages
/// in physical order, and return the plain text of one page. Everything else
/// (glyph decoding, text-run ordering, whitespace) is the backend's business.
pub trait PdfBackend {
    /// Opaque handle for an opened document.
    type Document;

    /// Opens a document from a readable byte stream.
    fn open<R: Read>(&self, reader: R) -> Result<Self::Document, ExtractError>;

    /// 1-based page numbers in physical order.
    fn pages<'d>(&self, document: &'d Self::Document) -> impl Iterator<Item = u32> + 'd;

    /// Plain text of a single page.
    fn page_text(&self, document: &Self::Document, page: u32) -> Result<String, ExtractError>;
}

/// [`PdfBackend`] backed by the `lopdf` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct LopdfBackend;

impl LopdfBackend {
    pub fn new() -> Self { Self }
}

impl PdfBackend for LopdfBackend {
    type Document = lopdf::Document;

    fn open<R: Read>(&self, reader: R) -> Result<Self::Document, ExtractError> {
        lopdf::Document::load_from(reader)
            .map_err(|e| ExtractError::Parse(format!("failed to load document: {}", e)))
    }

    fn pages<'d>(&self, document: &'d Self::Document) -> impl Iterator<Item = u32> + 'd {
        // get_pages is a BTreeMap keyed by page number, so keys come out in order
        document.get_pages().into_keys()
    }

    fn page_text(&self, document: &Self::Document, page: u32) -> Result<String, ExtractError> {
        document
            .extract_text(&[page])
            .map_err(|e| ExtractError::Parse(format!("failed to extract text from page {}: {}", page, e)))
    }
}
