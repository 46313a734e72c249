// src/extractors/mod.rs
pub mod backend;
pub mod pdf;

// Re-export key extraction types for convenience
pub use pdf::{ExtractedDocument, PageText, PdfTextExtractor};
