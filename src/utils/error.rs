// src/utils/error.rs
use std::path::PathBuf;
use thiserror::Error;

// Errors raised while turning a PDF into text
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Could not open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("PDF parsing failed: {0}")]
    Parse(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error), // stdout write failures

    #[error("Extraction failed: {0}")]
    Extraction(#[from] ExtractError),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_names_path() {
        let err = ExtractError::Io {
            path: PathBuf::from("/missing/report.pdf"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/missing/report.pdf"), "path missing from: {}", msg);
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn test_extract_error_converts_into_app_error() {
        let app: AppError = ExtractError::Parse("bad xref".to_string()).into();
        assert!(matches!(app, AppError::Extraction(ExtractError::Parse(_))));
        assert_eq!(app.to_string(), "Extraction failed: PDF parsing failed: bad xref");
    }
}
