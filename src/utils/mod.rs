// src/utils/mod.rs
pub mod error;
pub mod logging;

pub use error::{AppError, ExtractError}; // Re-export error types for convenience
