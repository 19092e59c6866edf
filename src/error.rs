//! Custom error types for fincast
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.
//!
//! The computational core (projection, hindsight growth, spending aggregation,
//! goal arithmetic) is made of total functions and never produces errors;
//! everything here covers the edges: file access, CSV headers, settings I/O,
//! and argument validation.

use thiserror::Error;

/// The main error type for fincast operations
#[derive(Error, Debug)]
pub enum FincastError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for user-supplied arguments
    #[error("Validation error: {0}")]
    Validation(String),

    /// CSV ingestion errors
    #[error("Import error: {0}")]
    Import(String),

    /// Report export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl FincastError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is an import error
    pub fn is_import(&self) -> bool {
        matches!(self, Self::Import(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for FincastError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FincastError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for fincast operations
pub type FincastResult<T> = Result<T, FincastError>;
