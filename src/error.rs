//! Error types for the testimonial formatting pipeline.
//!
//! This module defines a hierarchy of error types:
//!
//! - [`CsvError`] - CSV reading and decoding errors
//! - [`WriteError`] - CSV output errors
//! - [`PipelineError`] - Top-level orchestration errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// CSV Reading Errors
// =============================================================================

/// Errors while reading and parsing the input CSV.
#[derive(Debug, Error)]
pub enum CsvError {
    /// Failed to read file.
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid CSV format.
    #[error("Invalid CSV format: {0}")]
    Parse(#[from] csv::Error),

    /// Empty file.
    #[error("CSV file is empty")]
    EmptyFile,

    /// No headers found.
    #[error("No headers found in CSV")]
    NoHeaders,
}

// =============================================================================
// CSV Writing Errors
// =============================================================================

/// Errors while writing the output CSV.
#[derive(Debug, Error)]
pub enum WriteError {
    /// Failed to create or flush the output file.
    #[error("Failed to write output file: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to serialize a record.
    #[error("Failed to write CSV record: {0}")]
    Csv(#[from] csv::Error),
}

// =============================================================================
// Pipeline Errors (top-level)
// =============================================================================

/// Top-level pipeline errors.
///
/// This is the main error type returned by [`crate::pipeline::process`].
/// [`PipelineError::MissingInput`] is raised before any output is created;
/// every other variant wraps an I/O failure partway through the run.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The input path does not resolve to a readable file.
    #[error("Input file not found: {}", .0.display())]
    MissingInput(PathBuf),

    /// CSV reading error.
    #[error("CSV error: {0}")]
    Csv(#[from] CsvError),

    /// CSV writing error.
    #[error("Write error: {0}")]
    Write(#[from] WriteError),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for CSV reading operations.
pub type CsvResult<T> = Result<T, CsvError>;

/// Result type for CSV writing operations.
pub type WriteResult<T> = Result<T, WriteError>;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;
