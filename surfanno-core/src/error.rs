//! Error types for surfanno

use thiserror::Error;

/// Main error type for surfanno operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("vertex index {index} out of range (surface has {vertex_count} vertices)")]
    IndexOutOfRange { index: usize, vertex_count: usize },

    #[error("length mismatch: expected {expected} values, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("column '{name}' already exists")]
    DuplicateColumn { name: String },

    #[error("column '{name}' not found")]
    ColumnNotFound { name: String },

    #[error("measurement '{algorithm}' failed: {reason}")]
    MeasurementFailed { algorithm: String, reason: String },

    #[error("unknown command '{id}'")]
    UnknownCommand { id: String },

    #[error("invalid arguments for command '{command}'")]
    InvalidArguments { command: String },

    #[error("no surface bound to the annotation session")]
    NotBound,
}

/// Result type alias for surfanno operations
pub type Result<T> = std::result::Result<T, Error>;
