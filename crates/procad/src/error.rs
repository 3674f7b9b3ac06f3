//! Error types for the generation engine.

use thiserror::Error;

/// Errors that can occur during component generation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerateError {
    /// The family tag is outside the known set (strict mode only; the
    /// default path routes unknown tags to the generic-solid fallback).
    #[error("unknown component family: {0:?}")]
    UnknownFamily(String),

    /// A declared dimension is non-positive or non-finite.
    #[error("invalid dimension {name}: {value}")]
    InvalidDimension {
        /// Name of the offending field.
        name: String,
        /// The rejected value.
        value: f64,
    },
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, GenerateError>;
