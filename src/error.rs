//! Error types for `spandrel`

use thiserror::Error;

/// The error type for `spandrel` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ==================== Conversion Errors ====================
    /// A converter was invoked with a value outside its declared source kind.
    #[error("converter '{converter}' expected {expected}, got {actual}")]
    SourceKindMismatch {
        /// Description of the converter that rejected the value.
        converter: String,
        /// The converter's declared source kind.
        expected: &'static str,
        /// The runtime kind of the rejected value.
        actual: &'static str,
    },

    /// A conversion routine failed on an otherwise well-kinded input.
    #[error("conversion failed: {message}")]
    ConversionFailed {
        /// What the conversion routine reported.
        message: String,
    },

    // ==================== ID Mapping Errors ====================
    /// Lookup for an absent category/identifier combination.
    ///
    /// Callers uncertain about a key's presence should probe with the
    /// `has_*` methods before the `get_*` methods.
    #[error("no mapping in category '{category}' for id '{id}'")]
    MappingNotFound {
        /// The category that was searched.
        category: String,
        /// The identifier that was not found.
        id: String,
    },

    // ==================== STX Format Errors ====================
    /// A line could not be parsed as a record.
    #[error("invalid record at line {line}: {message}")]
    InvalidRecord {
        /// 1-indexed line number in the source file.
        line: usize,
        /// Description of what is invalid.
        message: String,
    },

    /// A record has the wrong number of fields for its keyword.
    #[error("{keyword} record at line {line} has {actual} fields, expected {expected}")]
    FieldCount {
        /// 1-indexed line number in the source file.
        line: usize,
        /// The record keyword.
        keyword: String,
        /// The number of fields the keyword requires.
        expected: usize,
        /// The number of fields found.
        actual: usize,
    },

    /// A record references an external id with no known counterpart.
    ///
    /// References must point at records defined earlier in the file.
    #[error("unresolved {category} reference: {id}")]
    UnresolvedReference {
        /// The mapping category that was searched.
        category: String,
        /// The external id that could not be resolved.
        id: String,
    },
}

/// A specialized Result type for `spandrel` operations.
pub type Result<T> = std::result::Result<T, Error>;
