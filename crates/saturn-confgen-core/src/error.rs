//! Error types for configuration compilation.

/// Errors that can occur while compiling a configuration document.
///
/// Every variant is fatal to the run: the compiler has no degraded mode and
/// never writes a partial output file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error reading the input document.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input is not parseable JSON at all.
    #[error("malformed configuration document: {0}")]
    Json(#[from] serde_json::Error),

    /// The document is missing `version` or `partitions`, or carries the
    /// wrong JSON type for one of them.
    #[error("configuration document has no usable `{field}` field")]
    DocumentSchema { field: &'static str },

    /// One partition failed to translate. The index is 1-based; the OS tag
    /// is best-effort and absent when `system` itself is the broken field.
    #[error("partition {index} ({}): {reason}", system.as_deref().unwrap_or("?"))]
    Partition {
        index: usize,
        system: Option<String>,
        reason: TranslateError,
    },
}

/// Failures local to a single partition.
#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    /// A required partition field is missing or has the wrong type.
    #[error("{0}")]
    Schema(#[from] serde_json::Error),

    /// A symbolic tag falls outside its closed enumeration.
    #[error("unknown {field} `{tag}` (expected {expected})")]
    UnknownSymbol {
        field: &'static str,
        tag: String,
        expected: &'static str,
    },
}

/// Result type alias for configuration compilation.
pub type Result<T> = std::result::Result<T, ConfigError>;
