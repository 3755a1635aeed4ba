//! Core error types for ghre.

/// Errors originating from core operations.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CoreError {
    /// The output file could not be created.
    #[error("failed to create {path}: {source}")]
    Io {
        /// Path of the output file.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write tab-separated output.
    #[error("failed to write {path}: {source}")]
    Csv {
        /// Path of the output file.
        path: String,
        /// Underlying writer error.
        #[source]
        source: csv::Error,
    },
}

/// Configuration-specific errors.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A configuration value could not be parsed.
    #[error("invalid value for {key}: {value:?}")]
    Invalid {
        /// Name of the setting (flag or environment variable).
        key: String,
        /// The rejected raw value.
        value: String,
    },

    /// Missing required configuration.
    #[error("missing required configuration: {0}")]
    Missing(String),
}
