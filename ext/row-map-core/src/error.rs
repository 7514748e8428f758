use thiserror::Error;

/// Core error type for record-to-map conversion
#[derive(Error, Debug)]
pub enum RowMapError {
    /// A logical type outside date, time, timestamp and enumeration
    #[error("Unsupported logical type: {0}")]
    UnsupportedLogicalType(String),

    /// Value representation incompatible with its declared field type
    #[error("Conversion error: {0}")]
    Conversion(String),

    /// Schema construction errors
    #[error("Schema error: {0}")]
    Schema(String),

    /// Invalid argument errors
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Nesting of rows and sequences went past the configured bound
    #[error("Nesting too deep: exceeded maximum depth of {max_depth}")]
    NestingTooDeep { max_depth: usize },

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for conversion operations
pub type Result<T> = std::result::Result<T, RowMapError>;

impl RowMapError {
    /// Create a new unsupported logical type error
    pub fn unsupported_logical_type<S: Into<String>>(identifier: S) -> Self {
        RowMapError::UnsupportedLogicalType(identifier.into())
    }

    /// Create a new conversion error
    pub fn conversion<S: Into<String>>(msg: S) -> Self {
        RowMapError::Conversion(msg.into())
    }

    /// Create a new schema error
    pub fn schema<S: Into<String>>(msg: S) -> Self {
        RowMapError::Schema(msg.into())
    }

    /// Create a new invalid argument error
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        RowMapError::InvalidArgument(msg.into())
    }

    /// Expected/found mismatch between a field type and the value it holds
    pub(crate) fn mismatch(expected: &str, found: &str) -> Self {
        RowMapError::Conversion(format!("Expected {}, got {}", expected, found))
    }
}
