//! Error types for port operations.

/// Errors from the remote content provider.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ContentError {
    /// The request could not be sent or the connection failed.
    #[error("Content request failed: {0}")]
    Request(String),

    /// The provider answered with a non-success status.
    #[error("Content provider returned {status} for {url}")]
    Status { status: u16, url: String },

    /// The response body did not match the expected shape.
    #[error("Invalid content response: {0}")]
    Decode(String),

    #[error("Content request timed out after {0} ms")]
    Timeout(u64),

    /// The provider has no data for this key (e.g. a class with no spell list).
    #[error("No content available for {0}")]
    Unsupported(String),
}

impl ContentError {
    pub fn request(message: impl ToString) -> Self {
        Self::Request(message.to_string())
    }

    pub fn decode(message: impl ToString) -> Self {
        Self::Decode(message.to_string())
    }
}

/// Character history storage errors with context for debugging.
#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    /// File operation failed - includes operation name for tracing.
    #[error("History I/O error in {operation}: {message}")]
    Io {
        operation: &'static str,
        message: String,
    },

    #[error("History serialization error: {0}")]
    Serialization(String),

    #[error("Character not found in history: {0}")]
    NotFound(String),
}

impl HistoryError {
    pub fn io(operation: &'static str, message: impl ToString) -> Self {
        Self::Io {
            operation,
            message: message.to_string(),
        }
    }

    pub fn serialization(message: impl ToString) -> Self {
        Self::Serialization(message.to_string())
    }

    pub fn not_found(id: impl ToString) -> Self {
        Self::NotFound(id.to_string())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Errors from exporting or importing character records.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Export serialization error: {0}")]
    Serialization(String),

    /// An imported record lacks a required field.
    #[error("Imported character is missing '{0}'")]
    MissingField(&'static str),

    #[error("Export I/O error: {0}")]
    Io(String),
}
