//! Error types for sqljoin

use thiserror::Error;

/// Result type alias for sqljoin operations
pub type JoinResult<T> = Result<T, JoinError>;

/// Failures latched by a [`Join`](crate::Join).
///
/// A builder keeps the first of these it encounters and reports it from
/// [`Join::end`](crate::Join::end).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JoinError {
    /// The write would grow the text past the configured `max_len`
    #[error("Capacity exceeded: text would grow to {attempted} bytes, limit is {limit}")]
    Capacity { limit: usize, attempted: usize },

    /// The text buffer could not be grown
    #[error("Allocation failed: {0}")]
    Alloc(String),

    /// Bytes written through `io::Write` were not valid UTF-8
    #[error("Invalid UTF-8: {0}")]
    InvalidUtf8(String),

    /// A `Display` or `Debug` fragment returned `fmt::Error`
    #[error("Render failed: formatter returned an error")]
    Render,

    /// A nested builder had already failed
    #[error("Nested builder failed: {0}")]
    Nested(Box<JoinError>),
}

impl JoinError {
    /// Create a capacity error
    pub fn capacity(limit: usize, attempted: usize) -> Self {
        Self::Capacity { limit, attempted }
    }

    /// Check if this is a capacity error
    pub fn is_capacity(&self) -> bool {
        matches!(self, Self::Capacity { .. })
    }

    /// Check if this error came from a nested builder
    pub fn is_nested(&self) -> bool {
        matches!(self, Self::Nested(_))
    }

    /// The innermost error, looking through any `Nested` wrappers.
    pub fn root_cause(&self) -> &JoinError {
        match self {
            Self::Nested(inner) => inner.root_cause(),
            other => other,
        }
    }
}

impl From<std::collections::TryReserveError> for JoinError {
    fn from(err: std::collections::TryReserveError) -> Self {
        Self::Alloc(err.to_string())
    }
}

impl From<std::str::Utf8Error> for JoinError {
    fn from(err: std::str::Utf8Error) -> Self {
        Self::InvalidUtf8(err.to_string())
    }
}

impl From<JoinError> for std::io::Error {
    fn from(err: JoinError) -> Self {
        let kind = match err {
            JoinError::InvalidUtf8(_) => std::io::ErrorKind::InvalidData,
            JoinError::Alloc(_) => std::io::ErrorKind::OutOfMemory,
            _ => std::io::ErrorKind::Other,
        };
        std::io::Error::new(kind, err)
    }
}
