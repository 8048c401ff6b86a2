use serde::{Deserialize, Serialize};

/// Construction options for a [`Join`](crate::Join).
///
/// Deserializable so a host application can keep delimiters and limits in its
/// own config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JoinConfig {
    /// Inserted between successive fragments.
    pub delimiter: String,
    /// Maximum length of the joined text in bytes. `None` means unlimited (default).
    pub max_len: Option<usize>,
    /// Initial text capacity hint.
    pub capacity: usize,
}

impl JoinConfig {
    /// Create a new configuration with defaults (empty delimiter, no limit).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the delimiter.
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Set the maximum text length.
    ///
    /// A write that would grow the text past this limit fails and latches
    /// [`JoinError::Capacity`](crate::JoinError::Capacity).
    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }

    /// Reserve room for `capacity` bytes up front.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
}
