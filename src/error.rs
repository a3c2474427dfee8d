//! Error types for the Mushaf line library.
//!
//! Segmentation, balancing and line packing never fail: blank or empty input
//! degrades to empty output. Errors only arise at the boundary where raw
//! Scripture Source responses are turned into typed [`Verse`](crate::verse::Verse)
//! records, and in the command-line tool.

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while adapting external scripture data.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The response body was not valid JSON or did not match the expected shape
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The response envelope is missing its verse list
    #[error("Malformed scripture response: {0}")]
    MalformedResponse(String),

    /// A verse record lacks a field the core requires
    #[error("Invalid verse record at index {index}: {reason}")]
    InvalidVerse {
        /// Position of the record within the response
        index: usize,
        /// Reason the record was rejected
        reason: String,
    },
}
