//! Error types for the notebase-link client library.

use thiserror::Error;

/// Result type alias used throughout the library.
pub type Result<T> = std::result::Result<T, NotebaseLinkError>;

/// Error type for all notebase-link operations.
///
/// Every failure surfaces to the caller immediately: the library performs
/// no local retry and never suppresses a remote error. Construction-time
/// failures (missing credential, collection not found) are fatal for the
/// instance being built; the caller must reconstruct after fixing the
/// condition.
#[derive(Debug, Error)]
pub enum NotebaseLinkError {
    /// Client-side configuration problems (missing base URL or token,
    /// malformed builder input).
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// The server rejected the credentials (401/403).
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// A collection or row lookup missed.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A record key does not exist in the collection schema.
    #[error("Unknown property '{0}'")]
    UnknownProperty(String),

    /// The schema declares a property type outside the supported set.
    #[error("Unsupported property type '{kind}' on property '{property}'")]
    UnsupportedType { property: String, kind: String },

    /// A property value does not fit the shape its schema type requires.
    #[error("Invalid value for property '{property}': expected {expected}, got {actual}")]
    InvalidValue {
        property: String,
        expected: &'static str,
        actual: &'static str,
    },

    /// A single-row lookup matched nothing.
    #[error("No row matched {0}")]
    NoMatch(String),

    /// A single-row lookup matched more than one row.
    #[error("Ambiguous match: {0}")]
    AmbiguousMatch(String),

    /// An insert would violate the configured uniqueness constraint.
    #[error("Duplicate value for unique property '{property}': '{value}' already exists")]
    DuplicateValue { property: String, value: String },

    /// A uniqueness constraint is configured but the record carries no
    /// value for it.
    #[error("Unique property '{0}' is missing from the record")]
    MissingUniqueValue(String),

    /// A block kind the content encoder does not know how to produce.
    #[error("Unsupported block type: {0}")]
    UnsupportedBlockType(String),

    /// An operation the remote service does not offer.
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// The server answered with a non-success status code.
    #[error("Server error ({status_code}): {message}")]
    ServerError { status_code: u16, message: String },

    /// Transport-level failure (connect, timeout, protocol).
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    /// Payload could not be serialized or deserialized.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
