use serde::{Deserialize, Serialize};

/// Structured error body the server returns on failed calls.
///
/// Parsed best-effort: a body that is not this shape falls back to the
/// raw response text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code
    #[serde(default)]
    pub code: String,

    /// Human-readable error message
    #[serde(default)]
    pub message: String,
}
