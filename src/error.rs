//! Error types for the plan normalization layer.
//!
//! Failures here are synchronous and local: a malformed JSON attribute or a
//! shape disagreement between a modifier chain and the value it receives.
//! Both are reported to the host runtime as diagnostics attached to the
//! offending attribute; nothing in this layer retries.

use thiserror::Error;

/// The error type for plan normalization operations.
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// A JSON-encoded string attribute failed to parse.
    ///
    /// This is a configuration defect the user must fix, not a transient
    /// condition. The modifier boundary converts it into an error
    /// diagnostic on the attribute that carried the string.
    #[error("invalid JSON: {message}")]
    JsonParse {
        /// Description of the parse failure, as reported by the decoder.
        message: String,
    },

    /// A modifier chain was bound to an attribute of a different shape.
    ///
    /// Type mismatch *between two compared JSON values* is never an error
    /// (it is decisive evidence of inequality); this variant covers the
    /// schema-level disagreement between a declared chain and the value
    /// container that actually arrived.
    #[error("attribute '{attribute}' has unexpected shape: expected {expected}, found {found}")]
    TypeMismatch {
        /// Dotted path of the attribute.
        attribute: String,
        /// Shape the modifier chain was declared for.
        expected: &'static str,
        /// Shape of the value that arrived.
        found: &'static str,
    },
}

/// Result type alias for plan normalization operations.
pub type Result<T> = std::result::Result<T, NormalizeError>;

impl NormalizeError {
    /// Creates a JSON parse error from a decoder error.
    #[must_use]
    pub fn json_parse(source: &serde_json::Error) -> Self {
        Self::JsonParse {
            message: source.to_string(),
        }
    }
}
