//! Canonical JSON re-serialization.

use crate::error::{NormalizeError, Result};

/// Parses a JSON-encoded string and re-serializes it in canonical form.
///
/// Canonical means deterministic: object keys sorted lexicographically and
/// numbers/strings formatted by the same serializer regardless of how the
/// input was written. Two inputs that differ only in object key order or
/// insignificant whitespace produce byte-identical output; array element
/// order is preserved and remains significant.
///
/// # Errors
///
/// Returns [`NormalizeError::JsonParse`] when the input is not valid JSON.
/// Callers surface this as a user-facing diagnostic on the attribute that
/// carried the string.
pub fn canonical_json(input: &str) -> Result<String> {
    // serde_json's default object map is BTreeMap-backed, so serializing
    // the parsed tree yields sorted keys.
    let value: serde_json::Value =
        serde_json::from_str(input).map_err(|e| NormalizeError::json_parse(&e))?;
    serde_json::to_string(&value).map_err(|e| NormalizeError::json_parse(&e))
}
