//! JSON equivalence primitives.
//!
//! Two independent notions of "these JSON strings mean the same thing":
//! canonical re-serialization (object key order ignored, array order kept)
//! and full unordered structural equality (key order and array order both
//! ignored, recursively).

mod canonical;
mod deep_equal;

pub use canonical::canonical_json;
pub use deep_equal::deep_equal;
