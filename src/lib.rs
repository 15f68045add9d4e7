// ============================================================================
// Strict linting - Dangerous or non-idiomatic practices are forbidden
// ============================================================================

#![deny(unsafe_code)]                 // Unsafe code is forbidden
#![deny(missing_docs)]                // All public items must be documented
#![deny(unused_imports)]              // Unused imports are forbidden
#![deny(unused_must_use)]             // Must handle Result and Option explicitly
#![deny(nonstandard_style)]           // Non-standard code style is forbidden

// Clippy lints (warnings only)
#![warn(clippy::all)]                 // All standard Clippy lints
#![warn(clippy::pedantic)]            // Very strict Clippy lints
#![warn(clippy::nursery)]             // Experimental lints
#![warn(clippy::unwrap_used)]         // unwrap() warning
#![warn(clippy::expect_used)]         // expect() warning
#![warn(clippy::panic)]               // panic!() warning

// ============================================================================
// Crate Documentation
// ============================================================================

//! # Keyhaven Plan Normalization
//!
//! The plan-normalization and diff-suppression layer of the Keyhaven
//! secrets platform provider.
//!
//! ## Overview
//!
//! During a plan computation the host runtime hands each attribute three
//! snapshots: the value recorded in the last-applied state, the value as
//! written in configuration, and the tentative value for the next apply.
//! The modifiers in this crate decide, per attribute, whether the planned
//! value should be treated as equal to the state's even though their
//! literal representations differ. This suppresses diffs driven purely by
//! element reordering, JSON key order, or incidental whitespace.
//!
//! A modifier never changes semantic meaning: it may only keep the state's
//! representation when it is judged equivalent to the plan's, and it never
//! fabricates a value absent from both config and state.
//!
//! ## Modules
//!
//! - [`value`]: three-state attribute value containers
//! - [`diagnostics`]: error/warning accumulator and attribute paths
//! - [`equiv`]: JSON canonicalization and unordered structural equality
//! - [`modifiers`]: the diff-suppression policies
//! - [`normalize`]: declarative per-attribute binding and the pass runner
//! - [`error`]: error taxonomy
//!
//! ## Example
//!
//! ```
//! use keyhaven_plan::{AttrValue, Diagnostics, DynValue, NormalizePass, ResourceData, UnorderedList};
//!
//! let pass = NormalizePass::new()
//!     .list_attribute("environments", vec![Box::new(UnorderedList::new())]);
//!
//! let state = ResourceData::new()
//!     .with("environments", AttrValue::Known(vec!["staging".to_string(), "prod".to_string()]));
//! let plan = ResourceData::new()
//!     .with("environments", AttrValue::Known(vec!["prod".to_string(), "staging".to_string()]));
//!
//! let mut diags = Diagnostics::new();
//! let normalized = pass.run(&state, &ResourceData::new(), plan, &mut diags);
//!
//! // Same elements, different order: the state's ordering wins and no
//! // diff is shown.
//! assert!(!diags.has_errors());
//! assert_eq!(
//!     normalized.get("environments"),
//!     Some(&DynValue::List(AttrValue::Known(vec![
//!         "staging".to_string(),
//!         "prod".to_string()
//!     ])))
//! );
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod diagnostics;
pub mod equiv;
pub mod error;
pub mod modifiers;
pub mod normalize;
pub mod value;

// ============================================================================
// Re-exports
// ============================================================================

pub use diagnostics::{AttributePath, Diagnostic, Diagnostics, PathStep, Severity};
pub use equiv::{canonical_json, deep_equal};
pub use error::{NormalizeError, Result};
pub use modifiers::{
    CommaListFormat, JsonComparePolicy, JsonEquivalence, ModifyRequest, PlanModifier,
    TrimEquality, UnorderedList,
};
pub use normalize::{ModifierChain, NormalizePass, ResourceData};
pub use value::{AttrValue, DynValue, ListValue, MapValue, StringValue};
