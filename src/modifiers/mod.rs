//! Plan modifiers: diff-suppression policies applied per attribute.
//!
//! Each modifier is a pure function of (prior state, config, planned
//! value) to a possibly-overridden planned value, invoked once per plan
//! computation with no cross-call memory. A modifier never changes the
//! semantic meaning of an attribute: it may only keep the state's
//! representation when it judges the plan equivalent to it, and it never
//! fabricates a value absent from both config and state.

mod comma_list_format;
mod json_equivalence;
mod trim_equality;
mod unordered_list;

pub use comma_list_format::CommaListFormat;
pub use json_equivalence::{JsonComparePolicy, JsonEquivalence};
pub use trim_equality::TrimEquality;
pub use unordered_list::UnorderedList;

use crate::diagnostics::{AttributePath, Diagnostics};
use crate::value::AttrValue;

/// The three snapshots of one attribute handed to a modifier.
#[derive(Debug)]
pub struct ModifyRequest<'a, T> {
    /// Path of the attribute, for diagnostics.
    pub path: &'a AttributePath,
    /// Value recorded in the last-applied state.
    pub state: &'a AttrValue<T>,
    /// Value as written in configuration.
    pub config: &'a AttrValue<T>,
    /// Tentative value computed for the next apply.
    pub plan: &'a AttrValue<T>,
}

/// A diff-suppression policy for attributes of raw type `T`.
pub trait PlanModifier<T>: std::fmt::Debug {
    /// Short human-readable description of the policy, shown in schema docs.
    fn description(&self) -> &'static str;

    /// Produces the planned value to use, either the request's plan
    /// unchanged or an override. Problems are reported through `diags`;
    /// an error diagnostic aborts further modification of this attribute.
    fn modify(&self, request: &ModifyRequest<'_, T>, diags: &mut Diagnostics) -> AttrValue<T>;
}
