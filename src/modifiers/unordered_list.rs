//! Order-insensitive equality for list-of-string attributes.

use tracing::debug;

use crate::diagnostics::Diagnostics;
use crate::value::AttrValue;

use super::{ModifyRequest, PlanModifier};

/// Suppresses diffs on list-of-string attributes that differ only in
/// element order.
///
/// When both the prior state and the planned value are known and contain
/// the same multiset of strings, the plan is overridden with the state's
/// value verbatim, so the state's original ordering (and casing) wins. If
/// either side is null or unknown, or the multisets differ, the plan is
/// left untouched.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnorderedList;

impl UnorderedList {
    /// Creates the modifier.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl PlanModifier<Vec<String>> for UnorderedList {
    fn description(&self) -> &'static str {
        "Treats lists with the same elements in a different order as equal"
    }

    fn modify(
        &self,
        request: &ModifyRequest<'_, Vec<String>>,
        _diags: &mut Diagnostics,
    ) -> AttrValue<Vec<String>> {
        let (Some(state), Some(plan)) = (request.state.as_known(), request.plan.as_known()) else {
            return request.plan.clone();
        };

        if same_multiset(state, plan) {
            debug!("Suppressing reorder-only list diff for {}", request.path);
            return request.state.clone();
        }
        request.plan.clone()
    }
}

/// Same length and same elements ignoring order; duplicates must match
/// one-for-one.
fn same_multiset(a: &[String], b: &[String]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut a_sorted: Vec<&str> = a.iter().map(String::as_str).collect();
    let mut b_sorted: Vec<&str> = b.iter().map(String::as_str).collect();
    a_sorted.sort_unstable();
    b_sorted.sort_unstable();
    a_sorted == b_sorted
}
