//! Whitespace-trim equality for free-form text attributes.

use tracing::debug;

use crate::diagnostics::Diagnostics;
use crate::value::AttrValue;

use super::{ModifyRequest, PlanModifier};

/// Suppresses diffs driven solely by leading or trailing whitespace.
///
/// Useful for attributes holding statements or scripts where heredoc
/// formatting adds incidental surrounding whitespace. When the config and
/// state values are identical after trimming both ends, the plan is
/// overridden with the state's untrimmed value. Internal whitespace is
/// never normalized and still produces a diff.
#[derive(Debug, Default, Clone, Copy)]
pub struct TrimEquality;

impl TrimEquality {
    /// Creates the modifier.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl PlanModifier<String> for TrimEquality {
    fn description(&self) -> &'static str {
        "Treats values differing only in leading/trailing whitespace as equal"
    }

    fn modify(
        &self,
        request: &ModifyRequest<'_, String>,
        _diags: &mut Diagnostics,
    ) -> AttrValue<String> {
        let (Some(config), Some(state), Some(_)) = (
            request.config.as_known(),
            request.state.as_known(),
            request.plan.as_known(),
        ) else {
            return request.plan.clone();
        };

        if config.trim() == state.trim() {
            debug!("Suppressing whitespace-only diff for {}", request.path);
            return request.state.clone();
        }
        request.plan.clone()
    }
}
