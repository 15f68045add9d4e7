//! Structural equality for JSON-encoded string attributes.

use tracing::debug;

use crate::diagnostics::Diagnostics;
use crate::equiv::{canonical_json, deep_equal};
use crate::value::AttrValue;

use super::{ModifyRequest, PlanModifier};

/// How two JSON strings are compared for equivalence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonComparePolicy {
    /// Object key order and array element order both ignored, recursively.
    Unordered,
    /// Object key order ignored; array element order remains significant.
    KeyOrderOnly,
}

/// Suppresses diffs on JSON-encoded string attributes that are
/// structurally identical but textually different.
///
/// Byte-equal strings are left untouched without parsing. Otherwise both
/// sides are parsed; a parse failure on either side is a hard diagnostic
/// error, not a silent skip. When the selected policy judges the parsed
/// values equivalent, the plan is overridden with the state's raw string,
/// preserving the state's formatting. When not equivalent, the plan keeps
/// the new value and the diff proceeds normally.
#[derive(Debug, Clone, Copy)]
pub struct JsonEquivalence {
    policy: JsonComparePolicy,
}

impl JsonEquivalence {
    /// Full order-insensitive comparison: key order and array order both
    /// ignored at every depth. Used for serialized role/permission sets
    /// where the remote API returns elements in arbitrary order.
    #[must_use]
    pub const fn unordered() -> Self {
        Self {
            policy: JsonComparePolicy::Unordered,
        }
    }

    /// Canonical-form comparison: key order ignored, array order kept.
    /// Used where element order is meaningful but key order is not.
    #[must_use]
    pub const fn key_order_only() -> Self {
        Self {
            policy: JsonComparePolicy::KeyOrderOnly,
        }
    }

    /// The comparison policy in effect.
    #[must_use]
    pub const fn policy(&self) -> JsonComparePolicy {
        self.policy
    }

    fn equivalent(
        self,
        request: &ModifyRequest<'_, String>,
        state: &str,
        plan: &str,
        diags: &mut Diagnostics,
    ) -> Option<bool> {
        match self.policy {
            JsonComparePolicy::Unordered => {
                let state_value = parse_or_diagnose(state, "state", request, diags)?;
                let plan_value = parse_or_diagnose(plan, "plan", request, diags)?;
                Some(deep_equal(&state_value, &plan_value))
            }
            JsonComparePolicy::KeyOrderOnly => {
                let state_canon = canonicalize_or_diagnose(state, "state", request, diags)?;
                let plan_canon = canonicalize_or_diagnose(plan, "plan", request, diags)?;
                Some(state_canon == plan_canon)
            }
        }
    }
}

impl Default for JsonEquivalence {
    fn default() -> Self {
        Self::unordered()
    }
}

impl PlanModifier<String> for JsonEquivalence {
    fn description(&self) -> &'static str {
        match self.policy {
            JsonComparePolicy::Unordered => {
                "Treats JSON strings as equal when structurally equivalent, ignoring \
                 object key order and array element order"
            }
            JsonComparePolicy::KeyOrderOnly => {
                "Treats JSON strings as equal when structurally equivalent, ignoring \
                 object key order only"
            }
        }
    }

    fn modify(
        &self,
        request: &ModifyRequest<'_, String>,
        diags: &mut Diagnostics,
    ) -> AttrValue<String> {
        let (Some(state), Some(plan)) = (request.state.as_known(), request.plan.as_known()) else {
            return request.plan.clone();
        };

        // Byte-equal strings need no parse at all.
        if state == plan {
            return request.plan.clone();
        }

        match self.equivalent(request, state, plan, diags) {
            Some(true) => {
                debug!("Suppressing structural-only JSON diff for {}", request.path);
                request.state.clone()
            }
            // Not equivalent, or a parse error was already recorded:
            // either way the plan value stands.
            Some(false) | None => request.plan.clone(),
        }
    }
}

fn parse_or_diagnose(
    input: &str,
    side: &str,
    request: &ModifyRequest<'_, String>,
    diags: &mut Diagnostics,
) -> Option<serde_json::Value> {
    match serde_json::from_str(input) {
        Ok(value) => Some(value),
        Err(e) => {
            diags.error_at(
                request.path.clone(),
                "Invalid JSON attribute value",
                format!("The {side} value could not be parsed as JSON: {e}"),
            );
            None
        }
    }
}

fn canonicalize_or_diagnose(
    input: &str,
    side: &str,
    request: &ModifyRequest<'_, String>,
    diags: &mut Diagnostics,
) -> Option<String> {
    match canonical_json(input) {
        Ok(canonical) => Some(canonical),
        Err(e) => {
            diags.error_at(
                request.path.clone(),
                "Invalid JSON attribute value",
                format!("The {side} value could not be parsed as JSON: {e}"),
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::AttributePath;
    use crate::value::StringValue;

    fn run(
        modifier: JsonEquivalence,
        state: StringValue,
        plan: StringValue,
    ) -> (StringValue, Diagnostics) {
        let path = AttributePath::attribute("permissions");
        let config = StringValue::Null;
        let request = ModifyRequest {
            path: &path,
            state: &state,
            config: &config,
            plan: &plan,
        };
        let mut diags = Diagnostics::new();
        let result = modifier.modify(&request, &mut diags);
        (result, diags)
    }

    #[test]
    fn test_identical_strings_left_untouched() {
        let raw = r#"[{"role_slug":"admin"}]"#;
        let (result, diags) = run(
            JsonEquivalence::unordered(),
            StringValue::from(raw),
            StringValue::from(raw),
        );
        assert_eq!(result, StringValue::from(raw));
        assert!(diags.is_empty());
    }

    #[test]
    fn test_reordered_array_takes_state_string() {
        let (result, diags) = run(
            JsonEquivalence::unordered(),
            StringValue::from(r#"[{"a":1},{"b":2}]"#),
            StringValue::from(r#"[{"b":2},{"a":1}]"#),
        );
        assert_eq!(result, StringValue::from(r#"[{"a":1},{"b":2}]"#));
        assert!(diags.is_empty());
    }

    #[test]
    fn test_state_formatting_preserved_on_key_reorder() {
        let (result, _) = run(
            JsonEquivalence::unordered(),
            StringValue::from(r#"{ "k": 1, "j": 2 }"#),
            StringValue::from(r#"{"j":2,"k":1}"#),
        );
        assert_eq!(result, StringValue::from(r#"{ "k": 1, "j": 2 }"#));
    }

    #[test]
    fn test_semantic_change_keeps_plan_value() {
        let (result, diags) = run(
            JsonEquivalence::unordered(),
            StringValue::from(r#"[{"a":1}]"#),
            StringValue::from(r#"[{"a":2}]"#),
        );
        assert_eq!(result, StringValue::from(r#"[{"a":2}]"#));
        assert!(diags.is_empty());
    }

    #[test]
    fn test_unparseable_plan_is_a_hard_error() {
        let (result, diags) = run(
            JsonEquivalence::unordered(),
            StringValue::from(r#"{"k":1}"#),
            StringValue::from("{not json"),
        );
        assert!(diags.has_errors());
        // The plan value stands; the host aborts on the error diagnostic.
        assert_eq!(result, StringValue::from("{not json"));
    }

    #[test]
    fn test_unparseable_state_is_a_hard_error() {
        let (_, diags) = run(
            JsonEquivalence::unordered(),
            StringValue::from("oops"),
            StringValue::from(r#"{"k":1}"#),
        );
        assert!(diags.has_errors());
    }

    #[test]
    fn test_null_state_left_untouched_without_parsing() {
        let (result, diags) = run(
            JsonEquivalence::unordered(),
            StringValue::Null,
            StringValue::from("{not json"),
        );
        assert_eq!(result, StringValue::from("{not json"));
        assert!(diags.is_empty());
    }

    #[test]
    fn test_key_order_only_respects_array_order() {
        let (result, diags) = run(
            JsonEquivalence::key_order_only(),
            StringValue::from(r#"["a","b"]"#),
            StringValue::from(r#"["b","a"]"#),
        );
        // Array reorder is a real diff under this policy.
        assert_eq!(result, StringValue::from(r#"["b","a"]"#));
        assert!(diags.is_empty());
    }

    #[test]
    fn test_key_order_only_suppresses_key_reorder() {
        let (result, _) = run(
            JsonEquivalence::key_order_only(),
            StringValue::from(r#"{"b":1,"a":2}"#),
            StringValue::from(r#"{"a":2,"b":1}"#),
        );
        assert_eq!(result, StringValue::from(r#"{"b":1,"a":2}"#));
    }
}
