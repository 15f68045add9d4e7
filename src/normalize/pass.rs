//! The per-resource normalization pass.

use std::collections::BTreeMap;

use tracing::debug;

use crate::diagnostics::{AttributePath, Diagnostics};
use crate::modifiers::PlanModifier;
use crate::value::{AttrValue, DynValue};

use super::binding::ModifierChain;

/// One snapshot of a resource's attributes, keyed by attribute name.
///
/// The host runtime produces three of these per plan computation: the
/// prior state, the configuration as written, and the tentative plan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceData {
    values: BTreeMap<String, DynValue>,
}

impl ResourceData {
    /// Creates an empty snapshot.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Sets an attribute value, replacing any previous one.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<DynValue>) -> &mut Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Builder-style variant of [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<DynValue>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Gets an attribute value, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&DynValue> {
        self.values.get(name)
    }

    /// Gets an attribute value, treating absence as null of the shape the
    /// given chain expects.
    fn get_or_null(&self, name: &str, chain: &ModifierChain) -> DynValue {
        self.values.get(name).cloned().unwrap_or_else(|| match chain {
            ModifierChain::String(_) => DynValue::String(AttrValue::Null),
            ModifierChain::List(_) => DynValue::List(AttrValue::Null),
            ModifierChain::Map(_) => DynValue::Map(AttrValue::Null),
        })
    }

    /// Iterates over the attribute names and values.
    pub fn iter(&self) -> std::collections::btree_map::Iter<'_, String, DynValue> {
        self.values.iter()
    }

    /// Number of attributes in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the snapshot holds no attributes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Modifier chains bound to a resource's attributes, built once per
/// resource schema and reused across plan computations.
#[derive(Debug, Default)]
pub struct NormalizePass {
    attributes: BTreeMap<String, ModifierChain>,
}

impl NormalizePass {
    /// Creates a pass with no attributes bound.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            attributes: BTreeMap::new(),
        }
    }

    /// Binds modifiers to a scalar string attribute.
    #[must_use]
    pub fn string_attribute(
        mut self,
        name: impl Into<String>,
        modifiers: Vec<Box<dyn PlanModifier<String>>>,
    ) -> Self {
        self.attributes
            .insert(name.into(), ModifierChain::String(modifiers));
        self
    }

    /// Binds modifiers to a list-of-string attribute.
    #[must_use]
    pub fn list_attribute(
        mut self,
        name: impl Into<String>,
        modifiers: Vec<Box<dyn PlanModifier<Vec<String>>>>,
    ) -> Self {
        self.attributes
            .insert(name.into(), ModifierChain::List(modifiers));
        self
    }

    /// Binds modifiers to a map-of-string attribute.
    #[must_use]
    pub fn map_attribute(
        mut self,
        name: impl Into<String>,
        modifiers: Vec<Box<dyn PlanModifier<BTreeMap<String, String>>>>,
    ) -> Self {
        self.attributes
            .insert(name.into(), ModifierChain::Map(modifiers));
        self
    }

    /// Number of attributes with bound modifiers.
    #[must_use]
    pub fn attribute_count(&self) -> usize {
        self.attributes.len()
    }

    /// Runs every bound chain over its attribute's snapshots and returns
    /// the normalized plan.
    ///
    /// Attributes of the plan without a bound chain pass through
    /// unchanged. Each attribute is normalized independently: an error on
    /// one attribute stops that attribute's chain but the others still
    /// run, so the host sees every problem in a single plan.
    #[must_use]
    pub fn run(
        &self,
        state: &ResourceData,
        config: &ResourceData,
        plan: ResourceData,
        diags: &mut Diagnostics,
    ) -> ResourceData {
        let mut result = plan;
        for (name, chain) in &self.attributes {
            let path = AttributePath::attribute(name.clone());
            let state_value = state.get_or_null(name, chain);
            let config_value = config.get_or_null(name, chain);
            let Some(plan_value) = result.values.remove(name) else {
                // Nothing planned for this attribute; there is nothing to
                // normalize and nothing to fabricate.
                continue;
            };

            debug!("Running modifier chain for {path}");
            let normalized = chain.apply(&path, &state_value, &config_value, plan_value, diags);
            result.values.insert(name.clone(), normalized);
        }
        result
    }
}

impl<'a> IntoIterator for &'a ResourceData {
    type Item = (&'a String, &'a DynValue);
    type IntoIter = std::collections::btree_map::Iter<'a, String, DynValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modifiers::{JsonEquivalence, TrimEquality, UnorderedList};
    use crate::value::{ListValue, MapValue, StringValue};

    fn list(items: &[&str]) -> ListValue {
        AttrValue::Known(items.iter().map(ToString::to_string).collect())
    }

    #[test]
    fn test_bound_attributes_are_normalized_independently() {
        let pass = NormalizePass::new()
            .list_attribute("environments", vec![Box::new(UnorderedList::new())])
            .string_attribute("permissions", vec![Box::new(JsonEquivalence::unordered())]);

        let state = ResourceData::new()
            .with("environments", list(&["staging", "prod"]))
            .with("permissions", StringValue::from(r#"[{"a":1},{"b":2}]"#));
        let config = ResourceData::new();
        let plan = ResourceData::new()
            .with("environments", list(&["prod", "staging"]))
            .with("permissions", StringValue::from(r#"[{"b":2},{"a":1}]"#));

        let mut diags = Diagnostics::new();
        let result = pass.run(&state, &config, plan, &mut diags);

        assert!(diags.is_empty());
        assert_eq!(
            result.get("environments"),
            Some(&DynValue::List(list(&["staging", "prod"])))
        );
        assert_eq!(
            result.get("permissions"),
            Some(&DynValue::String(StringValue::from(
                r#"[{"a":1},{"b":2}]"#
            )))
        );
    }

    #[test]
    fn test_unbound_attributes_pass_through() {
        let pass = NormalizePass::new();
        let plan = ResourceData::new().with("name", StringValue::from("db-creds"));

        let mut diags = Diagnostics::new();
        let result = pass.run(&ResourceData::new(), &ResourceData::new(), plan.clone(), &mut diags);

        assert_eq!(result, plan);
        assert!(diags.is_empty());
    }

    #[test]
    fn test_error_on_one_attribute_does_not_stop_others() {
        let pass = NormalizePass::new()
            .string_attribute("permissions", vec![Box::new(JsonEquivalence::unordered())])
            .string_attribute("statement", vec![Box::new(TrimEquality::new())]);

        let state = ResourceData::new()
            .with("permissions", StringValue::from(r#"{"k":1}"#))
            .with("statement", StringValue::from("SELECT 1;"));
        let config = ResourceData::new()
            .with("statement", StringValue::from("  SELECT 1;\n"));
        let plan = ResourceData::new()
            .with("permissions", StringValue::from("{not json"))
            .with("statement", StringValue::from("  SELECT 1;\n"));

        let mut diags = Diagnostics::new();
        let result = pass.run(&state, &config, plan, &mut diags);

        // The JSON attribute failed hard, the trim attribute still ran.
        assert!(diags.has_errors());
        assert_eq!(
            result.get("statement"),
            Some(&DynValue::String(StringValue::from("SELECT 1;")))
        );
    }

    #[test]
    fn test_missing_snapshots_are_null_not_fabricated() {
        let pass = NormalizePass::new()
            .list_attribute("environments", vec![Box::new(UnorderedList::new())]);

        // State has no entry for the attribute at all.
        let plan = ResourceData::new().with("environments", list(&["a", "b"]));
        let mut diags = Diagnostics::new();
        let result = pass.run(&ResourceData::new(), &ResourceData::new(), plan, &mut diags);

        assert!(diags.is_empty());
        assert_eq!(
            result.get("environments"),
            Some(&DynValue::List(list(&["a", "b"])))
        );
    }

    #[test]
    fn test_attribute_absent_from_plan_is_left_absent() {
        let pass = NormalizePass::new()
            .map_attribute("headers", vec![]);

        let state = ResourceData::new().with("headers", MapValue::Null);
        let mut diags = Diagnostics::new();
        let result = pass.run(&state, &ResourceData::new(), ResourceData::new(), &mut diags);

        assert!(result.is_empty());
        assert!(diags.is_empty());
    }
}
