//! Typed modifier chains bound to a single attribute.

use std::collections::BTreeMap;

use crate::diagnostics::{AttributePath, Diagnostics};
use crate::error::NormalizeError;
use crate::modifiers::{ModifyRequest, PlanModifier};
use crate::value::{AttrValue, DynValue};

/// The modifiers declared for one attribute, typed by the attribute's
/// container shape.
#[derive(Debug)]
pub enum ModifierChain {
    /// Modifiers for a scalar string attribute.
    String(Vec<Box<dyn PlanModifier<String>>>),
    /// Modifiers for a list-of-string attribute.
    List(Vec<Box<dyn PlanModifier<Vec<String>>>>),
    /// Modifiers for a map-of-string attribute.
    Map(Vec<Box<dyn PlanModifier<BTreeMap<String, String>>>>),
}

impl ModifierChain {
    /// Shape name the chain was declared for, for diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::List(_) => "list of string",
            Self::Map(_) => "map of string",
        }
    }

    fn matches_shape(&self, value: &DynValue) -> bool {
        matches!(
            (self, value),
            (Self::String(_), DynValue::String(_))
                | (Self::List(_), DynValue::List(_))
                | (Self::Map(_), DynValue::Map(_))
        )
    }

    /// Applies the chain to one attribute's snapshots, producing the
    /// planned value to use.
    ///
    /// A shape disagreement between the chain and any of the arriving
    /// values is reported as an error diagnostic and leaves the plan
    /// untouched; that is a defect in the provider's schema, not in the
    /// user's configuration. An error raised by a modifier stops the chain
    /// at that point; the value produced so far is returned and the host
    /// aborts on the diagnostic.
    pub fn apply(
        &self,
        path: &AttributePath,
        state: &DynValue,
        config: &DynValue,
        plan: DynValue,
        diags: &mut Diagnostics,
    ) -> DynValue {
        let wrong_shape = [state, config, &plan]
            .into_iter()
            .find(|value| !self.matches_shape(value))
            .map(DynValue::kind);
        if let Some(found) = wrong_shape {
            let error = NormalizeError::TypeMismatch {
                attribute: path.to_string(),
                expected: self.kind(),
                found,
            };
            diags.error_at(path.clone(), "Attribute shape mismatch", error.to_string());
            return plan;
        }

        match self {
            Self::String(chain) => run_chain(
                chain,
                path,
                state.as_string(),
                config.as_string(),
                plan,
                DynValue::as_string,
                DynValue::String,
                diags,
            ),
            Self::List(chain) => run_chain(
                chain,
                path,
                state.as_list(),
                config.as_list(),
                plan,
                DynValue::as_list,
                DynValue::List,
                diags,
            ),
            Self::Map(chain) => run_chain(
                chain,
                path,
                state.as_map(),
                config.as_map(),
                plan,
                DynValue::as_map,
                DynValue::Map,
                diags,
            ),
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn run_chain<T: Clone>(
    chain: &[Box<dyn PlanModifier<T>>],
    path: &AttributePath,
    state: Option<&AttrValue<T>>,
    config: Option<&AttrValue<T>>,
    plan: DynValue,
    extract: fn(&DynValue) -> Option<&AttrValue<T>>,
    rewrap: fn(AttrValue<T>) -> DynValue,
    diags: &mut Diagnostics,
) -> DynValue {
    // Shapes were checked by the caller.
    let (Some(state), Some(config), Some(planned)) = (state, config, extract(&plan)) else {
        return plan;
    };

    let mut current = planned.clone();
    for modifier in chain {
        let errors_before = diags.error_count();
        let request = ModifyRequest {
            path,
            state,
            config,
            plan: &current,
        };
        current = modifier.modify(&request, diags);
        // An error from one modifier ends modification for this attribute;
        // other attributes still run.
        if diags.error_count() > errors_before {
            break;
        }
    }
    rewrap(current)
}
