//! Separator-style normalization for maps of comma-separated strings.

use std::collections::BTreeMap;

use tracing::debug;

use crate::diagnostics::Diagnostics;
use crate::value::AttrValue;

use super::{ModifyRequest, PlanModifier};

/// Separator style for a comma-separated string value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Separator {
    /// `", "` between tokens.
    CommaSpace,
    /// `","` between tokens.
    Comma,
}

impl Separator {
    const fn as_str(self) -> &'static str {
        match self {
            Self::CommaSpace => ", ",
            Self::Comma => ",",
        }
    }

    /// Detects the style used in a value, if it contains a separator at all.
    fn detect(value: &str) -> Option<Self> {
        if value.contains(", ") {
            Some(Self::CommaSpace)
        } else if value.contains(',') {
            Some(Self::Comma)
        } else {
            None
        }
    }
}

/// Normalizes the separator formatting of map-of-comma-separated-string
/// attributes without changing the token list.
///
/// For each key of the planned map, the value is split on commas, each
/// segment trimmed, and the segments rejoined using the separator style
/// detected in the config's entry for that key, falling back to the
/// state's entry when config has none, and to plain `","` when neither
/// shows a style. Unlike the equality modifiers this produces a new value
/// rather than reusing the state's.
#[derive(Debug, Default, Clone, Copy)]
pub struct CommaListFormat;

impl CommaListFormat {
    /// Creates the modifier.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn separator_for(
        key: &str,
        config: &AttrValue<BTreeMap<String, String>>,
        state: &AttrValue<BTreeMap<String, String>>,
    ) -> Separator {
        let from = |value: &AttrValue<BTreeMap<String, String>>| {
            value
                .as_known()
                .and_then(|map| map.get(key))
                .and_then(|entry| Separator::detect(entry))
        };
        from(config)
            .or_else(|| from(state))
            .unwrap_or(Separator::Comma)
    }

    fn reformat(value: &str, separator: Separator) -> String {
        value
            .split(',')
            .map(str::trim)
            .collect::<Vec<_>>()
            .join(separator.as_str())
    }
}

impl PlanModifier<BTreeMap<String, String>> for CommaListFormat {
    fn description(&self) -> &'static str {
        "Normalizes comma-separated values to the separator style written in config"
    }

    fn modify(
        &self,
        request: &ModifyRequest<'_, BTreeMap<String, String>>,
        _diags: &mut Diagnostics,
    ) -> AttrValue<BTreeMap<String, String>> {
        let Some(plan) = request.plan.as_known() else {
            return request.plan.clone();
        };

        let normalized: BTreeMap<String, String> = plan
            .iter()
            .map(|(key, value)| {
                let separator = Self::separator_for(key, request.config, request.state);
                (key.clone(), Self::reformat(value, separator))
            })
            .collect();

        if normalized != *plan {
            debug!("Normalizing comma-separator formatting for {}", request.path);
        }
        AttrValue::Known(normalized)
    }
}
