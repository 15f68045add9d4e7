//! The three-state attribute value container.

use std::collections::BTreeMap;

/// A single attribute value as seen at one point of a plan computation.
///
/// `Null` means the attribute is absent (unset in config, or never
/// recorded in state). `Unknown` means the host runtime has not computed
/// the value yet (it depends on another resource's apply). `Known` carries
/// the raw value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue<T> {
    /// The attribute is absent.
    Null,
    /// The value is not yet computed by the host runtime.
    Unknown,
    /// The raw value.
    Known(T),
}

/// A scalar string attribute value.
pub type StringValue = AttrValue<String>;

/// A list-of-string attribute value.
pub type ListValue = AttrValue<Vec<String>>;

/// A map-of-string attribute value.
pub type MapValue = AttrValue<BTreeMap<String, String>>;

impl<T> AttrValue<T> {
    /// Returns true if the attribute is absent.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns true if the value has not been computed yet.
    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    /// Returns true if a raw value is present.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }

    /// Extracts a reference to the raw value, if known.
    #[must_use]
    pub const fn as_known(&self) -> Option<&T> {
        match self {
            Self::Known(value) => Some(value),
            Self::Null | Self::Unknown => None,
        }
    }

    /// Consumes the container and returns the raw value, if known.
    #[must_use]
    pub fn into_known(self) -> Option<T> {
        match self {
            Self::Known(value) => Some(value),
            Self::Null | Self::Unknown => None,
        }
    }

    /// Maps the raw value, preserving null/unknown.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> AttrValue<U> {
        match self {
            Self::Known(value) => AttrValue::Known(f(value)),
            Self::Null => AttrValue::Null,
            Self::Unknown => AttrValue::Unknown,
        }
    }
}

impl<T> From<Option<T>> for AttrValue<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Self::Known)
    }
}

impl<T> Default for AttrValue<T> {
    fn default() -> Self {
        Self::Null
    }
}

impl From<&str> for StringValue {
    fn from(value: &str) -> Self {
        Self::Known(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_extraction() {
        let value = StringValue::from("secret-name");
        assert!(value.is_known());
        assert_eq!(value.as_known().map(String::as_str), Some("secret-name"));
    }

    #[test]
    fn test_null_and_unknown_extract_nothing() {
        let null = ListValue::Null;
        let unknown = ListValue::Unknown;
        assert!(null.is_null());
        assert!(unknown.is_unknown());
        assert_eq!(null.as_known(), None);
        assert_eq!(unknown.into_known(), None);
    }

    #[test]
    fn test_from_option() {
        assert_eq!(AttrValue::from(Some(3)), AttrValue::Known(3));
        assert_eq!(AttrValue::<i32>::from(None::<i32>), AttrValue::Null);
    }

    #[test]
    fn test_map_preserves_null() {
        let value = AttrValue::<u32>::Null.map(|n| n + 1);
        assert!(value.is_null());
    }
}
