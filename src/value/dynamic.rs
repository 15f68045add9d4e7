//! Dynamically typed attribute values.
//!
//! The normalize pass holds one map of attribute name to value per
//! snapshot, with attributes of mixed shape. This tagged union covers the
//! four container shapes the layer consumes.

use super::attr::{AttrValue, ListValue, MapValue, StringValue};

/// An attribute value of one of the four supported shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DynValue {
    /// A scalar string.
    String(StringValue),
    /// A boolean.
    Bool(AttrValue<bool>),
    /// A list of strings.
    List(ListValue),
    /// A map of string to string.
    Map(MapValue),
}

impl DynValue {
    /// Returns the name of this value's shape, for diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Bool(_) => "bool",
            Self::List(_) => "list of string",
            Self::Map(_) => "map of string",
        }
    }

    /// Returns true if the contained value is absent.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        match self {
            Self::String(v) => v.is_null(),
            Self::Bool(v) => v.is_null(),
            Self::List(v) => v.is_null(),
            Self::Map(v) => v.is_null(),
        }
    }

    /// Returns true if the contained value has not been computed yet.
    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        match self {
            Self::String(v) => v.is_unknown(),
            Self::Bool(v) => v.is_unknown(),
            Self::List(v) => v.is_unknown(),
            Self::Map(v) => v.is_unknown(),
        }
    }

    /// Borrows the string container, if this is a string attribute.
    #[must_use]
    pub const fn as_string(&self) -> Option<&StringValue> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    /// Borrows the list container, if this is a list attribute.
    #[must_use]
    pub const fn as_list(&self) -> Option<&ListValue> {
        match self {
            Self::List(v) => Some(v),
            _ => None,
        }
    }

    /// Borrows the map container, if this is a map attribute.
    #[must_use]
    pub const fn as_map(&self) -> Option<&MapValue> {
        match self {
            Self::Map(v) => Some(v),
            _ => None,
        }
    }
}

impl From<StringValue> for DynValue {
    fn from(value: StringValue) -> Self {
        Self::String(value)
    }
}

impl From<AttrValue<bool>> for DynValue {
    fn from(value: AttrValue<bool>) -> Self {
        Self::Bool(value)
    }
}

impl From<ListValue> for DynValue {
    fn from(value: ListValue) -> Self {
        Self::List(value)
    }
}

impl From<MapValue> for DynValue {
    fn from(value: MapValue) -> Self {
        Self::Map(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names() {
        assert_eq!(DynValue::String(StringValue::Null).kind(), "string");
        assert_eq!(DynValue::List(ListValue::Null).kind(), "list of string");
    }

    #[test]
    fn test_shape_accessors() {
        let value = DynValue::from(StringValue::from("x"));
        assert!(value.as_string().is_some());
        assert!(value.as_list().is_none());
        assert!(!value.is_null());
    }

    #[test]
    fn test_bool_roundtrip() {
        let value = DynValue::from(AttrValue::Known(true));
        assert_eq!(value.kind(), "bool");
        assert!(!value.is_unknown());
    }
}
