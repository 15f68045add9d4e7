//! Unordered structural equality over parsed JSON values.

use serde_json::Value;

/// Decides structural equivalence between two parsed JSON values, ignoring
/// object key order and array element order at every depth.
///
/// Rules:
/// - `null` equals only `null`.
/// - Objects are equal iff they have the same key set and every value is
///   pairwise equal under this relation.
/// - Arrays are equal iff they have the same length and a perfect matching
///   exists between their elements: multiset equality, so duplicates must
///   each find a distinct partner.
/// - Scalars are equal iff same dynamic type and same value; numbers
///   compare as floating point.
/// - Any type mismatch at a node means unequal; it is never an error.
///
/// The array matching is a linear scan over remaining unmatched partners,
/// O(n²) in element count, which is fine at configuration scale.
#[must_use]
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => x.as_f64() == y.as_f64(),
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Array(x), Value::Array(y)) => arrays_equal(x, y),
        (Value::Object(x), Value::Object(y)) => {
            x.len() == y.len()
                && x.iter()
                    .all(|(key, value)| y.get(key).is_some_and(|other| deep_equal(value, other)))
        }
        _ => false,
    }
}

/// Multiset equality: each element of `a` claims the first structurally
/// equal, still-unclaimed element of `b`.
fn arrays_equal(a: &[Value], b: &[Value]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut claimed = vec![false; b.len()];
    for element in a {
        let partner = b
            .iter()
            .enumerate()
            .find(|(i, candidate)| !claimed[*i] && deep_equal(element, candidate));
        match partner {
            Some((i, _)) => claimed[i] = true,
            None => return false,
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(s: &str) -> Value {
        serde_json::from_str(s).unwrap()
    }

    #[test]
    fn test_null_equals_only_null() {
        assert!(deep_equal(&Value::Null, &Value::Null));
        assert!(!deep_equal(&Value::Null, &json!(false)));
        assert!(!deep_equal(&Value::Null, &json!("")));
    }

    #[test]
    fn test_scalar_type_mismatch_is_unequal() {
        assert!(!deep_equal(&json!(1), &json!("1")));
        assert!(!deep_equal(&json!(true), &json!(1)));
    }

    #[test]
    fn test_numbers_compare_as_floats() {
        assert!(deep_equal(&parse("1.0"), &parse("1")));
        assert!(!deep_equal(&parse("1.5"), &parse("1")));
    }

    #[test]
    fn test_object_key_order_ignored() {
        assert!(deep_equal(
            &parse(r#"{"k":1,"j":2}"#),
            &parse(r#"{"j":2,"k":1}"#)
        ));
    }

    #[test]
    fn test_object_key_set_must_match() {
        assert!(!deep_equal(&parse(r#"{"k":1}"#), &parse(r#"{"k":1,"j":2}"#)));
        assert!(!deep_equal(&parse(r#"{"k":1}"#), &parse(r#"{"j":1}"#)));
    }

    #[test]
    fn test_array_order_ignored() {
        assert!(deep_equal(&parse(r#"["a","b"]"#), &parse(r#"["b","a"]"#)));
        assert!(deep_equal(
            &parse(r#"[{"a":1},{"b":2}]"#),
            &parse(r#"[{"b":2},{"a":1}]"#)
        ));
    }

    #[test]
    fn test_multiset_not_set_semantics() {
        // "a" appears twice on the left, once on the right.
        assert!(!deep_equal(
            &parse(r#"["a","a","b"]"#),
            &parse(r#"["a","b","b"]"#)
        ));
        assert!(deep_equal(&parse(r#"["a","a"]"#), &parse(r#"["a","a"]"#)));
    }

    #[test]
    fn test_array_length_must_match() {
        assert!(!deep_equal(&parse(r#"["a"]"#), &parse(r#"["a","a"]"#)));
    }

    #[test]
    fn test_empty_arrays_are_equal() {
        assert!(deep_equal(&parse("[]"), &parse("[]")));
    }

    #[test]
    fn test_key_order_ignored_at_every_depth() {
        assert!(deep_equal(
            &parse(r#"{"x":[{"k":1,"j":2}]}"#),
            &parse(r#"{"x":[{"j":2,"k":1}]}"#)
        ));
    }

    #[test]
    fn test_symmetry() {
        let pairs = [
            (parse(r#"["a","b"]"#), parse(r#"["b","a"]"#)),
            (parse(r#"["a","a","b"]"#), parse(r#"["a","b","b"]"#)),
            (parse(r#"{"k":[1,2]}"#), parse(r#"{"k":[2,1]}"#)),
            (parse(r#"{"k":1}"#), parse(r#"{"j":1}"#)),
            (parse("null"), parse("false")),
        ];
        for (a, b) in &pairs {
            assert_eq!(deep_equal(a, b), deep_equal(b, a), "asymmetric for {a}/{b}");
        }
    }
}
