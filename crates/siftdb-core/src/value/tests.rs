use super::*;
use proptest::prelude::*;

#[test]
fn numeric_text_keys_equal_their_numbers() {
    assert_eq!(
        Value::Text("24".into()).index_key(),
        Value::Int(24).index_key()
    );
    assert_eq!(
        Value::Text("24".into()).index_key(),
        Value::Uint(24).index_key()
    );
    assert_eq!(
        Value::Text("1.5".into()).index_key(),
        Value::Float(Float64::try_new(1.5).unwrap()).index_key()
    );
}

#[test]
fn integral_floats_collapse_to_int_keys() {
    let f = Float64::try_new(7.0).unwrap();
    assert_eq!(Value::Float(f).index_key(), Some(IndexKey::Int(7)));
    assert_eq!(Value::Text("7.0".into()).index_key(), Some(IndexKey::Int(7)));
}

#[test]
fn booleans_only_equal_booleans() {
    assert!(Value::Bool(true).matches(&Value::Bool(true)));
    assert!(!Value::Bool(true).matches(&Value::Text("true".into())));
    assert!(!Value::Text("true".into()).matches(&Value::Bool(true)));
}

#[test]
fn non_numeric_text_is_case_sensitive() {
    assert!(Value::Text("Ohio".into()).matches(&Value::Text("Ohio".into())));
    assert!(!Value::Text("Ohio".into()).matches(&Value::Text("ohio".into())));
}

#[test]
fn non_finite_text_stays_text() {
    assert_eq!(
        Value::Text("NaN".into()).index_key(),
        Some(IndexKey::Text("NaN".into()))
    );
    assert_eq!(
        Value::Text("inf".into()).index_key(),
        Some(IndexKey::Text("inf".into()))
    );
}

#[test]
fn lists_match_by_element() {
    let tags = Value::from_list(vec!["Ohio", "Pennsylvania"]);
    assert!(tags.matches(&Value::Text("Ohio".into())));
    assert!(!tags.matches(&Value::Text("Kansas".into())));

    // a list query value has no scalar key and matches nothing
    assert!(!tags.matches(&Value::from_list(vec!["Ohio"])));
}

#[test]
fn null_never_matches() {
    assert!(!Value::Null.matches(&Value::Null));
    assert!(!Value::Null.matches(&Value::Int(0)));
    assert!(!Value::Int(0).matches(&Value::Null));
}

#[test]
fn json_conversion_limits_attribute_shapes() {
    let raw = serde_json::json!({ "nested": true });
    assert_eq!(Value::try_from(raw), Err(ValueShapeError::Object));

    let raw = serde_json::json!([["nested"]]);
    assert_eq!(Value::try_from(raw), Err(ValueShapeError::NestedList));

    let raw = serde_json::json!(["a", 2, true]);
    assert_eq!(
        Value::try_from(raw),
        Ok(Value::List(vec![
            Value::Text("a".into()),
            Value::Uint(2),
            Value::Bool(true),
        ]))
    );
}

#[test]
fn float64_rejects_non_finite_and_normalizes_negative_zero() {
    for v in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert!(Float64::try_new(v).is_none());
    }
    assert_eq!(Float64::try_new(-0.0), Float64::try_new(0.0));
}

proptest! {
    #[test]
    fn text_form_of_any_int_keys_identically(n in any::<i64>()) {
        prop_assert_eq!(
            Value::Text(n.to_string()).index_key(),
            Value::Int(n).index_key()
        );
    }

    #[test]
    fn scalar_matches_is_symmetric(a in any::<i64>(), b in any::<i64>()) {
        let left = Value::Int(a);
        let right = Value::Text(b.to_string());
        prop_assert_eq!(left.matches(&right), right.matches(&left));
    }

    #[test]
    fn integral_float_equals_its_integer(n in -(1i64 << 53)..(1i64 << 53)) {
        #[allow(clippy::cast_precision_loss)]
        let f = Float64::try_new(n as f64).unwrap();
        prop_assert!(Value::Float(f).matches(&Value::Int(n)));
    }
}
