//! Structural array checks.

use pretty_assertions::assert_eq;
use veris_checker::{
    json, Array, ArrayChecker, CheckError, ClassDescriptor, Key, Object, Value,
};

#[test]
fn check_passes_arrays_through_unchanged() {
    let value = Value::from(json!([1, 2, 3]));
    let array = ArrayChecker::new(&value).check().unwrap();
    assert_eq!(array, value.as_array().unwrap());
}

#[test]
fn check_rejects_non_arrays() {
    let value = Value::text("[1, 2, 3]");
    assert_eq!(
        ArrayChecker::new(&value).check().err(),
        Some(CheckError::type_mismatch("array", "string"))
    );
}

#[test]
fn check_associative_accepts_string_keyed_arrays() {
    let value = Value::from(json!({"key1": "value 1", "key2": "value 2"}));
    let array = ArrayChecker::new(&value).check_associative().unwrap();
    assert_eq!(array.len(), 2);
}

#[test]
fn check_associative_rejects_sequential_arrays() {
    let value = Value::from(json!([1, 2, 3]));
    assert_eq!(
        ArrayChecker::new(&value).check_associative().err(),
        Some(CheckError::type_mismatch(
            "array-associative",
            "array-sequential"
        ))
    );
}

// The empty array's key sequence trivially equals 0..0, so it is classified
// as sequential. Inherited contract quirk; change it consciously or not at
// all.
#[test]
fn check_associative_rejects_the_empty_array() {
    let value = Value::from(json!({}));
    assert!(value.as_array().unwrap().is_empty());
    assert_eq!(
        ArrayChecker::new(&value).check_associative().err(),
        Some(CheckError::type_mismatch(
            "array-associative",
            "array-sequential"
        ))
    );
    assert!(ArrayChecker::new(&value).check_sequential().is_ok());
}

#[test]
fn check_sequential_accepts_zero_based_lists() {
    let value = Value::from(json!([1, 2, 3]));
    let array = ArrayChecker::new(&value).check_sequential().unwrap();
    assert_eq!(array.len(), 3);
}

#[test]
fn check_sequential_rejects_associative_arrays() {
    let value = Value::from(json!({"key1": "v1"}));
    assert_eq!(
        ArrayChecker::new(&value).check_sequential().err(),
        Some(CheckError::type_mismatch(
            "array-sequential",
            "array-associative"
        ))
    );
}

#[test]
fn check_sequential_rejects_gapped_integer_keys() {
    let array = Array::from_entries([(0, Value::integer(1)), (2, Value::integer(2))]);
    let value = Value::from(array);
    assert!(ArrayChecker::new(&value).check_sequential().is_err());
    assert!(ArrayChecker::new(&value).check_associative().is_ok());
}

#[test]
fn check_flat_accepts_scalars_and_nulls() {
    for fixture in [
        json!([1, 2, 3]),
        json!(["1", "2", "3"]),
        json!([0.1, 0.2, 0.3]),
        json!([null, null, null]),
        json!([true, true, true]),
        json!([1, "2", 0.3, null, true]),
    ] {
        let value = Value::from(fixture);
        assert!(ArrayChecker::new(&value).check_flat().is_ok());
    }
}

#[test]
fn check_flat_rejects_composite_elements() {
    let value = Value::from(json!([[1], [2], [3]]));
    assert_eq!(
        ArrayChecker::new(&value).check_flat().err(),
        Some(CheckError::type_mismatch("flat", "array"))
    );

    let value = Value::array([Value::object(Object::record())]);
    assert_eq!(
        ArrayChecker::new(&value).check_flat().err(),
        Some(CheckError::type_mismatch("flat", "object"))
    );
}

#[test]
fn check_string_narrows_every_element() {
    let value = Value::from(json!(["1", "2", "3"]));
    assert_eq!(
        ArrayChecker::new(&value).check_string(),
        Ok(vec!["1", "2", "3"])
    );
}

#[test]
fn check_string_fails_on_first_non_string() {
    let value = Value::from(json!(["1", "2", 3]));
    assert_eq!(
        ArrayChecker::new(&value).check_string().err(),
        Some(CheckError::type_mismatch("string", "integer"))
    );
}

#[test]
fn check_string_or_null_accepts_nulls() {
    let value = Value::from(json!(["1", "2", null]));
    assert_eq!(
        ArrayChecker::new(&value).check_string_or_null(),
        Ok(vec![Some("1"), Some("2"), None])
    );

    let value = Value::from(json!(["1", "2", 3]));
    assert_eq!(
        ArrayChecker::new(&value).check_string_or_null().err(),
        Some(CheckError::type_mismatch("string", "integer"))
    );
}

#[test]
fn check_class_narrows_every_element() {
    let class = ClassDescriptor::base("Account");
    let value = Value::array([
        Value::object(Object::instance(&class)),
        Value::object(Object::instance(&class)),
    ]);
    let objects = ArrayChecker::new(&value).check_class("Account").unwrap();
    assert_eq!(objects.len(), 2);
}

#[test]
fn check_class_accepts_subclass_elements() {
    let base = ClassDescriptor::base("Entity");
    let account = ClassDescriptor::extends("Account", &base);
    let value = Value::array([Value::object(Object::instance(&account))]);
    assert!(ArrayChecker::new(&value).check_class("Entity").is_ok());
}

#[test]
fn check_class_propagates_element_failures() {
    let class = ClassDescriptor::base("Account");
    let value = Value::array([Value::object(Object::instance(&class))]);
    assert_eq!(
        ArrayChecker::new(&value).check_class("Session").err(),
        Some(CheckError::class_mismatch("Session", "Account"))
    );

    let value = Value::from(json!([1, 2, 3]));
    assert_eq!(
        ArrayChecker::new(&value).check_class("Account").err(),
        Some(CheckError::type_mismatch("Account", "integer"))
    );
}

#[test]
fn check_rows_with_empty_filter_is_identity() {
    let value = Value::from(json!([[1], [2]]));
    let rows = ArrayChecker::new(&value).check_rows(&[]).unwrap();
    assert_eq!(
        rows,
        vec![
            Array::from_vec(vec![Value::integer(1)]),
            Array::from_vec(vec![Value::integer(2)]),
        ]
    );
}

#[test]
fn check_rows_projects_listed_keys_in_order() {
    let value = Value::from(json!([
        {"description": "D1", "text": "X1", "title": "T1"},
        {"description": "D2", "text": "X2", "title": "T2"},
    ]));
    let rows = ArrayChecker::new(&value)
        .check_rows(&["title", "text"])
        .unwrap();

    assert_eq!(
        rows,
        vec![
            Array::from_entries([("title", "T1"), ("text", "X1")]),
            Array::from_entries([("title", "T2"), ("text", "X2")]),
        ]
    );
    // Projection preserves the filter order, not the row order.
    assert_eq!(
        rows[0].keys().cloned().collect::<Vec<_>>(),
        vec![Key::from("title"), Key::from("text")]
    );
}

#[test]
fn check_rows_is_strict_per_row() {
    let value = Value::from(json!([
        {"text": "X1", "title": "T1"},
        {"title": "T2"},
    ]));
    assert_eq!(
        ArrayChecker::new(&value).check_rows(&["title", "text"]).err(),
        Some(CheckError::key_not_found("text"))
    );
}

#[test]
fn check_rows_rejects_non_array_rows() {
    let value = Value::from(json!([1, 2, 3]));
    assert_eq!(
        ArrayChecker::new(&value).check_rows(&[]).err(),
        Some(CheckError::type_mismatch("array", "integer"))
    );
}

#[test]
fn check_index_returns_the_raw_sub_value() {
    let value = Value::from(json!([1, 2, 3]));
    assert_eq!(
        ArrayChecker::new(&value).check_index(0),
        Ok(&Value::integer(1))
    );
}

#[test]
fn check_index_fails_for_missing_keys() {
    let value = Value::from(json!([1, 2, 3]));
    assert_eq!(
        ArrayChecker::new(&value).check_index(10).err(),
        Some(CheckError::key_not_found(10))
    );
}

#[test]
fn check_index_never_coerces_key_types() {
    // The elements are stored under integer keys; a string key spelling the
    // same digits does not match.
    let value = Value::from(json!([1, 2, 3]));
    assert_eq!(
        ArrayChecker::new(&value).check_index("0").err(),
        Some(CheckError::key_not_found("0"))
    );
}

#[test]
fn missing_key_takes_precedence_over_type_mismatch() {
    let value = Value::from(json!([1, 2, 3]));
    assert_eq!(
        ArrayChecker::new(&value).check_index_integer("10").err(),
        Some(CheckError::key_not_found("10"))
    );
}

#[test]
fn check_index_integer_composes_lookup_and_narrowing() {
    let value = Value::from(json!({"retries": 3}));
    assert_eq!(
        ArrayChecker::new(&value).check_index_integer("retries"),
        Ok(3)
    );

    let value = Value::from(json!(["3"]));
    assert_eq!(
        ArrayChecker::new(&value).check_index_integer(0).err(),
        Some(CheckError::type_mismatch("integer", "string"))
    );
}

#[test]
fn check_index_string_composes_lookup_and_narrowing() {
    let value = Value::from(json!(["1", "2", "3"]));
    assert_eq!(ArrayChecker::new(&value).check_index_string(0), Ok("1"));

    let value = Value::from(json!([1, 2, 3]));
    assert_eq!(
        ArrayChecker::new(&value).check_index_string(0).err(),
        Some(CheckError::type_mismatch("string", "integer"))
    );
}

#[test]
fn check_index_string_or_null_composes_lookup_and_narrowing() {
    let value = Value::from(json!(["1", null]));
    assert_eq!(
        ArrayChecker::new(&value).check_index_string_or_null(0),
        Ok(Some("1"))
    );
    assert_eq!(
        ArrayChecker::new(&value).check_index_string_or_null(1),
        Ok(None)
    );

    let value = Value::from(json!([1]));
    assert_eq!(
        ArrayChecker::new(&value).check_index_string_or_null(0).err(),
        Some(CheckError::type_mismatch("string", "integer"))
    );
}

#[test]
fn check_index_array_narrows_sub_arrays() {
    let value = Value::from(json!([[1], [2]]));
    let sub = ArrayChecker::new(&value).check_index_array(0).unwrap();
    assert_eq!(sub, &Array::from_vec(vec![Value::integer(1)]));

    let value = Value::from(json!([1, 2, 3]));
    assert_eq!(
        ArrayChecker::new(&value).check_index_array(0).err(),
        Some(CheckError::type_mismatch("array", "integer"))
    );
}

#[test]
fn check_index_array_associative_and_sequential() {
    let value = Value::from(json!({"map": {"k": 1}, "list": [1, 2]}));
    let checker = ArrayChecker::new(&value);

    assert!(checker.check_index_array_associative("map").is_ok());
    assert!(checker.check_index_array_sequential("list").is_ok());
    assert_eq!(
        checker.check_index_array_associative("list").err(),
        Some(CheckError::type_mismatch(
            "array-associative",
            "array-sequential"
        ))
    );
    assert_eq!(
        checker.check_index_array_sequential("map").err(),
        Some(CheckError::type_mismatch(
            "array-sequential",
            "array-associative"
        ))
    );
}

#[test]
fn check_index_array_flat() {
    let value = Value::from(json!({"flat": [1, "x", null], "nested": [[1]]}));
    let checker = ArrayChecker::new(&value);

    assert!(checker.check_index_array_flat("flat").is_ok());
    assert_eq!(
        checker.check_index_array_flat("nested").err(),
        Some(CheckError::type_mismatch("flat", "array"))
    );
}

#[test]
fn check_index_array_string_variants() {
    let value = Value::from(json!({"tags": ["a", "b"], "mixed": ["a", null]}));
    let checker = ArrayChecker::new(&value);

    assert_eq!(checker.check_index_array_string("tags"), Ok(vec!["a", "b"]));
    assert_eq!(
        checker.check_index_array_string_or_null("mixed"),
        Ok(vec![Some("a"), None])
    );
    assert_eq!(
        checker.check_index_array_string("mixed").err(),
        Some(CheckError::type_mismatch("string", "null"))
    );
}

#[test]
fn check_index_array_class() {
    let class = ClassDescriptor::base("Account");
    let accounts = Value::array([Value::object(Object::instance(&class))]);
    let value = Value::from(Array::from_entries([("accounts", accounts)]));

    let objects = ArrayChecker::new(&value)
        .check_index_array_class("accounts", "Account")
        .unwrap();
    assert_eq!(objects.len(), 1);
}

#[test]
fn check_index_rows_projects_nested_rows() {
    let value = Value::from(json!({
        "posts": [{"text": "X1", "title": "T1", "unused": 1}],
    }));
    let rows = ArrayChecker::new(&value)
        .check_index_rows("posts", &["title", "text"])
        .unwrap();
    assert_eq!(
        rows,
        vec![Array::from_entries([("title", "T1"), ("text", "X1")])]
    );
}

#[test]
fn check_index_failures_propagate_from_the_failing_step() {
    let value = Value::from(json!({"list": [1, 2]}));
    let checker = ArrayChecker::new(&value);

    // Lookup failed: key error, regardless of the requested narrowing.
    assert_eq!(
        checker.check_index_array("missing").err(),
        Some(CheckError::key_not_found("missing"))
    );
    // Lookup succeeded, narrowing failed: type error from the second step.
    assert_eq!(
        checker.check_index_string("list").err(),
        Some(CheckError::type_mismatch("string", "array"))
    );
}
