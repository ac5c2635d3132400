use jsontree_core::{Document, JsonFormat, JsonType, JsonValue, Number, PrintFormatter};

// ============================================================================
// Tags and Predicates
// ============================================================================

#[test]
fn json_type_reports_the_tag() {
    assert_eq!(JsonValue::Null.json_type(), JsonType::Null);
    assert_eq!(JsonValue::from(true).json_type(), JsonType::Boolean);
    assert_eq!(JsonValue::from(1).json_type(), JsonType::Number);
    assert_eq!(JsonValue::from("x").json_type(), JsonType::String);
    assert_eq!(JsonValue::new_array().json_type(), JsonType::Array);
    assert_eq!(JsonValue::new_object().json_type(), JsonType::Object);
}

#[test]
fn scalar_and_iterable_partition_all_tags() {
    let values = [
        JsonValue::Null,
        JsonValue::from(false),
        JsonValue::from(3.5),
        JsonValue::from("s"),
        JsonValue::new_array(),
        JsonValue::new_object(),
    ];
    for value in &values {
        assert_ne!(value.is_scalar(), value.is_iterable(), "{value:?}");
    }
    assert!(values[..4].iter().all(JsonValue::is_scalar));
    assert!(values[4..].iter().all(JsonValue::is_iterable));
}

#[test]
fn type_names() {
    assert_eq!(JsonType::Object.name(), "Object");
    assert_eq!(JsonType::Null.name(), "Null");
}

// ============================================================================
// Numbers: Dual Views
// ============================================================================

#[test]
fn number_from_i32_derives_float_exactly() {
    let n = Number::from_i32(-42);
    assert_eq!(n.as_i32(), -42);
    assert_eq!(n.as_f64(), -42.0);
}

#[test]
fn number_from_f64_truncates_toward_zero() {
    assert_eq!(Number::from_f64(9.99).as_i32(), 9);
    assert_eq!(Number::from_f64(-9.99).as_i32(), -9);
}

#[test]
fn number_from_f64_saturates_out_of_range() {
    assert_eq!(Number::from_f64(1e12).as_i32(), i32::MAX);
    assert_eq!(Number::from_f64(-1e12).as_i32(), i32::MIN);
    assert_eq!(Number::from_f64(f64::NAN).as_i32(), 0);
}

// ============================================================================
// Container Mutation
// ============================================================================

#[test]
fn object_add_is_first_write_wins() {
    let mut obj = JsonValue::new_object();
    obj.add("k", 1);
    obj.add("k", 2);
    assert_eq!(obj.get("k").unwrap().as_i32(), Some(1));
    assert_eq!(obj.expect_object().len(), 1);
}

#[test]
fn object_add_accepts_every_scalar() {
    let mut obj = JsonValue::new_object();
    obj.add("b", true);
    obj.add("i", 3);
    obj.add("f", 2.5);
    obj.add("s", "text");
    obj.add("n", ());
    assert_eq!(obj.get("b").unwrap().as_bool(), Some(true));
    assert_eq!(obj.get("i").unwrap().as_i32(), Some(3));
    assert_eq!(obj.get("f").unwrap().as_f64(), Some(2.5));
    assert_eq!(obj.get("s").unwrap().as_str(), Some("text"));
    assert_eq!(obj.get("n"), Some(&JsonValue::Null));
}

#[test]
fn object_del_removes_and_is_noop_when_absent() {
    let mut obj = JsonValue::new_object();
    obj.add("k", 1);
    obj.del("k");
    assert_eq!(obj.get("k"), None);
    obj.del("k"); // no-op, no panic
    assert!(obj.expect_object().is_empty());
}

#[test]
fn object_iteration_is_key_sorted_regardless_of_insertion_order() {
    let mut obj = JsonValue::new_object();
    obj.add("zebra", 1);
    obj.add("apple", 2);
    obj.add("mango", 3);
    let keys: Vec<&str> = obj.expect_object().keys().map(String::as_str).collect();
    assert_eq!(keys, ["apple", "mango", "zebra"]);
}

#[test]
fn array_push_preserves_order() {
    let mut arr = JsonValue::new_array();
    arr.push(1);
    arr.push("two");
    arr.push(());
    let items = arr.expect_array();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0].as_i32(), Some(1));
    assert_eq!(items[1].as_str(), Some("two"));
    assert_eq!(items[2], JsonValue::Null);
}

#[test]
fn get_mut_allows_in_place_edits() {
    let mut obj = JsonValue::new_object();
    obj.add("inner", JsonValue::new_array());
    obj.get_mut("inner").unwrap().push(5);
    assert_eq!(obj.get("inner").unwrap().expect_array().len(), 1);
}

// ============================================================================
// Deep Copy
// ============================================================================

#[test]
fn clone_is_a_deep_copy() {
    let mut original = JsonValue::new_object();
    let mut arr = JsonValue::new_array();
    arr.push(1);
    original.add("list", arr);
    original.add("name", "a");

    let mut copy = original.clone();
    copy.get_mut("list").unwrap().push(2);
    copy.del("name");

    // The source tree is untouched by edits to the copy.
    assert_eq!(original.get("list").unwrap().expect_array().len(), 1);
    assert_eq!(original.get("name").unwrap().as_str(), Some("a"));
    assert_eq!(copy.get("list").unwrap().expect_array().len(), 2);
    assert_eq!(copy.get("name"), None);
}

// ============================================================================
// Checked and Assume-Path Access
// ============================================================================

#[test]
fn checked_accessors_return_none_on_tag_mismatch() {
    let value = JsonValue::from("text");
    assert_eq!(value.as_bool(), None);
    assert_eq!(value.as_i32(), None);
    assert_eq!(value.as_f64(), None);
    assert_eq!(value.as_array(), None);
    assert_eq!(value.as_object(), None);
    assert_eq!(JsonValue::Null.as_str(), None);
}

#[test]
fn get_on_scalar_is_none() {
    assert_eq!(JsonValue::from(1).get("k"), None);
}

#[test]
#[should_panic(expected = "expected Array, found String")]
fn expect_array_panics_on_mismatch() {
    JsonValue::from("not an array").expect_array();
}

#[test]
#[should_panic(expected = "expected Object, found Null")]
fn add_panics_on_non_object() {
    JsonValue::Null.add("k", 1);
}

#[test]
#[should_panic(expected = "expected Array, found Object")]
fn push_panics_on_non_array() {
    JsonValue::new_object().push(1);
}

// ============================================================================
// Document Facade
// ============================================================================

#[test]
fn document_parse_succeeds_and_renders() {
    let doc = Document::parse(r#"{"b": 1, "a": 2}"#).unwrap();
    assert_eq!(doc.json_type(), JsonType::Object);
    assert_eq!(doc.to_string(), r#"{"a":2.000000,"b":1.000000}"#);
}

#[test]
fn document_parse_failure_yields_no_document() {
    assert!(Document::parse("{broken").is_err());
    assert!(Document::parse("").is_err());
}

#[test]
fn document_null_root_is_distinct_from_failure() {
    // "parsed to null" is a success, not a failure sentinel.
    let doc = Document::parse("null").unwrap();
    assert_eq!(doc.root(), &JsonValue::Null);
}

#[test]
fn document_root_mut_edits_are_visible() {
    let mut doc = Document::parse("{}").unwrap();
    doc.root_mut().add("k", true);
    assert_eq!(doc.to_string(), r#"{"k":true}"#);
}

#[test]
fn document_to_text_uses_the_formatter() {
    let doc = Document::parse(r#"{"x": [1, 2]}"#).unwrap();
    let formatter = PrintFormatter::new(JsonFormat::Newline, 0, true);
    assert_eq!(
        doc.to_text(&formatter),
        "{\n\t\"x\": [\n\t\t1.000000,\n\t\t2.000000\n\t]\n}"
    );
}

#[test]
fn document_into_root_round_trips() {
    let doc = Document::parse("[1]").unwrap();
    let root = doc.into_root();
    assert_eq!(Document::from(root).to_string(), "[1.000000]");
}
