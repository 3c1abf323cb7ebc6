use jpath::{Kind, Tree, Value, get, get_or_create, set};
use serde_json::json;

fn json_object(pairs: Vec<(&str, Value)>) -> Value {
    Value::Object(pairs.into_iter().map(|(k, v)| (k.to_string(), v)).collect())
}

fn json_array(values: Vec<Value>) -> Value {
    Value::Array(values)
}

#[test]
fn test_kinds() {
    let cases = vec![
        (Value::Null, Kind::Null),
        (Value::Boolean(true), Kind::Boolean),
        (Value::Integer(1), Kind::Integer),
        (Value::Float(1.5), Kind::Float),
        (Value::from("s"), Kind::String),
        (json_array(vec![]), Kind::Array),
        (json_object(vec![]), Kind::Object),
    ];

    for (value, expected) in cases {
        assert_eq!(value.kind(), expected, "Failed for value: {:?}", value);
    }
}

#[test]
fn test_get_nested() {
    let doc = json_object(vec![(
        "user",
        json_object(vec![
            ("name", Value::from("Ada")),
            ("langs", json_array(vec![Value::from("c"), Value::from("rust")])),
        ]),
    )]);

    assert_eq!(get(&doc, "user.name").and_then(Value::as_str), Some("Ada"));
    assert_eq!(get(&doc, "user.langs[1]").and_then(Value::as_str), Some("rust"));
    assert_eq!(get(&doc, "user.langs[2]"), None);
    assert_eq!(get(&doc, "user.name.first"), None);
}

#[test]
fn test_duplicate_keys_first_match_wins() {
    let mut doc = json_object(vec![("k", Value::Integer(1)), ("k", Value::Integer(2))]);

    assert_eq!(get(&doc, "k"), Some(&Value::Integer(1)));

    assert!(set(&mut doc, "k", Value::Integer(10)));
    assert_eq!(
        doc,
        json_object(vec![("k", Value::Integer(10)), ("k", Value::Integer(2))])
    );
}

#[test]
fn test_set_appends_new_members_in_order() {
    let mut doc = json_object(vec![]);
    assert!(set(&mut doc, "z", Value::Integer(1)));
    assert!(set(&mut doc, "a", Value::Integer(2)));

    assert_eq!(
        doc,
        json_object(vec![("z", Value::Integer(1)), ("a", Value::Integer(2))])
    );
}

#[test]
fn test_set_auto_vivifies() {
    let mut doc = json_object(vec![]);
    assert!(set(&mut doc, "a.b[2]", Value::from("x")));

    assert_eq!(
        doc,
        json_object(vec![(
            "a",
            json_object(vec![(
                "b",
                json_array(vec![Value::Null, Value::Null, Value::from("x")]),
            )]),
        )])
    );
}

#[test]
fn test_set_repairs_mismatch() {
    let mut doc = json_object(vec![("a", Value::Integer(5))]);
    assert!(set(&mut doc, "a.b", Value::Integer(1)));
    assert_eq!(
        doc,
        json_object(vec![("a", json_object(vec![("b", Value::Integer(1))]))])
    );
}

#[test]
fn test_get_or_create_placeholder() {
    let mut doc = Value::Null;
    assert!(get_or_create(&mut doc, "list[0]").unwrap().is_null());
    assert_eq!(doc, json_object(vec![("list", json_array(vec![Value::Null]))]));
}

#[test]
fn test_accessors() {
    assert_eq!(Value::Boolean(true).as_bool(), Some(true));
    assert_eq!(Value::Integer(3).as_i64(), Some(3));
    assert_eq!(Value::Integer(3).as_f64(), Some(3.0));
    assert_eq!(Value::Float(0.5).as_i64(), None);
    assert_eq!(Value::from("x").as_bool(), None);
}

// ============================================================================
// serde_json Conversion
// ============================================================================

#[test]
fn test_from_serde_json() {
    let doc = Value::from(json!({"n": 1, "f": 1.5, "list": [true, null], "s": "x"}));

    assert_eq!(get(&doc, "n"), Some(&Value::Integer(1)));
    assert_eq!(get(&doc, "f"), Some(&Value::Float(1.5)));
    assert_eq!(get(&doc, "list[0]"), Some(&Value::Boolean(true)));
    assert_eq!(get(&doc, "list[1]"), Some(&Value::Null));
    assert_eq!(get(&doc, "s"), Some(&Value::from("x")));
}

#[test]
fn test_into_serde_json() {
    let doc = json_object(vec![
        ("k", Value::Integer(1)),
        ("k", Value::Integer(2)),
        ("nan", Value::Float(f64::NAN)),
        ("list", json_array(vec![Value::from("a")])),
    ]);

    let converted: serde_json::Value = doc.into();
    assert_eq!(converted, json!({"k": 1, "nan": null, "list": ["a"]}));
}

#[test]
fn test_large_unsigned_becomes_float() {
    let doc = Value::from(json!(u64::MAX));
    assert_eq!(doc.kind(), Kind::Float);
}

#[test]
fn test_models_agree_on_number_kinds() {
    let cases = vec![json!(1), json!(-1), json!(i64::MAX), json!(u64::MAX), json!(0.5)];

    for number in cases {
        assert_eq!(
            number.kind(),
            Value::from(number.clone()).kind(),
            "Failed for number: {}",
            number
        );
    }
}

#[test]
fn test_huge_index_fails_cleanly() {
    let mut doc = json_object(vec![]);
    let path = format!("list[{}]", usize::MAX);

    assert!(!set(&mut doc, &path, Value::Integer(1)));
    assert_eq!(doc, json_object(vec![("list", json_array(vec![]))]));
}
