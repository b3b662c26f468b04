use std::collections::BTreeMap;

use serde::Serialize;

use prettytree::{format_value, to_value, to_value_with_limit, Kind, PrettyTreeError, Value};

#[test]
fn to_value_scalars() {
    assert_eq!(to_value(true).unwrap(), Value::Bool(true));
    assert_eq!(to_value(7i32).unwrap(), Value::Int(7));
    assert_eq!(to_value(7u16).unwrap(), Value::Int(7));
    assert_eq!(to_value(1.5f64).unwrap(), Value::Float(1.5));
    assert_eq!(to_value('a').unwrap(), Value::Text("a".into()));
    assert_eq!(to_value("testing...").unwrap(), Value::Text("testing...".into()));
}

#[test]
fn to_value_huge_u64_falls_back_to_float() {
    let v = u64::MAX;
    assert_eq!(to_value(v).unwrap(), Value::Float(v as f64));
}

#[test]
fn to_value_none_and_unit() {
    assert_eq!(to_value(None::<i32>).unwrap(), Value::Null);
    assert_eq!(to_value(()).unwrap(), Value::Null);
    assert_eq!(to_value(Some("x")).unwrap(), Value::Text("x".into()));
}

#[test]
fn to_value_unit_struct_is_empty_composite() {
    #[derive(Serialize)]
    struct Marker;

    let value = to_value(Marker).unwrap();
    assert_eq!(
        value,
        Value::composite("Marker", Vec::<(String, Value)>::new())
    );
    assert_eq!(format_value(&value), "Marker()");
}

#[test]
fn to_value_struct_keeps_name_and_field_order() {
    #[derive(Serialize)]
    struct Point {
        y: i32,
        x: i32,
    }

    let value = to_value(Point { y: 2, x: 1 }).unwrap();
    assert_eq!(value.kind(), Kind::Composite);
    assert_eq!(
        value,
        Value::composite("Point", vec![("y", Value::Int(2)), ("x", Value::Int(1))])
    );
}

#[test]
fn to_value_unit_variant_is_enumeration_member() {
    #[derive(Serialize)]
    enum Color {
        Red,
    }

    let value = to_value(Color::Red).unwrap();
    assert_eq!(value.kind(), Kind::EnumerationMember);
    assert_eq!(value, Value::enum_member("Color", "Red"));
}

#[test]
fn to_value_newtype_struct_is_transparent() {
    #[derive(Serialize)]
    struct Wrapper(i64);

    assert_eq!(to_value(Wrapper(5)).unwrap(), Value::Int(5));
}

#[test]
fn to_value_newtype_variant_wraps_in_map() {
    #[derive(Serialize)]
    enum Msg {
        Text(&'static str),
    }

    assert_eq!(
        to_value(Msg::Text("hi")).unwrap(),
        Value::Map(vec![(Value::Text("Text".into()), Value::Text("hi".into()))])
    );
}

#[test]
fn to_value_tuples_become_tuple_values() {
    assert_eq!(
        to_value((1, "a")).unwrap(),
        Value::Tuple(vec![Value::Int(1), Value::Text("a".into())])
    );

    #[derive(Serialize)]
    struct Pair(i32, i32);

    let value = to_value(Pair(1, 2)).unwrap();
    assert_eq!(value.kind(), Kind::ImmutableSequence);
    assert_eq!(value, Value::Tuple(vec![Value::Int(1), Value::Int(2)]));
}

#[test]
fn to_value_tuple_variant_wraps_tuple_in_map() {
    #[derive(Serialize)]
    enum Shape {
        Rect(u32, u32),
    }

    assert_eq!(
        to_value(Shape::Rect(3, 4)).unwrap(),
        Value::Map(vec![(
            Value::Text("Rect".into()),
            Value::Tuple(vec![Value::Int(3), Value::Int(4)]),
        )])
    );
}

#[test]
fn to_value_struct_variant_wraps_composite_in_map() {
    #[derive(Serialize)]
    enum Shape {
        Circle { radius: f64 },
    }

    assert_eq!(
        to_value(Shape::Circle { radius: 2.0 }).unwrap(),
        Value::Map(vec![(
            Value::Text("Circle".into()),
            Value::composite("Circle", vec![("radius", Value::Float(2.0))]),
        )])
    );
}

#[test]
fn to_value_sequences_and_maps() {
    assert_eq!(
        to_value(vec![1i64, 2]).unwrap(),
        Value::List(vec![Value::Int(1), Value::Int(2)])
    );

    let mut map = BTreeMap::new();
    map.insert("a", 1i64);
    map.insert("b", 2);
    assert_eq!(
        to_value(&map).unwrap(),
        Value::Map(vec![
            (Value::Text("a".into()), Value::Int(1)),
            (Value::Text("b".into()), Value::Int(2)),
        ])
    );
}

#[test]
fn to_value_map_keys_need_not_be_strings() {
    let mut map = BTreeMap::new();
    map.insert(10i64, "ten");
    assert_eq!(
        to_value(&map).unwrap(),
        Value::Map(vec![(Value::Int(10), Value::Text("ten".into()))])
    );
}

#[test]
fn to_value_ingests_parsed_json() {
    let doc: serde_json::Value = serde_json::from_str(r#"{"a":1,"b":[true,null]}"#).unwrap();
    assert_eq!(
        to_value(&doc).unwrap(),
        Value::Map(vec![
            (Value::Text("a".into()), Value::Int(1)),
            (
                Value::Text("b".into()),
                Value::List(vec![Value::Bool(true), Value::Null]),
            ),
        ])
    );
}

#[test]
fn to_value_nested_structs_expand() {
    #[derive(Serialize)]
    struct Inner {
        v: i32,
    }

    #[derive(Serialize)]
    struct Outer {
        child: Inner,
    }

    let value = to_value(Outer {
        child: Inner { v: 1 },
    })
    .unwrap();
    assert_eq!(
        value,
        Value::composite(
            "Outer",
            vec![(
                "child",
                Value::composite("Inner", vec![("v", Value::Int(1))]),
            )],
        )
    );
}

#[test]
fn to_value_enforces_depth_budget() {
    let mut doc = serde_json::json!(1);
    for _ in 0..10 {
        doc = serde_json::json!([doc]);
    }

    assert!(to_value_with_limit(&doc, 20).is_ok());
    let err = to_value_with_limit(&doc, 5).unwrap_err();
    assert!(matches!(
        err,
        PrettyTreeError::DepthExceeded { max_depth: 5 }
    ));
}
