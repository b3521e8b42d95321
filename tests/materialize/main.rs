use schemadraft::{
    DocumentFormat, Field, FieldShape, Forest, ScalarItem, materialize, materialize_value,
    render_document,
};
use serde_json::json;

fn field(name: &str, shape: FieldShape) -> Field {
    Field::new(name, shape)
}

#[test]
fn scalar_and_array_defaults() {
    let forest = Forest::from(vec![
        field("age", FieldShape::Number),
        field("tags", FieldShape::Array(ScalarItem::String)),
    ]);
    assert_eq!(materialize_value(&forest), json!({"age": 0, "tags": [""]}));
}

#[test]
fn nested_documents_mirror_the_tree() {
    let forest = Forest::from(vec![field(
        "addr",
        FieldShape::Nested(vec![field("city", FieldShape::String)]),
    )]);
    assert_eq!(materialize_value(&forest), json!({"addr": {"city": ""}}));
}

#[test]
fn array_of_nested_wraps_a_single_document() {
    let forest = Forest::from(vec![field(
        "users",
        FieldShape::ArrayOfNested(vec![
            field("id", FieldShape::ObjectId),
            field("score", FieldShape::Float),
            field("active", FieldShape::Boolean),
        ]),
    )]);
    assert_eq!(
        materialize_value(&forest),
        json!({"users": [{"id": "ObjectId('')", "score": 0.0, "active": false}]})
    );
}

#[test]
fn blank_names_contribute_no_key() {
    let forest = Forest::from(vec![
        field("", FieldShape::Number),
        field("   ", FieldShape::Nested(vec![field("hidden", FieldShape::String)])),
        field("kept", FieldShape::Boolean),
        field(
            "outer",
            FieldShape::Nested(vec![field("", FieldShape::String)]),
        ),
    ]);
    assert_eq!(
        materialize_value(&forest),
        json!({"kept": false, "outer": {}})
    );
}

#[test]
fn names_are_used_verbatim() {
    let forest = Forest::from(vec![field(" padded ", FieldShape::String)]);
    assert!(materialize(&forest).contains_key(" padded "));
}

#[test]
fn key_order_follows_forest_order() {
    let forest = Forest::from(vec![
        field("zeta", FieldShape::String),
        field("alpha", FieldShape::Number),
        field("mid", FieldShape::Float),
    ]);
    let document = materialize(&forest);
    let keys: Vec<&str> = document.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
}

#[test]
fn deep_nesting_terminates() {
    let mut leaf = field("leaf", FieldShape::Number);
    for level in 0..64 {
        leaf = if level % 2 == 0 {
            field("n", FieldShape::Nested(vec![leaf]))
        } else {
            field("a", FieldShape::ArrayOfNested(vec![leaf]))
        };
    }
    let forest = Forest::from(vec![leaf]);

    let mut value = &materialize_value(&forest);
    let mut levels = 0;
    loop {
        value = match value {
            serde_json::Value::Object(map) if map.contains_key("leaf") => break,
            serde_json::Value::Object(map) => map.values().next().unwrap(),
            serde_json::Value::Array(items) => &items[0],
            other => panic!("unexpected value {other}"),
        };
        levels += 1;
    }
    assert_eq!(levels, 64 + 32);
    assert_eq!(materialize(&forest), materialize(&forest));
}

#[test]
fn preview_text_is_two_space_json() {
    let forest = Forest::from(vec![
        field("age", FieldShape::Number),
        field(
            "addr",
            FieldShape::Nested(vec![field("city", FieldShape::String)]),
        ),
    ]);
    let text = render_document(&materialize(&forest), DocumentFormat::Json, true).unwrap();
    let expected = "{\n  \"age\": 0,\n  \"addr\": {\n    \"city\": \"\"\n  }\n}";
    assert_eq!(text, expected);
}
