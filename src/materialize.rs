//! Turn a field forest into the JSON document it describes.

use serde_json::{Map, Value};

use crate::domain::{Field, FieldShape, ScalarItem};
use crate::forest::Forest;

/// Insertion-ordered JSON object; key order follows the forest.
pub type Document = Map<String, Value>;

const OBJECT_ID_PLACEHOLDER: &str = "ObjectId('')";

/// Build the default-valued document for `forest`.
///
/// Fields whose name is blank are skipped. When siblings share a name the
/// later value wins and the key keeps its first position.
pub fn materialize(forest: &Forest) -> Document {
    materialize_fields(forest.roots())
}

pub fn materialize_value(forest: &Forest) -> Value {
    Value::Object(materialize(forest))
}

pub fn materialize_fields(fields: &[Field]) -> Document {
    let mut document = Document::new();
    for field in fields {
        if field.name.trim().is_empty() {
            continue;
        }
        document.insert(field.name.clone(), default_value(&field.shape));
    }
    document
}

/// Representative value for a single shape, recursing into child lists.
pub fn default_value(shape: &FieldShape) -> Value {
    match shape {
        FieldShape::String => Value::String(String::new()),
        FieldShape::Number => Value::from(0),
        FieldShape::Float => Value::from(0.0),
        FieldShape::Boolean => Value::Bool(false),
        FieldShape::ObjectId => Value::String(OBJECT_ID_PLACEHOLDER.to_string()),
        FieldShape::Array(item) => Value::Array(vec![scalar_default(*item)]),
        FieldShape::Nested(children) => Value::Object(materialize_fields(children)),
        FieldShape::ArrayOfNested(children) => {
            Value::Array(vec![Value::Object(materialize_fields(children))])
        }
    }
}

fn scalar_default(item: ScalarItem) -> Value {
    match item {
        ScalarItem::String => Value::String(String::new()),
        ScalarItem::Number => Value::from(0),
        ScalarItem::Float => Value::from(0.0),
        ScalarItem::Boolean => Value::Bool(false),
    }
}
