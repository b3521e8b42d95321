mod insert_tests;
mod invariant_tests;

use schemadraft::{Field, FieldShape, Forest, ScalarItem};

pub(crate) fn leaf(name: &str) -> Field {
    Field::new(name, FieldShape::String)
}

pub(crate) fn nested(name: &str, children: Vec<Field>) -> Field {
    Field::new(name, FieldShape::Nested(children))
}

pub(crate) fn list_of(name: &str, children: Vec<Field>) -> Field {
    Field::new(name, FieldShape::ArrayOfNested(children))
}

pub(crate) fn scalars(name: &str, item: ScalarItem) -> Field {
    Field::new(name, FieldShape::Array(item))
}

/// `depth` levels of single-child nesting ending in a string leaf.
pub(crate) fn chain(depth: usize) -> Field {
    let mut field = leaf("leaf");
    for level in (0..depth).rev() {
        field = if level % 2 == 0 {
            nested(&format!("n{level}"), vec![field])
        } else {
            list_of(&format!("a{level}"), vec![field])
        };
    }
    field
}

pub(crate) fn names(fields: &[Field]) -> Vec<String> {
    fields.iter().map(|field| field.name.clone()).collect()
}

pub(crate) fn forest(fields: Vec<Field>) -> Forest {
    Forest::from(fields)
}
