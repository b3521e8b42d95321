use std::mem;

use super::{ArrayItemKind, FieldId, FieldKind, ScalarItem};

/// A named, typed node of the schema tree.
///
/// The id is fixed at creation. Name and shape are edited through
/// [`crate::Forest::update_field`], which keeps the shape consistent with the
/// selected kind.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    id: FieldId,
    pub name: String,
    pub shape: FieldShape,
}

/// Kind-dependent payload of a field.
///
/// Only `Nested` and `ArrayOfNested` own a child list, and only the array
/// variants carry an element kind, so a field can never hold children or an
/// item kind its kind does not allow.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FieldShape {
    #[default]
    String,
    Number,
    Float,
    Boolean,
    ObjectId,
    Array(ScalarItem),
    ArrayOfNested(Vec<Field>),
    Nested(Vec<Field>),
}

impl Field {
    /// A fresh field: new id, empty name, kind `string`.
    pub fn new_default() -> Self {
        Self {
            id: FieldId::fresh(),
            name: String::new(),
            shape: FieldShape::default(),
        }
    }

    pub fn new(name: impl Into<String>, shape: FieldShape) -> Self {
        Self {
            id: FieldId::fresh(),
            name: name.into(),
            shape,
        }
    }

    pub fn id(&self) -> FieldId {
        self.id
    }

    pub fn kind(&self) -> FieldKind {
        self.shape.kind()
    }

    pub fn array_item_kind(&self) -> Option<ArrayItemKind> {
        self.shape.array_item_kind()
    }

    pub fn children(&self) -> Option<&[Field]> {
        self.shape.children()
    }

    pub fn can_hold_children(&self) -> bool {
        self.shape.children().is_some()
    }

    /// Label used by outlines: the name, or a placeholder while it is blank.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            "<unnamed>"
        } else {
            &self.name
        }
    }

    /// Ids of this field and every descendant, in pre-order.
    pub fn subtree_ids(&self) -> Vec<FieldId> {
        let mut ids = Vec::new();
        collect_ids(self, &mut ids);
        ids
    }

    pub(crate) fn take_children(&mut self) -> Option<Vec<Field>> {
        match &mut self.shape {
            FieldShape::Nested(children) | FieldShape::ArrayOfNested(children) => {
                Some(mem::take(children))
            }
            _ => None,
        }
    }
}

fn collect_ids(field: &Field, out: &mut Vec<FieldId>) {
    out.push(field.id);
    if let Some(children) = field.children() {
        for child in children {
            collect_ids(child, out);
        }
    }
}

impl FieldShape {
    /// Rebuild a consistent shape from a kind, an optional item kind and an
    /// optional child list that may be left over from the previous shape.
    ///
    /// Item kinds default to `string` for arrays and are dropped otherwise.
    /// Children survive only when the resulting shape can hold them.
    pub fn from_parts(
        kind: FieldKind,
        item: Option<ArrayItemKind>,
        children: Option<Vec<Field>>,
    ) -> Self {
        match kind {
            FieldKind::String => FieldShape::String,
            FieldKind::Number => FieldShape::Number,
            FieldKind::Float => FieldShape::Float,
            FieldKind::Boolean => FieldShape::Boolean,
            FieldKind::ObjectId => FieldShape::ObjectId,
            FieldKind::Nested => FieldShape::Nested(children.unwrap_or_default()),
            FieldKind::Array => match item.unwrap_or(ArrayItemKind::String).scalar() {
                Some(scalar) => FieldShape::Array(scalar),
                None => FieldShape::ArrayOfNested(children.unwrap_or_default()),
            },
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            FieldShape::String => FieldKind::String,
            FieldShape::Number => FieldKind::Number,
            FieldShape::Float => FieldKind::Float,
            FieldShape::Boolean => FieldKind::Boolean,
            FieldShape::ObjectId => FieldKind::ObjectId,
            FieldShape::Array(_) | FieldShape::ArrayOfNested(_) => FieldKind::Array,
            FieldShape::Nested(_) => FieldKind::Nested,
        }
    }

    pub fn array_item_kind(&self) -> Option<ArrayItemKind> {
        match self {
            FieldShape::Array(item) => Some((*item).into()),
            FieldShape::ArrayOfNested(_) => Some(ArrayItemKind::Nested),
            _ => None,
        }
    }

    pub fn children(&self) -> Option<&[Field]> {
        match self {
            FieldShape::Nested(children) | FieldShape::ArrayOfNested(children) => {
                Some(children.as_slice())
            }
            _ => None,
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut Vec<Field>> {
        match self {
            FieldShape::Nested(children) | FieldShape::ArrayOfNested(children) => Some(children),
            _ => None,
        }
    }

    /// Short label such as `nested`, `array<float>` or `objectId`.
    pub fn label(&self) -> String {
        match self.array_item_kind() {
            Some(item) => format!("array<{item}>"),
            None => self.kind().to_string(),
        }
    }
}
