use crate::domain::{ArrayItemKind, Field, FieldKind, FieldShape};

/// Partial update for a single field.
///
/// Unset members leave the field untouched. After the update is merged the
/// shape is rebuilt from the final kind, so combinations such as an item kind
/// on a `nested` field are discarded instead of stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPatch {
    pub name: Option<String>,
    pub kind: Option<FieldKind>,
    pub array_item_kind: Option<ArrayItemKind>,
}

impl FieldPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rename(name: impl Into<String>) -> Self {
        Self::new().with_name(name)
    }

    pub fn retype(kind: FieldKind) -> Self {
        Self::new().with_kind(kind)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_kind(mut self, kind: FieldKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_array_item_kind(mut self, item: ArrayItemKind) -> Self {
        self.array_item_kind = Some(item);
        self
    }

    pub(crate) fn apply(self, field: &mut Field) {
        let FieldPatch {
            name,
            kind,
            array_item_kind,
        } = self;

        if let Some(name) = name {
            field.name = name;
        }
        if kind.is_none() && array_item_kind.is_none() {
            return;
        }

        let kind = kind.unwrap_or_else(|| field.kind());
        let item = array_item_kind.or_else(|| field.array_item_kind());
        let children = field.take_children();
        field.shape = FieldShape::from_parts(kind, item, children);
    }
}
