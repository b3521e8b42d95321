use crate::domain::{ArrayItemKind, FieldId, FieldKind};
use crate::forest::{FieldPatch, Forest};

/// A single edit requested by whoever renders the field tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditIntent {
    AddRoot,
    AddChild { parent: FieldId },
    Rename { id: FieldId, name: String },
    Retype { id: FieldId, kind: FieldKind },
    SetArrayItemKind { id: FieldId, item: ArrayItemKind },
    Delete { id: FieldId },
}

impl EditIntent {
    /// The field the intent refers to, if any.
    pub fn target(&self) -> Option<FieldId> {
        match self {
            EditIntent::AddRoot => None,
            EditIntent::AddChild { parent } => Some(*parent),
            EditIntent::Rename { id, .. }
            | EditIntent::Retype { id, .. }
            | EditIntent::SetArrayItemKind { id, .. }
            | EditIntent::Delete { id } => Some(*id),
        }
    }

    /// Translate the intent into a forest patch. Selecting `array` from the
    /// kind picker always starts with `string` items.
    fn patch(&self) -> Option<FieldPatch> {
        match self {
            EditIntent::Rename { name, .. } => Some(FieldPatch::rename(name.clone())),
            EditIntent::Retype {
                kind: FieldKind::Array,
                ..
            } => Some(
                FieldPatch::retype(FieldKind::Array).with_array_item_kind(ArrayItemKind::String),
            ),
            EditIntent::Retype { kind, .. } => Some(FieldPatch::retype(*kind)),
            EditIntent::SetArrayItemKind { item, .. } => {
                Some(FieldPatch::new().with_array_item_kind(*item))
            }
            EditIntent::AddRoot | EditIntent::AddChild { .. } | EditIntent::Delete { .. } => None,
        }
    }
}

/// Run `intent` against `forest`, returning the next forest and the id of a
/// field the intent created.
pub fn apply_intent(forest: Forest, intent: &EditIntent) -> (Forest, Option<FieldId>) {
    match intent {
        EditIntent::AddRoot => {
            let (forest, id) = forest.add_root_with_id();
            (forest, Some(id))
        }
        EditIntent::AddChild { parent } => forest.insert_child_with_id(*parent),
        EditIntent::Delete { id } => (forest.delete_field(*id), None),
        EditIntent::Rename { id, .. }
        | EditIntent::Retype { id, .. }
        | EditIntent::SetArrayItemKind { id, .. } => match intent.patch() {
            Some(patch) => (forest.update_field(*id, patch), None),
            None => (forest, None),
        },
    }
}
