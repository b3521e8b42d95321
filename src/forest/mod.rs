//! Ordered forest of fields and the structural edits applied to it.
//!
//! Every edit consumes the forest and hands back the next value. Ids that no
//! longer resolve (the field was deleted by an earlier edit) and requests the
//! target cannot honour leave the forest as it was; neither is an error.

mod patch;

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::domain::{Field, FieldId, ForestError};

pub use patch::FieldPatch;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Forest {
    fields: Vec<Field>,
}

impl Forest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn roots(&self) -> &[Field] {
        &self.fields
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Field> {
        self.fields.iter()
    }

    /// Number of root fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of fields at every depth.
    pub fn total_fields(&self) -> usize {
        self.ids().len()
    }

    /// Every id in the forest, in pre-order.
    pub fn ids(&self) -> Vec<FieldId> {
        self.fields.iter().flat_map(Field::subtree_ids).collect()
    }

    pub fn contains(&self, id: FieldId) -> bool {
        self.find(id).is_some()
    }

    /// Nesting depth; roots count as depth 1 and an empty forest has depth 0.
    pub fn max_depth(&self) -> usize {
        depth_of(&self.fields)
    }

    pub fn find(&self, id: FieldId) -> Option<&Field> {
        find_in(&self.fields, id)
    }

    /// Apply `patch` to the field with `id`, wherever it sits.
    #[must_use]
    pub fn update_field(mut self, id: FieldId, patch: FieldPatch) -> Self {
        match find_in_mut(&mut self.fields, id) {
            Some(field) => {
                debug!(%id, ?patch, "updating field");
                patch.apply(field);
            }
            None => trace!(%id, "update skipped, field not found"),
        }
        self
    }

    /// Remove the field with `id` along with its whole subtree.
    #[must_use]
    pub fn delete_field(mut self, id: FieldId) -> Self {
        if remove_in(&mut self.fields, id) {
            debug!(%id, "deleted field");
        } else {
            trace!(%id, "delete skipped, field not found");
        }
        self
    }

    /// Append a default child to `parent_id` if it exists and can hold children.
    #[must_use]
    pub fn insert_child(self, parent_id: FieldId) -> Self {
        self.insert_child_with_id(parent_id).0
    }

    /// Like [`Forest::insert_child`], also returning the id of the new child.
    pub fn insert_child_with_id(mut self, parent_id: FieldId) -> (Self, Option<FieldId>) {
        let Some(parent) = find_in_mut(&mut self.fields, parent_id) else {
            trace!(%parent_id, "insert skipped, parent not found");
            return (self, None);
        };
        let Some(children) = parent.shape.children_mut() else {
            trace!(%parent_id, "insert skipped, parent cannot hold children");
            return (self, None);
        };
        let child = Field::new_default();
        let child_id = child.id();
        children.push(child);
        debug!(%parent_id, %child_id, "inserted child field");
        (self, Some(child_id))
    }

    /// Append a default field to the roots.
    #[must_use]
    pub fn add_root(self) -> Self {
        self.add_root_with_id().0
    }

    pub fn add_root_with_id(mut self) -> (Self, FieldId) {
        let field = Field::new_default();
        let id = field.id();
        self.fields.push(field);
        debug!(%id, "added root field");
        (self, id)
    }

    /// Confirm that no id occurs twice.
    ///
    /// Shapes cannot disagree with their kind and children are owned, so
    /// duplicate ids (from cloning fields into several slots) are the only
    /// violation a forest can carry.
    pub fn check_invariants(&self) -> Result<(), ForestError> {
        let mut counts: IndexMap<FieldId, usize> = IndexMap::new();
        for id in self.ids() {
            *counts.entry(id).or_default() += 1;
        }
        match counts.into_iter().find(|(_, count)| *count > 1) {
            Some((id, count)) => Err(ForestError::DuplicateId { id, count }),
            None => Ok(()),
        }
    }
}

impl From<Vec<Field>> for Forest {
    fn from(fields: Vec<Field>) -> Self {
        Self { fields }
    }
}

impl FromIterator<Field> for Forest {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Forest {
    type Item = &'a Field;
    type IntoIter = std::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

fn find_in(fields: &[Field], id: FieldId) -> Option<&Field> {
    for field in fields {
        if field.id() == id {
            return Some(field);
        }
        if let Some(found) = field.children().and_then(|children| find_in(children, id)) {
            return Some(found);
        }
    }
    None
}

fn find_in_mut(fields: &mut [Field], id: FieldId) -> Option<&mut Field> {
    for field in fields.iter_mut() {
        if field.id() == id {
            return Some(field);
        }
        if let Some(children) = field.shape.children_mut() {
            if let Some(found) = find_in_mut(children, id) {
                return Some(found);
            }
        }
    }
    None
}

// Visits every branch, not just the first that could contain `id`.
fn remove_in(fields: &mut Vec<Field>, id: FieldId) -> bool {
    let before = fields.len();
    fields.retain(|field| field.id() != id);
    let mut removed = fields.len() != before;
    for field in fields.iter_mut() {
        if let Some(children) = field.shape.children_mut() {
            removed |= remove_in(children, id);
        }
    }
    removed
}

fn depth_of(fields: &[Field]) -> usize {
    fields
        .iter()
        .map(|field| 1 + field.children().map_or(0, depth_of))
        .max()
        .unwrap_or(0)
}
