use schemadraft::{Field, FieldKind, Forest, ScalarItem};

use super::{chain, forest, leaf, list_of, names, nested, scalars};

#[test]
fn insert_child_on_string_field_is_a_no_op() {
    let field = leaf("name");
    let id = field.id();
    let original = forest(vec![field]);
    assert_eq!(original.clone().insert_child(id), original);
}

#[test]
fn insert_child_on_scalar_array_is_a_no_op() {
    let field = scalars("tags", ScalarItem::String);
    let id = field.id();
    let original = forest(vec![field]);
    assert_eq!(original.clone().insert_child(id), original);
}

#[test]
fn insert_child_on_missing_parent_is_a_no_op() {
    let original = forest(vec![nested("a", Vec::new())]);
    let stale = Field::new_default().id();
    let (updated, created) = original.clone().insert_child_with_id(stale);
    assert_eq!(created, None);
    assert_eq!(updated, original);
}

#[test]
fn children_are_appended_after_existing_ones() {
    let parent = list_of("rows", vec![leaf("first"), leaf("second")]);
    let parent_id = parent.id();
    let (updated, created) = forest(vec![parent]).insert_child_with_id(parent_id);
    let created = created.unwrap();

    let children = updated.find(parent_id).unwrap().children().unwrap();
    assert_eq!(names(children), vec!["first", "second", ""]);
    let child = &children[2];
    assert_eq!(child.id(), created);
    assert_eq!(child.kind(), FieldKind::String);
    assert!(child.children().is_none());
}

#[test]
fn insert_into_deepest_container() {
    let root = chain(8);
    let ids = root.subtree_ids();
    let deepest_container = ids[ids.len() - 2];
    let updated = forest(vec![root]).insert_child(deepest_container);
    assert_eq!(updated.total_fields(), ids.len() + 1);
}

#[test]
fn add_root_appends_default_fields() {
    let updated = forest(vec![leaf("a")]).add_root().add_root();
    assert_eq!(names(updated.roots()), vec!["a", "", ""]);
    assert!(updated.iter().all(|f| f.kind() == FieldKind::String));
    assert_eq!(updated.len(), 3);
    assert!(Forest::new().is_empty());
}
