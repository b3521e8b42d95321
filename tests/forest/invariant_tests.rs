use std::collections::HashSet;

use proptest::prelude::*;
use proptest::sample::Index;
use schemadraft::{
    ArrayItemKind, Field, FieldId, FieldKind, FieldPatch, FieldShape, Forest, materialize,
};

#[derive(Debug, Clone)]
enum Op {
    AddRoot,
    AddChild(Index),
    Delete(Index),
    Rename(Index, String),
    Retype(Index, usize, Option<usize>),
    Stale,
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        2 => Just(Op::AddRoot),
        3 => any::<Index>().prop_map(Op::AddChild),
        1 => any::<Index>().prop_map(Op::Delete),
        2 => (any::<Index>(), "[a-z ]{0,6}").prop_map(|(idx, name)| Op::Rename(idx, name)),
        3 => (
            any::<Index>(),
            0..FieldKind::ALL.len(),
            proptest::option::of(0..ArrayItemKind::ALL.len())
        )
            .prop_map(|(idx, kind, item)| Op::Retype(idx, kind, item)),
        1 => Just(Op::Stale),
    ]
}

fn pick(forest: &Forest, idx: &Index) -> Option<FieldId> {
    let ids = forest.ids();
    (!ids.is_empty()).then(|| ids[idx.index(ids.len())])
}

fn step(forest: Forest, op: &Op) -> Forest {
    match op {
        Op::AddRoot => forest.add_root(),
        Op::AddChild(idx) => match pick(&forest, idx) {
            Some(id) => forest.insert_child(id),
            None => forest,
        },
        Op::Delete(idx) => match pick(&forest, idx) {
            Some(id) => forest.delete_field(id),
            None => forest,
        },
        Op::Rename(idx, name) => match pick(&forest, idx) {
            Some(id) => forest.update_field(id, FieldPatch::rename(name.clone())),
            None => forest,
        },
        Op::Retype(idx, kind, item) => match pick(&forest, idx) {
            Some(id) => {
                let mut patch = FieldPatch::retype(FieldKind::ALL[*kind]);
                if let Some(item) = item {
                    patch = patch.with_array_item_kind(ArrayItemKind::ALL[*item]);
                }
                forest.update_field(id, patch)
            }
            None => forest,
        },
        Op::Stale => {
            let stale = Field::new_default().id();
            forest
                .update_field(stale, FieldPatch::rename("x"))
                .insert_child(stale)
                .delete_field(stale)
        }
    }
}

fn assert_consistent(fields: &[Field]) {
    for field in fields {
        let kind = field.kind();
        assert_eq!(field.array_item_kind().is_some(), kind == FieldKind::Array);
        let holds_children = kind == FieldKind::Nested
            || field.array_item_kind() == Some(ArrayItemKind::Nested);
        assert_eq!(field.children().is_some(), holds_children);
        if let FieldShape::Nested(children) | FieldShape::ArrayOfNested(children) = &field.shape {
            assert_consistent(children);
        }
    }
}

proptest! {
    #[test]
    fn operations_preserve_invariants(ops in prop::collection::vec(arb_op(), 0..60)) {
        let mut forest = Forest::new();
        for op in &ops {
            forest = step(forest, op);
            prop_assert!(forest.check_invariants().is_ok());
            assert_consistent(forest.roots());
        }
        let ids = forest.ids();
        let unique: HashSet<_> = ids.iter().copied().collect();
        prop_assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn stale_ids_never_change_the_forest(ops in prop::collection::vec(arb_op(), 0..30)) {
        let mut forest = Forest::new();
        for op in &ops {
            forest = step(forest, op);
        }
        let before = forest.clone();
        prop_assert_eq!(step(forest, &Op::Stale), before);
    }

    #[test]
    fn materialize_is_deterministic(ops in prop::collection::vec(arb_op(), 0..40)) {
        let mut forest = Forest::new();
        for op in &ops {
            forest = step(forest, op);
        }
        prop_assert_eq!(materialize(&forest), materialize(&forest));
    }
}

#[test]
fn created_ids_are_unique_across_many_creations() {
    let mut forest = Forest::new();
    let mut created = HashSet::new();
    for round in 0..50 {
        let (next, id) = forest.add_root_with_id();
        forest = next;
        assert!(created.insert(id));
        forest = forest.update_field(id, FieldPatch::retype(FieldKind::Nested));
        for _ in 0..round % 4 {
            let (next, child) = forest.insert_child_with_id(id);
            forest = next;
            assert!(created.insert(child.unwrap()));
        }
    }
    assert_eq!(forest.total_fields(), created.len());
    assert!(forest.check_invariants().is_ok());
}
