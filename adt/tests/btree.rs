use adt::build::UnionBuilder;
use adt::dispatch::{match_value, Key, Table};
use adt::types::{Type, Union};
use adt::values::Instance;
use once_cell::sync::Lazy;
use pretty_assertions::assert_eq;

// A binary search tree rendered in order as `/4\/5\/6\` by a custom renderer.
static BTREE: Lazy<Union> = Lazy::new(|| {
    UnionBuilder::new("BTree")
        .variant("branch", vec![Type::Recursive, Type::Recursive, Type::Any])
        .variant("leaf", vec![])
        .renderer(|instance| {
            match_value(
                instance.clone(),
                &Table::new()
                    .case(Key::tag("leaf"), |_| "".to_owned())
                    .case(Key::tag("branch"), |payload| {
                        format!("{}/{}\\{}", payload[0], payload[2], payload[1])
                    }),
            )
            .unwrap()
        })
        .build()
        .unwrap()
});

fn leaf() -> Instance {
    BTREE.variant("leaf").unwrap().construct(vec![]).unwrap()
}

fn branch(left: Instance, right: Instance, data: i64) -> Instance {
    BTREE
        .variant("branch")
        .unwrap()
        .construct(vec![left.into(), right.into(), data.into()])
        .unwrap()
}

fn insert(tree: &Instance, data: i64) -> Instance {
    match_value(
        tree.clone(),
        &Table::new()
            .case(BTREE.variant("leaf").unwrap(), |_| {
                branch(leaf(), leaf(), data)
            })
            .case(BTREE.variant("branch").unwrap(), |payload| {
                let left = payload[0].to_instance().unwrap();
                let right = payload[1].to_instance().unwrap();
                let node = payload[2].to_integer64().unwrap();

                if data <= node {
                    branch(insert(left, data), right.clone(), node)
                } else {
                    branch(left.clone(), insert(right, data), node)
                }
            }),
    )
    .unwrap()
}

#[test]
fn compare_empty_trees() {
    assert_eq!(leaf(), leaf());
}

#[test]
fn insert_into_empty_tree() {
    assert_eq!(insert(&leaf(), 5), branch(leaf(), leaf(), 5));
}

#[test]
fn insert_in_order() {
    let tree = [5, 6, 4]
        .iter()
        .fold(leaf(), |tree, &data| insert(&tree, data));

    assert_eq!(
        tree,
        branch(branch(leaf(), leaf(), 4), branch(leaf(), leaf(), 6), 5)
    );
}

#[test]
fn render_with_custom_renderer() {
    let tree = [5, 6, 4]
        .iter()
        .fold(leaf(), |tree, &data| insert(&tree, data));

    assert_eq!(tree.to_string(), "/4\\/5\\/6\\");
}

#[test]
fn render_single_node() {
    assert_eq!(insert(&leaf(), 5).to_string(), "/5\\");
}
