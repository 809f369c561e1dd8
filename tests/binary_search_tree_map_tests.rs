//! Unit tests for BinarySearchTreeMap.
//!
//! The unbalanced strategy shares every code path with the AVL map except
//! rotation, so these tests focus on what differs: the shape follows
//! insertion order while order, heights and counts stay correct.

use avlmap::{AvlTreeMap, BinarySearchTreeMap, Node, TreeMapError, TreeRoot};
use rstest::rstest;

fn heights_are_consistent<K, V>(node: Option<&Node<K, V>>) -> bool {
    node.is_none_or(|node| {
        let left = node.left().map_or(0, Node::height);
        let right = node.right().map_or(0, Node::height);
        node.height() == 1 + left.max(right)
            && heights_are_consistent(node.left())
            && heights_are_consistent(node.right())
    })
}

#[rstest]
fn test_shape_follows_insertion_order() {
    let mut map = BinarySearchTreeMap::new();
    for key in [17, 5, 1, 18, 8, 15, 12, 0] {
        map.add(key, ()).unwrap();
    }

    let pre: Vec<i32> = map.pre_order().map(|(key, _)| *key).collect();
    assert_eq!(pre, vec![17, 5, 1, 0, 8, 15, 12, 18]);
    assert_eq!(map.height(), 5);
    assert!(heights_are_consistent(map.root()));
}

#[rstest]
fn test_sorted_input_degenerates_into_list() {
    let map: BinarySearchTreeMap<i32, i32> = (0..64).map(|key| (key, key)).collect();
    let balanced: AvlTreeMap<i32, i32> = (0..64).map(|key| (key, key)).collect();

    assert_eq!(map.tree_height(), 64);
    assert_eq!(balanced.tree_height(), 7);
    assert!(map.in_order().eq(balanced.in_order()));
}

#[rstest]
fn test_strict_and_lenient_operations() {
    let mut map = BinarySearchTreeMap::new();
    map.add("b", 2).unwrap();

    assert_eq!(map.add("b", 20), Err(TreeMapError::DuplicateKey));
    assert_eq!(map.upsert("b", 22), Some(2));
    assert_eq!(map.get(&"a"), Err(TreeMapError::KeyNotFound));
    assert_eq!(map.try_get(&"b"), Some(&22));
    assert!(!map.remove(&"a"));
    assert!(map.remove(&"b"));
    assert!(map.is_empty());
}

#[rstest]
#[case::leaf(0)]
#[case::one_child(1)]
#[case::two_children(5)]
#[case::root(17)]
fn test_remove_keeps_order_and_heights(#[case] target: i32) {
    let mut map: BinarySearchTreeMap<i32, i32> = [17, 5, 1, 18, 8, 15, 12, 0]
        .into_iter()
        .map(|key| (key, key))
        .collect();

    assert!(map.remove(&target));

    let keys: Vec<i32> = map.keys().copied().collect();
    let mut expected = vec![0, 1, 5, 8, 12, 15, 17, 18];
    expected.retain(|key| *key != target);
    assert_eq!(keys, expected);
    assert_eq!(map.len(), 7);
    assert!(heights_are_consistent(map.root()));
}

#[rstest]
fn test_two_child_removal_promotes_successor() {
    let mut map: BinarySearchTreeMap<i32, i32> = [17, 5, 1, 18, 8, 15, 12, 0]
        .into_iter()
        .map(|key| (key, key))
        .collect();

    assert!(map.remove(&5));
    let root = map.root().unwrap();
    assert_eq!(root.left().map(|node| *node.key()), Some(8));
}

#[rstest]
fn test_level_order_of_degenerate_tree_is_sorted() {
    let map: BinarySearchTreeMap<i32, ()> = (0..10).rev().map(|key| (key, ())).collect();
    let level: Vec<i32> = map.level_order().map(|(key, _)| *key).collect();
    assert_eq!(level, (0..10).rev().collect::<Vec<_>>());
}
