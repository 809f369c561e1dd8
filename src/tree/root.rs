//! Read-only access to the root of a tree.
//!
//! Rendering and inspection code often needs to walk the actual shape of the
//! tree (children, heights) rather than a flattened sequence. [`TreeRoot`]
//! grants exactly that: a shared reference to the root [`Node`], through
//! which no mutation is possible.

use super::node::Node;

/// A structure that can lend out its root node for structural inspection.
///
/// # Examples
///
/// ```rust
/// use avlmap::{AvlTreeMap, Node, TreeRoot};
///
/// fn leaf_count<T: TreeRoot>(tree: &T) -> usize {
///     fn walk<K, V>(node: Option<&Node<K, V>>) -> usize {
///         match node {
///             None => 0,
///             Some(node) if node.is_leaf() => 1,
///             Some(node) => walk(node.left()) + walk(node.right()),
///         }
///     }
///     walk(tree.root_node())
/// }
///
/// let map: AvlTreeMap<i32, ()> = (1..=7).map(|key| (key, ())).collect();
/// assert_eq!(leaf_count(&map), 4);
/// ```
pub trait TreeRoot {
    /// The key type stored in the tree.
    type Key;
    /// The value type stored in the tree.
    type Value;

    /// Returns the root node, or `None` for an empty tree.
    fn root_node(&self) -> Option<&Node<Self::Key, Self::Value>>;

    /// Returns the height of the tree, 0 when empty.
    fn tree_height(&self) -> usize {
        self.root_node().map_or(0, Node::height)
    }
}
