//! The recursive storage cell of the tree.
//!
//! A [`Node`] exclusively owns its left and right subtrees, so the tree can
//! never share a subtree between two parents or contain a cycle. Consumers
//! outside the crate only ever see `&Node`, which exposes the structure
//! (children, cached height) without any way to break the map's invariants.

use std::fmt;

/// Owned link to a subtree; `None` is the absent subtree.
pub(crate) type Link<K, V> = Option<Box<Node<K, V>>>;

/// A single entry of the tree together with its subtrees.
///
/// # Examples
///
/// ```rust
/// use avlmap::AvlTreeMap;
///
/// let mut map = AvlTreeMap::new();
/// map.upsert(2, "two");
/// map.upsert(1, "one");
///
/// let root = map.root().unwrap();
/// assert_eq!(root.key(), &2);
/// assert_eq!(root.height(), 2);
/// assert_eq!(root.left().map(|node| *node.key()), Some(1));
/// assert!(root.right().is_none());
/// ```
#[derive(Clone)]
pub struct Node<K, V> {
    key: K,
    value: V,
    height: usize,
    pub(crate) left: Link<K, V>,
    pub(crate) right: Link<K, V>,
}

impl<K, V> Node<K, V> {
    /// Creates a leaf of height 1.
    pub(crate) const fn leaf(key: K, value: V) -> Self {
        Self {
            key,
            value,
            height: 1,
            left: None,
            right: None,
        }
    }

    /// Returns the key stored in this node.
    #[inline]
    pub const fn key(&self) -> &K {
        &self.key
    }

    /// Returns the value stored in this node.
    #[inline]
    pub const fn value(&self) -> &V {
        &self.value
    }

    /// Returns the left subtree, if present.
    #[inline]
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// Returns the right subtree, if present.
    #[inline]
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Returns the cached height of the subtree rooted here.
    ///
    /// A leaf has height 1; an absent subtree counts as 0.
    #[inline]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Returns `true` if neither subtree is present.
    #[inline]
    pub const fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Returns the key and value as a pair of references.
    #[inline]
    pub const fn entry(&self) -> (&K, &V) {
        (&self.key, &self.value)
    }

    pub(crate) fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// Replaces the value, returning the previous one.
    pub(crate) fn replace_value(&mut self, value: V) -> V {
        std::mem::replace(&mut self.value, value)
    }

    /// Replaces key and value, returning the previous pair.
    pub(crate) fn replace_entry(&mut self, key: K, value: V) -> (K, V) {
        (
            std::mem::replace(&mut self.key, key),
            std::mem::replace(&mut self.value, value),
        )
    }

    pub(crate) fn into_entry(self) -> (K, V) {
        (self.key, self.value)
    }

    /// Recomputes the cached height from the children.
    pub(crate) fn update_height(&mut self) {
        self.height = 1 + height(self.left.as_deref()).max(height(self.right.as_deref()));
    }
}

/// Height of an optional subtree, 0 when absent.
#[inline]
pub(crate) fn height<K, V>(node: Option<&Node<K, V>>) -> usize {
    node.map_or(0, Node::height)
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Node<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Node")
            .field("key", &self.key)
            .field("value", &self.value)
            .field("height", &self.height)
            .field("left", &self.left)
            .field("right", &self.right)
            .finish()
    }
}
