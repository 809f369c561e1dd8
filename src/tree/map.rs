//! Ordered map backed by a binary search tree with a pluggable balancer.
//!
//! This module provides [`OrderedMap`], a mutable ordered map whose nodes
//! exclusively own their subtrees. Every structural mutation descends the tree
//! recursively and, on the way back up, hands each touched subtree to the
//! map's [`Balance`] strategy.
//!
//! # Overview
//!
//! - [`AvlTreeMap`]: `OrderedMap` with the [`Avl`] strategy
//! - [`BinarySearchTreeMap`]: `OrderedMap` with the [`Unbalanced`] strategy
//!
//! With [`Avl`], the tree height stays below `1.44 * log2(N + 2)`, so every
//! lookup and mutation is O(log N).
//!
//! # Examples
//!
//! ```rust
//! use avlmap::AvlTreeMap;
//!
//! let mut map = AvlTreeMap::new();
//! map.add(3, "three").unwrap();
//! map.add(1, "one").unwrap();
//! map.upsert(2, "two");
//!
//! // In-order traversal is the canonical sorted iteration
//! let keys: Vec<&i32> = map.keys().collect();
//! assert_eq!(keys, vec![&1, &2, &3]);
//!
//! // Pre-order reflects the balanced shape
//! let pre: Vec<i32> = map.pre_order().map(|(key, _)| *key).collect();
//! assert_eq!(pre, vec![2, 1, 3]);
//! ```
//!
//! # Invariants
//!
//! After every public operation:
//! 1. Keys in a left subtree are strictly less than the node key, keys in a
//!    right subtree strictly greater
//! 2. No two nodes share a key
//! 3. Every cached height equals `1 + max(height(left), height(right))`
//! 4. With [`Avl`], every node has `|height(left) - height(right)| <= 1`

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use std::ops::Index;

use super::balance::{Avl, Balance, Unbalanced};
use super::error::TreeMapError;
use super::node::{Link, Node};
use super::root::TreeRoot;
use super::traversal::{
    Entries, InOrder, InOrderNodes, IntoIter, LevelOrder, LevelOrderNodes, PostOrder,
    PostOrderNodes, PreOrder, PreOrderNodes,
};

// =============================================================================
// OrderedMap Definition
// =============================================================================

/// A mutable ordered map over a binary search tree.
///
/// Keys must implement `Ord`. The balancing strategy `B` runs after every
/// structural change; it defaults to [`Avl`].
///
/// # Time Complexity
///
/// | Operation               | `Avl`        | `Unbalanced` (worst case) |
/// |-------------------------|--------------|---------------------------|
/// | `get`/`try_get`         | O(log N)     | O(N)                      |
/// | `add`/`upsert`          | O(log N)     | O(N)                      |
/// | `remove`                | O(log N)     | O(N)                      |
/// | `len`                   | O(1)         | O(1)                      |
/// | full traversal          | O(N)         | O(N)                      |
///
/// # Examples
///
/// ```rust
/// use avlmap::{AvlTreeMap, TreeMapError};
///
/// let mut map = AvlTreeMap::new();
/// for key in [10, 20, 5, 4, 15] {
///     map.add(key, key * 100).unwrap();
/// }
///
/// assert_eq!(map.len(), 5);
/// assert_eq!(map[&15], 1500);
/// assert_eq!(map.add(5, 0), Err(TreeMapError::DuplicateKey));
/// assert!(map.remove(&10));
/// assert!(!map.remove(&10));
/// ```
pub struct OrderedMap<K, V, B = Avl> {
    /// Root node of the tree
    root: Link<K, V>,
    /// Number of entries
    length: usize,
    balance: PhantomData<fn() -> B>,
}

/// An ordered map kept height-balanced with AVL rotations.
pub type AvlTreeMap<K, V> = OrderedMap<K, V, Avl>;

/// An ordered map without rebalancing; its shape follows insertion order.
pub type BinarySearchTreeMap<K, V> = OrderedMap<K, V, Unbalanced>;

/// Outcome of a single recursive insertion.
enum Insertion<V> {
    /// A new node was created; the path above must be rebalanced.
    Added,
    /// The key existed and its value was overwritten.
    Replaced(V),
    /// The key existed and overwriting was not allowed.
    Rejected,
}

impl<K, V, B> OrderedMap<K, V, B> {
    /// Creates a new empty map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use avlmap::AvlTreeMap;
    ///
    /// let map: AvlTreeMap<i32, String> = AvlTreeMap::new();
    /// assert!(map.is_empty());
    /// assert!(map.root().is_none());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            root: None,
            length: 0,
            balance: PhantomData,
        }
    }

    /// Returns the number of entries in the map.
    ///
    /// The count is maintained incrementally by every mutation.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns the number of entries in the map. Same as [`len`](Self::len).
    #[inline]
    #[must_use]
    pub const fn count(&self) -> usize {
        self.length
    }

    /// Returns `true` if the map contains no entries.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Removes all entries.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use avlmap::AvlTreeMap;
    ///
    /// let mut map: AvlTreeMap<i32, i32> = (0..10).map(|key| (key, key)).collect();
    /// map.clear();
    /// assert!(map.is_empty());
    /// assert!(map.root().is_none());
    /// ```
    pub fn clear(&mut self) {
        let discarded = std::mem::take(&mut self.length);
        drop(IntoIter::new(self.root.take(), discarded));
        tracing::debug!(discarded, "cleared map");
    }

    /// Returns the root node, or `None` when the map is empty.
    ///
    /// The node is borrowed immutably, so the structure can be inspected but
    /// not altered.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use avlmap::AvlTreeMap;
    ///
    /// let map: AvlTreeMap<i32, ()> = [(1, ()), (2, ()), (3, ())].into_iter().collect();
    /// let root = map.root().unwrap();
    /// assert_eq!(root.key(), &2);
    /// assert_eq!(root.left().map(|node| *node.key()), Some(1));
    /// assert_eq!(root.right().map(|node| *node.key()), Some(3));
    /// ```
    #[inline]
    #[must_use]
    pub fn root(&self) -> Option<&Node<K, V>> {
        self.root.as_deref()
    }

    /// Returns the height of the tree, 0 when empty.
    #[inline]
    #[must_use]
    pub fn height(&self) -> usize {
        self.root().map_or(0, Node::height)
    }

    /// Returns the entry with the minimum key.
    ///
    /// # Complexity
    ///
    /// O(height)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use avlmap::AvlTreeMap;
    ///
    /// let map: AvlTreeMap<i32, &str> = [(3, "three"), (1, "one"), (2, "two")].into_iter().collect();
    /// assert_eq!(map.first(), Some((&1, &"one")));
    /// assert_eq!(map.last(), Some((&3, &"three")));
    /// ```
    #[must_use]
    pub fn first(&self) -> Option<(&K, &V)> {
        let mut node = self.root()?;
        while let Some(left) = node.left() {
            node = left;
        }
        Some(node.entry())
    }

    /// Returns the entry with the maximum key.
    ///
    /// # Complexity
    ///
    /// O(height)
    #[must_use]
    pub fn last(&self) -> Option<(&K, &V)> {
        let mut node = self.root()?;
        while let Some(right) = node.right() {
            node = right;
        }
        Some(node.entry())
    }

    /// Returns an iterator over entries in ascending key order.
    ///
    /// Same as [`in_order`](Self::in_order).
    #[inline]
    #[must_use]
    pub fn iter(&self) -> InOrder<'_, K, V> {
        self.in_order()
    }

    /// Returns an iterator over keys in ascending order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use avlmap::AvlTreeMap;
    ///
    /// let map: AvlTreeMap<i32, i32> = [(3, 30), (1, 10), (2, 20)].into_iter().collect();
    /// assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    /// assert_eq!(map.values().sum::<i32>(), 60);
    /// ```
    pub fn keys(&self) -> impl ExactSizeIterator<Item = &K> + Clone {
        self.in_order().map(|(key, _)| key)
    }

    /// Returns an iterator over values in ascending key order.
    pub fn values(&self) -> impl ExactSizeIterator<Item = &V> + Clone {
        self.in_order().map(|(_, value)| value)
    }

    /// Returns entries in ascending key order (left, node, right).
    #[must_use]
    pub fn in_order(&self) -> InOrder<'_, K, V> {
        Entries::new(self.in_order_nodes())
    }

    /// Returns entries with each node before its subtrees (node, left, right).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use avlmap::AvlTreeMap;
    ///
    /// fn order<'a>(entries: impl Iterator<Item = (&'a i32, &'a ())>) -> Vec<i32> {
    ///     entries.map(|(key, _)| *key).collect()
    /// }
    ///
    /// let map: AvlTreeMap<i32, ()> = (1..=5).map(|key| (key, ())).collect();
    ///
    /// assert_eq!(order(map.in_order()), vec![1, 2, 3, 4, 5]);
    /// assert_eq!(order(map.pre_order()), vec![2, 1, 4, 3, 5]);
    /// assert_eq!(order(map.post_order()), vec![1, 3, 5, 4, 2]);
    /// assert_eq!(order(map.level_order()), vec![2, 1, 4, 3, 5]);
    /// ```
    #[must_use]
    pub fn pre_order(&self) -> PreOrder<'_, K, V> {
        Entries::new(self.pre_order_nodes())
    }

    /// Returns entries with each node after its subtrees (left, right, node).
    #[must_use]
    pub fn post_order(&self) -> PostOrder<'_, K, V> {
        Entries::new(self.post_order_nodes())
    }

    /// Returns entries breadth-first, left to right within each level.
    #[must_use]
    pub fn level_order(&self) -> LevelOrder<'_, K, V> {
        Entries::new(self.level_order_nodes())
    }

    /// Returns nodes in ascending key order.
    #[must_use]
    pub fn in_order_nodes(&self) -> InOrderNodes<'_, K, V> {
        InOrderNodes::new(self.root(), self.length)
    }

    /// Returns nodes in pre-order.
    #[must_use]
    pub fn pre_order_nodes(&self) -> PreOrderNodes<'_, K, V> {
        PreOrderNodes::new(self.root(), self.length)
    }

    /// Returns nodes in post-order.
    #[must_use]
    pub fn post_order_nodes(&self) -> PostOrderNodes<'_, K, V> {
        PostOrderNodes::new(self.root(), self.length)
    }

    /// Returns nodes in level-order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use avlmap::AvlTreeMap;
    ///
    /// let map: AvlTreeMap<i32, ()> = (1..=3).map(|key| (key, ())).collect();
    /// let heights: Vec<(i32, usize)> = map
    ///     .level_order_nodes()
    ///     .map(|node| (*node.key(), node.height()))
    ///     .collect();
    /// assert_eq!(heights, vec![(2, 2), (1, 1), (3, 1)]);
    /// ```
    #[must_use]
    pub fn level_order_nodes(&self) -> LevelOrderNodes<'_, K, V> {
        LevelOrderNodes::new(self.root(), self.length)
    }
}

impl<K: Ord, V, B: Balance> OrderedMap<K, V, B> {
    /// Returns a reference to the value for `key`.
    ///
    /// The key may be any borrowed form of the map's key type, but the
    /// ordering on the borrowed form must match the ordering on the key type.
    ///
    /// # Errors
    ///
    /// Returns [`TreeMapError::KeyNotFound`] if the map has no entry for
    /// `key`. Use [`try_get`](Self::try_get) for a non-failing lookup.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use avlmap::{AvlTreeMap, TreeMapError};
    ///
    /// let mut map = AvlTreeMap::new();
    /// map.upsert("hello".to_string(), 42);
    ///
    /// assert_eq!(map.get("hello"), Ok(&42));
    /// assert_eq!(map.get("world"), Err(TreeMapError::KeyNotFound));
    /// ```
    pub fn get<Q>(&self, key: &Q) -> Result<&V, TreeMapError>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.try_get(key).ok_or(TreeMapError::KeyNotFound)
    }

    /// Returns a reference to the value for `key`, or `None` if absent.
    ///
    /// # Complexity
    ///
    /// O(height)
    #[must_use]
    pub fn try_get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find_node(key).map(Node::value)
    }

    /// Returns a mutable reference to the value for `key`.
    ///
    /// Only the value is reachable; keys and structure stay untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use avlmap::AvlTreeMap;
    ///
    /// let mut map = AvlTreeMap::new();
    /// map.upsert(1, 10);
    /// if let Some(value) = map.get_mut(&1) {
    ///     *value += 5;
    /// }
    /// assert_eq!(map.try_get(&1), Some(&15));
    /// ```
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut node = self.root.as_deref_mut();
        while let Some(current) = node {
            match key.cmp(current.key().borrow()) {
                Ordering::Less => node = current.left.as_deref_mut(),
                Ordering::Greater => node = current.right.as_deref_mut(),
                Ordering::Equal => return Some(current.value_mut()),
            }
        }
        None
    }

    /// Returns `true` if the map contains an entry for `key`.
    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find_node(key).is_some()
    }

    /// Returns `true` if the map maps `key` to a value equal to `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use avlmap::AvlTreeMap;
    ///
    /// let mut map = AvlTreeMap::new();
    /// map.upsert(1, "one");
    /// assert!(map.contains_entry(&1, &"one"));
    /// assert!(!map.contains_entry(&1, &"uno"));
    /// ```
    #[must_use]
    pub fn contains_entry<Q>(&self, key: &Q, value: &V) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
        V: PartialEq,
    {
        self.try_get(key) == Some(value)
    }

    fn find_node<Q>(&self, key: &Q) -> Option<&Node<K, V>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut node = self.root();
        while let Some(current) = node {
            match key.cmp(current.key().borrow()) {
                Ordering::Less => node = current.left(),
                Ordering::Greater => node = current.right(),
                Ordering::Equal => return Some(current),
            }
        }
        None
    }

    /// Inserts a new entry.
    ///
    /// # Errors
    ///
    /// Returns [`TreeMapError::DuplicateKey`] if the key is already present.
    /// The map, including the existing value, is left unchanged.
    ///
    /// # Complexity
    ///
    /// O(height)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use avlmap::{AvlTreeMap, TreeMapError};
    ///
    /// let mut map = AvlTreeMap::new();
    /// assert_eq!(map.add(5, "x"), Ok(()));
    /// assert_eq!(map.add(5, "y"), Err(TreeMapError::DuplicateKey));
    /// assert_eq!(map.get(&5), Ok(&"x"));
    /// ```
    pub fn add(&mut self, key: K, value: V) -> Result<(), TreeMapError> {
        match Self::insert_into(&mut self.root, key, value, false) {
            Insertion::Added => {
                self.length += 1;
                Ok(())
            }
            Insertion::Replaced(_) | Insertion::Rejected => {
                tracing::debug!(length = self.length, "rejected duplicate key");
                Err(TreeMapError::DuplicateKey)
            }
        }
    }

    /// Inserts an entry, or overwrites the value if the key is present.
    ///
    /// Returns the previous value for the key, if any. Overwriting keeps the
    /// original key and the tree shape.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use avlmap::AvlTreeMap;
    ///
    /// let mut map = AvlTreeMap::new();
    /// assert_eq!(map.upsert(1, "one"), None);
    /// assert_eq!(map.upsert(1, "ONE"), Some("one"));
    /// assert_eq!(map.len(), 1);
    /// assert_eq!(map[&1], "ONE");
    /// ```
    pub fn upsert(&mut self, key: K, value: V) -> Option<V> {
        match Self::insert_into(&mut self.root, key, value, true) {
            Insertion::Added => {
                self.length += 1;
                None
            }
            Insertion::Replaced(previous) => Some(previous),
            Insertion::Rejected => None,
        }
    }

    /// Recursive helper for insertion.
    ///
    /// Only a newly created node changes heights, so rebalancing on the
    /// unwind path happens for [`Insertion::Added`] alone.
    fn insert_into(link: &mut Link<K, V>, key: K, value: V, overwrite: bool) -> Insertion<V> {
        let Some(node) = link.as_deref_mut() else {
            *link = Some(Box::new(Node::leaf(key, value)));
            return Insertion::Added;
        };

        let outcome = match key.cmp(node.key()) {
            Ordering::Less => Self::insert_into(&mut node.left, key, value, overwrite),
            Ordering::Greater => Self::insert_into(&mut node.right, key, value, overwrite),
            Ordering::Equal if overwrite => return Insertion::Replaced(node.replace_value(value)),
            Ordering::Equal => return Insertion::Rejected,
        };

        if matches!(outcome, Insertion::Added) {
            Self::rebalance(link);
        }
        outcome
    }

    /// Removes the entry for `key`, returning whether one was present.
    ///
    /// Removing a missing key is not an error.
    ///
    /// # Complexity
    ///
    /// O(height)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use avlmap::AvlTreeMap;
    ///
    /// let mut map: AvlTreeMap<i32, &str> = AvlTreeMap::new();
    /// assert!(!map.remove(&5));
    ///
    /// map.upsert(5, "five");
    /// assert!(map.remove(&5));
    /// assert!(map.is_empty());
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.remove_entry(key).is_some()
    }

    /// Removes the entry for `key` and returns it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use avlmap::AvlTreeMap;
    ///
    /// let mut map = AvlTreeMap::new();
    /// map.upsert("a".to_string(), 1);
    /// assert_eq!(map.remove_entry("a"), Some(("a".to_string(), 1)));
    /// assert_eq!(map.remove_entry("a"), None);
    /// ```
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let removed = Self::remove_from(&mut self.root, key)?;
        self.length -= 1;
        Some(removed)
    }

    /// Recursive helper for removal.
    ///
    /// An unsuccessful search leaves the path untouched, so only a hit is
    /// followed by rebalancing.
    fn remove_from<Q>(link: &mut Link<K, V>, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let node = link.as_deref_mut()?;
        let removed = match key.cmp(node.key().borrow()) {
            Ordering::Less => Self::remove_from(&mut node.left, key)?,
            Ordering::Greater => Self::remove_from(&mut node.right, key)?,
            Ordering::Equal => return Self::unlink(link),
        };
        Self::rebalance(link);
        Some(removed)
    }

    /// Removes the node at `link` itself.
    ///
    /// A node with at most one child is replaced by that child. A node with
    /// two children takes over the key and value of its in-order successor,
    /// which is detached from the right subtree.
    fn unlink(link: &mut Link<K, V>) -> Option<(K, V)> {
        let mut node = link.take()?;
        match (node.left.take(), node.right.take()) {
            (None, child) | (child, None) => {
                *link = child;
                Some(node.into_entry())
            }
            (Some(left), Some(right)) => {
                let (right, (successor_key, successor_value)) = Self::detach_min(right);
                node.left = Some(left);
                node.right = right;
                let removed = node.replace_entry(successor_key, successor_value);
                *link = Some(Self::finalize(node));
                Some(removed)
            }
        }
    }

    /// Detaches the minimum node of the subtree rooted at `node`.
    ///
    /// Returns what remains of the subtree together with the detached entry.
    fn detach_min(mut node: Box<Node<K, V>>) -> (Link<K, V>, (K, V)) {
        match node.left.take() {
            Some(left) => {
                let (rest, minimum) = Self::detach_min(left);
                node.left = rest;
                (Some(Self::finalize(node)), minimum)
            }
            None => (node.right.take(), node.into_entry()),
        }
    }

    /// Runs the balancing strategy on the subtree at `link`.
    fn rebalance(link: &mut Link<K, V>) {
        *link = link.take().map(Self::finalize);
    }

    /// Refreshes the cached height of `node`, then hands it to the strategy.
    fn finalize(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
        node.update_height();
        B::rebalance(node)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, V, B> Default for OrderedMap<K, V, B> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, B> Drop for OrderedMap<K, V, B> {
    fn drop(&mut self) {
        // Tear down iteratively; an unbalanced tree can be as deep as it is long.
        drop(IntoIter::new(self.root.take(), self.length));
    }
}

impl<K: Clone, V: Clone, B> Clone for OrderedMap<K, V, B> {
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            length: self.length,
            balance: PhantomData,
        }
    }
}

impl<K: Ord, V, B: Balance> FromIterator<(K, V)> for OrderedMap<K, V, B> {
    /// Builds a map from pairs; a later pair overwrites an earlier one with the
    /// same key.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: Ord, V, B: Balance> Extend<(K, V)> for OrderedMap<K, V, B> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.upsert(key, value);
        }
    }
}

impl<K, V, B> IntoIterator for OrderedMap<K, V, B> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(mut self) -> Self::IntoIter {
        let length = std::mem::take(&mut self.length);
        IntoIter::new(self.root.take(), length)
    }
}

impl<'a, K, V, B> IntoIterator for &'a OrderedMap<K, V, B> {
    type Item = (&'a K, &'a V);
    type IntoIter = InOrder<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.in_order()
    }
}

impl<K, Q, V, B> Index<&Q> for OrderedMap<K, V, B>
where
    K: Ord + Borrow<Q>,
    Q: Ord + ?Sized,
    B: Balance,
{
    type Output = V;

    /// Returns the value for `key`.
    ///
    /// # Panics
    ///
    /// Panics if the key is not present; use [`OrderedMap::get`] to handle
    /// absence as [`TreeMapError::KeyNotFound`].
    fn index(&self, key: &Q) -> &Self::Output {
        self.try_get(key).expect("no entry found for key")
    }
}

impl<K: PartialEq, V: PartialEq, B> PartialEq for OrderedMap<K, V, B> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.in_order().eq(other.in_order())
    }
}

impl<K: Eq, V: Eq, B> Eq for OrderedMap<K, V, B> {}

impl<K: fmt::Debug, V: fmt::Debug, B> fmt::Debug for OrderedMap<K, V, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.in_order()).finish()
    }
}

impl<K, V, B> TreeRoot for OrderedMap<K, V, B> {
    type Key = K;
    type Value = V;

    fn root_node(&self) -> Option<&Node<K, V>> {
        self.root()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::balance::balance_factor;
    use rstest::rstest;

    fn keys<B>(map: &OrderedMap<i32, i32, B>) -> Vec<i32> {
        map.keys().copied().collect()
    }

    fn assert_heights<K, V>(node: Option<&Node<K, V>>) -> usize {
        node.map_or(0, |node| {
            let left = assert_heights(node.left());
            let right = assert_heights(node.right());
            assert_eq!(node.height(), 1 + left.max(right));
            node.height()
        })
    }

    #[rstest]
    fn test_new_creates_empty() {
        let map: AvlTreeMap<i32, i32> = AvlTreeMap::new();
        assert!(map.is_empty());
        assert_eq!(map.height(), 0);
        assert_eq!(map.first(), None);
    }

    #[rstest]
    fn test_ascending_inserts_stay_balanced() {
        let mut map = AvlTreeMap::new();
        for key in 1..=7 {
            map.add(key, key).unwrap();
        }

        assert_eq!(keys(&map), vec![1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(map.height(), 3);
        assert_eq!(map.root().map(|node| *node.key()), Some(4));
        assert_heights(map.root());
    }

    #[rstest]
    fn test_ascending_inserts_degenerate_without_balancing() {
        let mut map = BinarySearchTreeMap::new();
        for key in 1..=7 {
            map.add(key, key).unwrap();
        }

        assert_eq!(keys(&map), vec![1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(map.height(), 7);
        assert_heights(map.root());
    }

    #[rstest]
    fn test_rejected_add_keeps_value_and_length() {
        let mut map = AvlTreeMap::new();
        map.add(1, 10).unwrap();
        assert_eq!(map.add(1, 20), Err(TreeMapError::DuplicateKey));
        assert_eq!(map.try_get(&1), Some(&10));
        assert_eq!(map.len(), 1);
    }

    #[rstest]
    #[case::leaf(1)]
    #[case::one_child(6)]
    #[case::two_children(2)]
    #[case::root(4)]
    fn test_remove_each_node_shape(#[case] target: i32) {
        //         4
        //       /   \
        //      2     6
        //     / \     \
        //    1   3     7
        let mut map: AvlTreeMap<i32, i32> =
            [4, 2, 6, 1, 3, 7].into_iter().map(|key| (key, key * 10)).collect();

        assert_eq!(map.remove_entry(&target), Some((target, target * 10)));

        let expected: Vec<i32> = [1, 2, 3, 4, 6, 7]
            .into_iter()
            .filter(|key| *key != target)
            .collect();
        assert_eq!(keys(&map), expected);
        assert_eq!(map.len(), 5);
        assert_heights(map.root());
        assert!(balance_factor(map.root()).abs() <= 1);
    }

    #[rstest]
    fn test_remove_triggers_rotation() {
        //      2
        //     / \
        //    1   3
        //         \
        //          4
        let mut map: AvlTreeMap<i32, i32> = [2, 1, 3, 4].into_iter().map(|key| (key, key)).collect();
        assert!(map.remove(&1));

        assert_eq!(map.root().map(|node| *node.key()), Some(3));
        assert_eq!(map.height(), 2);
        assert_eq!(keys(&map), vec![2, 3, 4]);
    }

    #[rstest]
    fn test_successor_replaces_two_child_node() {
        let mut map: AvlTreeMap<i32, i32> = [2, 1, 3].into_iter().map(|key| (key, key)).collect();
        assert!(map.remove(&2));

        let root = map.root().unwrap();
        assert_eq!(root.entry(), (&3, &3));
        assert_eq!(root.left().map(|node| *node.key()), Some(1));
        assert!(root.right().is_none());
    }

    #[rstest]
    fn test_successor_with_right_child_keeps_every_entry() {
        let mut map: AvlTreeMap<i32, i32> = (1..=15).map(|key| (key, key * 10)).collect();
        assert!(map.remove(&9));

        //          8                 10
        //       /     \           /     \
        //      4       12   =>   4       12
        //     ...     /  \      ...     /  \
        //           10    14           11   14
        //             \
        //              11
        assert_eq!(map.remove_entry(&8), Some((8, 80)));

        let root = map.root().unwrap();
        assert_eq!(root.entry(), (&10, &100));
        let right = root.right().unwrap();
        assert_eq!(right.key(), &12);
        assert_eq!(right.left().map(Node::entry), Some((&11, &110)));

        let mut expected: Vec<i32> = (1..=15).collect();
        expected.retain(|key| *key != 8 && *key != 9);
        assert_eq!(keys(&map), expected);
        assert_eq!(map.len(), 13);
        assert_eq!(assert_heights(map.root()), 4);
    }

    #[rstest]
    fn test_clear_then_reuse() {
        let mut map: AvlTreeMap<i32, i32> = (0..100).map(|key| (key, key)).collect();
        map.clear();
        assert!(map.is_empty());
        map.add(1, 1).unwrap();
        assert_eq!(keys(&map), vec![1]);
    }

    #[rstest]
    fn test_drop_deep_unbalanced_tree() {
        let mut map = BinarySearchTreeMap::new();
        for key in 0..2_000 {
            map.add(key, ()).unwrap();
        }
        assert_eq!(map.height(), 2_000);
        drop(map);
    }

    #[rstest]
    fn test_debug_formats_as_map() {
        let map: AvlTreeMap<i32, &str> = [(2, "b"), (1, "a")].into_iter().collect();
        assert_eq!(format!("{map:?}"), r#"{1: "a", 2: "b"}"#);
    }
}
