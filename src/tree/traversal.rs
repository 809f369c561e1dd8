//! Lazy traversal iterators over the tree.
//!
//! Every traversal carries its own explicit state (a stack or a queue of
//! borrowed nodes), so it produces entries one at a time without recursion
//! and without collecting the whole tree up front. Calling a traversal method
//! on the map again yields a fresh, independent iterator over the current
//! contents; cloning an iterator forks it at its current position.
//!
//! Node-level iterators ([`InOrderNodes`], [`PreOrderNodes`],
//! [`PostOrderNodes`], [`LevelOrderNodes`]) yield `&Node` for consumers that
//! need structure (children, heights). [`Entries`] adapts any of them into
//! `(&K, &V)` pairs.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use super::node::{Link, Node};

// =============================================================================
// In-order
// =============================================================================

/// Yields nodes in ascending key order (left, node, right).
pub struct InOrderNodes<'a, K, V> {
    stack: Vec<&'a Node<K, V>>,
    remaining: usize,
}

impl<'a, K, V> InOrderNodes<'a, K, V> {
    pub(crate) fn new(root: Option<&'a Node<K, V>>, length: usize) -> Self {
        let mut iterator = Self {
            stack: Vec::new(),
            remaining: length,
        };
        iterator.push_left_spine(root);
        iterator
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<K, V>>) {
        while let Some(current) = node {
            self.stack.push(current);
            node = current.left();
        }
    }
}

impl<'a, K, V> Iterator for InOrderNodes<'a, K, V> {
    type Item = &'a Node<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        self.remaining -= 1;
        Some(node)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

// =============================================================================
// Pre-order
// =============================================================================

/// Yields each node before its subtrees (node, left, right).
pub struct PreOrderNodes<'a, K, V> {
    stack: Vec<&'a Node<K, V>>,
    remaining: usize,
}

impl<'a, K, V> PreOrderNodes<'a, K, V> {
    pub(crate) fn new(root: Option<&'a Node<K, V>>, length: usize) -> Self {
        Self {
            stack: root.into_iter().collect(),
            remaining: length,
        }
    }
}

impl<'a, K, V> Iterator for PreOrderNodes<'a, K, V> {
    type Item = &'a Node<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes first so that left is popped first.
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        self.remaining -= 1;
        Some(node)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

// =============================================================================
// Post-order
// =============================================================================

/// Yields each node after its subtrees (left, right, node).
pub struct PostOrderNodes<'a, K, V> {
    /// Pending nodes, flagged `true` once their children have been scheduled.
    stack: Vec<(&'a Node<K, V>, bool)>,
    remaining: usize,
}

impl<'a, K, V> PostOrderNodes<'a, K, V> {
    pub(crate) fn new(root: Option<&'a Node<K, V>>, length: usize) -> Self {
        Self {
            stack: root.map(|node| (node, false)).into_iter().collect(),
            remaining: length,
        }
    }
}

impl<'a, K, V> Iterator for PostOrderNodes<'a, K, V> {
    type Item = &'a Node<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, expanded)) = self.stack.pop() {
            if expanded {
                self.remaining -= 1;
                return Some(node);
            }
            self.stack.push((node, true));
            self.stack.extend(node.right().map(|right| (right, false)));
            self.stack.extend(node.left().map(|left| (left, false)));
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

// =============================================================================
// Level-order
// =============================================================================

/// Yields nodes breadth-first, left to right within each level.
pub struct LevelOrderNodes<'a, K, V> {
    queue: VecDeque<&'a Node<K, V>>,
    remaining: usize,
}

impl<'a, K, V> LevelOrderNodes<'a, K, V> {
    pub(crate) fn new(root: Option<&'a Node<K, V>>, length: usize) -> Self {
        Self {
            queue: root.into_iter().collect(),
            remaining: length,
        }
    }
}

impl<'a, K, V> Iterator for LevelOrderNodes<'a, K, V> {
    type Item = &'a Node<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left());
        self.queue.extend(node.right());
        self.remaining -= 1;
        Some(node)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

// Manual impls: deriving would demand `K: Clone, V: Clone` for what is only a
// collection of references.
macro_rules! impl_node_iterator_traits {
    ($($iterator:ident { $field:ident }),* $(,)?) => {
        $(
            impl<K, V> Clone for $iterator<'_, K, V> {
                fn clone(&self) -> Self {
                    Self {
                        $field: self.$field.clone(),
                        remaining: self.remaining,
                    }
                }
            }

            impl<K, V> ExactSizeIterator for $iterator<'_, K, V> {
                fn len(&self) -> usize {
                    self.remaining
                }
            }

            impl<K, V> FusedIterator for $iterator<'_, K, V> {}
        )*
    };
}

impl_node_iterator_traits!(
    InOrderNodes { stack },
    PreOrderNodes { stack },
    PostOrderNodes { stack },
    LevelOrderNodes { queue },
);

// =============================================================================
// Entry adapter
// =============================================================================

/// Adapts a node iterator into `(&K, &V)` pairs in the same order.
#[derive(Clone)]
pub struct Entries<I> {
    nodes: I,
}

impl<I> Entries<I> {
    pub(crate) const fn new(nodes: I) -> Self {
        Self { nodes }
    }
}

impl<'a, K: 'a, V: 'a, I> Iterator for Entries<I>
where
    I: Iterator<Item = &'a Node<K, V>>,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.nodes.next().map(Node::entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.nodes.size_hint()
    }
}

impl<'a, K: 'a, V: 'a, I> ExactSizeIterator for Entries<I> where
    I: ExactSizeIterator<Item = &'a Node<K, V>>
{
}

impl<'a, K: 'a, V: 'a, I> FusedIterator for Entries<I> where
    I: FusedIterator<Item = &'a Node<K, V>>
{
}

/// Entries in ascending key order.
pub type InOrder<'a, K, V> = Entries<InOrderNodes<'a, K, V>>;
/// Entries in pre-order.
pub type PreOrder<'a, K, V> = Entries<PreOrderNodes<'a, K, V>>;
/// Entries in post-order.
pub type PostOrder<'a, K, V> = Entries<PostOrderNodes<'a, K, V>>;
/// Entries in level-order.
pub type LevelOrder<'a, K, V> = Entries<LevelOrderNodes<'a, K, V>>;

// =============================================================================
// Owning iterator
// =============================================================================

/// Consumes the tree, yielding owned entries in ascending key order.
///
/// Nodes are released one at a time, so dropping a partially consumed
/// iterator never recurses deeper than the remaining stack.
pub struct IntoIter<K, V> {
    stack: Vec<Box<Node<K, V>>>,
    remaining: usize,
}

impl<K, V> IntoIter<K, V> {
    pub(crate) fn new(root: Link<K, V>, length: usize) -> Self {
        let mut iterator = Self {
            stack: Vec::new(),
            remaining: length,
        };
        iterator.push_left_spine(root);
        iterator
    }

    fn push_left_spine(&mut self, mut link: Link<K, V>) {
        while let Some(mut node) = link {
            link = node.left.take();
            self.stack.push(node);
        }
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        let mut node = self.stack.pop()?;
        self.push_left_spine(node.right.take());
        self.remaining -= 1;
        Some(node.into_entry())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<K, V> Drop for IntoIter<K, V> {
    fn drop(&mut self) {
        for _ in self.by_ref() {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    /// Builds the tree
    ///
    /// ```text
    ///         4
    ///       /   \
    ///      2     6
    ///     / \     \
    ///    1   3     7
    /// ```
    fn sample() -> Box<Node<i32, char>> {
        fn node(key: i32, left: Link<i32, char>, right: Link<i32, char>) -> Link<i32, char> {
            let value = char::from(b'a' + u8::try_from(key).unwrap());
            let mut node = Box::new(Node::leaf(key, value));
            node.left = left;
            node.right = right;
            node.update_height();
            Some(node)
        }
        node(
            4,
            node(2, node(1, None, None), node(3, None, None)),
            node(6, None, node(7, None, None)),
        )
        .unwrap()
    }

    fn keys<'a>(nodes: impl Iterator<Item = &'a Node<i32, char>>) -> Vec<i32> {
        nodes.map(|node| *node.key()).collect()
    }

    #[rstest]
    fn test_in_order_is_ascending() {
        let root = sample();
        assert_eq!(keys(InOrderNodes::new(Some(&root), 6)), vec![1, 2, 3, 4, 6, 7]);
    }

    #[rstest]
    fn test_pre_order_visits_node_first() {
        let root = sample();
        assert_eq!(keys(PreOrderNodes::new(Some(&root), 6)), vec![4, 2, 1, 3, 6, 7]);
    }

    #[rstest]
    fn test_post_order_visits_node_last() {
        let root = sample();
        assert_eq!(keys(PostOrderNodes::new(Some(&root), 6)), vec![1, 3, 2, 7, 6, 4]);
    }

    #[rstest]
    fn test_level_order_is_breadth_first() {
        let root = sample();
        assert_eq!(keys(LevelOrderNodes::new(Some(&root), 6)), vec![4, 2, 6, 1, 3, 7]);
    }

    #[rstest]
    fn test_empty_tree_yields_nothing() {
        assert_eq!(InOrderNodes::<i32, char>::new(None, 0).count(), 0);
        assert_eq!(PreOrderNodes::<i32, char>::new(None, 0).count(), 0);
        assert_eq!(PostOrderNodes::<i32, char>::new(None, 0).count(), 0);
        assert_eq!(LevelOrderNodes::<i32, char>::new(None, 0).count(), 0);
    }

    #[rstest]
    fn test_len_counts_down() {
        let root = sample();
        let mut iterator = PostOrderNodes::new(Some(&root), 6);
        assert_eq!(iterator.len(), 6);
        iterator.next();
        iterator.next();
        assert_eq!(iterator.len(), 4);
    }

    #[rstest]
    fn test_clone_forks_at_current_position() {
        let root = sample();
        let mut iterator = InOrderNodes::new(Some(&root), 6);
        iterator.next();
        let fork = iterator.clone();

        assert_eq!(keys(iterator), vec![2, 3, 4, 6, 7]);
        assert_eq!(keys(fork), vec![2, 3, 4, 6, 7]);
    }

    #[rstest]
    fn test_entries_adapter_yields_pairs() {
        let root = sample();
        let pairs: Vec<(i32, char)> = Entries::new(LevelOrderNodes::new(Some(&root), 6))
            .take(3)
            .map(|(key, value)| (*key, *value))
            .collect();
        assert_eq!(pairs, vec![(4, 'e'), (2, 'c'), (6, 'g')]);
    }

    #[rstest]
    fn test_into_iter_yields_owned_entries_in_order() {
        let entries: Vec<(i32, char)> = IntoIter::new(Some(sample()), 6).collect();
        assert_eq!(
            entries,
            vec![(1, 'b'), (2, 'c'), (3, 'd'), (4, 'e'), (6, 'g'), (7, 'h')]
        );
    }

    #[rstest]
    fn test_into_iter_partial_drop() {
        let mut iterator = IntoIter::new(Some(sample()), 6);
        assert_eq!(iterator.next(), Some((1, 'b')));
        assert_eq!(iterator.len(), 5);
        drop(iterator);
    }
}
