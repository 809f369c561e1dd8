//! Balancing strategies applied on the unwind path of every mutation.
//!
//! [`OrderedMap`](super::OrderedMap) never restructures the tree on its own.
//! After each recursive insertion or deletion step returns a subtree, the map
//! refreshes the cached height of the subtree root and hands it to its
//! [`Balance`] strategy, which may rotate the subtree back into shape.
//!
//! - [`Avl`]: restores `|height(left) - height(right)| <= 1` with single and
//!   double rotations.
//! - [`Unbalanced`]: leaves the subtree as it is, yielding a plain binary
//!   search tree.
//!
//! # Rotation cases
//!
//! | balance factor | child factor          | case        | action                               |
//! |----------------|-----------------------|-------------|--------------------------------------|
//! | `> 1`          | `factor(left) < 0`    | Left-Right  | rotate left child left, node right   |
//! | `> 1`          | otherwise             | Left-Left   | rotate node right                    |
//! | `< -1`         | `factor(right) > 0`   | Right-Left  | rotate right child right, node left  |
//! | `< -1`         | otherwise             | Right-Right | rotate node left                     |

use super::node::{Node, height};

/// A rebalancing hook invoked after every structural change to a subtree.
///
/// Implementations receive the root of a subtree whose cached heights are all
/// current and return the (possibly different) root of the same key set.
/// Heights are maintained by the map, so a strategy that returns `node`
/// unchanged still leaves a consistent tree.
pub trait Balance {
    /// Restructures the subtree rooted at `node`, if needed.
    fn rebalance<K, V>(node: Box<Node<K, V>>) -> Box<Node<K, V>>;
}

/// Height-balancing with AVL rotations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Avl;

/// No rebalancing; the shape follows insertion order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Unbalanced;

/// Which of the four AVL cases a rebalance applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Rotation {
    LeftLeft,
    LeftRight,
    RightRight,
    RightLeft,
}

impl Rotation {
    const fn as_str(self) -> &'static str {
        match self {
            Self::LeftLeft => "left-left",
            Self::LeftRight => "left-right",
            Self::RightRight => "right-right",
            Self::RightLeft => "right-left",
        }
    }
}

/// Returns `height(left) - height(right)`, or 0 for an absent subtree.
///
/// # Examples
///
/// ```rust
/// use avlmap::{AvlTreeMap, balance_factor};
///
/// let map: AvlTreeMap<i32, ()> = (0..7).map(|key| (key, ())).collect();
/// assert_eq!(balance_factor(map.root()), 0);
/// assert_eq!(balance_factor::<i32, ()>(None), 0);
/// ```
#[must_use]
#[allow(clippy::cast_possible_wrap)] // heights never approach isize::MAX
pub fn balance_factor<K, V>(node: Option<&Node<K, V>>) -> isize {
    node.map_or(0, |node| {
        height(node.left()) as isize - height(node.right()) as isize
    })
}

impl Balance for Unbalanced {
    #[inline]
    fn rebalance<K, V>(node: Box<Node<K, V>>) -> Box<Node<K, V>> {
        node
    }
}

impl Balance for Avl {
    fn rebalance<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
        let factor = balance_factor(Some(&node));
        let rotation = if factor > 1 {
            if balance_factor(node.left()) < 0 {
                Rotation::LeftRight
            } else {
                Rotation::LeftLeft
            }
        } else if factor < -1 {
            if balance_factor(node.right()) > 0 {
                Rotation::RightLeft
            } else {
                Rotation::RightRight
            }
        } else {
            return node;
        };

        tracing::trace!(case = rotation.as_str(), factor, "rebalancing subtree");

        let balanced = match rotation {
            Rotation::LeftLeft => rotate_right(node),
            Rotation::LeftRight => {
                node.left = node.left.take().map(rotate_left);
                rotate_right(node)
            }
            Rotation::RightRight => rotate_left(node),
            Rotation::RightLeft => {
                node.right = node.right.take().map(rotate_right);
                rotate_left(node)
            }
        };

        debug_assert!(
            balance_factor(Some(&balanced)).abs() <= 1,
            "rotation left the subtree out of balance"
        );
        balanced
    }
}

/// Rotates the subtree to the right around `node`.
///
/// The left child becomes the new root; its right subtree moves under
/// `node`. Heights are recomputed bottom-up.
fn rotate_right<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    let Some(mut pivot) = node.left.take() else {
        return node;
    };
    node.left = pivot.right.take();
    node.update_height();
    pivot.right = Some(node);
    pivot.update_height();
    pivot
}

/// Rotates the subtree to the left around `node`. Mirror of [`rotate_right`].
fn rotate_left<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    let Some(mut pivot) = node.right.take() else {
        return node;
    };
    node.right = pivot.left.take();
    node.update_height();
    pivot.left = Some(node);
    pivot.update_height();
    pivot
}
