//! Binary search tree maps with pluggable balancing.
//!
//! This module provides the building blocks of the crate:
//!
//! - [`OrderedMap`]: the map itself, generic over a [`Balance`] strategy
//! - [`AvlTreeMap`]: `OrderedMap` kept height-balanced with AVL rotations
//! - [`BinarySearchTreeMap`]: `OrderedMap` without rebalancing
//! - [`Node`]: read-only view of a tree node (key, value, children, height)
//! - [`TreeRoot`]: read-only root accessor for structural consumers
//! - Traversal iterators in in-order, pre-order, post-order and level-order,
//!   over entries or over nodes
//!
//! # Examples
//!
//! ```rust
//! use avlmap::tree::{AvlTreeMap, TreeRoot};
//!
//! let mut map = AvlTreeMap::new();
//! for key in [10, 20, 5, 4, 15] {
//!     map.add(key, key.to_string()).unwrap();
//! }
//!
//! let keys: Vec<i32> = map.keys().copied().collect();
//! assert_eq!(keys, vec![4, 5, 10, 15, 20]);
//! assert_eq!(map.root_node().map(|node| *node.key()), Some(10));
//! assert_eq!(map.tree_height(), 3);
//! ```

mod balance;
mod error;
mod map;
mod node;
mod root;
mod traversal;

pub use balance::{Avl, Balance, Unbalanced, balance_factor};
pub use error::TreeMapError;
pub use map::{AvlTreeMap, BinarySearchTreeMap, OrderedMap};
pub use node::Node;
pub use root::TreeRoot;
pub use traversal::{
    Entries, InOrder, InOrderNodes, IntoIter, LevelOrder, LevelOrderNodes, PostOrder,
    PostOrderNodes, PreOrder, PreOrderNodes,
};
