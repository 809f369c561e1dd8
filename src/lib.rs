//! # avlmap
//!
//! A mutable ordered key-value map built on a self-balancing binary search
//! tree.
//!
//! ## Overview
//!
//! - **Ordered map**: strict (`add`, `get`) and lenient (`upsert`, `try_get`,
//!   `remove`) operations over any `Ord` key type
//! - **Balancing strategies**: AVL rotations ([`Avl`]) or none
//!   ([`Unbalanced`]), chosen by type parameter
//! - **Traversals**: lazy in-order, pre-order, post-order and level-order
//!   iterators over entries or over nodes
//! - **Root accessor**: read-only access to the tree structure for rendering
//!   or inspection code
//!
//! ## Example
//!
//! ```rust
//! use avlmap::prelude::*;
//!
//! let mut map = AvlTreeMap::new();
//! map.add(2, "two").unwrap();
//! map.add(1, "one").unwrap();
//! map.upsert(3, "three");
//!
//! assert_eq!(map.get(&1), Ok(&"one"));
//! assert_eq!(map.add(1, "uno"), Err(TreeMapError::DuplicateKey));
//!
//! let level: Vec<i32> = map.level_order().map(|(key, _)| *key).collect();
//! assert_eq!(level, vec![2, 1, 3]);
//! ```
//!
//! ## Logging
//!
//! Rotations are reported as `tracing` events at `TRACE` level and bulk
//! operations at `DEBUG` level. The crate never installs a subscriber.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use avlmap::prelude::*;
/// ```
pub mod prelude {
    pub use crate::tree::{
        AvlTreeMap, Balance, BinarySearchTreeMap, OrderedMap, TreeMapError, TreeRoot,
    };
}

pub mod tree;

pub use tree::*;
