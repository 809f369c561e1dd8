//! Error types for map operations.
//!
//! Only the strict operations fail: [`add`](super::OrderedMap::add) on an
//! existing key and [`get`](super::OrderedMap::get) on a missing one. Their
//! lenient counterparts ([`upsert`](super::OrderedMap::upsert),
//! [`try_get`](super::OrderedMap::try_get),
//! [`remove`](super::OrderedMap::remove)) report absence through their return
//! value instead.

use thiserror::Error;

/// Represents the recoverable failures of [`OrderedMap`](super::OrderedMap).
///
/// # Examples
///
/// ```rust
/// use avlmap::{AvlTreeMap, TreeMapError};
///
/// let mut map = AvlTreeMap::new();
/// map.add(5, "x").unwrap();
///
/// assert_eq!(map.add(5, "y"), Err(TreeMapError::DuplicateKey));
/// assert_eq!(map.get(&6), Err(TreeMapError::KeyNotFound));
/// assert_eq!(format!("{}", TreeMapError::KeyNotFound), "key not found");
/// ```
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TreeMapError {
    /// A strict insertion found the key already present.
    #[error("duplicate key: the map already contains an entry for this key")]
    DuplicateKey,
    /// A strict lookup found no entry for the key.
    #[error("key not found")]
    KeyNotFound,
}
