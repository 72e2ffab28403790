#![warn(missing_docs)]
#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

/// A HashMap that binds a hasher and a miss value to a `HashTable`.
///
/// This module provides the keyed map interface: keys are hashed with a
/// configurable `BuildHasher` and lookups of missing keys return the map's
/// miss value.
pub mod hash_map;

pub mod hash_table;

/// Errors reported by fallible allocation.
pub mod error;

pub mod fnv;

pub use error::InsertError;
pub use error::TryReserveError;
pub use hash_map::DefaultHashBuilder;
pub use hash_map::HashMap;
pub use hash_table::HashTable;
