//! Core library for the consistent-hash registry.
//!
//! This crate provides the data structures a cluster-membership registry is
//! built on:
//! - [`tree::OrderedMap`], a red-black tree ordered map keyed by hash
//! - [`ring::HashRing`], a consistent-hash ring over an `OrderedMap`
//! - [`hash`], the shared hash-function type and its default implementation

pub mod error;
pub mod hash;
pub mod ring;
pub mod tree;

pub use error::{Error, Result};
pub use hash::{default_hash_fn, xxh32, HashFn};
pub use ring::HashRing;
pub use tree::{Color, NodeView, OrderedMap};
