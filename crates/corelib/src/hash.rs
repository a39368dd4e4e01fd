//! The default 32-bit hash function used to place hosts on a `HashRing`.

use std::sync::Arc;

/// Signature shared by every ring in a `Registry`: bytes in, a 32-bit
/// digest out. Boxed behind `Arc` so a single function can be cloned cheaply
/// across every per-peer-type ring (identical Add histories with the same
/// hash function are required to produce identical checksums).
pub type HashFn = Arc<dyn Fn(&[u8]) -> u32 + Send + Sync>;

/// `xxh32` with a fixed, zero seed. Deterministic across processes and
/// across the cluster, which is what checksum comparison depends on.
pub fn xxh32(bytes: &[u8]) -> u32 {
    xxhash_rust::xxh32::xxh32(bytes, 0)
}

/// The ring hash function used unless a caller supplies their own (tests
/// commonly substitute a toy function to get predictable fixtures).
pub fn default_hash_fn() -> HashFn {
    Arc::new(xxh32)
}
