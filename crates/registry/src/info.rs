//! [`Info`]: a snapshot of one peer-type's ring, used by operators to
//! compare ring state across nodes.

use std::collections::HashMap;

use crate::key::Key;

/// `{checksum, hashes, keys}` for a single peer-type.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Info {
    /// Zero-padded, lowercase, 8-hex-digit checksum of the ring.
    pub checksum: String,
    /// Every virtual node's hash (same encoding as `checksum`) to the host
    /// address it resolves to.
    pub hashes: HashMap<String, String>,
    /// Every address present in the ring to the keys registered at it.
    pub keys: HashMap<String, Vec<Key>>,
}
