//! [`Registry`]: per-peer-type ring collection plus an address-keyed index,
//! kept consistent under a single reader-writer lock.

use std::collections::HashMap;

use corelib::{HashFn, HashRing};
use parking_lot::RwLock;

use crate::error::{Error, Result};
use crate::info::Info;
use crate::key::Key;

struct Inner {
    rings: HashMap<String, HashRing>,
    // address -> name -> Key. A single address may host keys of several
    // peer-types; the ring for each type separates them.
    index: HashMap<String, HashMap<String, Key>>,
}

/// Multiplexes a [`HashRing`] per peer-type and keeps an address→member
/// index consistent with them.
pub struct Registry {
    hash_fn: HashFn,
    replication_factor: usize,
    inner: RwLock<Inner>,
}

impl Registry {
    pub fn new(hash_fn: HashFn, replication_factor: usize) -> Self {
        Registry {
            hash_fn,
            replication_factor,
            inner: RwLock::new(Inner {
                rings: HashMap::new(),
                index: HashMap::new(),
            }),
        }
    }

    /// Adds `key`, creating the ring for `key.r#type` on first use. Always
    /// records `key` in the index regardless of what the ring's `add`
    /// reported (a second Key with the same address but a different name
    /// still needs to be locatable).
    pub fn add(&self, key: Key) -> bool {
        let mut inner = self.inner.write();
        let ring = inner
            .rings
            .entry(key.r#type.clone())
            .or_insert_with(|| HashRing::new(self.hash_fn.clone(), self.replication_factor));
        let added = ring.add(&key.address);
        inner
            .index
            .entry(key.address.clone())
            .or_default()
            .insert(key.name.clone(), key);
        added
    }

    /// Removes `key` from its ring (if the ring exists) and from the index.
    /// Always returns true: a missing ring or a missing index entry is not
    /// an error.
    pub fn remove(&self, key: &Key) -> bool {
        let mut inner = self.inner.write();
        if let Some(ring) = inner.rings.get(&key.r#type) {
            ring.remove(&key.address);
        }
        if let Some(names) = inner.index.get_mut(&key.address) {
            names.remove(&key.name);
        }
        true
    }

    /// Replaces the Key stored at `index[key.address][key.name]` in place.
    /// Does not touch the ring: address and name are invariant across
    /// updates, only tags may change.
    pub fn update(&self, key: Key) -> bool {
        let mut inner = self.inner.write();
        let ring_has_address = inner
            .rings
            .get(&key.r#type)
            .map(|ring| ring.contains(&key.address))
            .unwrap_or(false);
        if !ring_has_address {
            return false;
        }
        match inner.index.get_mut(&key.address) {
            Some(names) if names.contains_key(&key.name) => {
                names.insert(key.name.clone(), key);
                true
            }
            _ => false,
        }
    }

    /// Resolves `routing_value` against the ring for `peer_type`, then
    /// returns any Key of that type registered at the resolved address.
    pub fn locate(&self, peer_type: &str, routing_value: &str) -> Option<Key> {
        let inner = self.inner.read();
        let ring = inner.rings.get(peer_type)?;
        let address = ring.lookup(routing_value)?;
        let names = inner.index.get(&address)?;
        let mut candidates: Vec<&Key> = names.values().filter(|k| k.r#type == peer_type).collect();
        candidates.sort_by(|a, b| a.name.cmp(&b.name));
        candidates.into_iter().next().cloned()
    }

    /// Snapshot of checksum, per-virtual-node hashes and keys for
    /// `peer_type`'s ring.
    pub fn info(&self, peer_type: &str) -> Result<Info> {
        let inner = self.inner.read();
        let ring = inner
            .rings
            .get(peer_type)
            .ok_or_else(|| Error::NoRingForType(peer_type.to_string()))?;

        let mut hashes = HashMap::new();
        ring.walk(|hash_hex, host| {
            hashes.insert(hash_hex.to_string(), host.to_string());
            Ok::<(), corelib::Error>(())
        })?;

        let mut keys: HashMap<String, Vec<Key>> = HashMap::new();
        for address in hashes.values() {
            if let Some(names) = inner.index.get(address) {
                keys.entry(address.clone())
                    .or_default()
                    .extend(names.values().cloned());
            }
        }

        let checksum = format!("{:08x}", ring.checksum()?);
        Ok(Info {
            checksum,
            hashes,
            keys,
        })
    }

    /// Zero-padded lowercase 8-hex-digit checksum of `peer_type`'s ring.
    pub fn checksum(&self, peer_type: &str) -> Result<String> {
        let inner = self.inner.read();
        let ring = inner
            .rings
            .get(peer_type)
            .ok_or_else(|| Error::NoRingForType(peer_type.to_string()))?;
        Ok(format!("{:08x}", ring.checksum()?))
    }
}
