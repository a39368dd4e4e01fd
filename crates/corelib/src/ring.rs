//! Consistent hash ring over an [`OrderedMap`](crate::tree::OrderedMap).

use std::collections::HashSet;

use parking_lot::RwLock;

use crate::error::{Error, Result};
use crate::hash::HashFn;
use crate::tree::OrderedMap;

struct Inner {
    hosts: HashSet<String>,
    tree: OrderedMap,
}

/// A consistent-hash ring: a set of hosts, each replicated onto
/// `replication_factor` virtual nodes on an ordered map keyed by hash.
///
/// Reads (`lookup*`, `contains`, `hosts`, `len`, `walk`, `checksum`) may run
/// concurrently with each other; `add`/`remove` take an exclusive lock over
/// the host set and tree together so the two never drift apart.
pub struct HashRing {
    hash_fn: HashFn,
    replication_factor: usize,
    inner: RwLock<Inner>,
}

impl HashRing {
    pub fn new(hash_fn: HashFn, replication_factor: usize) -> Self {
        HashRing {
            hash_fn,
            replication_factor,
            inner: RwLock::new(Inner {
                hosts: HashSet::new(),
                tree: OrderedMap::new(),
            }),
        }
    }

    fn virtual_key(&self, host: &str, index: usize) -> u32 {
        // No separator: "host" + i, byte-for-byte, so independently built
        // rings over the same Add history hash to the same slots.
        let vkey = format!("{host}{index}");
        (self.hash_fn)(vkey.as_bytes())
    }

    /// Adds `host`, replicated onto `replication_factor` virtual nodes.
    /// Returns `false` without modifying the ring if `host` is already
    /// present. A virtual key that collides with an already-occupied slot
    /// is tolerated: the existing occupant is kept and the newcomer simply
    /// doesn't get that slot.
    pub fn add(&self, host: &str) -> bool {
        let mut inner = self.inner.write();
        if inner.hosts.contains(host) {
            return false;
        }
        inner.hosts.insert(host.to_string());
        for i in 0..self.replication_factor {
            let key = self.virtual_key(host, i);
            inner.tree.insert(key, host.to_string());
        }
        true
    }

    /// Removes `host` and every virtual node it owns. Returns `false`
    /// without modifying the ring if `host` was never added. A virtual key
    /// whose slot was won by a different host during a prior collision is
    /// left untouched.
    pub fn remove(&self, host: &str) -> bool {
        let mut inner = self.inner.write();
        if !inner.hosts.contains(host) {
            return false;
        }
        for i in 0..self.replication_factor {
            let key = self.virtual_key(host, i);
            if inner.tree.search(key).as_deref() == Some(host) {
                inner.tree.delete(key);
            }
        }
        inner.hosts.remove(host);
        true
    }

    /// Checks whether `host_or_key` names a host on the ring, or (failing
    /// that) whether its raw, unsalted hash happens to land on an occupied
    /// slot.
    pub fn contains(&self, host_or_key: &str) -> bool {
        let inner = self.inner.read();
        if inner.hosts.contains(host_or_key) {
            return true;
        }
        let hash = (self.hash_fn)(host_or_key.as_bytes());
        inner.tree.search(hash).is_some()
    }

    /// Owner of `key`, or `None` if the ring is empty.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.lookup_n(key, 1).into_iter().next()
    }

    /// Up to `n` distinct owners of `key`, in consistent-hash order starting
    /// at the successor of `hash_fn(key)`.
    pub fn lookup_n(&self, key: &str, n: usize) -> Vec<String> {
        let inner = self.inner.read();
        let hash = (self.hash_fn)(key.as_bytes());
        inner.tree.lookup_n_unique_at(n, hash)
    }

    /// Snapshot of the unique hosts on the ring.
    pub fn hosts(&self) -> HashSet<String> {
        self.inner.read().hosts.clone()
    }

    /// Number of unique hosts (not virtual nodes).
    pub fn len(&self) -> usize {
        self.inner.read().hosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Visits every virtual node in ascending hash order as
    /// `(hash_hex, host)`, where `hash_hex` is lowercase and zero-padded to
    /// 8 hex digits. The visitor may abort the walk by returning `Err`.
    pub fn walk<E>(
        &self,
        mut visit: impl FnMut(&str, &str) -> std::result::Result<(), E>,
    ) -> std::result::Result<(), E> {
        let inner = self.inner.read();
        inner
            .tree
            .walk(|node| visit(&format!("{:08x}", node.key), node.value))
    }

    /// Deterministic fingerprint of the ring's contents: an in-order walk
    /// emitting `"<color-tag>:<host>"` per virtual node, joined with `;`,
    /// hashed with the ring's own hash function. Two rings built from the
    /// same ordered Add history with the same hash function and
    /// replication factor always agree.
    pub fn checksum(&self) -> Result<u32> {
        let inner = self.inner.read();
        let mut parts = Vec::with_capacity(inner.tree.len());
        inner.tree.walk(|node| {
            parts.push(format!("{}:{}", node.color.tag(), node.value));
            Ok::<(), Error>(())
        })?;
        let joined = parts.join(";");
        Ok((self.hash_fn)(joined.as_bytes()))
    }
}
