//! Integration tests for `Registry`, exercised through its public API only.

use std::collections::HashMap;
use std::sync::Arc;

use corelib::HashFn;
use registry::{Key, Registry};

fn toy_hash() -> HashFn {
    Arc::new(|bytes: &[u8]| bytes.iter().map(|&b| b as u32).sum::<u32>())
}

fn key(name: &str, r#type: &str, address: &str) -> Key {
    Key::new(name, r#type, address, HashMap::new())
}

#[test]
fn lazily_creates_one_ring_per_peer_type() {
    let registry = Registry::new(toy_hash(), 3);
    registry.add(key("n1", "store", "1.1.1.1:9000"));
    registry.add(key("n2", "gateway", "1.1.1.1:9001"));

    assert!(registry.info("store").is_ok());
    assert!(registry.info("gateway").is_ok());
    assert!(registry.info("unused-type").is_err());
}

#[test]
fn multiple_addresses_resolve_to_different_keys() {
    let registry = Registry::new(toy_hash(), 4);
    registry.add(key("n1", "store", "a:1"));
    registry.add(key("n2", "store", "b:2"));
    registry.add(key("n3", "store", "c:3"));

    let located = registry.locate("store", "some-routing-value").unwrap();
    assert!(["n1", "n2", "n3"].contains(&located.name.as_str()));
}

#[test]
fn remove_drops_address_from_ring_once_last_key_there_is_gone() {
    let registry = Registry::new(toy_hash(), 2);
    let k = key("n1", "store", "only:1");
    registry.add(k.clone());
    assert!(registry.locate("store", "anything").is_some());

    registry.remove(&k);
    assert!(registry.locate("store", "anything").is_none());
}
