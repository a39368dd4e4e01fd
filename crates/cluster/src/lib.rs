//! Cluster adapter: the types and traits this workspace consumes from and
//! exposes around a gossip membership substrate. The substrate itself
//! (memberlist/serf-equivalent) is out of scope; this crate only defines
//! its interface and drives a [`registry::Registry`] from its events.

pub mod adapter;
pub mod error;
pub mod event;
pub mod member;
pub mod peer;
pub mod peer_type;
pub mod substrate;

pub use adapter::EventAdapter;
pub use error::{Error, Result};
pub use event::Event;
pub use member::{Member, PeerInfo};
pub use peer::{Peer, State};
pub use peer_type::PeerType;
pub use substrate::Substrate;

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use corelib::HashFn;
    use registry::Registry;

    use super::*;

    fn toy_hash() -> HashFn {
        Arc::new(|bytes: &[u8]| bytes.iter().map(|&b| b as u32).sum::<u32>())
    }

    fn member(name: &str, host: &str, port: u16, peer_type: &str) -> Member {
        Member {
            name: name.to_string(),
            host: host.to_string(),
            port,
            peer_type: PeerType::parse(peer_type).unwrap(),
            tags: HashMap::new(),
        }
    }

    #[test]
    fn peer_type_parse_rejects_missing_prefix() {
        assert!(PeerType::parse("peertype:registry").is_ok());
        assert!(matches!(
            PeerType::parse("registry"),
            Err(Error::InvalidPeerType(_))
        ));
    }

    #[test]
    fn peer_type_any_matches_wildcard() {
        let any = PeerType::any();
        assert!(any.is_any());
        assert_eq!(any.as_str(), "peertype:*");
    }

    #[test]
    fn member_address_joins_host_and_port() {
        let m = member("n1", "10.0.0.1", 7000, "peertype:registry");
        assert_eq!(m.address(), "10.0.0.1:7000");
    }

    #[test]
    fn peer_info_from_tags_requires_every_field() {
        let mut tags = HashMap::new();
        tags.insert("peertype".to_string(), "peertype:sentinel".to_string());
        tags.insert("api_addr".to_string(), "10.0.0.2".to_string());
        tags.insert("api_port".to_string(), "8080".to_string());
        tags.insert("name".to_string(), "n2".to_string());
        let info = PeerInfo::from_tags(&tags).unwrap();
        assert_eq!(info.api_address(), "10.0.0.2:8080");

        tags.remove("api_port");
        assert!(PeerInfo::from_tags(&tags).is_none());
    }

    #[test]
    fn event_adapter_drives_registry_add_remove_update() {
        let registry = Arc::new(Registry::new(toy_hash(), 2));
        let adapter = EventAdapter::new(registry.clone());

        let m = member("n1", "host1", 9000, "peertype:registry");
        adapter.handle(Event::MemberJoined(vec![m.clone()]));
        assert!(registry.info("peertype:registry").is_ok());

        let mut updated = m.clone();
        updated
            .tags
            .insert("zone".to_string(), "eu-west".to_string());
        adapter.handle(Event::MemberUpdated(vec![updated]));

        adapter.handle(Event::MemberLeft(vec![m]));
        assert!(registry.locate("peertype:registry", "anything").is_none());
    }

    #[test]
    fn event_adapter_treats_failed_like_left() {
        let registry = Arc::new(Registry::new(toy_hash(), 2));
        let adapter = EventAdapter::new(registry.clone());
        let m = member("n1", "host1", 9000, "peertype:registry");
        adapter.handle(Event::MemberJoined(vec![m.clone()]));
        adapter.handle(Event::MemberFailed(vec![m]));
        assert!(registry.locate("peertype:registry", "anything").is_none());
    }

    /// Minimal in-memory stand-in for a real gossip substrate, used only to
    /// exercise [`Peer`] end to end.
    struct FakeSubstrate {
        name: String,
        address: String,
        members: Mutex<Vec<PeerInfo>>,
    }

    impl Substrate for FakeSubstrate {
        fn join(&self) -> Result<usize> {
            Ok(self.members.lock().unwrap().len())
        }

        fn leave(&self) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> String {
            self.name.clone()
        }

        fn address(&self) -> String {
            self.address.clone()
        }

        fn cluster_size(&self) -> usize {
            self.members.lock().unwrap().len()
        }

        fn walk(&self, visit: &mut dyn FnMut(&PeerInfo) -> Result<()>) -> Result<()> {
            for info in self.members.lock().unwrap().iter() {
                visit(info)?;
            }
            Ok(())
        }
    }

    #[test]
    fn peer_current_buckets_by_peer_type_and_honors_wildcard() {
        let substrate = Arc::new(FakeSubstrate {
            name: "self".to_string(),
            address: "self:7000".to_string(),
            members: Mutex::new(vec![
                PeerInfo {
                    name: "n1".to_string(),
                    peer_type: PeerType::parse("peertype:registry").unwrap(),
                    api_host: "10.0.0.1".to_string(),
                    api_port: 8080,
                },
                PeerInfo {
                    name: "n2".to_string(),
                    peer_type: PeerType::parse("peertype:sentinel").unwrap(),
                    api_host: "10.0.0.2".to_string(),
                    api_port: 8081,
                },
            ]),
        });
        let peer = Peer::new(substrate);

        let registry_only = peer
            .current(&PeerType::parse("peertype:registry").unwrap())
            .unwrap();
        assert_eq!(registry_only.len(), 1);

        let all = peer.current(&PeerType::any()).unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(peer.cluster_size(), 2);
    }
}
