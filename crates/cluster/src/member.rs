//! [`Member`] and [`PeerInfo`]: the snapshots the gossip substrate hands the
//! event adapter, and the payload it advertises about itself.

use std::collections::HashMap;

use crate::peer_type::PeerType;

/// Tag keys the substrate is expected to encode on every member.
pub const PEER_TYPE_TAG: &str = "peertype";
pub const API_ADDR_TAG: &str = "api_addr";
pub const API_PORT_TAG: &str = "api_port";
pub const NAME_TAG: &str = "name";

/// An immutable snapshot of a cluster participant, as delivered by a
/// [`crate::substrate::Substrate`] event. Equality is by `name`.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Member {
    pub name: String,
    pub host: String,
    pub port: u16,
    pub peer_type: PeerType,
    pub tags: HashMap<String, String>,
}

impl Member {
    /// `host:port`, matching `net.JoinHostPort`.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl PartialEq for Member {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Member {}

/// The payload a member advertises about its HTTP API, derived from a
/// member's tags.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct PeerInfo {
    pub name: String,
    pub peer_type: PeerType,
    pub api_host: String,
    pub api_port: u16,
}

impl PeerInfo {
    /// Decodes `{peertype, api_addr, api_port, name}` out of a tag map.
    /// Returns `None` if any required tag is missing or malformed, mirroring
    /// the substrate's own "skip members we can't decode" behavior.
    pub fn from_tags(tags: &HashMap<String, String>) -> Option<PeerInfo> {
        let peer_type = PeerType::parse(tags.get(PEER_TYPE_TAG)?.clone()).ok()?;
        let api_host = tags.get(API_ADDR_TAG)?.clone();
        let api_port: u16 = tags.get(API_PORT_TAG)?.parse().ok()?;
        let name = tags.get(NAME_TAG)?.clone();
        Some(PeerInfo {
            name,
            peer_type,
            api_host,
            api_port,
        })
    }

    pub fn api_address(&self) -> String {
        format!("{}:{}", self.api_host, self.api_port)
    }
}
