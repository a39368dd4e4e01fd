//! [`Peer`]: the read-only façade the HTTP collaborator queries. Never
//! touches the rings; enumeration goes straight through the substrate.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::Result;
use crate::peer_type::PeerType;
use crate::substrate::Substrate;

/// A structured debug snapshot of cluster state, suitable for a `/status`
/// style endpoint.
#[derive(Debug, Clone, serde::Serialize)]
pub struct State {
    pub name: String,
    pub num_members: usize,
}

pub struct Peer {
    substrate: Arc<dyn Substrate>,
}

impl Peer {
    pub fn new(substrate: Arc<dyn Substrate>) -> Self {
        Peer { substrate }
    }

    pub fn join(&self) -> Result<usize> {
        self.substrate.join()
    }

    pub fn leave(&self) -> Result<()> {
        self.substrate.leave()
    }

    pub fn name(&self) -> String {
        self.substrate.name()
    }

    pub fn address(&self) -> String {
        self.substrate.address()
    }

    pub fn cluster_size(&self) -> usize {
        self.substrate.cluster_size()
    }

    pub fn state(&self) -> State {
        State {
            name: self.substrate.name(),
            num_members: self.substrate.cluster_size(),
        }
    }

    /// Live API `host:port` endpoints, bucketed by peer-type. `peer_type`
    /// may be [`PeerType::any`] to collect every type.
    pub fn current(&self, peer_type: &PeerType) -> Result<HashMap<PeerType, Vec<String>>> {
        let mut result: HashMap<PeerType, Vec<String>> = HashMap::new();
        self.substrate.walk(&mut |info| {
            if peer_type.is_any() || info.peer_type == *peer_type {
                result
                    .entry(info.peer_type.clone())
                    .or_default()
                    .push(info.api_address());
            }
            Ok(())
        })?;
        Ok(result)
    }
}
