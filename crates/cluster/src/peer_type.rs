//! [`PeerType`]: the short opaque tag identifying a cluster member's role.

use std::fmt;

use crate::error::{Error, Result};

/// A validated `peertype:<name>` tag, e.g. `peertype:registry`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
#[serde(transparent)]
pub struct PeerType(String);

impl PeerType {
    const PREFIX: &'static str = "peertype:";

    /// The wildcard peer-type, matching every type during enumeration.
    pub fn any() -> Self {
        PeerType(format!("{}*", Self::PREFIX))
    }

    /// Parses `value`, rejecting anything without the `peertype:` prefix.
    pub fn parse(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.starts_with(Self::PREFIX) {
            Ok(PeerType(value))
        } else {
            Err(Error::InvalidPeerType(value))
        }
    }

    pub fn is_any(&self) -> bool {
        *self == Self::any()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PeerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
