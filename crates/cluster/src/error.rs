//! Error types for the cluster adapter layer.

/// Result type alias for the cluster crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while adapting gossip events onto a [`registry::Registry`].
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// A peer-type string was missing the required `peertype:` prefix.
    #[error("invalid peer type {0:?}, expected a \"peertype:\" prefix")]
    InvalidPeerType(String),

    /// The gossip substrate failed to join the cluster at startup.
    #[error("substrate unavailable: {0}")]
    SubstrateUnavailable(String),

    #[error(transparent)]
    Registry(#[from] registry::Error),
}
