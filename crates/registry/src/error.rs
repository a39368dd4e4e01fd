//! Error types for the registry.

/// Result type alias for the registry.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while operating a [`crate::Registry`].
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// `Info`/`Checksum` requested for a peer-type with no ring yet.
    #[error("no ring for peer-type {0:?}")]
    NoRingForType(String),

    /// Propagated unchanged from a `HashRing::walk`/`checksum` abort.
    #[error(transparent)]
    Core(#[from] corelib::Error),
}
