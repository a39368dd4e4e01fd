//! Error types for the core library.

/// Result type alias for the core library.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the core library.
///
/// Every ring/tree operation below `Registry` is in-memory logic and does
/// not fail in the ordinary course of things; this variant exists so
/// `HashRing::checksum` and `HashRing::walk` have something to surface if a
/// caller-supplied visitor ever aborts a walk.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error("internal error: {0}")]
    Internal(String),
}
