//! [`Substrate`]: the capability this crate consumes from the gossip
//! membership collaborator. No implementation ships here; the substrate
//! itself (memberlist/serf-equivalent) is out of scope.

use crate::error::Result;
use crate::member::PeerInfo;

/// The gossip substrate's surface, as consumed by [`crate::Peer`] and
/// [`crate::EventAdapter`].
pub trait Substrate: Send + Sync {
    /// Joins the cluster, returning the number of nodes now known.
    fn join(&self) -> Result<usize>;

    /// Leaves the cluster.
    fn leave(&self) -> Result<()>;

    /// This node's name in the cluster.
    fn name(&self) -> String;

    /// This node's `host:port` address.
    fn address(&self) -> String;

    /// The number of members known to this node.
    fn cluster_size(&self) -> usize;

    /// Visits every live member's advertised [`PeerInfo`]. The visitor may
    /// abort the walk by returning `Err`.
    fn walk(&self, visit: &mut dyn FnMut(&PeerInfo) -> Result<()>) -> Result<()>;
}
