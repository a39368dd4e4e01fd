//! [`EventAdapter`]: drives [`registry::Registry`] mutations from gossip
//! events. Processes events sequentially as they arrive; does not queue its
//! own copy since the substrate delivers them over a single logical stream.

use std::sync::Arc;

use registry::{Key, Registry};

use crate::event::Event;
use crate::member::Member;

/// Consumes [`Event`]s and applies them to a [`Registry`]. Errors from
/// Registry operations are logged and never abort the adapter; one bad
/// event must not stop subsequent events.
pub struct EventAdapter {
    registry: Arc<Registry>,
}

impl EventAdapter {
    pub fn new(registry: Arc<Registry>) -> Self {
        EventAdapter { registry }
    }

    pub fn handle(&self, event: Event) {
        match event {
            Event::MemberJoined(members) => {
                for member in &members {
                    self.registry.add(to_key(member));
                }
            }
            // MemberFailed is treated identically to MemberLeft: the member
            // is evicted, a re-join later will re-add it.
            Event::MemberLeft(members) | Event::MemberFailed(members) => {
                for member in &members {
                    self.registry.remove(&to_key(member));
                }
            }
            Event::MemberUpdated(members) => {
                for member in &members {
                    if !self.registry.update(to_key(member)) {
                        tracing::warn!(name = %member.name, "update for unknown member, dropping");
                    }
                }
            }
            Event::Query { name, .. } => {
                tracing::debug!(query = %name, "dropping unhandled query event");
            }
            Event::User { name, .. } => {
                tracing::debug!(user_event = %name, "dropping unhandled user event");
            }
            Event::Err(reason) => {
                tracing::warn!(reason = %reason, "gossip substrate reported an error");
            }
        }
    }
}

fn to_key(member: &Member) -> Key {
    Key::new(
        member.name.clone(),
        member.peer_type.to_string(),
        member.address(),
        member.tags.clone(),
    )
}
