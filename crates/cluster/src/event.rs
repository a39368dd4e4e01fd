//! [`Event`]: the tagged variant dispatched from the gossip substrate.

use crate::member::Member;

/// An event delivered by the gossip substrate's single logical event
/// stream. Dispatch by variant; unknown kinds are logged and dropped by the
/// substrate before they ever reach this type.
#[derive(Debug, Clone)]
pub enum Event {
    MemberJoined(Vec<Member>),
    MemberLeft(Vec<Member>),
    MemberFailed(Vec<Member>),
    MemberUpdated(Vec<Member>),
    Query { name: String, payload: Vec<u8> },
    User { name: String, payload: Vec<u8> },
    Err(String),
}
