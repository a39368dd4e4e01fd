//! [`Key`]: the registry's routable unit, adapted from a cluster member.

use std::collections::HashMap;

/// A routable entity tracked by the [`crate::Registry`].
///
/// Two keys are equal iff `(r#type, address, name)` match; `tags` does not
/// participate in equality so an `update` can replace tags in place without
/// changing identity.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Key {
    pub name: String,
    pub r#type: String,
    pub address: String,
    pub tags: HashMap<String, String>,
}

impl Key {
    pub fn new(
        name: impl Into<String>,
        r#type: impl Into<String>,
        address: impl Into<String>,
        tags: HashMap<String, String>,
    ) -> Self {
        Key {
            name: name.into(),
            r#type: r#type.into(),
            address: address.into(),
            tags,
        }
    }
}

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        self.r#type == other.r#type && self.address == other.address && self.name == other.name
    }
}

impl Eq for Key {}
