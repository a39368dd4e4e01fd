//! Subcommands operating directly on an in-process [`registry::Registry`].
//!
//! There is no gossip substrate wired into this binary; each invocation
//! seeds a fresh registry from `--seed` and then runs one operation against
//! it, which is enough to exercise and demonstrate the core from a
//! terminal without a real cluster.

use clap::Subcommand;
use registry::{Key, Registry};

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add a member and print whether it won a ring slot.
    Add {
        name: String,
        address: String,
    },
    /// Remove a member by name and address.
    Remove {
        name: String,
        address: String,
    },
    /// Resolve the owner of `key` on the ring.
    Lookup { key: String },
    /// Print the ring's checksum, hash->address table and address->keys.
    Info,
    /// Print the ring's checksum only.
    Checksum,
}

/// Plain-text rendering of a command's outcome, printed by `main`.
pub struct CommandResult(pub String);

impl Command {
    pub fn run(
        &self,
        registry: &Registry,
        peer_type: &str,
        json: bool,
    ) -> anyhow::Result<CommandResult> {
        let output = match self {
            Command::Add { name, address } => {
                let key = Key::new(name.clone(), peer_type.to_string(), address.clone(), Default::default());
                let won_slot = registry.add(key);
                tracing::info!(%name, %address, won_slot, "added member");
                if json {
                    serde_json::to_string_pretty(&serde_json::json!({
                        "name": name, "address": address, "won_slot": won_slot,
                    }))?
                } else {
                    format!("added {name} at {address} (won_slot={won_slot})")
                }
            }
            Command::Remove { name, address } => {
                let key = Key::new(name.clone(), peer_type.to_string(), address.clone(), Default::default());
                registry.remove(&key);
                tracing::info!(%name, %address, "removed member");
                format!("removed {name} at {address}")
            }
            Command::Lookup { key } => match registry.locate(peer_type, key) {
                Some(located) if json => serde_json::to_string_pretty(&located)?,
                Some(located) => format!("{} -> {} ({})", key, located.address, located.name),
                None => format!("{key} -> <no owner>"),
            },
            Command::Info => {
                let info = registry.info(peer_type)?;
                if json {
                    serde_json::to_string_pretty(&info)?
                } else {
                    format!(
                        "checksum={}\nhashes={:#?}\nkeys={:#?}",
                        info.checksum, info.hashes, info.keys
                    )
                }
            }
            Command::Checksum => registry.checksum(peer_type)?,
        };
        Ok(CommandResult(output))
    }
}
