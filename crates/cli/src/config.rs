//! `CliConfig`: clap-derived entry point wiring a fresh [`registry::Registry`]
//! to one requested [`crate::commands::Command`].

use clap::Parser;
use registry::{Key, Registry};
use tracing_subscriber::EnvFilter;

use crate::commands::Command;

/// Operator-facing CLI for the consistent-hash registry core.
#[derive(Debug, Parser)]
#[command(name = "chreg", about = "Inspect and drive a consistent-hash registry")]
pub struct CliConfig {
    /// Virtual nodes per host.
    #[arg(long, default_value_t = 8)]
    pub replication_factor: usize,

    /// Peer-type the command operates against.
    #[arg(long, default_value = "peertype:registry")]
    pub peer_type: String,

    /// `name=host:port` entries seeded into the registry before running the
    /// requested command (there is no gossip substrate in this binary).
    #[arg(long, value_delimiter = ',')]
    pub seed: Vec<String>,

    /// Print structured JSON instead of plain text where supported.
    #[arg(long)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl CliConfig {
    pub fn run(&self) -> anyhow::Result<()> {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .compact()
            .init();

        let registry = Registry::new(corelib::default_hash_fn(), self.replication_factor);
        for entry in &self.seed {
            let (name, address) = entry.split_once('=').ok_or_else(|| {
                anyhow::anyhow!("invalid --seed entry {entry:?}, expected name=host:port")
            })?;
            registry.add(Key::new(
                name.to_string(),
                self.peer_type.clone(),
                address.to_string(),
                Default::default(),
            ));
        }

        let result = self.command.run(&registry, &self.peer_type, self.json)?;
        println!("{}", result.0);
        Ok(())
    }
}
