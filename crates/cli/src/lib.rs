//! CLI for the consistent-hash registry core.
//!
//! A single-process demonstration tool: each invocation seeds a fresh
//! registry, then runs one add/remove/lookup/info/checksum command against
//! it. No gossip substrate is wired in here.

pub mod commands;
pub mod config;

pub use commands::{Command, CommandResult};
pub use config::CliConfig;
