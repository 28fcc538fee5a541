//! CLI commands

mod config;
mod entries;

pub use config::ConfigCommand;
pub use entries::EntriesCommand;
