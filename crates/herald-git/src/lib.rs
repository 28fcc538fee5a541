//! Herald Git - Git operations for changelog entry generation
//!
//! This crate wraps the repository lookups Herald needs: tag messages for
//! released versions and the remote URL used to build issue and user links.

mod remote;
mod repository;
mod tags;
pub mod types;

pub use repository::{GitRepo, Result};
pub use types::RemoteInfo;
