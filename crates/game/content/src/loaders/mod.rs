//! Content loaders for reading combat data from files.
//!
//! Each loader parses one file format into the records in [`crate::specs`]
//! or into core tables, and rejects data the runtime could not use.

pub mod actors;
pub mod config;
pub mod factory;
pub mod item;
pub mod rooms;

pub use actors::ActorLoader;
pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use item::ItemLoader;
pub use rooms::RoomLoader;

use std::path::Path;

use anyhow::Context;

/// Result type shared by every loader.
pub type LoadResult<T> = anyhow::Result<T>;

pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))
}
