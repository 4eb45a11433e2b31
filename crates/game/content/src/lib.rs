//! Data-driven content definitions and loaders.
//!
//! This crate houses static combat content and provides loaders for RON/TOML data files:
//! - Balance tables (data-driven via TOML)
//! - Item catalogs (data-driven via RON)
//! - Room graphs (data-driven via RON)
//! - Player and NPC templates (data-driven via RON)
//!
//! Content is consumed by runtime oracles and never appears in combat state.

pub mod specs;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use specs::{ActorCatalog, ActorSpec, AnatomyKind, ItemSpec, RoomSpec};

#[cfg(feature = "loaders")]
pub use loaders::{ActorLoader, ConfigLoader, ContentFactory, ItemLoader, LoadResult, RoomLoader};
