//! Runtime wrappers around static content.
//!
//! These implementations expose `combat-core` oracle traits over data loaded
//! by `combat-content`. The data is immutable at runtime; dynamic state lives
//! in [`combat_core::GameState`].
mod items;
mod map;

pub use items::ItemCatalog;
pub use map::RoomMap;
