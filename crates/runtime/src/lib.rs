//! Imperative shell around the deterministic combat rules.
//!
//! The runtime owns everything `combat-core` deliberately leaves out: the
//! authoritative [`GameState`](combat_core::GameState), concrete oracles
//! built from content files, a seeded random source and a journal that turns
//! engine events into `tracing` records, experience and room marks.
//!
//! Modules are organized by responsibility:
//! - [`simulation`] drives the engine one player action or world second at a time
//! - [`oracle`] serves item and room content through the core oracle traits
//! - [`journal`] is the event sink
//! - [`config`] and [`error`] carry runtime settings and failures
pub mod config;
pub mod error;
pub mod journal;
pub mod oracle;
pub mod simulation;

pub use config::RuntimeConfig;
pub use error::{Result, RuntimeError};
pub use journal::Journal;
pub use oracle::{ItemCatalog, RoomMap};
pub use simulation::Simulation;
