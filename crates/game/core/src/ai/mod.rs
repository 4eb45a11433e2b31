//! NPC decision making.
//!
//! Each simulated second every NPC makes exactly one [`AiDecision`]. The
//! decision is computed by [`decide`] from a read-only view of the world and
//! executed by [`GameEngine::tick_mobs`](crate::engine::GameEngine::tick_mobs).
//!
//! # Priority
//!
//! ```text
//! flee > stance reaction > attack > aggro on sight > wander
//! ```
//!
//! Every layer ends the turn once it produces a decision; later layers are
//! never consulted in the same tick.

mod decision;

pub use decision::{AiDecision, choose_stance, counter_stance, decide};
