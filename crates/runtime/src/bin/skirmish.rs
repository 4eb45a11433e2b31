//! Headless skirmish driver.
//!
//! Loads content, spawns the requested NPCs next to the player and lets the
//! player fight whatever shares its room until it dies or the arena empties.
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use combat_content::ContentFactory;
use combat_core::{EntityId, RoomId};
use combat_runtime::{RuntimeConfig, Simulation};

#[derive(Debug, Parser)]
#[command(name = "skirmish", about = "Run a seeded combat skirmish")]
struct Args {
    /// Directory holding items.ron, rooms.ron, actors.ron and tables.toml.
    #[arg(long, default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/../game/content/data"))]
    data_dir: PathBuf,

    #[arg(long)]
    seed: Option<u64>,

    /// Upper bound on simulated seconds.
    #[arg(long, default_value_t = 600)]
    seconds: u64,

    /// NPC template to spawn. Repeat to spawn several.
    #[arg(long = "npc", default_values_t = ["gate_guard".to_string()])]
    npcs: Vec<String>,

    /// Room the player starts in and NPCs spawn into.
    #[arg(long, default_value_t = 1)]
    room: u32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let room = RoomId(args.room);
    let mut config = RuntimeConfig::default().with_start_room(room);
    config.seed = args.seed;

    let factory = ContentFactory::new(args.data_dir.clone());
    let mut sim = Simulation::from_content(&factory, config)
        .with_context(|| format!("building skirmish from {}", args.data_dir.display()))?;
    for name in &args.npcs {
        sim.spawn_npc(name, room)?;
    }

    let mut events = 0;
    while sim.state().clock < args.seconds && !sim.player_dead() {
        if sim.state().npc_ids().is_empty() {
            break;
        }
        match pick_target(&sim) {
            Some(target) => {
                if !sim.player_attack(target)? {
                    sim.step()?;
                }
            }
            None => sim.step()?,
        }
        // Events are narrated as they arrive; only the count is kept.
        events += sim.journal_mut().drain().len();
    }

    let outcome = if sim.player_dead() {
        "player fell"
    } else if sim.state().npc_ids().is_empty() {
        "arena cleared"
    } else {
        "time ran out"
    };
    tracing::info!(
        seed = sim.seed(),
        clock = sim.state().clock,
        survivors = sim.state().npc_ids().len(),
        events,
        "{outcome}"
    );
    Ok(())
}

/// First NPC already fighting the player, else the first one in reach.
fn pick_target(sim: &Simulation) -> Option<EntityId> {
    let near = sim.npcs_near_player();
    let engaged = sim
        .player()
        .and_then(|player| near.iter().copied().find(|id| player.is_hostile_to(*id)));
    engaged.or_else(|| near.first().copied())
}
