//! Owned simulation driving the combat engine.
//!
//! [`Simulation`] owns the mutable [`GameState`] together with everything
//! the engine borrows: the static oracles, the balance tables, the seeded
//! random source and the [`Journal`]. Each call builds a short-lived
//! [`GameEngine`] over those fields.
use combat_content::{ActorCatalog, ActorSpec, ContentFactory};
use combat_core::{
    Ability, AbilityError, CombatTables, Combatant, EntityId, Equipment, GameEngine, GameEnv,
    GameState, InventoryState, LuckOutcome, PcgRng, RoomId, SkillLevels, Stance,
};

use crate::config::RuntimeConfig;
use crate::error::{Result, RuntimeError};
use crate::journal::Journal;
use crate::oracle::{ItemCatalog, RoomMap};

pub struct Simulation {
    state: GameState,
    items: ItemCatalog,
    map: RoomMap,
    tables: CombatTables,
    actors: ActorCatalog,
    rng: PcgRng,
    seed: u64,
    journal: Journal,
}

impl Simulation {
    /// Builds a world holding only the player, placed in the start room.
    pub fn new(
        config: RuntimeConfig,
        items: ItemCatalog,
        map: RoomMap,
        actors: ActorCatalog,
    ) -> Result<Self> {
        if !map.contains(config.start_room) {
            return Err(RuntimeError::UnknownRoom(config.start_room));
        }
        let player = build_combatant(&items, &actors.player, EntityId::PLAYER, config.start_room)?;
        let seed = config.resolve_seed();
        tracing::info!(seed, "starting simulation");

        Ok(Self {
            state: GameState::with_player(player),
            items,
            map,
            tables: config.tables,
            actors,
            rng: PcgRng::new(seed),
            seed,
            journal: Journal::new(),
        })
    }

    /// Loads items, rooms and actor templates from a content directory.
    ///
    /// Tables found in the directory replace the ones in `config`.
    pub fn from_content(factory: &ContentFactory, config: RuntimeConfig) -> Result<Self> {
        let tables = factory.load_tables().map_err(RuntimeError::Content)?;
        let items = factory.load_items().map_err(RuntimeError::Content)?;
        let rooms = factory.load_rooms().map_err(RuntimeError::Content)?;
        let actors = factory.load_actors().map_err(RuntimeError::Content)?;
        tracing::debug!(
            items = items.len(),
            rooms = rooms.len(),
            npcs = actors.npcs.len(),
            dir = %factory.data_dir().display(),
            "loaded content"
        );

        Self::new(
            config.with_tables(tables),
            ItemCatalog::from_specs(&items),
            RoomMap::new(rooms),
            actors,
        )
    }

    fn engine(&mut self) -> GameEngine<'_> {
        GameEngine::new(
            &mut self.state,
            GameEnv::new(&self.items, &self.map, &self.tables),
            &mut self.rng,
            &mut self.journal,
        )
    }

    // ========================================================================
    // Spawning
    // ========================================================================

    /// Spawns an NPC from the named template.
    pub fn spawn_npc(&mut self, template: &str, room: RoomId) -> Result<EntityId> {
        let spec = self
            .actors
            .npc(template)
            .cloned()
            .ok_or_else(|| RuntimeError::UnknownTemplate(template.to_string()))?;
        self.spawn(&spec, room)
    }

    /// Spawns an NPC from an explicit template.
    pub fn spawn(&mut self, spec: &ActorSpec, room: RoomId) -> Result<EntityId> {
        if !self.map.contains(room) {
            return Err(RuntimeError::UnknownRoom(room));
        }
        let combatant = build_combatant(&self.items, spec, EntityId(0), room)?;
        let id = self.state.spawn(combatant);
        tracing::debug!(%id, name = %spec.name, %room, "spawned");
        Ok(id)
    }

    // ========================================================================
    // Driving
    // ========================================================================

    /// Advances the world by one second.
    pub fn step(&mut self) -> Result<()> {
        self.engine().tick_world()?;
        Ok(())
    }

    /// Advances the world by whole seconds, stopping early if the player dies.
    pub fn run_for(&mut self, seconds: u32) -> Result<()> {
        for _ in 0..seconds {
            if self.player_dead() {
                break;
            }
            self.step()?;
        }
        Ok(())
    }

    /// Player swings at `target`, then lives through the swing time.
    ///
    /// Returns whether any hand swung.
    pub fn player_attack(&mut self, target: EntityId) -> Result<bool> {
        let swung = self.engine().attack(EntityId::PLAYER, target)?;
        if swung {
            self.settle()?;
        }
        Ok(swung)
    }

    /// Player uses an ability. Buff abilities ignore `target`.
    pub fn use_ability(
        &mut self,
        ability: Ability,
        target: Option<EntityId>,
        confirm: bool,
    ) -> Result<()> {
        let result = self
            .engine()
            .use_ability(EntityId::PLAYER, ability, target, confirm);
        absorb_death(result)?;
        self.settle()
    }

    /// Player rolls LadyLuck against `target`.
    pub fn lady_luck(&mut self, target: EntityId, confirm: bool) -> Result<LuckOutcome> {
        let result = self.engine().lady_luck(EntityId::PLAYER, target, confirm);
        let outcome = match result {
            Err(AbilityError::ActorDead(id)) if id.is_player() => LuckOutcome::Nothing,
            other => other?,
        };
        self.settle()?;
        Ok(outcome)
    }

    pub fn change_stance(&mut self, stance: Stance) -> Result<()> {
        let result = self.engine().change_stance(EntityId::PLAYER, stance);
        absorb_death(result)?;
        self.settle()
    }

    /// Pays off the player's action debt. The player is committed, so damage
    /// taken meanwhile does not interrupt.
    fn settle(&mut self) -> Result<()> {
        if self.player_dead() {
            return Ok(());
        }
        let result = self.engine().settle_action_timer(true);
        absorb_death(result)
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    pub fn journal_mut(&mut self) -> &mut Journal {
        &mut self.journal
    }

    pub fn tables(&self) -> &CombatTables {
        &self.tables
    }

    pub fn items(&self) -> &ItemCatalog {
        &self.items
    }

    pub fn map(&self) -> &RoomMap {
        &self.map
    }

    pub fn actors(&self) -> &ActorCatalog {
        &self.actors
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn player(&self) -> Option<&Combatant> {
        self.state.player()
    }

    pub fn player_dead(&self) -> bool {
        self.state.player().is_none_or(|player| !player.is_alive())
    }

    /// Living NPCs sharing the player's room, in id order.
    pub fn npcs_near_player(&self) -> Vec<EntityId> {
        self.state
            .npc_ids()
            .into_iter()
            .filter(|id| self.state.co_located(EntityId::PLAYER, *id))
            .collect()
    }
}

/// Player death during an action ends the action, not the simulation.
fn absorb_death(result: std::result::Result<(), AbilityError>) -> Result<()> {
    match result {
        Err(AbilityError::ActorDead(id)) if id.is_player() => Ok(()),
        other => Ok(other?),
    }
}

/// Resolves a template's item names and builds the combatant.
fn build_combatant(
    items: &ItemCatalog,
    spec: &ActorSpec,
    id: EntityId,
    room: RoomId,
) -> Result<Combatant> {
    let resolve = |name: &str| {
        items.handle(name).ok_or_else(|| RuntimeError::UnknownItem {
            actor: spec.name.clone(),
            item: name.to_string(),
        })
    };

    let mut equipment = Equipment::empty();
    for (slot, name) in &spec.equipment {
        equipment.equip(*slot, resolve(name)?);
    }

    let mut inventory = InventoryState::empty();
    for (name, quantity) in &spec.inventory {
        if !inventory.add(resolve(name)?, *quantity) {
            return Err(RuntimeError::InventoryFull {
                actor: spec.name.clone(),
            });
        }
    }

    let mut skills = SkillLevels::default();
    for (skill, level) in &spec.skills {
        skills.set(*skill, *level);
    }

    Ok(Combatant::builder(id)
        .name(spec.name.clone())
        .room(room)
        .hp(spec.hp, spec.hp)
        .sp(spec.sp, spec.sp)
        .mp(spec.mp, spec.mp)
        .stance(spec.stance)
        .tags(spec.tags)
        .anatomy(spec.anatomy.table())
        .equipment(equipment)
        .inventory(inventory)
        .skills(skills)
        .build())
}
