//! Interface to the host simulation.
//!
//! The relay never touches the simulation directly; handlers go through
//! this trait, implemented by the host. Only safe to call from the dispatch
//! context.

use maestro_proto::ItemTier;

/// A position in world space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Facing for a newly spawned entity. The default is identity (no
/// rotation).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Orientation {
    pub pitch: f32,
    pub yaw: f32,
}

/// Spawn behavior flags.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpawnOptions {
    /// Spawn even when the world's population cap is reached.
    pub ignore_population_limit: bool,
    /// Place the entity on the adversarial team regardless of template
    /// defaults.
    pub force_adversarial_team: bool,
}

/// Stat dimension for whole-unit boosts on spawned entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatBoost {
    Health,
    Damage,
}

/// Opaque handle to an entry in the world's entity-template catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateHandle(pub u32);

/// Opaque handle to a live entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityHandle(pub u64);

/// A grantable item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDef {
    pub name: String,
    pub tier: ItemTier,
}

/// Simulation APIs consumed by the command handlers.
pub trait World {
    /// Look up an entity template by exact name.
    fn find_entity_template(&self, name: &str) -> Option<TemplateHandle>;

    /// Instantiate an entity from a template.
    fn spawn_adversary(
        &mut self,
        template: TemplateHandle,
        position: Vec3,
        orientation: Orientation,
        options: SpawnOptions,
    ) -> EntityHandle;

    /// Grant a whole-unit stat boost to a live entity.
    fn grant_stat_boost(&mut self, entity: EntityHandle, kind: StatBoost, amount: i32);

    /// Position of the active player.
    fn player_position(&self) -> Vec3;

    /// Run-progress scalar used to scale boosts on spawned adversaries.
    fn difficulty_coefficient(&self) -> f32;

    /// All items of the given tier.
    fn items_by_tier(&self, tier: ItemTier) -> Vec<ItemDef>;

    /// Put an item in the active player's inventory.
    fn grant_item(&mut self, item: &ItemDef);
}
