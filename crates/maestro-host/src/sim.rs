//! Reference in-memory world.
//!
//! Stands in for the simulation the relay is attached to: a fixed template
//! catalog, a tiered item catalog, and a difficulty coefficient that grows
//! with run time. Mutations land in plain in-memory records and are logged.

use std::time::Instant;

use maestro_proto::ItemTier;
use maestro_relay::world::{
    EntityHandle, ItemDef, Orientation, SpawnOptions, StatBoost, TemplateHandle, Vec3, World,
};
use tracing::{debug, info};

/// Difficulty gained per minute of run time.
const DIFFICULTY_PER_MINUTE: f32 = 0.2;

/// A live entity spawned through the relay.
#[derive(Debug)]
struct SimEntity {
    id: u64,
    template: String,
    health_boost: i32,
    damage_boost: i32,
}

pub struct SimWorld {
    templates: Vec<String>,
    items: Vec<ItemDef>,
    player_position: Vec3,
    run_start: Instant,
    next_entity_id: u64,
    entities: Vec<SimEntity>,
    inventory: Vec<ItemDef>,
}

impl SimWorld {
    pub fn new() -> Self {
        Self {
            templates: [
                "LemurianMaster",
                "BeetleMaster",
                "GolemMaster",
                "WispMaster",
                "ImpMaster",
                "VagrantMaster",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            items: default_items(),
            player_position: Vec3::new(0.0, 0.0, 0.0),
            run_start: Instant::now(),
            next_entity_id: 1,
            entities: Vec::new(),
            inventory: Vec::new(),
        }
    }

    /// Number of live entities.
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Number of items granted to the player so far.
    pub fn inventory_size(&self) -> usize {
        self.inventory.len()
    }
}

impl Default for SimWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl World for SimWorld {
    fn find_entity_template(&self, name: &str) -> Option<TemplateHandle> {
        self.templates
            .iter()
            .position(|t| t == name)
            .map(|i| TemplateHandle(i as u32))
    }

    fn spawn_adversary(
        &mut self,
        template: TemplateHandle,
        position: Vec3,
        _orientation: Orientation,
        _options: SpawnOptions,
    ) -> EntityHandle {
        let name = self
            .templates
            .get(template.0 as usize)
            .cloned()
            .unwrap_or_else(|| "<unknown>".into());
        let id = self.next_entity_id;
        self.next_entity_id += 1;
        info!(
            "adversary {name} (entity {id}) spawned at ({:.1}, {:.1}, {:.1})",
            position.x, position.y, position.z
        );
        self.entities.push(SimEntity {
            id,
            template: name,
            health_boost: 0,
            damage_boost: 0,
        });
        EntityHandle(id)
    }

    fn grant_stat_boost(&mut self, entity: EntityHandle, kind: StatBoost, amount: i32) {
        if let Some(e) = self.entities.iter_mut().find(|e| e.id == entity.0) {
            match kind {
                StatBoost::Health => e.health_boost += amount,
                StatBoost::Damage => e.damage_boost += amount,
            }
            debug!("entity {} ({}) {kind:?} boost +{amount}", e.id, e.template);
        }
    }

    fn player_position(&self) -> Vec3 {
        self.player_position
    }

    fn difficulty_coefficient(&self) -> f32 {
        self.run_start.elapsed().as_secs_f32() / 60.0 * DIFFICULTY_PER_MINUTE
    }

    fn items_by_tier(&self, tier: ItemTier) -> Vec<ItemDef> {
        self.items.iter().filter(|i| i.tier == tier).cloned().collect()
    }

    fn grant_item(&mut self, item: &ItemDef) {
        info!("player received {}", item.name);
        self.inventory.push(item.clone());
    }
}

fn default_items() -> Vec<ItemDef> {
    fn item(name: &str, tier: ItemTier) -> ItemDef {
        ItemDef {
            name: name.into(),
            tier,
        }
    }

    vec![
        item("Crowbar", ItemTier::Tier1),
        item("Monster Tooth", ItemTier::Tier1),
        item("Focus Crystal", ItemTier::Tier1),
        item("Fuel Cell", ItemTier::Tier2),
        item("Ukulele", ItemTier::Tier2),
        item("Harvester's Scythe", ItemTier::Tier2),
        item("Brilliant Behemoth", ItemTier::Tier3),
        item("Soulbound Catalyst", ItemTier::Tier3),
        item("Titanic Knurl", ItemTier::Boss),
        item("Queen's Gland", ItemTier::Boss),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_known_templates_by_exact_name() {
        let world = SimWorld::new();
        assert!(world.find_entity_template("LemurianMaster").is_some());
        assert!(world.find_entity_template("Lemurian").is_none());
        assert!(world.find_entity_template("").is_none());
    }

    #[test]
    fn every_tier_has_items() {
        let world = SimWorld::new();
        for tier in [
            ItemTier::Tier1,
            ItemTier::Tier2,
            ItemTier::Tier3,
            ItemTier::Boss,
        ] {
            assert!(!world.items_by_tier(tier).is_empty(), "{tier:?} pool empty");
        }
    }

    #[test]
    fn spawn_and_boost_bookkeeping() {
        let mut world = SimWorld::new();
        let template = world.find_entity_template("BeetleMaster").unwrap();
        let entity = world.spawn_adversary(
            template,
            Vec3::new(0.0, 4.0, 0.0),
            Orientation::default(),
            SpawnOptions::default(),
        );
        world.grant_stat_boost(entity, StatBoost::Health, 5);
        world.grant_stat_boost(entity, StatBoost::Damage, 5);

        assert_eq!(world.entity_count(), 1);
        assert_eq!(world.entities[0].template, "BeetleMaster");
        assert_eq!(world.entities[0].health_boost, 5);
        assert_eq!(world.entities[0].damage_boost, 5);
    }

    #[test]
    fn granting_items_fills_the_inventory() {
        let mut world = SimWorld::new();
        let pool = world.items_by_tier(ItemTier::Boss);
        world.grant_item(&pool[0]);
        assert_eq!(world.inventory_size(), 1);
    }

    #[test]
    fn difficulty_starts_near_zero() {
        let world = SimWorld::new();
        assert!(world.difficulty_coefficient() < 0.01);
    }
}
