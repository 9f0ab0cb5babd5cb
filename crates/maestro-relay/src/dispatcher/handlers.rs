//! Command handlers: the world mutation behind each command kind.

use rand::seq::SliceRandom;
use tracing::{info, warn};

use maestro_proto::{Command, ItemTier};

use crate::world::{Orientation, SpawnOptions, StatBoost, World};

use super::Dispatcher;

impl<W: World> Dispatcher<W> {
    /// Route one command to its handler. Exhaustive over command kinds.
    pub(super) fn handle(&mut self, command: Command) {
        match command {
            Command::SpawnEntity { template_name } => self.handle_spawn_entity(&template_name),
            Command::GiveItem { tier } => self.handle_give_item(tier),
        }
    }

    fn handle_spawn_entity(&mut self, template_name: &str) {
        if let Some(template) = self.world.find_entity_template(template_name) {
            let mut position = self.world.player_position();
            position.y += self.session.offset();

            let entity = self.world.spawn_adversary(
                template,
                position,
                Orientation::default(),
                SpawnOptions {
                    ignore_population_limit: true,
                    force_adversarial_team: true,
                },
            );

            // Health and damage multipliers grow linearly with difficulty;
            // granted as whole-unit boosts.
            let coefficient = self.world.difficulty_coefficient();
            let health_multiplier = 1.0 + coefficient;
            let damage_multiplier = 1.0 + coefficient;
            self.world
                .grant_stat_boost(entity, StatBoost::Health, boost_count(health_multiplier));
            self.world
                .grant_stat_boost(entity, StatBoost::Damage, boost_count(damage_multiplier));

            info!(
                "spawned {template_name} at ({:.1}, {:.1}, {:.1})",
                position.x, position.y, position.z
            );
        } else {
            warn!("entity template not found: {template_name}");
        }

        // The next spawn stacks higher either way.
        self.session.advance();
    }

    fn handle_give_item(&mut self, tier: ItemTier) {
        let pool = self.world.items_by_tier(tier);
        let Some(item) = pool.choose(&mut rand::thread_rng()) else {
            warn!("no items found for tier {tier:?}");
            return;
        };
        info!("granting {} ({tier:?})", item.name);
        self.world.grant_item(item);
    }
}

/// Whole-unit boost count for a linear stat multiplier.
fn boost_count(multiplier: f32) -> i32 {
    (((multiplier - 1.0) * 10.0) / 2.0).round() as i32
}
