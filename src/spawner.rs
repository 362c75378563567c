//! Collectible spawning on a fixed cadence
//!
//! Runs in the host loop after each tick. Seeded so a run is reproducible.

use glam::IVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::settings::Settings;
use crate::sim::{Entity, GameState, Role};

/// Placement attempts before giving up on a spawn this tick
const MAX_PLACEMENT_ATTEMPTS: u32 = 8;

#[derive(Debug, Clone)]
pub struct Spawner {
    rng: Pcg32,
    food_interval_ticks: u64,
    shrinker_interval_ticks: u64,
    max_food: usize,
    max_shrinkers: usize,
}

impl Spawner {
    pub fn new(settings: &Settings) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(settings.seed),
            food_interval_ticks: settings.food_interval_ticks,
            shrinker_interval_ticks: settings.shrinker_interval_ticks,
            max_food: settings.max_food,
            max_shrinkers: settings.max_shrinkers,
        }
    }

    /// Spawn whatever is due at the state's current tick
    pub fn update(&mut self, state: &mut GameState) {
        let now = state.time_ticks();

        if is_due(now, self.food_interval_ticks) && state.foods().len() < self.max_food {
            if let Some(pos) = self.free_position(state, Role::Food) {
                log::debug!("Tick {}: food spawned at {:?}", now, pos);
                state.spawn_food(pos);
            }
        }

        if is_due(now, self.shrinker_interval_ticks)
            && state.shrinkers().len() < self.max_shrinkers
        {
            if let Some(pos) = self.free_position(state, Role::Shrinker) {
                log::debug!("Tick {}: shrinker spawned at {:?}", now, pos);
                state.spawn_shrinker(pos);
            }
        }
    }

    /// Random in-field position whose footprint does not cover the head
    fn free_position(&mut self, state: &GameState, role: Role) -> Option<IVec2> {
        let rules = state.rules();
        let size = rules.collectible_size;
        let max = IVec2::new(rules.field.width - size.x, rules.field.height - size.y);
        if max.x < 0 || max.y < 0 {
            return None;
        }

        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let pos = IVec2::new(
                self.rng.random_range(0..=max.x),
                self.rng.random_range(0..=max.y),
            );
            if !Entity::new(role, pos, size).overlaps(state.head()) {
                return Some(pos);
            }
        }
        None
    }
}

fn is_due(now: u64, interval: u64) -> bool {
    interval > 0 && now > 0 && now % interval == 0
}
