//! Game state and core simulation types
//!
//! `GameState` is the only owner of the chain, the collectible sets and the
//! score. Outside the core they change only through `tick` and the spawn
//! methods used by the host's spawner.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::boundary::Field;
use super::entity::{Entity, Role};
use super::input::TickInput;
use super::snapshot::Snapshot;
use crate::consts::*;

/// Fixed rules consumed at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rules {
    pub field: Field,
    /// Head speed in units per tick
    pub speed: i32,
    /// Chain length at the start of a run
    pub starting_size: usize,
    pub segment_size: IVec2,
    pub collectible_size: IVec2,
    pub score_per_food: u64,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            field: Field::default(),
            speed: PLAYER_SPEED,
            starting_size: STARTING_SIZE,
            segment_size: IVec2::splat(SEGMENT_SIZE),
            collectible_size: IVec2::splat(COLLECTIBLE_SIZE),
            score_per_food: SCORE_PER_FOOD,
        }
    }
}

impl Rules {
    /// Where a new chain is placed
    pub fn spawn_point(&self) -> IVec2 {
        IVec2::new(self.field.width / 2, self.field.height / 2)
    }
}

/// Something notable that happened during the last tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A wall stopped the head
    WallContact { at: IVec2 },
    /// Food eaten; chain grew to `length`
    FoodEaten { at: IVec2, length: usize },
    /// Shrinker eaten; chain is now `length` (unchanged at length 1)
    Shrunk { at: IVec2, length: usize },
}

/// Complete game state (deterministic)
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    pub(crate) rules: Rules,
    /// Head first, then body segments head-to-tail
    pub(crate) chain: Vec<Entity>,
    pub(crate) foods: Vec<Entity>,
    pub(crate) shrinkers: Vec<Entity>,
    pub(crate) score: u64,
    /// Simulation tick counter
    pub(crate) time_ticks: u64,
    /// Events raised by the most recent tick
    #[serde(skip)]
    pub(crate) events: Vec<GameEvent>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Rules::default())
    }
}

impl GameState {
    /// Create a new run: a stationary chain stacked at the field center
    pub fn new(rules: Rules) -> Self {
        let start = rules.spawn_point();
        let length = rules.starting_size.max(1);

        let chain = (0..length)
            .map(|i| {
                let role = if i == 0 { Role::Head } else { Role::Body };
                Entity::new(role, start, rules.segment_size)
            })
            .collect();

        log::debug!("New run: {} segments at {:?}", length, start);

        Self {
            rules,
            chain,
            foods: Vec::new(),
            shrinkers: Vec::new(),
            score: 0,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    /// Advance one frame
    pub fn tick(&mut self, input: &TickInput) {
        super::tick::tick(self, input);
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn chain(&self) -> &[Entity] {
        &self.chain
    }

    pub fn head(&self) -> &Entity {
        &self.chain[0]
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Always false: the head can't be removed
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    pub fn foods(&self) -> &[Entity] {
        &self.foods
    }

    pub fn shrinkers(&self) -> &[Entity] {
        &self.shrinkers
    }

    pub fn current_score(&self) -> u64 {
        self.score
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Place a food item (top-left at `pos`)
    pub fn spawn_food(&mut self, pos: IVec2) {
        self.foods.push(Entity::new(Role::Food, pos, self.rules.collectible_size));
    }

    /// Place a shrinker item (top-left at `pos`)
    pub fn spawn_shrinker(&mut self, pos: IVec2) {
        self.shrinkers.push(Entity::new(Role::Shrinker, pos, self.rules.collectible_size));
    }

    /// Read-only copy for the render/UI sink
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            chain: self.chain.clone(),
            foods: self.foods.clone(),
            shrinkers: self.shrinkers.clone(),
            score: self.score,
            time_ticks: self.time_ticks,
        }
    }
}
