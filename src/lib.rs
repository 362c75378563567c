//! Snake Trail - a chain-of-segments arcade snake
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, boundary, pickups, game state)
//! - `settings`: Data-driven configuration loaded from JSON
//! - `spawner`: Seeded collectible spawning driven by the host loop

pub mod settings;
pub mod sim;
pub mod spawner;

pub use settings::Settings;
pub use spawner::Spawner;

/// Game configuration constants
pub mod consts {
    /// Play-field dimensions
    pub const FIELD_WIDTH: i32 = 700;
    pub const FIELD_HEIGHT: i32 = 700;

    /// Head speed in units per tick
    pub const PLAYER_SPEED: i32 = 10;
    /// Chain length at the start of a run
    pub const STARTING_SIZE: usize = 5;

    /// Footprint of a head/body segment
    pub const SEGMENT_SIZE: i32 = 20;
    /// Footprint of food and shrinker items
    pub const COLLECTIBLE_SIZE: i32 = 20;

    /// Score awarded per food eaten
    pub const SCORE_PER_FOOD: u64 = 1;

    /// Spawn cadence defaults (ticks between spawns)
    pub const FOOD_INTERVAL_TICKS: u64 = 90;
    pub const SHRINKER_INTERVAL_TICKS: u64 = 240;
    /// Upper bounds on live collectibles
    pub const MAX_FOOD: usize = 5;
    pub const MAX_SHRINKERS: usize = 2;
}
