//! Game settings
//!
//! Loaded from an optional JSON file. Missing keys fall back to the defaults
//! in `consts`, so a settings file only needs the values it changes.

use std::path::Path;

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::{Field, Rules};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Field ===
    pub field_width: i32,
    pub field_height: i32,

    // === Snake ===
    /// Head speed in units per tick
    pub player_speed: i32,
    pub starting_size: usize,
    pub segment_size: i32,

    // === Collectibles ===
    pub collectible_size: i32,
    pub score_per_food: u64,
    /// Ticks between food spawns (0 disables)
    pub food_interval_ticks: u64,
    /// Ticks between shrinker spawns (0 disables)
    pub shrinker_interval_ticks: u64,
    pub max_food: usize,
    pub max_shrinkers: usize,

    // === Run ===
    /// Spawner seed
    pub seed: u64,
    /// Ticks the headless binary simulates
    pub demo_ticks: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,

            player_speed: PLAYER_SPEED,
            starting_size: STARTING_SIZE,
            segment_size: SEGMENT_SIZE,

            collectible_size: COLLECTIBLE_SIZE,
            score_per_food: SCORE_PER_FOOD,
            food_interval_ticks: FOOD_INTERVAL_TICKS,
            shrinker_interval_ticks: SHRINKER_INTERVAL_TICKS,
            max_food: MAX_FOOD,
            max_shrinkers: MAX_SHRINKERS,

            seed: 12345,
            demo_ticks: 600,
        }
    }
}

impl Settings {
    /// Parse settings from JSON
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Check that the values describe a playable field
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.field_width <= 0 || self.field_height <= 0 {
            return Err("field dimensions must be positive");
        }
        if self.segment_size <= 0 || self.collectible_size <= 0 {
            return Err("entity sizes must be positive");
        }
        if self.segment_size > self.field_width || self.segment_size > self.field_height {
            return Err("segment does not fit in the field");
        }
        if self.collectible_size > self.field_width || self.collectible_size > self.field_height {
            return Err("collectible does not fit in the field");
        }
        if self.player_speed <= 0 {
            return Err("player speed must be positive");
        }
        if self.player_speed > self.field_width.min(self.field_height) {
            return Err("player speed exceeds the field");
        }
        if self.starting_size == 0 {
            return Err("starting size must be at least 1");
        }
        Ok(())
    }

    /// Core rules derived from these settings
    pub fn rules(&self) -> Rules {
        Rules {
            field: Field::new(self.field_width, self.field_height),
            speed: self.player_speed,
            starting_size: self.starting_size,
            segment_size: IVec2::splat(self.segment_size),
            collectible_size: IVec2::splat(self.collectible_size),
            score_per_food: self.score_per_food,
        }
    }

    /// Load settings from a JSON file, falling back to defaults on any problem
    pub fn load(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read settings {}: {}", path.display(), e);
                return Self::default();
            }
        };

        let settings = match Self::from_json(&json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Invalid settings {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match settings.validate() {
            Ok(()) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(reason) => {
                log::warn!("Rejected settings {}: {}, using defaults", path.display(), reason);
                Self::default()
            }
        }
    }
}
