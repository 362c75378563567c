//! Read-only view of the game handed to the render/UI sink after each tick

use serde::Serialize;

use super::entity::Entity;

#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    /// Head first
    pub chain: Vec<Entity>,
    pub foods: Vec<Entity>,
    pub shrinkers: Vec<Entity>,
    pub score: u64,
    pub time_ticks: u64,
}

impl Snapshot {
    /// Chain in paint order: tail first so the head ends up on top
    pub fn draw_order(&self) -> impl Iterator<Item = &Entity> {
        self.chain.iter().rev()
    }

    /// HUD text
    pub fn score_label(&self) -> String {
        format!("Score: {}", self.score)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
