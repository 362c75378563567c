//! Positioned game objects
//!
//! Everything on the field is an `Entity`: snake segments and collectibles
//! alike. Positions are top-left anchored integer coordinates.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// What an entity is on the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Chain index 0, driven by input
    Head,
    /// Chain index >= 1, chases the head
    Body,
    /// Grows the chain when eaten
    Food,
    /// Shrinks the chain when eaten
    Shrinker,
}

/// A positioned object with a footprint and a velocity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub pos: IVec2,
    pub size: IVec2,
    pub vel: IVec2,
    pub role: Role,
}

impl Entity {
    /// Create a stationary entity
    pub fn new(role: Role, pos: IVec2, size: IVec2) -> Self {
        Self {
            pos,
            size,
            vel: IVec2::ZERO,
            role,
        }
    }

    /// Bottom-right corner (exclusive)
    #[inline]
    pub fn max(&self) -> IVec2 {
        self.pos + self.size
    }

    /// Axis-aligned bounding box intersection.
    ///
    /// Boxes that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Entity) -> bool {
        let a_max = self.max();
        let b_max = other.max();

        let x_overlap = self.pos.x < b_max.x && a_max.x > other.pos.x;
        let y_overlap = self.pos.y < b_max.y && a_max.y > other.pos.y;

        x_overlap && y_overlap
    }

    pub fn is_collectible(&self) -> bool {
        matches!(self.role, Role::Food | Role::Shrinker)
    }
}
