//! Play-field boundary policy
//!
//! The head is clamped one axis at a time, right after that axis moves. A wall
//! contact zeroes the velocity component that caused it.

use serde::{Deserialize, Serialize};

use super::entity::Entity;
use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH};

/// Play-field dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub width: i32,
    pub height: i32,
}

impl Default for Field {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
        }
    }
}

impl Field {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// True if the entity's whole footprint lies inside the field
    pub fn contains(&self, entity: &Entity) -> bool {
        let max = entity.max();
        entity.pos.x >= 0 && entity.pos.y >= 0 && max.x <= self.width && max.y <= self.height
    }
}

/// Clamp one coordinate into `[0, limit - extent]`.
///
/// Returns true if the wall stopped actual movement (either the velocity was
/// non-zero or the position had to be corrected).
fn clamp_axis(pos: &mut i32, vel: &mut i32, extent: i32, limit: i32) -> bool {
    let target = if *pos <= 0 {
        0
    } else if *pos + extent > limit {
        limit - extent
    } else {
        return false;
    };

    let stopped = *vel != 0 || *pos != target;
    *vel = 0;
    *pos = target;
    stopped
}

/// Apply the boundary rule to the y axis
pub fn constrain_vertical(entity: &mut Entity, field: Field) -> bool {
    clamp_axis(&mut entity.pos.y, &mut entity.vel.y, entity.size.y, field.height)
}

/// Apply the boundary rule to the x axis
pub fn constrain_horizontal(entity: &mut Entity, field: Field) -> bool {
    clamp_axis(&mut entity.pos.x, &mut entity.vel.x, entity.size.x, field.width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Role;
    use glam::IVec2;

    fn head_at(x: i32, y: i32, vel: IVec2) -> Entity {
        let mut head = Entity::new(Role::Head, IVec2::new(x, y), IVec2::splat(20));
        head.vel = vel;
        head
    }

    #[test]
    fn test_inside_field_untouched() {
        let field = Field::default();
        let mut head = head_at(100, 200, IVec2::new(10, -10));
        assert!(!constrain_vertical(&mut head, field));
        assert!(!constrain_horizontal(&mut head, field));
        assert_eq!(head.pos, IVec2::new(100, 200));
        assert_eq!(head.vel, IVec2::new(10, -10));
    }

    #[test]
    fn test_top_wall_clamps_and_stops() {
        let field = Field::default();
        let mut head = head_at(100, -7, IVec2::new(10, -10));
        assert!(constrain_vertical(&mut head, field));
        assert_eq!(head.pos.y, 0);
        assert_eq!(head.vel.y, 0);
        // Other axis is left alone
        assert_eq!(head.vel.x, 10);
    }

    #[test]
    fn test_zero_counts_as_wall() {
        let field = Field::default();
        let mut head = head_at(0, 0, IVec2::new(-10, 0));
        constrain_vertical(&mut head, field);
        assert!(constrain_horizontal(&mut head, field));
        assert_eq!(head.vel, IVec2::ZERO);

        // Resting against the wall is not a new contact
        assert!(!constrain_horizontal(&mut head, field));
        assert!(!constrain_vertical(&mut head, field));
    }

    #[test]
    fn test_far_walls_clamp_to_field_minus_size() {
        let field = Field::new(700, 700);
        let mut head = head_at(695, 690, IVec2::new(10, 10));
        assert!(constrain_vertical(&mut head, field));
        assert!(constrain_horizontal(&mut head, field));
        assert_eq!(head.pos, IVec2::new(680, 680));
        assert_eq!(head.vel, IVec2::ZERO);
        assert!(field.contains(&head));
    }

    #[test]
    fn test_exactly_flush_with_far_wall_is_inside() {
        let field = Field::new(700, 700);
        let mut head = head_at(680, 680, IVec2::new(10, 10));
        assert!(!constrain_horizontal(&mut head, field));
        assert_eq!(head.vel.x, 10);
    }
}
