//! Head steering and follow-the-leader motion
//!
//! The head moves by its input-driven velocity. Body segments do not replay
//! the head's path: each one chases the head's current position at a speed
//! that tapers with its depth in the chain.

use glam::IVec2;

use super::boundary::{Field, constrain_horizontal, constrain_vertical};
use super::entity::Entity;
use super::input::TickInput;

/// Update the head's velocity from this tick's key edges.
///
/// Only the first matching branch applies, so at most one axis changes per
/// tick and vertical edges win over horizontal ones.
pub fn apply_input(head: &mut Entity, input: &TickInput, speed: i32) {
    if input.up_pressed {
        head.vel.y = -speed;
    } else if input.down_pressed {
        head.vel.y = speed;
    } else if input.up_released || input.down_released {
        head.vel.y = 0;
    } else if input.left_pressed {
        head.vel.x = -speed;
    } else if input.right_pressed {
        head.vel.x = speed;
    } else if input.left_released || input.right_released {
        head.vel.x = 0;
    }
}

/// Steer and move the head, clamping it to the field.
///
/// Returns true if a wall stopped the head this tick.
pub fn advance_head(chain: &mut [Entity], input: &TickInput, speed: i32, field: Field) -> bool {
    let Some(head) = chain.first_mut() else {
        return false;
    };

    apply_input(head, input, speed);

    head.pos.y += head.vel.y;
    let hit_vertical = constrain_vertical(head, field);
    head.pos.x += head.vel.x;
    let hit_horizontal = constrain_horizontal(head, field);

    debug_assert!(field.contains(head), "head escaped the field: {:?}", head.pos);

    hit_vertical || hit_horizontal
}

/// Catch-up distance per tick for the segment at `index`
#[inline]
pub fn follow_step(speed: i32, index: usize) -> i32 {
    speed - index as i32
}

/// Move one coordinate `step` units toward `target`.
///
/// Can overshoot when closer than `step`; the segment then swings back next tick.
/// A negative `step` moves away from `target`.
fn chase(coord: i32, target: i32, step: i32) -> i32 {
    if coord < target {
        coord + step
    } else if coord != target {
        coord - step
    } else {
        coord
    }
}

/// Pull every body segment toward the head's (already updated) position
pub fn advance_followers(chain: &mut [Entity], speed: i32) {
    let Some(head) = chain.first() else {
        return;
    };
    let target: IVec2 = head.pos;

    for (i, segment) in chain.iter_mut().enumerate().skip(1) {
        // Zero at index == speed, negative past it (those segments drift away)
        let step = follow_step(speed, i);
        let before = segment.pos;
        segment.pos.y = chase(segment.pos.y, target.y, step);
        segment.pos.x = chase(segment.pos.x, target.x, step);
        segment.vel = segment.pos - before;
    }
}
