//! Head-vs-collectible overlap and its effects on the chain

use super::entity::{Entity, Role};

/// What the pickup pass did this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PickupOutcome {
    /// Score to add
    pub score_delta: u64,
    /// Food items consumed
    pub foods_eaten: u32,
    /// Shrinkers consumed
    pub shrinkers_eaten: u32,
    /// Tail segments actually removed (shrinks at length 1 are no-ops)
    pub segments_removed: u32,
}

/// Remove the first entity structurally equal to `target`.
///
/// Returns false if nothing matched.
pub fn remove_first(set: &mut Vec<Entity>, target: &Entity) -> bool {
    match set.iter().position(|e| e == target) {
        Some(idx) => {
            set.remove(idx);
            true
        }
        None => false,
    }
}

/// Take every collectible overlapping `head` out of `set`, in set order
fn take_overlapping(set: &mut Vec<Entity>, head: &Entity) -> Vec<Entity> {
    let hits: Vec<Entity> = set.iter().filter(|c| head.overlaps(c)).copied().collect();
    for hit in &hits {
        remove_first(set, hit);
    }
    hits
}

/// Append a body segment at the tail's current position
pub fn grow(chain: &mut Vec<Entity>) {
    if let Some(tail) = chain.last() {
        chain.push(Entity::new(Role::Body, tail.pos, tail.size));
    }
}

/// Drop the tail segment, never the head. Returns true if one was removed.
pub fn shrink(chain: &mut Vec<Entity>) -> bool {
    if chain.len() > 1 {
        chain.pop();
        true
    } else {
        false
    }
}

/// Resolve all head overlaps for this tick.
///
/// Food is handled before shrinkers. Each overlapping collectible is consumed
/// exactly once.
pub fn resolve_pickups(
    chain: &mut Vec<Entity>,
    foods: &mut Vec<Entity>,
    shrinkers: &mut Vec<Entity>,
    score_per_food: u64,
) -> PickupOutcome {
    let mut outcome = PickupOutcome::default();
    let Some(head) = chain.first().copied() else {
        return outcome;
    };

    for _food in take_overlapping(foods, &head) {
        grow(chain);
        outcome.foods_eaten += 1;
        outcome.score_delta += score_per_food;
    }

    for _shrinker in take_overlapping(shrinkers, &head) {
        outcome.shrinkers_eaten += 1;
        if shrink(chain) {
            outcome.segments_removed += 1;
        }
    }

    outcome
}
