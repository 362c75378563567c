//! Per-frame simulation tick
//!
//! Order is fixed: head (with boundary clamp), followers, pickups.

use super::input::TickInput;
use super::motion::{advance_followers, advance_head};
use super::pickup::resolve_pickups;
use super::state::{GameEvent, GameState};

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();
    state.time_ticks += 1;

    let rules = state.rules;

    if advance_head(&mut state.chain, input, rules.speed, rules.field) {
        let at = state.chain[0].pos;
        log::debug!("Tick {}: head stopped by wall at {:?}", state.time_ticks, at);
        state.events.push(GameEvent::WallContact { at });
    }

    advance_followers(&mut state.chain, rules.speed);

    let outcome = resolve_pickups(
        &mut state.chain,
        &mut state.foods,
        &mut state.shrinkers,
        rules.score_per_food,
    );

    if outcome.foods_eaten > 0 || outcome.shrinkers_eaten > 0 {
        let at = state.chain[0].pos;
        let length = state.chain.len();
        for _ in 0..outcome.foods_eaten {
            state.events.push(GameEvent::FoodEaten { at, length });
        }
        for _ in 0..outcome.shrinkers_eaten {
            state.events.push(GameEvent::Shrunk { at, length });
        }
        log::debug!(
            "Tick {}: ate {} food, {} shrinkers, length now {}",
            state.time_ticks,
            outcome.foods_eaten,
            outcome.shrinkers_eaten,
            length
        );
    }

    state.score += outcome.score_delta;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::input::Direction;
    use crate::sim::{Field, Rules};
    use glam::IVec2;

    #[test]
    fn test_idle_tick_changes_nothing_but_the_clock() {
        let mut state = GameState::default();
        let before = state.chain.clone();

        tick(&mut state, &TickInput::default());

        assert_eq!(state.chain, before);
        assert_eq!(state.time_ticks, 1);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_right_press_from_start() {
        let mut state = GameState::default();
        tick(&mut state, &TickInput::pressed(Direction::Right));

        assert_eq!(state.head().pos, IVec2::new(360, 350));
        assert_eq!(state.head().vel, IVec2::new(10, 0));
        let body_xs: Vec<i32> = state.chain()[1..].iter().map(|s| s.pos.x).collect();
        assert_eq!(body_xs, vec![359, 358, 357, 356]);
    }

    #[test]
    fn test_food_on_head_consumed_in_one_tick() {
        let mut state = GameState::default();
        state.spawn_food(IVec2::new(350, 350));
        state.spawn_food(IVec2::new(50, 50));
        let tail_before = state.chain().last().map(|s| s.pos);

        tick(&mut state, &TickInput::default());

        assert_eq!(state.current_score(), 1);
        assert_eq!(state.len(), 6);
        assert_eq!(state.foods().len(), 1);
        assert_eq!(state.foods()[0].pos, IVec2::new(50, 50));
        assert_eq!(state.chain().last().map(|s| s.pos), tail_before);
        assert_eq!(
            state.events(),
            &[GameEvent::FoodEaten {
                at: IVec2::new(350, 350),
                length: 6
            }]
        );
    }

    #[test]
    fn test_pickup_uses_head_position_after_motion() {
        let mut state = GameState::default();
        // Out of reach before the move, touched after it
        state.spawn_food(IVec2::new(375, 350));

        tick(&mut state, &TickInput::pressed(Direction::Right));

        assert_eq!(state.current_score(), 1);
        assert!(state.foods().is_empty());
    }

    #[test]
    fn test_shrinker_event_and_no_score_change() {
        let mut state = GameState::default();
        state.spawn_shrinker(IVec2::new(355, 355));

        tick(&mut state, &TickInput::default());

        assert_eq!(state.len(), 4);
        assert_eq!(state.current_score(), 0);
        assert!(state.shrinkers().is_empty());
        assert!(matches!(state.events()[0], GameEvent::Shrunk { length: 4, .. }));
    }

    #[test]
    fn test_wall_contact_event() {
        let rules = Rules {
            field: Field::new(100, 100),
            starting_size: 1,
            ..Default::default()
        };
        let mut state = GameState::new(rules);
        // Head at (50, 50), size 20: four ticks reach the far wall at 80
        for _ in 0..3 {
            tick(&mut state, &TickInput::pressed(Direction::Down));
            assert!(state.events().is_empty());
        }
        tick(&mut state, &TickInput::default());
        assert_eq!(state.head().pos.y, 80);
        assert_eq!(state.head().vel.y, 0);
        assert_eq!(
            state.events(),
            &[GameEvent::WallContact {
                at: IVec2::new(50, 80)
            }]
        );

        // Events only describe the latest tick
        tick(&mut state, &TickInput::default());
        assert!(state.events().is_empty());
    }

    #[test]
    fn test_score_never_decreases() {
        let mut state = GameState::default();
        state.spawn_food(IVec2::new(350, 350));
        tick(&mut state, &TickInput::default());
        let after_food = state.current_score();

        state.spawn_shrinker(IVec2::new(350, 350));
        tick(&mut state, &TickInput::default());
        assert_eq!(state.current_score(), after_food);
    }

    #[test]
    fn test_determinism() {
        let mut state1 = GameState::default();
        let mut state2 = GameState::default();
        for state in [&mut state1, &mut state2] {
            state.spawn_food(IVec2::new(400, 340));
            state.spawn_shrinker(IVec2::new(300, 300));
        }

        let inputs = [
            TickInput::pressed(Direction::Right),
            TickInput::default(),
            TickInput::pressed(Direction::Up),
            TickInput::released(Direction::Right),
            TickInput::default(),
        ];

        for input in &inputs {
            tick(&mut state1, input);
            tick(&mut state2, input);
        }

        assert_eq!(state1.chain, state2.chain);
        assert_eq!(state1.foods, state2.foods);
        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.time_ticks, 5);
    }

    #[test]
    fn test_method_and_free_fn_agree() {
        let mut a = GameState::default();
        let mut b = GameState::default();
        let input = TickInput::pressed(Direction::Left);
        a.tick(&input);
        tick(&mut b, &input);
        assert_eq!(a.chain, b.chain);
    }
}
