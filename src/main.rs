//! Snake Trail entry point
//!
//! Headless host loop: loads settings, replays a scripted sequence of key
//! edges, spawns collectibles, and prints the final snapshot as JSON.
//!
//! Usage: `snake-trail [settings.json]`

use std::path::PathBuf;

use snake_trail::sim::{Direction, GameEvent, GameState, KeyEvent, TickInput};
use snake_trail::{Settings, Spawner};

/// Scripted key edges: (tick, key name, pressed)
const DEMO_SCRIPT: &[(u64, &str, bool)] = &[
    (1, "ArrowRight", true),
    (25, "ArrowDown", true),
    (26, "ArrowRight", false),
    (60, "ArrowLeft", true),
    (61, "ArrowDown", false),
    (120, "w", true),
    (121, "ArrowLeft", false),
    (170, "d", true),
    (171, "w", false),
    (240, "s", true),
    (300, "d", false),
    (301, "s", false),
    (320, "a", true),
    (420, "a", false),
    (421, "ArrowUp", true),
    (480, "ArrowUp", false),
];

/// Key edges scheduled for `tick`
fn scripted_events(tick: u64) -> Vec<KeyEvent> {
    DEMO_SCRIPT
        .iter()
        .filter(|(at, _, _)| *at == tick)
        .filter_map(|&(_, key, pressed)| {
            let direction = Direction::from_key(key)?;
            Some(if pressed {
                KeyEvent::Pressed(direction)
            } else {
                KeyEvent::Released(direction)
            })
        })
        .collect()
}

fn main() {
    env_logger::init();
    log::info!("Snake Trail (headless) starting...");

    let settings = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => Settings::load(&path),
        None => Settings::default(),
    };

    let mut state = GameState::new(settings.rules());
    let mut spawner = Spawner::new(&settings);
    let mut input = TickInput::default();

    log::info!(
        "Field {}x{}, speed {}, {} segments, seed {}",
        settings.field_width,
        settings.field_height,
        settings.player_speed,
        state.len(),
        settings.seed
    );

    for frame in 1..=settings.demo_ticks {
        for event in scripted_events(frame) {
            input.record(event);
        }

        state.tick(&input);
        // Edges are one-shot
        input = TickInput::default();
        spawner.update(&mut state);

        for event in state.events() {
            match event {
                GameEvent::FoodEaten { length, .. } => {
                    log::info!("Tick {}: food eaten, length {}", frame, length)
                }
                GameEvent::Shrunk { length, .. } => {
                    log::info!("Tick {}: shrinker eaten, length {}", frame, length)
                }
                GameEvent::WallContact { at } => log::info!("Tick {}: wall at {:?}", frame, at),
            }
        }

        if frame % 60 == 0 {
            log::info!("{}", state.snapshot().score_label());
        }
    }

    let snapshot = state.snapshot();
    log::info!(
        "Finished after {} ticks: {}, length {}",
        snapshot.time_ticks,
        snapshot.score_label(),
        snapshot.chain.len()
    );

    match snapshot.to_json() {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize snapshot: {}", e),
    }
}
