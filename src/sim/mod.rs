//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One `tick` per frame, integer coordinates only
//! - Stable iteration order (chain order, then spawn order)
//! - No rendering or platform dependencies

pub mod boundary;
pub mod entity;
pub mod input;
pub mod motion;
pub mod pickup;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use boundary::{Field, constrain_horizontal, constrain_vertical};
pub use entity::{Entity, Role};
pub use input::{Direction, KeyEvent, TickInput};
pub use motion::{advance_followers, advance_head};
pub use pickup::{PickupOutcome, resolve_pickups};
pub use snapshot::Snapshot;
pub use state::{GameEvent, GameState, Rules};
pub use tick::tick;
