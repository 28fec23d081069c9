//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One call to `tick` per host frame, no wall-clock time
//! - Seeded RNG owned by the `World` only
//! - Stable iteration order (spawn order), fixed pruning order
//! - No rendering, audio or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod corridor;
pub mod enemy;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{PlatformContact, detect_hit, step_player};
pub use snapshot::{RenderSnapshot, Sprite, SpriteKind};
pub use state::{
    Bullet, Enemy, EnemyKind, GameEvent, GamePhase, HitCause, Obstacle, Player, Side, WallHole,
    World,
};
pub use tick::{TickInput, tick};
