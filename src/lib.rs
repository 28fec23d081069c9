//! Updraft - A vertical shaft-scrolling arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (corridor, spawning, enemies, physics, lifecycle)
//! - `settings`: Host configuration for the headless runner

pub mod settings;
pub mod sim;

pub use settings::Settings;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Game configuration constants
pub mod consts {
    /// Play-field dimensions (pixels)
    pub const VIEW_WIDTH: f32 = 160.0;
    pub const VIEW_HEIGHT: f32 = 120.0;
    /// Integer play-field width, used by the corridor centre
    pub const VIEW_WIDTH_PX: i32 = 160;

    /// Frames per second of the host frame clock
    pub const TICKS_PER_SECOND: u32 = 60;
    /// Countdown before play resumes (3 seconds)
    pub const COUNTDOWN_TICKS: u32 = 3 * TICKS_PER_SECOND;
    /// Lives at game start
    pub const START_LIVES: u8 = 3;

    /// Scroll advance per playing tick
    pub const SCROLL_SPEED: f32 = 0.5;

    /// Player defaults
    pub const PLAYER_SPAWN_X: f32 = 76.0;
    pub const PLAYER_SPAWN_Y: f32 = 40.0;
    pub const PLAYER_SIZE: f32 = 8.0;
    pub const PLAYER_STEP: f32 = 2.0;
    /// Downward acceleration per tick (gentle free fall)
    pub const GRAVITY: f32 = 0.15;
    /// Upward acceleration per tick while thrusting
    pub const THRUST: f32 = -0.3;
    pub const MAX_UP_VELOCITY: f32 = -4.0;
    pub const MAX_DOWN_VELOCITY: f32 = 4.0;
    /// Landing/hanging window for the swept platform check
    pub const PLATFORM_TOLERANCE: f32 = 2.0;

    /// Enemy sprite size
    pub const ENEMY_SIZE: f32 = 8.0;
    /// Scroll distance after which enemies sway on their rock
    pub const ENEMY_SWAY_START: f32 = 3000.0;
    pub const ENEMY_SWAY_AMPLITUDE: f32 = 5.0;
    /// Frame-counter divisor for the sway period
    pub const ENEMY_SWAY_PERIOD: f32 = 30.0;

    /// Bullet defaults
    pub const BULLET_SPEED: f32 = 2.5;
    pub const BULLET_WIDTH: f32 = 2.0;
    pub const BULLET_HEIGHT: f32 = 4.0;
    /// Angular spread of the three-shot burst (radians)
    pub const BURST_SPREAD: f32 = 0.26;

    /// Wall hole ("gap") size
    pub const HOLE_WIDTH: f32 = 10.0;
    pub const HOLE_HEIGHT: f32 = 4.0;

    /// First spawn thresholds (world y)
    pub const FIRST_ROCK_Y: f32 = 50.0;
    pub const FIRST_HOLE_Y: f32 = 20.0;

    /// Off-screen margin before entities are pruned
    pub const PRUNE_MARGIN: f32 = 10.0;
}

/// Strict axis-aligned rectangle overlap.
///
/// Rectangles that merely share an edge do not overlap.
#[inline]
#[allow(clippy::too_many_arguments)]
pub fn rects_overlap(ax: f32, ay: f32, aw: f32, ah: f32, bx: f32, by: f32, bw: f32, bh: f32) -> bool {
    !(ax + aw <= bx || ax >= bx + bw || ay + ah <= by || ay >= by + bh)
}

/// Axis-aligned rectangle in world (or screen) pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Strict overlap (see [`rects_overlap`])
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        rects_overlap(self.x, self.y, self.w, self.h, other.x, other.y, other.w, other.h)
    }

    /// Horizontal-only overlap, used for platform candidacy
    #[inline]
    pub fn overlaps_x(&self, other: &Rect) -> bool {
        self.x + self.w > other.x && self.x < other.x + other.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Same rectangle shifted vertically (world to screen space)
    #[inline]
    pub fn offset_y(&self, dy: f32) -> Self {
        Self { y: self.y + dy, ..*self }
    }
}
