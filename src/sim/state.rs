//! World state and core simulation types
//!
//! Everything the tick mutates lives in [`World`]; nothing is global.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::Rect;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Frozen while the restart timer runs down
    Countdown,
    /// Active gameplay
    Playing,
    /// Run ended, waiting for restart
    GameOver,
}

/// Which corridor wall an entity hugs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// x of an entity of `width` snapped to this wall
    pub fn snap_x(self, bounds: (i32, i32), width: f32) -> f32 {
        match self {
            Side::Left => bounds.0 as f32,
            Side::Right => bounds.1 as f32 - width,
        }
    }
}

/// Enemy types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Single aimed shot, slow cadence
    #[default]
    Normal,
    /// Single aimed shot, fast cadence
    Rapid,
    /// Three-shot fan
    Burst,
}

impl EnemyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnemyKind::Normal => "normal",
            EnemyKind::Rapid => "rapid",
            EnemyKind::Burst => "burst",
        }
    }
}

/// The player craft
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner in world space
    pub pos: Vec2,
    /// Vertical velocity (positive = down)
    pub vy: f32,
    /// Horizontal step per tick
    pub step: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y),
            vy: 0.0,
            step: PLAYER_STEP,
        }
    }
}

impl Player {
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, PLAYER_SIZE, PLAYER_SIZE)
    }

    /// Move back to the spawn point with no momentum
    pub fn respawn(&mut self) {
        *self = Self::default();
    }
}

/// An enemy turret riding on a rock
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub kind: EnemyKind,
    /// Top-left corner in world space (derived from the owning rock each tick)
    pub pos: Vec2,
    /// Ticks until the next shot
    pub cooldown: i32,
    /// Sway phase offset (radians)
    pub phase: f32,
    pub can_shoot: bool,
}

impl Enemy {
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, ENEMY_SIZE, ENEMY_SIZE)
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(ENEMY_SIZE / 2.0)
    }
}

/// A rock snapped to one corridor wall
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub x: f32,
    /// World y of the top face
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub side: Side,
    pub enemy: Option<Enemy>,
}

impl Obstacle {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// x at which a resting enemy is centred on the rock
    pub fn enemy_home_x(&self) -> f32 {
        self.x + ((self.width - ENEMY_SIZE) / 2.0).floor()
    }

    /// y at which an enemy's bottom touches the rock's top
    pub fn enemy_home_y(&self) -> f32 {
        self.y - ENEMY_SIZE
    }
}

/// A notch in one wall, also usable as a ledge
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WallHole {
    pub x: f32,
    pub y: f32,
    pub side: Side,
}

impl WallHole {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, HOLE_WIDTH, HOLE_HEIGHT)
    }
}

/// An enemy projectile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Bullet {
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, BULLET_WIDTH, BULLET_HEIGHT)
    }
}

/// What cost the player a life
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitCause {
    Enemy,
    Bullet,
    FellThrough,
}

/// Discrete notifications for the audio/host layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    ThrustStart,
    ThrustStop,
    EnemyFire { kind: EnemyKind },
    PlayerHit { cause: HitCause, lives_left: u8 },
    GameOver,
    Restart,
}

/// Complete simulation state (deterministic for a given seed and input tape)
#[derive(Debug, Clone)]
pub struct World {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Owned RNG stream; spawner and enemy controller draw from it in tick order
    pub rng: Pcg32,
    /// Frame counter, advanced on every tick (frozen ones included)
    pub time_ticks: u64,
    /// Scroll front: world y at the top of the viewport
    pub scroll: f32,
    /// World y of the next rock
    pub next_rock_y: f32,
    /// World y of the next wall hole
    pub next_hole_y: f32,
    /// Countdown ticks remaining
    pub countdown: u32,
    pub lives: u8,
    pub phase: GamePhase,
    /// Whether the thrust sound is currently looping
    pub thrust_active: bool,
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    pub holes: Vec<WallHole>,
    pub bullets: Vec<Bullet>,
}

impl World {
    /// Create a fresh world with the given seed
    pub fn new(seed: u64) -> Self {
        log::info!("New world with seed {}", seed);
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            time_ticks: 0,
            scroll: 0.0,
            next_rock_y: FIRST_ROCK_Y,
            next_hole_y: FIRST_HOLE_Y,
            countdown: COUNTDOWN_TICKS,
            lives: START_LIVES,
            phase: GamePhase::Countdown,
            thrust_active: false,
            player: Player::default(),
            obstacles: Vec::new(),
            holes: Vec::new(),
            bullets: Vec::new(),
        }
    }

    /// Re-initialise every gameplay field.
    ///
    /// The RNG stream and frame counter carry on, so successive runs differ.
    pub fn reset(&mut self) {
        self.scroll = 0.0;
        self.next_rock_y = FIRST_ROCK_Y;
        self.next_hole_y = FIRST_HOLE_Y;
        self.countdown = COUNTDOWN_TICKS;
        self.lives = START_LIVES;
        self.phase = GamePhase::Countdown;
        self.thrust_active = false;
        self.player.respawn();
        self.obstacles.clear();
        self.holes.clear();
        self.bullets.clear();
    }

    /// Distance travelled, shown as the score
    pub fn score(&self) -> u64 {
        self.scroll.max(0.0) as u64
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Iterate all live enemies
    pub fn enemies(&self) -> impl Iterator<Item = &Enemy> {
        self.obstacles.iter().filter_map(|o| o.enemy.as_ref())
    }

    /// Player y relative to the top of the viewport
    pub fn player_screen_y(&self) -> f32 {
        self.player.pos.y - self.scroll
    }
}
