//! Procedural spawning ahead of the scroll front
//!
//! Rocks and wall holes run on independent cadences. Every rock carries one
//! enemy; which kind depends on how far the run has progressed.

use glam::Vec2;
use rand::Rng;

use super::corridor;
use super::state::{Enemy, EnemyKind, Obstacle, Side, WallHole, World};
use crate::consts::*;

/// Rock width range (inclusive)
pub const ROCK_WIDTH: (i32, i32) = (20, 50);
/// Rock height range (inclusive)
pub const ROCK_HEIGHT: (i32, i32) = (5, 15);
/// Distance between consecutive rocks (inclusive)
pub const ROCK_SPACING: (i32, i32) = (50, 100);
/// Distance between consecutive wall holes (inclusive)
pub const HOLE_SPACING: (i32, i32) = (20, 30);

/// Scroll distance where rapid enemies start appearing
pub const RAPID_UNLOCK: f32 = 1000.0;
/// Scroll distance where burst enemies start appearing
pub const BURST_UNLOCK: f32 = 2000.0;

/// Spawn whatever has come within one viewport of the front (at most one of each per tick)
pub fn spawn_ahead(world: &mut World) {
    let horizon = world.scroll + VIEW_HEIGHT;
    if horizon > world.next_rock_y {
        spawn_rock(world);
    }
    if horizon > world.next_hole_y {
        spawn_hole(world);
    }
}

fn random_side<R: Rng>(rng: &mut R) -> Side {
    if rng.random_bool(0.5) { Side::Left } else { Side::Right }
}

fn random_in<R: Rng>(rng: &mut R, range: (i32, i32)) -> i32 {
    rng.random_range(range.0..=range.1)
}

/// Place a rock (and its enemy) at the next rock threshold
pub fn spawn_rock(world: &mut World) {
    let y = world.next_rock_y;
    let rng = &mut world.rng;

    let width = random_in(rng, ROCK_WIDTH) as f32;
    let height = random_in(rng, ROCK_HEIGHT) as f32;
    let side = random_side(rng);
    let x = side.snap_x(corridor::bounds(y), width);

    let kind = pick_enemy_kind(rng, world.scroll);
    let cooldown = initial_cooldown(rng, kind);
    let phase = rng.random_range(0.0..std::f32::consts::TAU);

    let mut rock = Obstacle {
        x,
        y,
        width,
        height,
        side,
        enemy: None,
    };
    rock.enemy = Some(Enemy {
        kind,
        pos: Vec2::new(rock.enemy_home_x(), rock.enemy_home_y()),
        cooldown,
        phase,
        can_shoot: true,
    });

    log::debug!(
        "Rock at y={} x={} {}x{} ({:?}) with {} enemy",
        y,
        x,
        width,
        height,
        side,
        kind.as_str()
    );
    world.obstacles.push(rock);
    world.next_rock_y += random_in(&mut world.rng, ROCK_SPACING) as f32;
}

/// Place a wall hole at the next hole threshold
pub fn spawn_hole(world: &mut World) {
    let y = world.next_hole_y;
    let side = random_side(&mut world.rng);
    let x = side.snap_x(corridor::bounds(y), HOLE_WIDTH);
    world.holes.push(WallHole { x, y, side });
    world.next_hole_y += random_in(&mut world.rng, HOLE_SPACING) as f32;
}

/// Weighted enemy kind for the current scroll distance
pub fn pick_enemy_kind<R: Rng>(rng: &mut R, scroll: f32) -> EnemyKind {
    if scroll < RAPID_UNLOCK {
        return EnemyKind::Normal;
    }
    let roll = rng.random_range(0..100);
    if scroll < BURST_UNLOCK {
        // 70 / 30
        if roll < 70 { EnemyKind::Normal } else { EnemyKind::Rapid }
    } else {
        // 50 / 30 / 20
        match roll {
            0..50 => EnemyKind::Normal,
            50..80 => EnemyKind::Rapid,
            _ => EnemyKind::Burst,
        }
    }
}

/// Initial cooldown range (inclusive) per kind
pub fn initial_cooldown_range(kind: EnemyKind) -> (i32, i32) {
    match kind {
        EnemyKind::Normal => (60, 150),
        EnemyKind::Rapid => (30, 80),
        EnemyKind::Burst => (120, 180),
    }
}

fn initial_cooldown<R: Rng>(rng: &mut R, kind: EnemyKind) -> i32 {
    random_in(rng, initial_cooldown_range(kind))
}
