//! Enemy controller: positioning, cooldowns and firing patterns
//!
//! Enemies only aim at a player who is above them. A player level with or
//! below an enemy gets a flat shot toward their side instead.

use glam::Vec2;
use rand::Rng;

use super::state::{Bullet, EnemyKind, GameEvent, World};
use crate::consts::*;

/// Advance every enemy by one tick, appending bullets and fire events
pub fn update_enemies(world: &mut World, events: &mut Vec<GameEvent>) {
    let scroll = world.scroll;
    let frame = world.time_ticks as f32;
    let target = world.player.rect().center();

    for rock in &mut world.obstacles {
        let home = Vec2::new(rock.enemy_home_x(), rock.enemy_home_y());
        let Some(enemy) = rock.enemy.as_mut() else {
            continue;
        };

        enemy.pos = home;
        if scroll >= ENEMY_SWAY_START {
            enemy.pos.x += sway_offset(frame, enemy.phase);
        }

        if !enemy.can_shoot {
            continue;
        }
        enemy.cooldown -= 1;
        if enemy.cooldown > 0 {
            continue;
        }

        let shots = fire(enemy.kind, enemy.center(), target);
        log::debug!(
            "{} enemy at ({}, {}) fired {} shot(s)",
            enemy.kind.as_str(),
            enemy.pos.x,
            enemy.pos.y,
            shots.len()
        );
        world.bullets.extend(shots);
        enemy.cooldown = next_cooldown(&mut world.rng, enemy.kind, scroll);
        events.push(GameEvent::EnemyFire { kind: enemy.kind });
    }
}

/// Horizontal sway once the run is deep enough (whole pixels)
pub fn sway_offset(frame: f32, phase: f32) -> f32 {
    (ENEMY_SWAY_AMPLITUDE * (frame / ENEMY_SWAY_PERIOD + phase).sin()).trunc()
}

/// Bullets emitted by one trigger of an enemy at `origin` aiming at `target`
pub fn fire(kind: EnemyKind, origin: Vec2, target: Vec2) -> Vec<Bullet> {
    let muzzle = Vec2::new(origin.x - BULLET_WIDTH / 2.0, origin.y);
    let delta = target - origin;
    match kind {
        EnemyKind::Normal | EnemyKind::Rapid => vec![Bullet {
            pos: muzzle,
            vel: aimed_velocity(delta),
        }],
        EnemyKind::Burst => burst_velocities(delta)
            .into_iter()
            .map(|vel| Bullet { pos: muzzle, vel })
            .collect(),
    }
}

/// Single-shot velocity toward `delta` (target minus origin)
pub fn aimed_velocity(delta: Vec2) -> Vec2 {
    if delta.y >= 0.0 {
        let dir = if delta.x >= 0.0 { 1.0 } else { -1.0 };
        return Vec2::new(BULLET_SPEED * dir, 0.0);
    }
    let mut dist = delta.length();
    if dist == 0.0 {
        dist = 1.0;
    }
    delta / dist * BULLET_SPEED
}

/// Base firing angle: straight at the target if above, otherwise flat right
pub fn burst_angle(delta: Vec2) -> f32 {
    if delta.y >= 0.0 { 0.0 } else { delta.y.atan2(delta.x) }
}

/// Three-shot fan around the base angle
pub fn burst_velocities(delta: Vec2) -> [Vec2; 3] {
    let base = burst_angle(delta);
    [-BURST_SPREAD, 0.0, BURST_SPREAD].map(|offset| Vec2::from_angle(base + offset) * BULLET_SPEED)
}

/// Re-arm range (inclusive) after firing; narrows as the run goes on
pub fn cooldown_range(kind: EnemyKind, scroll: f32) -> (i32, i32) {
    match kind {
        EnemyKind::Normal => {
            let k = (scroll / 200.0) as i32;
            ((60 - k).max(10), (150 - k).max(30))
        }
        EnemyKind::Rapid => {
            let k = (scroll / 300.0) as i32;
            ((30 - k).max(5), (80 - k).max(15))
        }
        EnemyKind::Burst => {
            let k = (scroll / 200.0) as i32;
            ((120 - k).max(80), (180 - k).max(120))
        }
    }
}

fn next_cooldown<R: Rng>(rng: &mut R, kind: EnemyKind, scroll: f32) -> i32 {
    let (lo, hi) = cooldown_range(kind, scroll);
    rng.random_range(lo..=hi)
}
