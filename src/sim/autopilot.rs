//! Demo pilot
//!
//! Produces input from the world for attract mode and headless runs. Pure and
//! RNG-free, so replays with the same seed stay identical.

use glam::Vec2;

use super::corridor;
use super::state::World;
use super::tick::TickInput;
use crate::consts::*;

/// Screen-space depth below which the pilot starts thrusting
pub const THRUST_DEPTH: f32 = VIEW_HEIGHT * 0.55;
/// Fall speed at which the pilot brakes regardless of depth
pub const BRAKE_SPEED: f32 = 2.0;
/// Distance at which a bullet is considered a threat
pub const DODGE_RADIUS: f32 = 24.0;

/// Pick this tick's input
pub fn steer(world: &World) -> TickInput {
    if world.is_game_over() {
        return TickInput {
            restart: true,
            ..Default::default()
        };
    }

    let player = world.player.rect();
    let center = player.center();

    let thrust = world.player_screen_y() > THRUST_DEPTH || world.player.vy > BRAKE_SPEED;

    let target_x = match nearest_threat(world, center) {
        // Sidestep away from the incoming shot
        Some(threat) if threat.x >= center.x => center.x - DODGE_RADIUS,
        Some(_) => center.x + DODGE_RADIUS,
        None => {
            let (left, right) = corridor::bounds(center.y);
            (left + right) as f32 / 2.0
        }
    };

    let dx = target_x - center.x;
    TickInput {
        left: dx < -world.player.step,
        right: dx > world.player.step,
        thrust,
        restart: false,
    }
}

/// Closest bullet or enemy centre inside the dodge radius
fn nearest_threat(world: &World, from: Vec2) -> Option<Vec2> {
    let bullets = world.bullets.iter().map(|b| b.rect().center());
    let enemies = world.enemies().map(|e| e.center());
    bullets
        .chain(enemies)
        .filter(|p| p.distance(from) < DODGE_RADIUS)
        .min_by(|a, b| {
            a.distance_squared(from)
                .partial_cmp(&b.distance_squared(from))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Bullet, GamePhase};
    use crate::sim::tick;

    #[test]
    fn test_presses_restart_on_game_over() {
        let mut world = World::new(1);
        world.phase = GamePhase::GameOver;
        assert!(steer(&world).restart);
    }

    #[test]
    fn test_thrusts_when_low_on_screen() {
        let mut world = World::new(1);
        world.player.pos.y = 100.0;
        assert!(steer(&world).thrust);
        world.player.pos.y = 20.0;
        assert!(!steer(&world).thrust);
        world.player.vy = 3.0;
        assert!(steer(&world).thrust);
    }

    #[test]
    fn test_heads_for_corridor_centre() {
        let mut world = World::new(1);
        world.player.pos.x = 35.0;
        let input = steer(&world);
        assert!(input.right && !input.left);
    }

    #[test]
    fn test_dodges_bullet() {
        let mut world = World::new(1);
        world.player.pos.x = 60.0;
        world.bullets.push(Bullet {
            pos: Vec2::new(70.0, 44.0),
            vel: Vec2::new(-2.5, 0.0),
        });
        let input = steer(&world);
        assert!(input.left && !input.right);
    }

    #[test]
    fn test_pilot_run_is_reproducible() {
        let run = |seed| {
            let mut world = World::new(seed);
            for _ in 0..3000 {
                let input = steer(&world);
                tick(&mut world, &input);
            }
            (world.scroll, world.lives, world.time_ticks)
        };
        assert_eq!(run(2024), run(2024));
    }
}
