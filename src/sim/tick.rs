//! Fixed timestep simulation tick
//!
//! Core game loop that advances the world deterministically, one host frame
//! per call.

use serde::{Deserialize, Serialize};

use super::collision::{detect_hit, step_player};
use super::corridor;
use super::enemy::update_enemies;
use super::spawn::spawn_ahead;
use super::state::{Bullet, GameEvent, GamePhase, HitCause, World};
use crate::consts::*;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    /// Left held
    pub left: bool,
    /// Right held
    pub right: bool,
    /// Thrust held
    pub thrust: bool,
    /// Restart pressed this frame (only honoured on game over)
    pub restart: bool,
}

/// Advance the world by one tick and return the events it produced
pub fn tick(world: &mut World, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();
    world.time_ticks += 1;

    // Frozen while counting down
    if world.countdown > 0 {
        world.countdown -= 1;
        if world.countdown == 0 && world.phase == GamePhase::Countdown {
            world.phase = GamePhase::Playing;
            log::debug!("Countdown finished at tick {}", world.time_ticks);
        }
        return events;
    }

    if world.phase == GamePhase::GameOver {
        if input.restart {
            restart(world, &mut events);
        }
        return events;
    }

    update_thrust_sound(world, input.thrust, &mut events);

    world.scroll += SCROLL_SPEED;

    spawn_ahead(world);
    update_enemies(world, &mut events);
    advance_bullets(world);

    step_player(world, input.left, input.right, input.thrust);

    if let Some(cause) = detect_hit(world) {
        handle_hit(world, cause, &mut events);
    }

    prune_behind(world);

    events
}

/// Edge-triggered thrust sound start/stop
fn update_thrust_sound(world: &mut World, thrust: bool, events: &mut Vec<GameEvent>) {
    if thrust && !world.thrust_active {
        world.thrust_active = true;
        events.push(GameEvent::ThrustStart);
    } else if !thrust && world.thrust_active {
        world.thrust_active = false;
        events.push(GameEvent::ThrustStop);
    }
}

/// Take a life; respawn with a countdown or end the run
pub fn handle_hit(world: &mut World, cause: HitCause, events: &mut Vec<GameEvent>) {
    world.lives = world.lives.saturating_sub(1);
    events.push(GameEvent::PlayerHit {
        cause,
        lives_left: world.lives,
    });

    if world.lives > 0 {
        log::info!(
            "Player hit ({:?}) at score {}, {} lives left",
            cause,
            world.score(),
            world.lives
        );
        world.player.respawn();
        world.countdown = COUNTDOWN_TICKS;
        world.phase = GamePhase::Countdown;
    } else {
        log::info!("Game over ({:?}) at score {}", cause, world.score());
        world.phase = GamePhase::GameOver;
        events.push(GameEvent::GameOver);
    }
}

/// Restart a finished run
fn restart(world: &mut World, events: &mut Vec<GameEvent>) {
    if world.thrust_active {
        events.push(GameEvent::ThrustStop);
    }
    log::info!("Restarting after score {}", world.score());
    world.reset();
    events.push(GameEvent::Restart);
}

/// Move bullets and drop those that left the corridor or the viewport
pub fn advance_bullets(world: &mut World) {
    for bullet in &mut world.bullets {
        bullet.pos += bullet.vel;
    }
    world.bullets.retain(inside_corridor);
    let scroll = world.scroll;
    world.bullets.retain(|b| inside_viewport(b, scroll));
}

/// Bullet still fully between the walls at its own height
pub fn inside_corridor(bullet: &Bullet) -> bool {
    let (left, right) = corridor::bounds(bullet.pos.y);
    let rect = bullet.rect();
    rect.x >= left as f32 && rect.x + rect.w <= right as f32
}

fn inside_viewport(bullet: &Bullet, scroll: f32) -> bool {
    let x = bullet.pos.x;
    let y = bullet.pos.y;
    x > -PRUNE_MARGIN
        && x < VIEW_WIDTH + PRUNE_MARGIN
        && y - scroll < VIEW_HEIGHT + PRUNE_MARGIN
        && y > scroll - PRUNE_MARGIN
}

/// Within one viewport (plus margin) of the scroll front on either side
pub fn in_live_range(y: f32, scroll: f32) -> bool {
    let reach = VIEW_HEIGHT + PRUNE_MARGIN;
    y - scroll < reach && scroll - y <= reach
}

/// Drop entities that scrolled out of range: bullets, rocks, then wall holes
pub fn prune_behind(world: &mut World) {
    let scroll = world.scroll;
    world.bullets.retain(|b| in_live_range(b.pos.y, scroll));
    world.obstacles.retain(|o| in_live_range(o.y, scroll));
    world.holes.retain(|h| in_live_range(h.y, scroll));
}
