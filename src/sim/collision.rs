//! Player physics and collision detection
//!
//! Rocks are solid walls sideways and platforms vertically; wall holes are
//! platforms only. Vertical contact is a swept check between last tick's and
//! this tick's position, one-sided per face.

use super::corridor;
use super::state::{HitCause, Obstacle, Player, World};
use crate::Rect;
use crate::consts::*;

/// Vertical contact made during platform resolution
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlatformContact {
    /// Came down onto the top face
    Landed { top: f32 },
    /// Came up under the bottom face
    Bumped { bottom: f32 },
}

/// Apply left/right input, clamp to the corridor, and refuse moves into rocks
pub fn move_horizontal(player: &mut Player, left: bool, right: bool, obstacles: &[Obstacle]) {
    let old_x = player.pos.x;
    let mut new_x = old_x;
    if left {
        new_x -= player.step;
    }
    if right {
        new_x += player.step;
    }

    let center_y = player.pos.y + (PLAYER_SIZE / 2.0).floor();
    let (left_wall, right_wall) = corridor::bounds(center_y);
    let (left_wall, right_wall) = (left_wall as f32, right_wall as f32);
    if new_x < left_wall {
        new_x = left_wall;
    }
    if new_x + PLAYER_SIZE > right_wall {
        new_x = right_wall - PLAYER_SIZE;
    }

    let candidate = Rect::new(new_x, player.pos.y, PLAYER_SIZE, PLAYER_SIZE);
    if obstacles.iter().any(|rock| candidate.overlaps(&rock.rect())) {
        new_x = old_x;
    }
    player.pos.x = new_x;
}

/// Integrate thrust/gravity and move vertically; returns the previous y
pub fn move_vertical(player: &mut Player, thrust: bool, scroll: f32) -> f32 {
    let old_y = player.pos.y;
    player.vy += if thrust { THRUST } else { GRAVITY };
    player.vy = player.vy.clamp(MAX_UP_VELOCITY, MAX_DOWN_VELOCITY);

    let mut new_y = old_y + player.vy;
    if player.vy < 0.0 && new_y < scroll {
        new_y = scroll;
        player.vy = 0.0;
    }
    player.pos.y = new_y;
    old_y
}

/// Snap onto or under any platform crossed since `old_y`.
///
/// Returns the last contact made, if any.
pub fn resolve_platforms<I>(player: &mut Player, old_y: f32, platforms: I) -> Option<PlatformContact>
where
    I: IntoIterator<Item = Rect>,
{
    let mut contact = None;
    for plat in platforms {
        if !player.rect().overlaps_x(&plat) {
            continue;
        }
        let top = plat.y;
        let bottom = plat.bottom();
        if player.vy > 0.0
            && old_y + PLAYER_SIZE <= top + PLATFORM_TOLERANCE
            && player.pos.y + PLAYER_SIZE >= top
        {
            player.pos.y = top - PLAYER_SIZE;
            player.vy = 0.0;
            contact = Some(PlatformContact::Landed { top });
        } else if player.vy < 0.0
            && old_y >= bottom - PLATFORM_TOLERANCE
            && player.pos.y <= bottom
        {
            player.pos.y = bottom;
            player.vy = 0.0;
            contact = Some(PlatformContact::Bumped { bottom });
        }
    }
    contact
}

/// Every platform rectangle: rocks first, then wall holes
pub fn platforms(world: &World) -> Vec<Rect> {
    world
        .obstacles
        .iter()
        .map(Obstacle::rect)
        .chain(world.holes.iter().map(|h| h.rect()))
        .collect()
}

/// Full player step: horizontal, vertical, then platform resolution
pub fn step_player(world: &mut World, left: bool, right: bool, thrust: bool) -> Option<PlatformContact> {
    move_horizontal(&mut world.player, left, right, &world.obstacles);
    let old_y = move_vertical(&mut world.player, thrust, world.scroll);
    let plats = platforms(world);
    resolve_platforms(&mut world.player, old_y, plats)
}

/// First life-costing contact this tick (enemy, then bullet, then fall-through)
pub fn detect_hit(world: &World) -> Option<HitCause> {
    let player = world.player.rect();
    if world.enemies().any(|e| player.overlaps(&e.rect())) {
        return Some(HitCause::Enemy);
    }
    if world.bullets.iter().any(|b| b.rect().overlaps(&player)) {
        return Some(HitCause::Bullet);
    }
    if world.player_screen_y() > VIEW_HEIGHT {
        return Some(HitCause::FellThrough);
    }
    None
}
