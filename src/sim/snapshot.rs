//! Read-only render snapshot
//!
//! Copies what a renderer needs out of the [`World`] in screen space, so the
//! host never reaches into simulation state while drawing.

use serde::Serialize;

use super::corridor;
use super::state::{EnemyKind, GamePhase, World};
use crate::Rect;
use crate::consts::*;

/// What a sprite rectangle depicts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SpriteKind {
    Player,
    Rock,
    WallHole,
    Enemy { enemy: EnemyKind },
    Bullet,
}

/// A tagged rectangle in screen space
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sprite {
    #[serde(flatten)]
    pub kind: SpriteKind,
    pub rect: Rect,
}

/// Everything drawn for one frame
#[derive(Debug, Clone, Serialize)]
pub struct RenderSnapshot {
    pub scroll: f32,
    pub score: u64,
    pub lives: u8,
    /// Whole seconds left on the countdown (0 when not counting)
    pub countdown_secs: u32,
    pub phase: GamePhase,
    pub game_over: bool,
    /// Wall positions for each screen row, top to bottom
    pub walls: Vec<(i32, i32)>,
    /// Back-to-front draw order: rocks, enemies, wall holes, bullets, player
    pub sprites: Vec<Sprite>,
}

impl RenderSnapshot {
    /// Build a snapshot of the current frame
    pub fn capture(world: &World) -> Self {
        let scroll = world.scroll;
        let to_screen = |r: Rect| r.offset_y(-scroll);

        let walls = (0..VIEW_HEIGHT as i32)
            .map(|row| corridor::bounds(row as f32 + scroll))
            .collect();

        let mut sprites = Vec::with_capacity(
            world.obstacles.len() * 2 + world.holes.len() + world.bullets.len() + 1,
        );
        for rock in &world.obstacles {
            sprites.push(Sprite {
                kind: SpriteKind::Rock,
                rect: to_screen(rock.rect()),
            });
            if let Some(enemy) = &rock.enemy {
                sprites.push(Sprite {
                    kind: SpriteKind::Enemy { enemy: enemy.kind },
                    rect: to_screen(enemy.rect()),
                });
            }
        }
        sprites.extend(world.holes.iter().map(|h| Sprite {
            kind: SpriteKind::WallHole,
            rect: to_screen(h.rect()),
        }));
        sprites.extend(world.bullets.iter().map(|b| Sprite {
            kind: SpriteKind::Bullet,
            rect: to_screen(b.rect()),
        }));
        sprites.push(Sprite {
            kind: SpriteKind::Player,
            rect: to_screen(world.player.rect()),
        });

        Self {
            scroll,
            score: world.score(),
            lives: world.lives,
            countdown_secs: world.countdown.div_ceil(TICKS_PER_SECOND),
            phase: world.phase,
            game_over: world.is_game_over(),
            walls,
            sprites,
        }
    }

    /// Sprites of one kind
    pub fn sprites_of(&self, kind: SpriteKind) -> impl Iterator<Item = &Sprite> {
        self.sprites.iter().filter(move |s| s.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{TickInput, tick};

    #[test]
    fn test_fresh_world_snapshot() {
        let world = World::new(10);
        let snap = RenderSnapshot::capture(&world);
        assert_eq!(snap.countdown_secs, 3);
        assert_eq!(snap.lives, 3);
        assert_eq!(snap.walls.len(), 120);
        assert_eq!(snap.walls[0], corridor::bounds(0.0));
        assert_eq!(snap.sprites.len(), 1);
        assert_eq!(snap.sprites[0].kind, SpriteKind::Player);
        assert!(!snap.game_over);
    }

    #[test]
    fn test_countdown_rounds_up() {
        let mut world = World::new(10);
        world.countdown = 61;
        assert_eq!(RenderSnapshot::capture(&world).countdown_secs, 2);
        world.countdown = 60;
        assert_eq!(RenderSnapshot::capture(&world).countdown_secs, 1);
        world.countdown = 0;
        assert_eq!(RenderSnapshot::capture(&world).countdown_secs, 0);
    }

    #[test]
    fn test_sprites_in_screen_space() {
        let mut world = World::new(11);
        for _ in 0..200 {
            tick(&mut world, &TickInput::default());
        }
        let snap = RenderSnapshot::capture(&world);
        assert_eq!(snap.sprites_of(SpriteKind::Rock).count(), world.obstacles.len());
        assert_eq!(snap.sprites_of(SpriteKind::WallHole).count(), world.holes.len());
        let player = snap.sprites_of(SpriteKind::Player).next().unwrap();
        assert_eq!(player.rect.y, world.player.pos.y - world.scroll);
    }

    #[test]
    fn test_snapshot_serializes() {
        let world = World::new(12);
        let json = serde_json::to_string(&RenderSnapshot::capture(&world)).unwrap();
        assert!(json.contains("\"kind\":\"player\""));
        assert!(json.contains("\"phase\":\"Countdown\""));
    }
}
