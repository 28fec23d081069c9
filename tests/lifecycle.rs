use updraft::consts::*;
use updraft::sim::enemy::update_enemies;
use updraft::sim::{
    Enemy, EnemyKind, GameEvent, GamePhase, HitCause, Obstacle, Side, TickInput, World, tick,
};

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

fn finish_countdown(world: &mut World) {
    while world.countdown > 0 {
        tick(world, &TickInput::default());
    }
}

fn random_input(rng: &mut Pcg32) -> TickInput {
    TickInput {
        left: rng.random_bool(0.3),
        right: rng.random_bool(0.3),
        thrust: rng.random_bool(0.45),
        restart: rng.random_bool(0.05),
    }
}

// ── Life system ──────────────────────────────────────────────────────────────

#[test]
fn falling_out_three_times_ends_the_run() {
    let mut world = World::new(77);
    let mut hit_events = Vec::new();

    for expected_lives in [2u8, 1, 0] {
        finish_countdown(&mut world);
        assert_eq!(world.phase, GamePhase::Playing);
        world.player.pos.y = world.scroll + VIEW_HEIGHT + 50.0;
        let events = tick(&mut world, &TickInput::default());
        hit_events.extend(
            events
                .iter()
                .filter(|e| matches!(e, GameEvent::PlayerHit { .. }))
                .copied(),
        );
        assert_eq!(world.lives, expected_lives);
    }

    assert!(world.is_game_over());
    assert_eq!(
        hit_events,
        vec![
            GameEvent::PlayerHit { cause: HitCause::FellThrough, lives_left: 2 },
            GameEvent::PlayerHit { cause: HitCause::FellThrough, lives_left: 1 },
            GameEvent::PlayerHit { cause: HitCause::FellThrough, lives_left: 0 },
        ]
    );

    // Game over is frozen until restart
    let frozen = world.scroll;
    for _ in 0..30 {
        tick(&mut world, &TickInput { thrust: true, ..Default::default() });
    }
    assert_eq!(world.scroll, frozen);

    let events = tick(&mut world, &TickInput { restart: true, ..Default::default() });
    assert!(events.contains(&GameEvent::Restart));
    assert_eq!(world.scroll, 0.0);
    assert_eq!(world.lives, START_LIVES);
    assert_eq!(world.countdown, COUNTDOWN_TICKS);
    assert!(world.obstacles.is_empty());
    assert!(world.holes.is_empty());
    assert!(world.bullets.is_empty());
}

#[test]
fn random_play_keeps_invariants() {
    let mut world = World::new(31337);
    let mut input_rng = Pcg32::seed_from_u64(4242);
    let mut last_scroll = world.scroll;
    let mut last_lives = world.lives;

    for _ in 0..20_000 {
        let input = random_input(&mut input_rng);
        let events = tick(&mut world, &input);
        let restarted = events.contains(&GameEvent::Restart);

        if restarted {
            assert_eq!(world.scroll, 0.0);
            assert_eq!(world.lives, START_LIVES);
        } else {
            assert!(world.scroll >= last_scroll, "scroll went backwards");
            assert!(world.lives == last_lives || world.lives + 1 == last_lives);
        }
        assert!(world.lives <= START_LIVES);
        assert_eq!(world.is_game_over(), world.lives == 0);

        for bullet in &world.bullets {
            assert!((bullet.vel.length() - BULLET_SPEED).abs() < 1e-4);
        }
        for rock in &world.obstacles {
            assert!((20.0..=50.0).contains(&rock.width));
            assert!((5.0..=15.0).contains(&rock.height));
            assert!(rock.enemy.is_some());
        }

        last_scroll = world.scroll;
        last_lives = world.lives;
    }
}

#[test]
fn same_seed_and_tape_replays_identically() {
    let play = || {
        let mut world = World::new(5150);
        let mut input_rng = Pcg32::seed_from_u64(9);
        let mut log = Vec::new();
        for _ in 0..5000 {
            let input = random_input(&mut input_rng);
            log.extend(tick(&mut world, &input));
        }
        (log, world.scroll, world.player.pos, world.bullets.len())
    };
    assert_eq!(play(), play());
}

// ── Scenarios ────────────────────────────────────────────────────────────────

#[test]
fn enemy_sits_centred_on_left_rock() {
    let mut world = World::new(1);
    let (left, _) = updraft::sim::corridor::bounds(50.0);
    let mut rock = Obstacle {
        x: left as f32,
        y: 50.0,
        width: 30.0,
        height: 8.0,
        side: Side::Left,
        enemy: None,
    };
    rock.enemy = Some(Enemy {
        kind: EnemyKind::Normal,
        pos: Vec2::ZERO,
        cooldown: 100,
        phase: 0.0,
        can_shoot: true,
    });
    world.obstacles.push(rock);

    let mut events = Vec::new();
    update_enemies(&mut world, &mut events);
    let enemy = world.obstacles[0].enemy.as_ref().unwrap();
    assert_eq!(enemy.pos, Vec2::new(left as f32 + 11.0, 42.0));
}

#[test]
fn idle_player_falls_under_gravity() {
    let mut world = World::new(2);
    finish_countdown(&mut world);
    // Keep the shaft empty so nothing interrupts the fall
    world.next_rock_y = f32::MAX;
    world.next_hole_y = f32::MAX;

    let mut last_y = world.player.pos.y;
    let mut last_vy = world.player.vy;
    for _ in 0..20 {
        tick(&mut world, &TickInput::default());
        assert!(world.player.pos.y > last_y);
        assert!((world.player.vy - (last_vy + GRAVITY).min(MAX_DOWN_VELOCITY)).abs() < 1e-5);
        last_y = world.player.pos.y;
        last_vy = world.player.vy;
    }
}
