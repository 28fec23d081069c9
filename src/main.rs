//! Updraft entry point
//!
//! Headless native runner: plays the frame clock and input roles, feeding the
//! simulation one tick per frame and reporting what happened.
//!
//! Usage: `updraft [settings.json]`

use updraft::Settings;
use updraft::sim::{GameEvent, RenderSnapshot, TickInput, World, autopilot, tick};

fn main() {
    env_logger::init();
    log::info!("Updraft (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(path),
        None => Settings::default(),
    };
    let seed = settings.resolve_seed();
    log::info!("Running {} ticks with seed {}", settings.ticks, seed);

    let mut world = World::new(seed);
    let mut runs = 1u32;
    let mut best_score = 0u64;
    let mut hits = 0u32;
    let mut shots = 0u32;

    for _ in 0..settings.ticks {
        let input = if settings.autopilot {
            autopilot::steer(&world)
        } else {
            TickInput {
                restart: world.is_game_over(),
                ..Default::default()
            }
        };
        let input = TickInput {
            restart: input.restart && settings.auto_restart,
            ..input
        };

        best_score = best_score.max(world.score());
        for event in tick(&mut world, &input) {
            if settings.log_events {
                log::info!("tick {}: {:?}", world.time_ticks, event);
            }
            match event {
                GameEvent::PlayerHit { .. } => hits += 1,
                GameEvent::EnemyFire { .. } => shots += 1,
                GameEvent::Restart => runs += 1,
                _ => {}
            }
        }
    }
    best_score = best_score.max(world.score());

    println!(
        "seed {} | runs {} | best score {} | lives {} | hits {} | enemy volleys {} | game over: {}",
        seed,
        runs,
        best_score,
        world.lives,
        hits,
        shots,
        world.is_game_over()
    );

    if settings.dump_snapshot {
        match serde_json::to_string_pretty(&RenderSnapshot::capture(&world)) {
            Ok(json) => println!("{}", json),
            Err(e) => log::error!("Failed to serialize snapshot: {}", e),
        }
    }
}
