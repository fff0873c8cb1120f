//! Neon Drift headless demo
//!
//! Runs the simulation without a renderer: scatters a seeded population,
//! sweeps a synthetic pointer around the viewport to exercise deflection,
//! and logs progress. Pass `--dump` to print the final world as JSON.
//!
//! Usage: `neon-drift [seed] [ticks] [--tuning path.json] [--dump]`

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use neon_drift::sim::{TickInput, World, tick};
use neon_drift::tuning::Tuning;

const VIEWPORT_WIDTH: f32 = 800.0;
const VIEWPORT_HEIGHT: f32 = 600.0;

struct Args {
    seed: u64,
    ticks: u64,
    tuning_path: Option<String>,
    dump: bool,
}

fn parse_args() -> Args {
    let mut args = Args {
        seed: 1,
        ticks: 600,
        tuning_path: None,
        dump: false,
    };

    let mut positional = 0;
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--dump" => args.dump = true,
            "--tuning" => args.tuning_path = iter.next(),
            _ => {
                match positional {
                    0 => args.seed = arg.parse().unwrap_or(args.seed),
                    1 => args.ticks = arg.parse().unwrap_or(args.ticks),
                    _ => log::warn!("ignoring extra argument {arg}"),
                }
                positional += 1;
            }
        }
    }
    args
}

/// Synthetic pointer that orbits the viewport center, passing through the
/// body population so deflection actually fires
fn orbit_pointer(t: u64) -> Vec2 {
    let angle = t as f32 * 0.02;
    let center = Vec2::new(VIEWPORT_WIDTH / 2.0, VIEWPORT_HEIGHT / 2.0);
    center + Vec2::new(angle.cos(), angle.sin()) * 150.0
}

fn main() {
    env_logger::init();

    let args = parse_args();
    let tuning = match &args.tuning_path {
        Some(path) => Tuning::load(path),
        None => Tuning::default(),
    };

    log::info!(
        "seed {} for {} ticks, {} bodies",
        args.seed,
        args.ticks,
        tuning.body_count
    );

    let mut world = World::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT);
    let mut rng = Pcg32::seed_from_u64(args.seed);
    if let Err(err) = world.scatter(&mut rng, &tuning) {
        log::error!("failed to populate world: {err}");
        std::process::exit(1);
    }

    for t in 0..args.ticks {
        let pointer = orbit_pointer(t);
        tick(&mut world, &TickInput { pointer: Some(pointer) });

        if t % 120 == 0 {
            let avg_speed = world
                .bodies()
                .iter()
                .map(|b| b.vel.length())
                .sum::<f32>()
                / world.bodies().len().max(1) as f32;
            log::debug!("tick {t}: avg speed {avg_speed:.2} px/tick");
        }
    }

    log::info!("done after {} ticks", args.ticks);

    if args.dump {
        match serde_json::to_string_pretty(&world) {
            Ok(json) => println!("{json}"),
            Err(err) => log::error!("failed to serialize world: {err}"),
        }
    }
}
