#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use battleship_rules::{logging, prelude::*};
#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::{rngs::SmallRng, seq::SliceRandom, SeedableRng};

/// Lay out a random standard fleet and bombard it until every vessel sinks.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible runs (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, value_parser = parse_level, help = "Log level; overrides BATTLESHIP_LOG")]
    log_level: Option<log::LevelFilter>,
}

#[cfg(feature = "std")]
fn parse_level(s: &str) -> Result<log::LevelFilter, String> {
    logging::parse_level(s).ok_or_else(|| format!("unknown log level `{}`", s))
}

#[cfg(feature = "std")]
#[derive(serde::Serialize)]
struct Summary {
    seed: Option<u64>,
    vessels: usize,
    shots: usize,
    hits: usize,
    destroyed: usize,
    last: Option<Coordinate>,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.log_level);

    let mut rng = match cli.seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    };

    let mut fleet = random_standard_fleet(&mut rng)?;
    for vessel in fleet.vessels() {
        log::info!("placed {:?}", vessel);
    }

    let mut targets = Vec::with_capacity(BOARD_SIZE * BOARD_SIZE);
    for row in 0..BOARD_SIZE as i32 {
        for column in 0..BOARD_SIZE as i32 {
            targets.push(Coordinate::new(row, column)?);
        }
    }
    targets.shuffle(&mut rng);

    let mut summary = Summary {
        seed: cli.seed,
        vessels: fleet.vessels().len(),
        shots: 0,
        hits: 0,
        destroyed: 0,
        last: None,
    };
    for target in targets {
        if fleet.all_destroyed() {
            break;
        }
        summary.shots += 1;
        summary.last = Some(target);
        match fleet.attack(target) {
            AttackResult::Miss => {}
            AttackResult::Hit => summary.hits += 1,
            AttackResult::Destroyed => {
                summary.hits += 1;
                summary.destroyed += 1;
                log::info!("{} destroyed, {} afloat", target, fleet.afloat());
            }
        }
    }

    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
