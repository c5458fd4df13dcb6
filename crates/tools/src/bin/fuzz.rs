use anyhow::{Result, bail};
use cavegen::{GenerationConfig, GenerationError, Grid, MapGenerator, Region, TileState};
use clap::Parser;
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 200)]
    runs: u32,
    /// Upper bound (exclusive) on the sampled map size
    #[arg(long, default_value_t = 96)]
    max_size: u32,
}

fn sample_config(rng: &mut ChaCha8Rng, max_size: u32) -> GenerationConfig {
    GenerationConfig {
        seed: rng.next_u64(),
        map_size: rng.next_u32() % max_size.max(1),
        walker_count: rng.next_u32() % 12,
        walker_steps: rng.next_u32() % 1500,
        clean_iterations: rng.next_u32() % 6,
        ..GenerationConfig::default()
    }
}

fn check_sealed(grid: &Grid) -> Option<String> {
    for pos in grid.positions() {
        if grid.state_at(pos) != Some(TileState::Floor) {
            continue;
        }
        if grid.is_border(pos) {
            return Some(format!("floor on border at {pos:?}"));
        }
        if pos.neighbors().into_iter().any(|n| grid.state_at(n) == Some(TileState::Empty)) {
            return Some(format!("floor at {pos:?} touches empty"));
        }
    }
    None
}

/// The center's floor component is painted, and no painted tile borders unreached floor.
fn check_classified(grid: &Grid) -> Option<String> {
    let painted_at = |pos| grid.tile(pos).and_then(|tile| tile.painted_region());
    let center = grid.center();
    if grid.state_at(center) == Some(TileState::Floor) && painted_at(center).is_none() {
        return Some(format!("center floor at {center:?} left unclassified"));
    }

    let mut unclassified = 0_usize;
    for pos in grid.positions() {
        let Some(tile) = grid.tile(pos) else {
            continue;
        };
        if tile.state != TileState::Floor || painted_at(pos).is_some() {
            continue;
        }
        if !tile.region_color.is_transparent() {
            return Some(format!("floor at {pos:?} carries stray color {}", tile.region_color));
        }
        if let Some(neighbor) = pos.neighbors().into_iter().find(|n| painted_at(*n).is_some()) {
            return Some(format!("unclassified floor at {pos:?} borders painted {neighbor:?}"));
        }
        unclassified += 1;
    }

    let painted: usize = Region::ALL.into_iter().map(|region| grid.count_region(region)).sum();
    let floor = grid.count_state(TileState::Floor);
    (painted + unclassified != floor).then(|| {
        format!("{floor} floor tiles but {painted} painted and {unclassified} unclassified")
    })
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    println!("Starting Fuzz harness on seed {} for {} runs...", args.seed, args.runs);
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let mut escaped = 0_u32;

    for run in 0..args.runs {
        let config = sample_config(&mut rng, args.max_size);
        let generator = MapGenerator::new(config.clone());

        if let Some(violation) = check_sealed(&generator.sealed_grid()) {
            bail!("run {run} {config:?}: {violation}");
        }
        match generator.generate() {
            Ok(grid) => {
                if let Some(violation) = check_classified(&grid) {
                    bail!("run {run} {config:?}: {violation}");
                }
                if generate_again(&config)? != grid.fingerprint() {
                    bail!("run {run} {config:?}: output is not reproducible");
                }
            }
            Err(GenerationError::OutOfBounds { pos, size }) => {
                if (0..size as i32).contains(&pos.x) && (0..size as i32).contains(&pos.y) {
                    bail!("run {run} {config:?}: out-of-bounds error at in-bounds {pos:?}");
                }
                escaped += 1;
            }
        }
    }

    println!("Fuzzing completed successfully ({escaped} runs stopped by probe escape).");
    Ok(())
}

fn generate_again(config: &GenerationConfig) -> Result<u64> {
    Ok(cavegen::generate(config)?.fingerprint())
}
