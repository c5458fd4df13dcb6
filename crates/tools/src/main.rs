use anyhow::{Context, Result};
use cavegen::{GenerationConfig, GenerationStats, Grid, ascii_rows, generate};
use clap::{Parser, ValueEnum};
use log::info;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    /// One line of glyphs per grid row
    Ascii,
    /// Config, stats, fingerprint, and the full tile grid
    Json,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML file with generation parameters; flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,
    #[arg(short, long)]
    seed: Option<u64>,
    #[arg(long)]
    map_size: Option<u32>,
    #[arg(long)]
    walker_count: Option<u32>,
    #[arg(long)]
    walker_steps: Option<u32>,
    #[arg(long)]
    clean_iterations: Option<u32>,
    #[arg(long)]
    tile_size: Option<u32>,
    /// Show regions instead of structure
    #[arg(long)]
    shade: bool,
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Ascii)]
    format: OutputFormat,
}

#[derive(Serialize)]
struct Report<'a> {
    config: &'a GenerationConfig,
    stats: GenerationStats,
    fingerprint: String,
    grid: &'a Grid,
}

fn resolve_config(args: &Args) -> Result<GenerationConfig> {
    let mut config = match &args.config {
        Some(path) => GenerationConfig::load_toml(path)
            .with_context(|| format!("Failed to load config file: {}", path.display()))?,
        None => GenerationConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(map_size) = args.map_size {
        config.map_size = map_size;
    }
    if let Some(walker_count) = args.walker_count {
        config.walker_count = walker_count;
    }
    if let Some(walker_steps) = args.walker_steps {
        config.walker_steps = walker_steps;
    }
    if let Some(clean_iterations) = args.clean_iterations {
        config.clean_iterations = clean_iterations;
    }
    if let Some(tile_size) = args.tile_size {
        config.tile_size = tile_size;
    }
    config.shade_regions |= args.shade;
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let config = resolve_config(&args)?;
    info!("generating with {config:?}");

    let grid = generate(&config)
        .with_context(|| format!("Generation failed for seed {}", config.seed))?;
    let stats = GenerationStats::from_grid(&grid);
    let fingerprint = grid.fingerprint_hex();

    match args.format {
        OutputFormat::Ascii => {
            for row in ascii_rows(&grid, config.shade_regions) {
                println!("{row}");
            }
            eprintln!("{stats}");
            eprintln!("Fingerprint: {fingerprint}");
        }
        OutputFormat::Json => {
            let report = Report { config: &config, stats, fingerprint, grid: &grid };
            let json = serde_json::to_string_pretty(&report)
                .with_context(|| "Failed to serialize generation report")?;
            println!("{json}");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let args = Args::parse_from([
            "cavegen-cli",
            "--seed",
            "9",
            "--map-size",
            "32",
            "--walker-steps",
            "0",
            "--shade",
        ]);
        let config = resolve_config(&args).expect("no file to read");
        assert_eq!(config.seed, 9);
        assert_eq!(config.map_size, 32);
        assert_eq!(config.walker_steps, 0);
        assert_eq!(config.walker_count, GenerationConfig::default().walker_count);
        assert!(config.shade_regions);
    }

    #[test]
    fn json_report_uses_the_shared_fingerprint_format() {
        let config = GenerationConfig {
            map_size: 7,
            walker_count: 1,
            walker_steps: 0,
            ..GenerationConfig::default()
        };
        let grid = generate(&config).expect("single walled tile");
        let report = Report {
            config: &config,
            stats: GenerationStats::from_grid(&grid),
            fingerprint: grid.fingerprint_hex(),
            grid: &grid,
        };

        let json = serde_json::to_value(&report).expect("serialize");
        let printed = json["fingerprint"].as_str().expect("string field");
        assert!(printed.starts_with("0x") && printed.len() == 18, "{printed}");
        assert_eq!(json["stats"]["unclassified"], 0);
    }

    #[test]
    fn missing_config_file_is_reported() {
        let args = Args::parse_from(["cavegen-cli", "--config", "/nonexistent/cave.toml"]);
        let err = resolve_config(&args).expect_err("file does not exist");
        assert!(err.to_string().contains("/nonexistent/cave.toml"));
    }
}
