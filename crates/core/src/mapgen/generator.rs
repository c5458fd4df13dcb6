//! High-level generation orchestration that runs the four stages over one grid.

use log::{info, warn};
use rand_chacha::{ChaCha8Rng, rand_core::SeedableRng};

use super::carve::carve;
use super::classify::{RegionPass, classify_region};
use super::grid::Grid;
use super::smooth::clean_interior;
use super::stats::GenerationStats;
use super::walls::synthesize_walls;
use crate::config::GenerationConfig;
use crate::error::GenerationError;

pub struct MapGenerator {
    config: GenerationConfig,
}

impl MapGenerator {
    pub fn new(config: GenerationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Carve, clean, and seal without classifying regions. These stages cannot fail.
    pub fn sealed_grid(&self) -> Grid {
        let mut grid = Grid::new(self.config.map_size as usize);
        let mut rng = ChaCha8Rng::seed_from_u64(self.config.seed);

        carve(&mut grid, self.config.walker_count, self.config.walker_steps, &mut rng);
        clean_interior(&mut grid, self.config.clean_iterations);
        synthesize_walls(&mut grid);
        grid
    }

    /// Run the full pipeline. On error the partially classified grid is dropped.
    pub fn generate(&self) -> Result<Grid, GenerationError> {
        let mut grid = self.sealed_grid();
        for pass in RegionPass::standard() {
            if let Err(err) = classify_region(&mut grid, pass) {
                warn!("seed {} aborted in {:?} pass: {err}", self.config.seed, pass.region);
                return Err(err);
            }
        }

        info!("seed {} generated {}", self.config.seed, GenerationStats::from_grid(&grid));
        Ok(grid)
    }
}
