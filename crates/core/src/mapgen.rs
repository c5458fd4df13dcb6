//! Procedural cave generation: random-walk carving, interior cleaning, wall synthesis, and
//! region classification, in that order, over one square grid.

mod carve;
mod classify;
mod generator;
mod grid;
mod probe;
mod smooth;
mod stats;
mod walls;

pub use carve::{Direction, carve, step};
pub use classify::{RegionPass, classify_region};
pub use generator::MapGenerator;
pub use grid::Grid;
pub use probe::distance_to_wall;
pub use smooth::clean_interior;
pub use stats::GenerationStats;
pub use walls::synthesize_walls;

use crate::config::GenerationConfig;
use crate::error::GenerationError;

pub fn generate(config: &GenerationConfig) -> Result<Grid, GenerationError> {
    MapGenerator::new(config.clone()).generate()
}

#[cfg(test)]
mod tests {
    use super::{GenerationConfig, MapGenerator};

    #[test]
    fn generate_matches_map_generator_output() {
        let config = GenerationConfig { map_size: 32, walker_steps: 250, ..Default::default() };

        let from_helper = super::generate(&config);
        let from_generator = MapGenerator::new(config).generate();

        assert_eq!(from_helper, from_generator);
    }
}
