//! Generation parameters, as emitted by the viewer controls or read from a TOML file.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigLoadError;

pub const DEFAULT_WALKER_COUNT: u32 = 10;
pub const DEFAULT_WALKER_STEPS: u32 = 1000;
pub const DEFAULT_CLEAN_ITERATIONS: u32 = 5;
pub const DEFAULT_MAP_SIZE: u32 = 200;
pub const DEFAULT_TILE_SIZE: u32 = 4;

/// Immutable input of one generation run. Missing TOML fields take their defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Seed of the walker direction stream.
    pub seed: u64,
    pub walker_count: u32,
    pub walker_steps: u32,
    pub clean_iterations: u32,
    pub map_size: u32,
    /// Edge length in pixels of one rendered tile.
    pub tile_size: u32,
    /// Render region colors instead of structural colors.
    pub shade_regions: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            walker_count: DEFAULT_WALKER_COUNT,
            walker_steps: DEFAULT_WALKER_STEPS,
            clean_iterations: DEFAULT_CLEAN_ITERATIONS,
            map_size: DEFAULT_MAP_SIZE,
            tile_size: DEFAULT_TILE_SIZE,
            shade_regions: false,
        }
    }
}

impl GenerationConfig {
    pub fn with_seed(self, seed: u64) -> Self {
        Self { seed, ..self }
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigLoadError> {
        toml::from_str(raw).map_err(ConfigLoadError::Parse)
    }

    /// Load parameters from a TOML file such as:
    ///
    /// ```toml
    /// seed = 42
    /// map_size = 120
    /// walker_count = 6
    /// ```
    pub fn load_toml(path: &Path) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path).map_err(ConfigLoadError::Io)?;
        Self::from_toml_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn partial_toml_keeps_defaults_for_missing_fields() {
        let config = GenerationConfig::from_toml_str("seed = 7\nmap_size = 64\n").expect("parse");
        assert_eq!(config.seed, 7);
        assert_eq!(config.map_size, 64);
        assert_eq!(config.walker_count, DEFAULT_WALKER_COUNT);
        assert_eq!(config.walker_steps, DEFAULT_WALKER_STEPS);
        assert_eq!(config.clean_iterations, DEFAULT_CLEAN_ITERATIONS);
        assert_eq!(config.tile_size, DEFAULT_TILE_SIZE);
        assert!(!config.shade_regions);
    }

    #[test]
    fn negative_values_are_rejected_as_parse_errors() {
        let err = GenerationConfig::from_toml_str("walker_count = -3\n")
            .expect_err("negative counts cannot be represented");
        assert!(matches!(err, ConfigLoadError::Parse(_)));
    }

    #[test]
    fn zero_sized_maps_are_accepted() {
        let config = GenerationConfig::from_toml_str("map_size = 0\nwalker_count = 0\n")
            .expect("degenerate input is still valid input");
        assert_eq!(config.map_size, 0);
        assert_eq!(config.walker_count, 0);
    }

    #[test]
    fn loads_config_from_file() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("cave.toml");
        fs::write(&path, "seed = 99\nshade_regions = true\ntile_size = 2\n").expect("write");

        let config = GenerationConfig::load_toml(&path).expect("load");
        let expected =
            GenerationConfig { shade_regions: true, tile_size: 2, ..Default::default() };
        assert_eq!(config, expected.with_seed(99));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempdir().expect("tempdir");
        let err = GenerationConfig::load_toml(&dir.path().join("absent.toml"))
            .expect_err("missing file should fail");
        assert!(matches!(err, ConfigLoadError::Io(_)));
    }
}
