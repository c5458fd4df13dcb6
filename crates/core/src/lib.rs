pub mod config;
pub mod error;
pub mod mapgen;
pub mod render;
pub mod types;

pub use config::GenerationConfig;
pub use error::{ConfigLoadError, GenerationError};
pub use mapgen::{GenerationStats, Grid, MapGenerator, RegionPass, generate};
pub use render::{RenderBlock, ascii_rows, render_blocks};
pub use types::*;
