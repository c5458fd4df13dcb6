use std::fmt;

use serde::Serialize;

use super::grid::Grid;
use crate::types::{Region, TileState};

/// Tile counts of a finished grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct GenerationStats {
    pub size: usize,
    pub floor: usize,
    pub wall: usize,
    pub empty: usize,
    pub cave: usize,
    pub intermediate: usize,
    pub open: usize,
    /// Floor no classifier pass reached.
    pub unclassified: usize,
}

impl GenerationStats {
    pub fn from_grid(grid: &Grid) -> Self {
        Self {
            size: grid.size(),
            floor: grid.count_state(TileState::Floor),
            wall: grid.count_state(TileState::Wall),
            empty: grid.count_state(TileState::Empty),
            cave: grid.count_region(Region::Cave),
            intermediate: grid.count_region(Region::Intermediate),
            open: grid.count_region(Region::Open),
            unclassified: grid.count_unclassified(),
        }
    }
}

impl fmt::Display for GenerationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{size}x{size}: floor={} wall={} empty={} \
             (cave={} intermediate={} open={} unclassified={})",
            self.floor,
            self.wall,
            self.empty,
            self.cave,
            self.intermediate,
            self.open,
            self.unclassified,
            size = self.size
        )
    }
}
