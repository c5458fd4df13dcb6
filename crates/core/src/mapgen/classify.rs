//! Region classification: tolerance-gated flood fills from the grid center.

use std::collections::VecDeque;

use log::debug;

use super::grid::Grid;
use super::probe::distance_to_wall;
use crate::error::GenerationError;
use crate::types::{Color, Pos, Region, TileState};

/// One flood-fill pass: repaint reachable floor deeper than `tolerance` as `region`/`color`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegionPass {
    pub color: Color,
    pub region: Region,
    pub tolerance: u32,
}

impl RegionPass {
    pub const CAVE: RegionPass =
        RegionPass { color: Color::CAVE, region: Region::Cave, tolerance: 0 };
    pub const INTERMEDIATE: RegionPass =
        RegionPass { color: Color::INTERMEDIATE, region: Region::Intermediate, tolerance: 4 };
    pub const OPEN: RegionPass =
        RegionPass { color: Color::OPEN, region: Region::Open, tolerance: 20 };

    /// The three passes in the order that nests the zones. Order matters: each pass floods only
    /// the tiles the previous one painted.
    pub const fn standard() -> [RegionPass; 3] {
        [Self::CAVE, Self::INTERMEDIATE, Self::OPEN]
    }
}

/// Flood from the center over tiles that share the center's current region color, are floor, and
/// probe deeper than the tolerance. Returns the number of tiles repainted.
///
/// A pass whose color is already at the center is a no-op. Neighbors outside the grid are
/// dropped; only a probe escaping the grid is an error.
pub fn classify_region(grid: &mut Grid, pass: RegionPass) -> Result<usize, GenerationError> {
    let start = grid.center();
    let Some(start_tile) = grid.tile(start) else {
        return Ok(0);
    };
    let current_color = start_tile.region_color;
    if current_color == pass.color {
        return Ok(0);
    }

    let mut frontier = VecDeque::from([start]);
    let mut painted = 0_usize;
    while let Some(pos) = frontier.pop_front() {
        if !accepts(grid, pos, current_color, pass.tolerance)? {
            continue;
        }
        grid.set_region(pos, pass.region, pass.color);
        painted += 1;
        frontier.extend([
            Pos::new(pos.x - 1, pos.y),
            Pos::new(pos.x + 1, pos.y),
            Pos::new(pos.x, pos.y - 1),
            Pos::new(pos.x, pos.y + 1),
        ]);
    }

    debug!(
        "classify {:?} (tolerance {}): painted {painted} tiles",
        pass.region, pass.tolerance
    );
    Ok(painted)
}

fn accepts(
    grid: &Grid,
    pos: Pos,
    current_color: Color,
    tolerance: u32,
) -> Result<bool, GenerationError> {
    let Some(tile) = grid.tile(pos) else {
        return Ok(false);
    };
    if tile.region_color != current_color || tile.state != TileState::Floor {
        return Ok(false);
    }
    Ok(distance_to_wall(grid, pos)? > tolerance)
}
