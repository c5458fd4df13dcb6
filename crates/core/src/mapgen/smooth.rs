//! Interior cleaning: Empty pockets fully enclosed by floor become floor.

use log::debug;

use super::grid::Grid;
use crate::types::TileState;

/// Run exactly `clean_iterations` sweeps. Updates are applied in place, so a tile filled early in
/// a sweep already counts as floor for the tiles visited after it. Out-of-grid neighbors never
/// count as floor.
pub fn clean_interior(grid: &mut Grid, clean_iterations: u32) {
    for iteration in 0..clean_iterations {
        let mut filled = 0_usize;
        for pos in grid.positions() {
            if grid.state_at(pos) != Some(TileState::Empty) {
                continue;
            }
            let enclosed = pos
                .neighbors()
                .into_iter()
                .all(|neighbor| grid.state_at(neighbor) == Some(TileState::Floor));
            if enclosed && grid.set_state(pos, TileState::Floor) {
                filled += 1;
            }
        }
        debug!("clean pass {}: filled {filled} pockets", iteration + 1);
    }
}
