//! Wall synthesis: seal floor against empty space and against the map border.

use log::debug;

use super::grid::Grid;
use crate::types::TileState;

/// Single row-major sweep. Each tile observed as floor turns its Empty neighbors into walls and,
/// when it lies on the border, becomes a wall itself.
pub fn synthesize_walls(grid: &mut Grid) {
    let mut raised = 0_usize;
    for pos in grid.positions() {
        if grid.state_at(pos) != Some(TileState::Floor) {
            continue;
        }
        for neighbor in pos.neighbors() {
            if grid.state_at(neighbor) == Some(TileState::Empty) {
                raised += usize::from(grid.set_state(neighbor, TileState::Wall));
            }
        }
        if grid.is_border(pos) {
            raised += usize::from(grid.set_state(pos, TileState::Wall));
        }
    }
    debug!("walls: raised {raised} wall tiles");
}
