//! Wall-proximity probe used to gate region classification.
//!
//! This is a heuristic, not a shortest-path distance: candidates are sampled cross-wise on rings
//! whose radius grows by one every fourth dequeue, with no deduplication. Region boundaries depend
//! on this exact growth pattern.

use std::collections::VecDeque;

use super::grid::Grid;
use crate::error::GenerationError;
use crate::types::{Pos, TileState};

const DEQUEUES_PER_RING: u32 = 4;

/// Ring offset at which the probe first dequeues a wall. Non-floor tiles report `0`.
///
/// Dequeuing a candidate outside the grid aborts with [`GenerationError::OutOfBounds`].
pub fn distance_to_wall(grid: &Grid, start: Pos) -> Result<u32, GenerationError> {
    if grid.checked_tile(start)?.state != TileState::Floor {
        return Ok(0);
    }

    let mut queue = VecDeque::from([start]);
    let mut offset = 1_i32;
    let mut counter = 0_u32;
    while let Some(candidate) = queue.pop_front() {
        counter += 1;
        if counter.is_multiple_of(DEQUEUES_PER_RING) {
            offset += 1;
        }
        if grid.checked_tile(candidate)?.state == TileState::Wall {
            break;
        }
        queue.extend([
            Pos::new(candidate.x, candidate.y - offset),
            Pos::new(candidate.x + offset, candidate.y),
            Pos::new(candidate.x, candidate.y + offset),
            Pos::new(candidate.x - offset, candidate.y),
        ]);
    }

    Ok(offset as u32)
}
