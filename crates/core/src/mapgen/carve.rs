//! Random-walk carving. Every walker starts at the grid center and stamps floor along its path.

use log::{debug, warn};
use rand_chacha::rand_core::Rng;

use super::grid::Grid;
use crate::types::{Pos, TileState};

const DIRECTION_COUNT: u32 = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    PlusX,
    PlusY,
    MinusX,
    MinusY,
}

impl Direction {
    pub fn from_roll(roll: u32) -> Option<Self> {
        match roll {
            0 => Some(Self::PlusX),
            1 => Some(Self::PlusY),
            2 => Some(Self::MinusX),
            3 => Some(Self::MinusY),
            _ => None,
        }
    }
}

/// Move one walker step. A move that would leave `[0, size - 1]` is dropped and the walker stays
/// put; an unknown roll is logged and also leaves the walker in place.
pub fn step(pos: Pos, roll: u32, size: usize) -> Pos {
    let last = size as i32 - 1;
    match Direction::from_roll(roll) {
        Some(Direction::PlusX) if pos.x < last => Pos { x: pos.x + 1, ..pos },
        Some(Direction::PlusY) if pos.y < last => Pos { y: pos.y + 1, ..pos },
        Some(Direction::MinusX) if pos.x > 0 => Pos { x: pos.x - 1, ..pos },
        Some(Direction::MinusY) if pos.y > 0 => Pos { y: pos.y - 1, ..pos },
        Some(_) => pos,
        None => {
            warn!("walker drew unknown direction {roll} at ({}, {}); step skipped", pos.x, pos.y);
            pos
        }
    }
}

/// Run `walker_count` independent walks of `walker_steps` moves each, turning visited tiles into
/// floor. The start tile is stamped before the first move.
pub fn carve<R: Rng>(grid: &mut Grid, walker_count: u32, walker_steps: u32, rng: &mut R) {
    if grid.size() == 0 {
        debug!("carve: empty grid, no walk attempted");
        return;
    }

    let mut carved = 0_usize;
    for _ in 0..walker_count {
        let mut pos = grid.center();
        carved += usize::from(grid.set_state(pos, TileState::Floor));
        for _ in 0..walker_steps {
            pos = step(pos, rng.next_u32() % DIRECTION_COUNT, grid.size());
            carved += usize::from(grid.set_state(pos, TileState::Floor));
        }
    }
    debug!("carve: {walker_count} walkers x {walker_steps} steps carved {carved} floor tiles");
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand_chacha::{ChaCha8Rng, rand_core::SeedableRng};

    use super::*;

    #[test]
    fn moves_follow_the_four_cardinal_directions() {
        let pos = Pos::new(2, 2);
        assert_eq!(step(pos, 0, 5), Pos::new(3, 2));
        assert_eq!(step(pos, 1, 5), Pos::new(2, 3));
        assert_eq!(step(pos, 2, 5), Pos::new(1, 2));
        assert_eq!(step(pos, 3, 5), Pos::new(2, 1));
    }

    #[test]
    fn out_of_range_moves_are_dropped_not_clamped_or_wrapped() {
        let corner = Pos::new(0, 4);
        assert_eq!(step(corner, 1, 5), corner);
        assert_eq!(step(corner, 2, 5), corner);
        assert_eq!(step(Pos::new(0, 0), 0, 1), Pos::new(0, 0));
    }

    #[test]
    fn unknown_roll_leaves_walker_in_place() {
        assert_eq!(Direction::from_roll(4), None);
        assert_eq!(step(Pos::new(1, 1), 7, 3), Pos::new(1, 1));
    }

    #[test]
    fn zero_steps_stamp_only_the_center() {
        let mut grid = Grid::new(7);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        carve(&mut grid, 3, 0, &mut rng);
        assert_eq!(grid.count_state(TileState::Floor), 1);
        assert_eq!(grid.state_at(Pos::new(3, 3)), Some(TileState::Floor));
    }

    #[test]
    fn single_tile_grid_walker_never_leaves_origin() {
        let mut grid = Grid::new(1);
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        carve(&mut grid, 2, 50, &mut rng);
        assert_eq!(grid.state_at(Pos::new(0, 0)), Some(TileState::Floor));
    }

    #[test]
    fn empty_grid_is_left_alone() {
        let mut grid = Grid::new(0);
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        carve(&mut grid, 4, 100, &mut rng);
        assert!(grid.tiles().is_empty());
    }

    #[test]
    fn carving_never_produces_walls() {
        let mut grid = Grid::new(15);
        let mut rng = ChaCha8Rng::seed_from_u64(77);
        carve(&mut grid, 4, 300, &mut rng);
        assert_eq!(grid.count_state(TileState::Wall), 0);
        assert!(grid.count_state(TileState::Floor) > 1);
    }

    proptest! {
        #[test]
        fn carved_floor_is_bounded_by_visits(
            seed in any::<u64>(),
            size in 1_usize..40,
            walkers in 0_u32..6,
            steps in 0_u32..200
        ) {
            let mut grid = Grid::new(size);
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            carve(&mut grid, walkers, steps, &mut rng);
            let floor = grid.count_state(TileState::Floor);
            prop_assert!(floor <= (walkers as usize) * (steps as usize + 1));
            if walkers > 0 {
                prop_assert_eq!(grid.state_at(grid.center()), Some(TileState::Floor));
            }
        }
    }
}
