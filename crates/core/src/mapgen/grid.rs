//! Square tile store and the coordinate primitives shared by every pipeline stage.

use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::xxh3_64;

use crate::error::GenerationError;
use crate::types::{Color, Pos, Region, Tile, TileState};

/// `size × size` tiles stored row-major: `index = x * size + y`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GridData")]
pub struct Grid {
    size: usize,
    tiles: Vec<Tile>,
}

/// Unchecked wire form of [`Grid`].
#[derive(Deserialize)]
struct GridData {
    size: usize,
    tiles: Vec<Tile>,
}

impl TryFrom<GridData> for Grid {
    type Error = String;

    fn try_from(data: GridData) -> Result<Self, Self::Error> {
        let expected = data.size.checked_mul(data.size);
        if expected != Some(data.tiles.len()) {
            return Err(format!(
                "grid of size {} needs {} tiles, found {}",
                data.size,
                data.size.saturating_mul(data.size),
                data.tiles.len()
            ));
        }
        Ok(Self { size: data.size, tiles: data.tiles })
    }
}

impl Grid {
    /// All tiles Empty, transparent, region Open.
    pub fn new(size: usize) -> Self {
        Self { size, tiles: vec![Tile::default(); size * size] }
    }

    /// Parse the ASCII form produced by `render::ascii_rows` without shading:
    /// `.` Empty, `#` Wall, `,` Floor. Returns `None` for non-square input or unknown glyphs.
    pub fn from_ascii(rows: &[&str]) -> Option<Self> {
        let size = rows.len();
        let mut grid = Self::new(size);
        for (x, row) in rows.iter().enumerate() {
            if row.chars().count() != size {
                return None;
            }
            for (y, glyph) in row.chars().enumerate() {
                let state = match glyph {
                    '.' => TileState::Empty,
                    '#' => TileState::Wall,
                    ',' => TileState::Floor,
                    _ => return None,
                };
                grid.set_state(Pos::new(x as i32, y as i32), state);
            }
        }
        Some(grid)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// `(size / 2, size / 2)` with truncating division. Outside the grid only when `size == 0`.
    pub fn center(&self) -> Pos {
        let half = (self.size / 2) as i32;
        Pos::new(half, half)
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.size && (pos.y as usize) < self.size
    }

    pub fn is_border(&self, pos: Pos) -> bool {
        let last = self.size as i32 - 1;
        self.in_bounds(pos) && (pos.x == 0 || pos.y == 0 || pos.x == last || pos.y == last)
    }

    fn index(&self, pos: Pos) -> Option<usize> {
        self.in_bounds(pos).then(|| (pos.x as usize) * self.size + (pos.y as usize))
    }

    pub fn tile(&self, pos: Pos) -> Option<&Tile> {
        self.index(pos).map(|index| &self.tiles[index])
    }

    /// Like [`Grid::tile`], but an escape from the grid is a fatal generation error.
    pub fn checked_tile(&self, pos: Pos) -> Result<&Tile, GenerationError> {
        self.tile(pos).ok_or(GenerationError::OutOfBounds { pos, size: self.size })
    }

    pub fn state_at(&self, pos: Pos) -> Option<TileState> {
        self.tile(pos).map(|tile| tile.state)
    }

    /// Set the structural state and its bound color. Walls also take the wall color as their
    /// region color. Returns `true` when the state changed.
    pub fn set_state(&mut self, pos: Pos, state: TileState) -> bool {
        let Some(index) = self.index(pos) else {
            return false;
        };
        let tile = &mut self.tiles[index];
        let changed = tile.state != state;
        tile.state = state;
        tile.state_color = state.color();
        if state == TileState::Wall {
            tile.region_color = Color::WALL;
        }
        changed
    }

    /// Set the region and its color independently of the structural state.
    pub fn set_region(&mut self, pos: Pos, region: Region, color: Color) {
        if let Some(index) = self.index(pos) {
            let tile = &mut self.tiles[index];
            tile.region = region;
            tile.region_color = color;
        }
    }

    /// Every coordinate in row-major order, rows outermost.
    pub fn positions(&self) -> impl Iterator<Item = Pos> + use<> {
        let size = self.size as i32;
        (0..size).flat_map(move |x| (0..size).map(move |y| Pos::new(x, y)))
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.tiles.chunks(self.size.max(1))
    }

    pub fn count_state(&self, state: TileState) -> usize {
        self.tiles.iter().filter(|tile| tile.state == state).count()
    }

    /// Floor tiles a classifier pass painted as `region`.
    pub fn count_region(&self, region: Region) -> usize {
        self.tiles.iter().filter(|tile| tile.painted_region() == Some(region)).count()
    }

    /// Floor tiles no classifier pass reached.
    pub fn count_unclassified(&self) -> usize {
        self.tiles
            .iter()
            .filter(|tile| tile.state == TileState::Floor && tile.painted_region().is_none())
            .count()
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(4 + self.tiles.len() * 6);
        bytes.extend((self.size as u32).to_le_bytes());
        for tile in &self.tiles {
            bytes.push(match tile.state {
                TileState::Empty => 0,
                TileState::Wall => 1,
                TileState::Floor => 2,
            });
            bytes.push(match tile.region {
                Region::Cave => 0,
                Region::Intermediate => 1,
                Region::Open => 2,
            });
            let color = tile.region_color;
            bytes.extend([color.r, color.g, color.b, color.a]);
        }
        bytes
    }

    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }

    /// `0x` followed by exactly 16 lowercase hex digits of [`Grid::fingerprint`].
    pub fn fingerprint_hex(&self) -> String {
        format!("0x{:016x}", self.fingerprint())
    }
}
