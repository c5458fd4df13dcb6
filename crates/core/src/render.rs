//! Renderer-agnostic drawing contract for a finished grid.
//!
//! Both helpers are pure, so switching region shading only needs a redraw, never a new map.

use crate::mapgen::Grid;
use crate::types::{Color, Region, Tile, TileState};

/// One `size × size` pixel block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderBlock {
    pub x: u32,
    pub y: u32,
    pub size: u32,
    pub color: Color,
}

/// One block per tile at `(col * tile_size, row * tile_size)`, colored by region when
/// `shade_regions` is set and by structure otherwise.
pub fn render_blocks(grid: &Grid, tile_size: u32, shade_regions: bool) -> Vec<RenderBlock> {
    grid.rows()
        .enumerate()
        .flat_map(|(row, tiles)| {
            tiles.iter().enumerate().map(move |(col, tile)| RenderBlock {
                x: (col as u32).saturating_mul(tile_size),
                y: (row as u32).saturating_mul(tile_size),
                size: tile_size,
                color: tile.display_color(shade_regions),
            })
        })
        .collect()
}

/// Text rendering, one string per row: `.` empty, `#` wall, `,` floor. With shading, floor
/// shows its region instead (`c` cave, `i` intermediate, `o` open).
pub fn ascii_rows(grid: &Grid, shade_regions: bool) -> Vec<String> {
    grid.rows().map(|tiles| tiles.iter().map(|tile| glyph(tile, shade_regions)).collect()).collect()
}

fn glyph(tile: &Tile, shade_regions: bool) -> char {
    match (tile.state, shade_regions) {
        (TileState::Empty, _) => '.',
        (TileState::Wall, _) => '#',
        (TileState::Floor, false) => ',',
        (TileState::Floor, true) => match tile.region {
            Region::Cave => 'c',
            Region::Intermediate => 'i',
            Region::Open => 'o',
        },
    }
}
