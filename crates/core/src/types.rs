use std::fmt;

use serde::{Deserialize, Serialize};

/// Grid coordinate. `x` indexes rows (the outer dimension), `y` indexes columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The four 4-connected neighbors in `+x, -x, +y, -y` order.
    pub fn neighbors(self) -> [Pos; 4] {
        [
            Pos { x: self.x + 1, y: self.y },
            Pos { x: self.x - 1, y: self.y },
            Pos { x: self.x, y: self.y + 1 },
            Pos { x: self.x, y: self.y - 1 },
        ]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
    pub const FLOOR: Color = Color::rgb(0xCC, 0xCC, 0xCC);
    pub const WALL: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const CAVE: Color = Color::rgb(0xFF, 0x00, 0x00);
    pub const INTERMEDIATE: Color = Color::rgb(0x00, 0x00, 0xFF);
    pub const OPEN: Color = Color::rgb(0x00, 0xFF, 0x00);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn is_transparent(self) -> bool {
        self.a == 0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.a {
            0 => write!(f, "transparent"),
            0xFF => write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b),
            alpha => write!(f, "#{:02x}{:02x}{:02x}{alpha:02x}", self.r, self.g, self.b),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TileState {
    #[default]
    Empty,
    Wall,
    Floor,
}

impl TileState {
    /// Structural color bound to this state.
    pub fn color(self) -> Color {
        match self {
            TileState::Empty => Color::TRANSPARENT,
            TileState::Wall => Color::WALL,
            TileState::Floor => Color::FLOOR,
        }
    }
}

/// Proximity-to-wall classification of floor tiles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Region {
    Cave,
    Intermediate,
    #[default]
    Open,
}

impl Region {
    pub const ALL: [Region; 3] = [Region::Cave, Region::Intermediate, Region::Open];

    /// Fill color a classifier pass paints this region with.
    pub fn color(self) -> Color {
        match self {
            Region::Cave => Color::CAVE,
            Region::Intermediate => Color::INTERMEDIATE,
            Region::Open => Color::OPEN,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub state: TileState,
    pub state_color: Color,
    /// Only meaningful while `state` is `Floor`.
    pub region: Region,
    pub region_color: Color,
}

impl Default for Tile {
    fn default() -> Self {
        Self {
            state: TileState::Empty,
            state_color: Color::TRANSPARENT,
            region: Region::Open,
            region_color: Color::TRANSPARENT,
        }
    }
}

impl Tile {
    /// Renderer fill color: the region color when shading, the structural one otherwise.
    pub fn display_color(&self, shade_regions: bool) -> Color {
        if shade_regions { self.region_color } else { self.state_color }
    }

    /// Region a classifier pass actually painted on this floor tile. `None` for non-floor tiles
    /// and for floor no pass reached, whose `region` field still holds its default.
    pub fn painted_region(&self) -> Option<Region> {
        if self.state != TileState::Floor {
            return None;
        }
        Region::ALL
            .into_iter()
            .find(|region| region.color() == self.region_color && *region == self.region)
    }
}
