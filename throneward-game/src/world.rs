//! Terrain kinds, march directions, and the square campaign map.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::WORLD_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Terrain {
    #[default]
    Plains,
    Forest,
    Mountain,
    Swamp,
    Ruin,
    Capital,
    Fortress,
}

impl Terrain {
    /// Kinds the map roll draws from; the three landmarks are stamped
    /// afterward. Rolled ruins elsewhere on the map host the rescue just
    /// like the shrine until the royal is found.
    pub const WILDS: [Terrain; 5] = [
        Terrain::Plains,
        Terrain::Forest,
        Terrain::Mountain,
        Terrain::Swamp,
        Terrain::Ruin,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Terrain::Plains => "plains",
            Terrain::Forest => "forest",
            Terrain::Mountain => "mountain",
            Terrain::Swamp => "swamp",
            Terrain::Ruin => "ruin",
            Terrain::Capital => "capital",
            Terrain::Fortress => "fortress",
        }
    }

    /// Single-letter map glyph for compact renderers. Forest and fortress
    /// share `F`; renderers are expected to color tiles by [`Self::as_str`].
    #[must_use]
    pub const fn glyph(&self) -> char {
        match self {
            Terrain::Plains => 'P',
            Terrain::Forest | Terrain::Fortress => 'F',
            Terrain::Mountain => 'M',
            Terrain::Swamp => 'S',
            Terrain::Ruin => 'R',
            Terrain::Capital => 'C',
        }
    }
}

impl std::fmt::Display for Terrain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    North,
    South,
    West,
    East,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    /// Grid delta with north as negative `y`.
    #[must_use]
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
            Direction::East => (1, 0),
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::West => "west",
            Direction::East => "east",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Direction {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "north" => Ok(Direction::North),
            "south" => Ok(Direction::South),
            "west" => Ok(Direction::West),
            "east" => Ok(Direction::East),
            _ => Err(()),
        }
    }
}

impl From<Direction> for String {
    fn from(direction: Direction) -> Self {
        direction.as_str().to_string()
    }
}

/// Square terrain map stored row-major, `(0, 0)` at the north-west corner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldGrid {
    size: usize,
    tiles: Vec<Terrain>,
}

impl WorldGrid {
    /// Roll a fresh map from `rng`: uniform wilds, then the fixed landmarks.
    ///
    /// Rows are rolled north to south so one seed always yields one map.
    #[must_use]
    pub fn generate(size: usize, rng: &mut impl Rng) -> Self {
        let size = size.max(2);
        let mut tiles = Vec::with_capacity(size * size);
        for _ in 0..size * size {
            tiles.push(Terrain::WILDS[rng.random_range(0..Terrain::WILDS.len())]);
        }
        let mut world = Self { size, tiles };
        world.place_landmarks();
        world
    }

    /// Capital in the north-west corner, the shrine ruin one tile in from the
    /// south-east corner, the usurper's fortress on the corner itself.
    fn place_landmarks(&mut self) {
        let edge = self.size - 1;
        self.set_terrain(0, 0, Terrain::Capital);
        self.set_terrain(edge - 1, edge - 1, Terrain::Ruin);
        self.set_terrain(edge, edge, Terrain::Fortress);
    }

    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub const fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.size && y < self.size
    }

    /// Terrain under `(x, y)`; out-of-range reads answer plains so render
    /// loops never need their own bounds arithmetic.
    #[must_use]
    pub fn terrain_at(&self, x: usize, y: usize) -> Terrain {
        if !self.in_bounds(x, y) {
            return Terrain::Plains;
        }
        self.tiles.get(y * self.size + x).copied().unwrap_or_default()
    }

    /// Scenario hook: overwrite one tile. Out-of-range writes are ignored.
    pub fn set_terrain(&mut self, x: usize, y: usize, terrain: Terrain) {
        if !self.in_bounds(x, y) {
            return;
        }
        let index = y * self.size + x;
        if let Some(tile) = self.tiles.get_mut(index) {
            *tile = terrain;
        }
    }

    /// One step from `(x, y)`; `None` when the edge blocks the march.
    #[must_use]
    pub fn step(&self, x: usize, y: usize, direction: Direction) -> Option<(usize, usize)> {
        let (dx, dy) = direction.offset();
        let nx = x.checked_add_signed(dx)?;
        let ny = y.checked_add_signed(dy)?;
        if self.in_bounds(nx, ny) {
            Some((nx, ny))
        } else {
            None
        }
    }
}

impl Default for WorldGrid {
    /// Plains everywhere apart from the three landmarks. Deterministic, used
    /// for blank states and scenario tests.
    fn default() -> Self {
        let mut world = Self {
            size: WORLD_SIZE,
            tiles: vec![Terrain::Plains; WORLD_SIZE * WORLD_SIZE],
        };
        world.place_landmarks();
        world
    }
}
