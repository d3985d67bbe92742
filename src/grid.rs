//! Grid geometry: cells, tiles, the obstacle grid, and the maze layout parser.
//!
//! The engine's view of the world is deliberately narrow: a cell is either
//! open or blocked by a wall. The surrounding game overlays further codes
//! (collectibles, spawn markers) which the searches ignore.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Orthogonal step offsets in the fixed evaluation order: up, down, left,
/// right. All neighbor enumeration and random direction draws use this
/// order so tie-breaking stays reproducible.
pub const ORTHOGONAL: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// The 8 surrounding offsets (orthogonal + diagonal) used for
/// hazard-adjacency checks.
const SURROUNDING: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// A grid coordinate.
///
/// Ordering is row-major (row, then column); this is the natural order
/// used to break priority ties in the optimal search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Manhattan (L1) distance to another cell.
    pub fn manhattan(self, other: Cell) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// The cell one step away in the given (row, col) offset.
    pub fn offset(self, (dr, dc): (i32, i32)) -> Cell {
        Cell::new(self.row + dr, self.col + dc)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A single grid square.
///
/// Only `Wall` blocks movement. `Collectible` is a game overlay the
/// pathfinding treats as open floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Tile {
    #[default]
    Floor,
    Wall,
    Collectible,
}

impl Tile {
    pub fn is_wall(self) -> bool {
        matches!(self, Tile::Wall)
    }
}

/// A fixed-size rectangular obstacle grid, stored row-major.
///
/// Dimensions are constant for the lifetime of a search call; no strategy
/// ever mutates the grid it is given.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Grid {
    rows: usize,
    cols: usize,
    tiles: Vec<Tile>,
}

impl Grid {
    /// Creates an all-floor grid.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            tiles: vec![Tile::Floor; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.row >= 0
            && cell.col >= 0
            && (cell.row as usize) < self.rows
            && (cell.col as usize) < self.cols
    }

    fn index(&self, cell: Cell) -> usize {
        cell.row as usize * self.cols + cell.col as usize
    }

    /// The tile at `cell`, or `None` when out of bounds.
    pub fn tile(&self, cell: Cell) -> Option<Tile> {
        if self.in_bounds(cell) {
            Some(self.tiles[self.index(cell)])
        } else {
            None
        }
    }

    /// Sets the tile at `cell`. Out-of-bounds writes are ignored.
    pub fn set_tile(&mut self, cell: Cell, tile: Tile) {
        if self.in_bounds(cell) {
            let idx = self.index(cell);
            self.tiles[idx] = tile;
        }
    }

    /// True iff `cell` is in bounds and not a wall.
    pub fn is_open(&self, cell: Cell) -> bool {
        matches!(self.tile(cell), Some(t) if !t.is_wall())
    }

    /// The up-to-4 orthogonally adjacent open cells, in the fixed
    /// up/down/left/right order.
    pub fn neighbors(&self, cell: Cell) -> Vec<Cell> {
        let mut out = Vec::with_capacity(4);
        for step in ORTHOGONAL {
            let next = cell.offset(step);
            if self.is_open(next) {
                out.push(next);
            }
        }
        out
    }

    /// True iff any of the 8 surrounding cells is a wall.
    ///
    /// Out-of-bounds surroundings do not count: a cell on the edge of a
    /// wall-free grid carries no penalty.
    pub fn is_hazard_adjacent(&self, cell: Cell) -> bool {
        SURROUNDING
            .iter()
            .any(|&step| matches!(self.tile(cell.offset(step)), Some(t) if t.is_wall()))
    }
}

/// Error from [`Layout::parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// The layout text contained no lines.
    Empty,
    /// A character outside the layout alphabet.
    UnknownTile { ch: char, row: usize, col: usize },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::Empty => write!(f, "layout is empty"),
            LayoutError::UnknownTile { ch, row, col } => {
                write!(f, "unknown tile {ch:?} at row {row}, column {col}")
            }
        }
    }
}

impl std::error::Error for LayoutError {}

/// A parsed maze layout: the obstacle grid plus the marker positions the
/// surrounding game cares about.
///
/// # Format
///
/// One character per cell, one line per row:
///
/// - `'1'`: wall
/// - `'.'`: collectible
/// - `' '`: open floor
/// - `'P'`: player start (open floor)
/// - `'E'`: exit / goal (open floor)
/// - `'G'`: hazard spawn point (open floor to the engine)
///
/// Lines may be ragged; short lines are padded with walls on the right.
/// Borders are NOT walled automatically; layouts that want an enclosing
/// wall must draw it.
#[derive(Debug, Clone)]
pub struct Layout {
    pub grid: Grid,
    pub start: Option<Cell>,
    pub goal: Option<Cell>,
    pub spawn_points: Vec<Cell>,
}

impl Layout {
    pub fn parse(text: &str) -> Result<Layout, LayoutError> {
        let lines: Vec<&str> = text.lines().collect();
        let rows = lines.len();
        let cols = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        if rows == 0 || cols == 0 {
            return Err(LayoutError::Empty);
        }

        let mut grid = Grid {
            rows,
            cols,
            // ragged lines leave wall padding behind
            tiles: vec![Tile::Wall; rows * cols],
        };
        let mut start = None;
        let mut goal = None;
        let mut spawn_points = Vec::new();

        for (row, line) in lines.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                let cell = Cell::new(row as i32, col as i32);
                let tile = match ch {
                    '1' => Tile::Wall,
                    '.' => Tile::Collectible,
                    ' ' => Tile::Floor,
                    'P' => {
                        start = Some(cell);
                        Tile::Floor
                    }
                    'E' => {
                        goal = Some(cell);
                        Tile::Floor
                    }
                    'G' | 'g' => {
                        spawn_points.push(cell);
                        Tile::Floor
                    }
                    _ => return Err(LayoutError::UnknownTile { ch, row, col }),
                };
                grid.set_tile(cell, tile);
            }
        }

        Ok(Layout {
            grid,
            start,
            goal,
            spawn_points,
        })
    }
}
