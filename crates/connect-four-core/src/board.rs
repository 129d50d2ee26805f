//! Board representation: players, cells and the occupancy grid.
//!
//! This module contains:
//! - The two player identities
//! - Cell state (empty or occupied by a player)
//! - The `Board` grid with landing-row and fullness queries

use crate::game::GameError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Smallest allowed width or height
pub const MIN_DIMENSION: usize = 1;

/// Largest allowed width or height
pub const MAX_DIMENSION: usize = 20;

/// Default board width (columns)
pub const DEFAULT_WIDTH: usize = 7;

/// Default board height (rows)
pub const DEFAULT_HEIGHT: usize = 6;

/// One of the two players. Serialized as its identifier, 1 or 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Both players in turn order
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    /// Numeric identifier (1 or 2)
    pub fn id(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// The opponent
    pub fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

impl From<Player> for u8 {
    fn from(player: Player) -> Self {
        player.id()
    }
}

impl TryFrom<u8> for Player {
    type Error = String;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        match id {
            1 => Ok(Player::One),
            2 => Ok(Player::Two),
            other => Err(format!("invalid player id {other}, expected 1 or 2")),
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.id())
    }
}

/// Contents of a single cell. Serialized as 0 (empty), 1 or 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum CellState {
    #[default]
    Empty,
    Occupied(Player),
}

impl CellState {
    pub fn is_empty(self) -> bool {
        matches!(self, CellState::Empty)
    }

    /// The occupying player, if any
    pub fn player(self) -> Option<Player> {
        match self {
            CellState::Empty => None,
            CellState::Occupied(player) => Some(player),
        }
    }
}

impl From<CellState> for u8 {
    fn from(cell: CellState) -> Self {
        cell.player().map_or(0, Player::id)
    }
}

impl TryFrom<u8> for CellState {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(CellState::Empty),
            id => Player::try_from(id).map(CellState::Occupied),
        }
    }
}

/// The occupancy grid.
///
/// Cells are indexed `[row][column]`; row 0 is the top and row `height - 1`
/// is the bottom, where pieces come to rest first. A cell that has been
/// occupied never becomes empty again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Vec<CellState>>,
}

/// Unchecked wire form of a `Board`
#[derive(Deserialize)]
struct RawBoard {
    width: usize,
    height: usize,
    cells: Vec<Vec<CellState>>,
}

impl TryFrom<RawBoard> for Board {
    type Error = GameError;

    /// Reject grids whose shape disagrees with the stated dimensions
    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        let mut board = Board::new(raw.width, raw.height)?;
        if raw.cells.len() != raw.height || raw.cells.iter().any(|row| row.len() != raw.width) {
            return Err(GameError::InvalidDimension {
                width: raw.width,
                height: raw.height,
            });
        }
        board.cells = raw.cells;
        Ok(board)
    }
}

impl Board {
    /// Create an all-empty board.
    ///
    /// Both dimensions must lie in `MIN_DIMENSION..=MAX_DIMENSION`.
    pub fn new(width: usize, height: usize) -> Result<Self, GameError> {
        if !is_valid_dimension(width) || !is_valid_dimension(height) {
            return Err(GameError::InvalidDimension { width, height });
        }

        Ok(Self {
            width,
            height,
            cells: vec![vec![CellState::Empty; width]; height],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> &[Vec<CellState>] {
        &self.cells
    }

    /// Get a cell, or `None` if the coordinates are off the board
    pub fn get(&self, row: usize, column: usize) -> Option<CellState> {
        self.cells.get(row).and_then(|r| r.get(column)).copied()
    }

    /// Get a cell, reporting which coordinate was out of range
    pub fn cell(&self, row: usize, column: usize) -> Result<CellState, GameError> {
        self.check_column(column)?;
        if row >= self.height {
            return Err(GameError::InvalidRow {
                row,
                height: self.height,
            });
        }
        Ok(self.cells[row][column])
    }

    /// Find the row a piece dropped into `column` would land in.
    ///
    /// Scans from the bottom row upward and returns the first empty row.
    pub fn lowest_open_row(&self, column: usize) -> Result<usize, GameError> {
        self.check_column(column)?;

        (0..self.height)
            .rev()
            .find(|&row| self.cells[row][column].is_empty())
            .ok_or(GameError::ColumnFull { column })
    }

    /// Mark a cell as belonging to `player`.
    ///
    /// The cell must be empty; `row` is expected to come from
    /// [`Board::lowest_open_row`].
    pub fn occupy(&mut self, row: usize, column: usize, player: Player) -> Result<(), GameError> {
        if !self.cell(row, column)?.is_empty() {
            return Err(GameError::CellOccupied { row, column });
        }
        self.cells[row][column] = CellState::Occupied(player);
        Ok(())
    }

    /// Check if a column has no room left
    pub fn is_column_full(&self, column: usize) -> bool {
        self.get(0, column).map_or(true, |cell| !cell.is_empty())
    }

    /// Check if every cell is occupied
    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|cell| !cell.is_empty()))
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }

    fn check_column(&self, column: usize) -> Result<(), GameError> {
        if column >= self.width {
            return Err(GameError::InvalidColumn {
                column,
                width: self.width,
            });
        }
        Ok(())
    }
}

/// Check that a width or height is within the allowed range
pub fn is_valid_dimension(value: usize) -> bool {
    (MIN_DIMENSION..=MAX_DIMENSION).contains(&value)
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: String = row
                .iter()
                .map(|cell| match cell {
                    CellState::Empty => '.',
                    CellState::Occupied(Player::One) => '1',
                    CellState::Occupied(Player::Two) => '2',
                })
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
