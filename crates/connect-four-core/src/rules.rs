//! Win detection.
//!
//! After every placement the whole board is scanned: each cell is tried as
//! the anchor of a run of four in each of four directions. Boards are at most
//! 20x20, so the scan stays cheap.

use crate::board::{Board, CellState, Player};
use serde::{Deserialize, Serialize};

/// Number of aligned pieces needed to win
pub const CONNECT: usize = 4;

/// Direction a run extends in from its anchor cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// `(row, column + i)`
    Horizontal,
    /// `(row + i, column)`
    Vertical,
    /// `(row + i, column + i)`
    DiagonalDownRight,
    /// `(row + i, column - i)`
    DiagonalDownLeft,
}

impl Direction {
    /// All directions in scan order
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDownRight,
        Direction::DiagonalDownLeft,
    ];

    /// Row and column step per piece
    fn step(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDownRight => (1, 1),
            Direction::DiagonalDownLeft => (1, -1),
        }
    }
}

/// Four aligned cells owned by one player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinningLine {
    pub player: Player,
    pub direction: Direction,
    /// `(row, column)` pairs starting at the anchor
    pub cells: [(usize, usize); CONNECT],
}

/// Find the first run of four belonging to `player`, in row-major anchor
/// order and `Direction::ALL` order.
pub fn find_winning_line(board: &Board, player: Player) -> Option<WinningLine> {
    for row in 0..board.height() {
        for column in 0..board.width() {
            for direction in Direction::ALL {
                if let Some(cells) = run_from(board, player, row, column, direction) {
                    return Some(WinningLine {
                        player,
                        direction,
                        cells,
                    });
                }
            }
        }
    }
    None
}

/// Check if `player` has four in a row anywhere on the board
pub fn has_won(board: &Board, player: Player) -> bool {
    find_winning_line(board, player).is_some()
}

/// Coordinates of the run anchored at `(row, column)`, if all four are on the
/// board and owned by `player`.
fn run_from(
    board: &Board,
    player: Player,
    row: usize,
    column: usize,
    direction: Direction,
) -> Option<[(usize, usize); CONNECT]> {
    let (row_step, column_step) = direction.step();
    let mut cells = [(0, 0); CONNECT];

    for (i, slot) in cells.iter_mut().enumerate() {
        let offset = i as isize;
        let r = row.checked_add_signed(row_step * offset)?;
        let c = column.checked_add_signed(column_step * offset)?;

        if board.get(r, c)? != CellState::Occupied(player) {
            return None;
        }
        *slot = (r, c);
    }

    Some(cells)
}
