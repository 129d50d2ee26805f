//! Core game state machine.
//!
//! This module contains the `GameEngine` that sequences turns for a single
//! game, along with the status, outcome and error types it reports.

use crate::board::{Board, CellState, Player};
use crate::rules::{self, WinningLine};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Game status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// No game has been started yet
    NotStarted,
    /// Moves are being accepted
    InProgress,
    /// A player aligned four pieces
    Won(Player),
    /// The board filled up without a winner
    Draw,
}

impl GameStatus {
    /// Check if the game has ended
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Won(_) | GameStatus::Draw)
    }
}

/// Result of a successful drop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The piece landed and play passes to the other player
    Placed {
        row: usize,
        column: usize,
        player: Player,
    },
    /// The piece completed four in a row
    Won { player: Player },
    /// The piece filled the last cell with no winner
    Draw,
}

/// A piece and where it came to rest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedPiece {
    pub row: usize,
    pub column: usize,
    pub player: Player,
}

/// Errors that can occur when starting a game or making a move
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum GameError {
    #[error("Invalid board size {width}x{height}, both must be between 1 and 20")]
    InvalidDimension { width: usize, height: usize },

    #[error("Column {column} is outside the board (width {width})")]
    InvalidColumn { column: usize, width: usize },

    #[error("Row {row} is outside the board (height {height})")]
    InvalidRow { row: usize, height: usize },

    #[error("Column {column} is full")]
    ColumnFull { column: usize },

    #[error("No game in progress")]
    GameNotActive,

    #[error("Cell ({row}, {column}) is already occupied")]
    CellOccupied { row: usize, column: usize },

    #[error("A game is already in progress")]
    GameInProgress,
}

/// Turn sequencing for one game.
///
/// An engine starts `InProgress` with player one to move and ends exactly
/// once, on a win or a draw. It is not reused afterwards; a new game gets a
/// new engine.
#[derive(Debug, Clone, Serialize)]
pub struct GameEngine {
    /// The game board
    board: Board,
    /// Player to move (or the winner once the game is won)
    current_player: Player,
    /// Current game status
    status: GameStatus,
    /// Pieces placed so far
    move_count: usize,
    /// The run that ended the game
    winning_line: Option<WinningLine>,
    /// Where the most recent piece landed
    last_move: Option<PlacedPiece>,
}

impl GameEngine {
    /// Start a game on an empty `width` x `height` board
    pub fn new(width: usize, height: usize) -> Result<Self, GameError> {
        Ok(Self {
            board: Board::new(width, height)?,
            current_player: Player::One,
            status: GameStatus::InProgress,
            move_count: 0,
            winning_line: None,
            last_move: None,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Check if moves are being accepted
    pub fn is_active(&self) -> bool {
        self.status == GameStatus::InProgress
    }

    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// The four cells that won the game, if it was won
    pub fn winning_line(&self) -> Option<&WinningLine> {
        self.winning_line.as_ref()
    }

    /// The most recently placed piece
    pub fn last_move(&self) -> Option<PlacedPiece> {
        self.last_move
    }

    /// Get a cell for rendering
    pub fn cell(&self, row: usize, column: usize) -> Result<CellState, GameError> {
        self.board.cell(row, column)
    }

    /// Columns that can currently accept a piece
    pub fn valid_columns(&self) -> Vec<usize> {
        if !self.is_active() {
            return Vec::new();
        }
        (0..self.board.width())
            .filter(|&column| !self.board.is_column_full(column))
            .collect()
    }

    /// Drop a piece for the current player into `column`.
    ///
    /// A rejected move leaves the engine unchanged.
    pub fn drop_piece(&mut self, column: usize) -> Result<MoveOutcome, GameError> {
        if !self.is_active() {
            return Err(GameError::GameNotActive);
        }

        let player = self.current_player;
        let row = self.board.lowest_open_row(column)?;
        self.board.occupy(row, column, player)?;
        self.move_count += 1;
        self.last_move = Some(PlacedPiece {
            row,
            column,
            player,
        });

        if let Some(line) = rules::find_winning_line(&self.board, player) {
            self.winning_line = Some(line);
            self.status = GameStatus::Won(player);
            return Ok(MoveOutcome::Won { player });
        }

        if self.board.is_full() {
            self.status = GameStatus::Draw;
            return Ok(MoveOutcome::Draw);
        }

        self.current_player = player.other();
        Ok(MoveOutcome::Placed {
            row,
            column,
            player,
        })
    }
}
