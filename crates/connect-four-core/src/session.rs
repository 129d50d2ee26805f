//! Game session management.
//!
//! A `GameSession` is what a presentation layer holds on to. It owns at most
//! one `GameEngine` at a time, handles starting and force-restarting games,
//! and turns actions into events.

use crate::actions::{GameAction, GameEvent};
use crate::board::{Board, CellState, Player};
use crate::game::{GameEngine, GameError, GameStatus, MoveOutcome};
use serde::Serialize;
use tracing::{debug, error, info};

/// Holds the current game, if any.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GameSession {
    /// The game state (once started)
    game: Option<GameEngine>,
}

impl GameSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new game on a fresh `width` x `height` board.
    ///
    /// A game still in progress is only replaced when `force_restart` is set;
    /// otherwise `GameInProgress` is returned and nothing changes. Invalid
    /// dimensions also leave the current game in place.
    pub fn start_game(
        &mut self,
        width: usize,
        height: usize,
        force_restart: bool,
    ) -> Result<(), GameError> {
        self.start(width, height, force_restart).map(|_| ())
    }

    /// Returns whether an in-progress game was abandoned
    fn start(
        &mut self,
        width: usize,
        height: usize,
        force_restart: bool,
    ) -> Result<bool, GameError> {
        let in_progress = self.status() == GameStatus::InProgress;
        if in_progress && !force_restart {
            return Err(GameError::GameInProgress);
        }

        let engine = GameEngine::new(width, height)?;
        if in_progress {
            info!("Abandoning game in progress");
        }
        self.game = Some(engine);
        debug!(width, height, "Started new game");

        Ok(in_progress)
    }

    /// Drop a piece for the current player into `column`.
    ///
    /// A cell conflict means the engine and board disagree; that game is
    /// discarded and the session returns to `NotStarted`.
    pub fn drop_piece(&mut self, column: usize) -> Result<MoveOutcome, GameError> {
        let game = self.game.as_mut().ok_or(GameError::GameNotActive)?;

        match game.drop_piece(column) {
            Ok(outcome) => {
                match outcome {
                    MoveOutcome::Placed { row, player, .. } => {
                        debug!(row, column, player = player.id(), "Piece placed");
                    }
                    MoveOutcome::Won { player } => {
                        info!(player = player.id(), moves = game.move_count(), "Game won");
                    }
                    MoveOutcome::Draw => {
                        info!(moves = game.move_count(), "Game drawn");
                    }
                }
                Ok(outcome)
            }
            Err(e) => Err(self.reject_move(e)),
        }
    }

    /// Pass a move error back, discarding the game when it signals that the
    /// engine and board disagree.
    fn reject_move(&mut self, error: GameError) -> GameError {
        if let GameError::CellOccupied { .. } = error {
            error!(error = %error, "Board out of sync, discarding game");
            self.game = None;
        }
        error
    }

    /// Apply an action, returning the events it produced in order
    pub fn apply_action(&mut self, action: GameAction) -> Result<Vec<GameEvent>, GameError> {
        let mut events = Vec::new();

        match action {
            GameAction::StartGame {
                width,
                height,
                force_restart,
            } => {
                if self.start(width, height, force_restart)? {
                    events.push(GameEvent::GameAbandoned);
                }
                events.push(GameEvent::GameStarted { width, height });
            }

            GameAction::DropPiece { column } => {
                let outcome = self.drop_piece(column)?;
                let Some(game) = &self.game else {
                    return Err(GameError::GameNotActive);
                };

                if let Some(piece) = game.last_move() {
                    events.push(GameEvent::PiecePlaced {
                        row: piece.row,
                        column: piece.column,
                        player: piece.player,
                    });
                }

                match outcome {
                    MoveOutcome::Placed { .. } => {
                        events.push(GameEvent::TurnChanged {
                            player: game.current_player(),
                        });
                    }
                    MoveOutcome::Won { player } => {
                        if let Some(line) = game.winning_line() {
                            events.push(GameEvent::GameWon {
                                player,
                                line: line.clone(),
                            });
                        }
                    }
                    MoveOutcome::Draw => events.push(GameEvent::GameDrawn),
                }
            }
        }

        Ok(events)
    }

    /// The current game, if one has been started
    pub fn game(&self) -> Option<&GameEngine> {
        self.game.as_ref()
    }

    pub fn board(&self) -> Option<&Board> {
        self.game.as_ref().map(GameEngine::board)
    }

    /// Get a cell of the current board for rendering
    pub fn cell(&self, row: usize, column: usize) -> Result<CellState, GameError> {
        self.game
            .as_ref()
            .ok_or(GameError::GameNotActive)?
            .cell(row, column)
    }

    /// Player to move. Player one when no game has been started.
    pub fn current_player(&self) -> Player {
        self.game
            .as_ref()
            .map_or(Player::One, GameEngine::current_player)
    }

    pub fn status(&self) -> GameStatus {
        self.game
            .as_ref()
            .map_or(GameStatus::NotStarted, GameEngine::status)
    }

    /// Columns that can currently accept a piece
    pub fn valid_columns(&self) -> Vec<usize> {
        self.game
            .as_ref()
            .map(GameEngine::valid_columns)
            .unwrap_or_default()
    }
}
