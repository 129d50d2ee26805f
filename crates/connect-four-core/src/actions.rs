//! Actions a presentation layer can request and the events they produce.
//!
//! Events are the notifications a front end renders from: one action yields
//! one or more events, in the order they happened.

use crate::board::Player;
use crate::rules::WinningLine;
use serde::{Deserialize, Serialize};

/// All requests a presentation layer can make
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameAction {
    /// Start a new game. `force_restart` confirms abandoning a game that is
    /// still in progress.
    StartGame {
        width: usize,
        height: usize,
        force_restart: bool,
    },
    /// Drop a piece for the current player
    DropPiece { column: usize },
}

/// Events that occur as a result of actions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A game in progress was discarded for a new one
    GameAbandoned,

    /// A fresh board was created and player one is to move
    GameStarted { width: usize, height: usize },

    /// A piece came to rest
    PiecePlaced {
        row: usize,
        column: usize,
        player: Player,
    },

    /// Play passed to the other player
    TurnChanged { player: Player },

    /// A player aligned four pieces
    GameWon { player: Player, line: WinningLine },

    /// The board filled up with no winner
    GameDrawn,
}
