//! Connect Four game engine
//!
//! This crate provides the core game logic for Connect Four, including:
//! - Board representation with configurable dimensions
//! - Win detection over rows, columns and both diagonals
//! - Turn state machine with move validation
//! - A session that starts, restarts and reports on games
//!
//! # Architecture
//!
//! The engine knows nothing about rendering. Presentation layers call into a
//! [`GameSession`] to start games and drop pieces, and render from the
//! returned outcomes, events and cell queries. It can be compiled to:
//! - Native Rust for terminal front ends
//! - WebAssembly for browser front ends
//!
//! # Modules
//!
//! - [`board`]: Players, cells and the occupancy grid
//! - [`rules`]: Four-in-a-row detection
//! - [`game`]: Single-game state machine
//! - [`session`]: Start/restart handling and event reporting
//! - [`actions`]: Actions and the events they produce
//! - [`config`]: Board dimension parsing

pub mod actions;
pub mod board;
pub mod config;
pub mod game;
pub mod rules;
pub mod session;
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used types
pub use actions::{GameAction, GameEvent};
pub use board::{
    Board, CellState, Player, DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_DIMENSION, MIN_DIMENSION,
};
pub use config::BoardConfig;
pub use game::{GameEngine, GameError, GameStatus, MoveOutcome, PlacedPiece};
pub use rules::{Direction, WinningLine, CONNECT};
pub use session::GameSession;
