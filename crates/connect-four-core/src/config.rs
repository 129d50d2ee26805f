//! Board configuration.
//!
//! Presentation layers collect width and height as text. `BoardConfig`
//! turns that text into validated dimensions before a game is started, so the
//! engine only ever sees typed integers.

use crate::board::{is_valid_dimension, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::game::GameError;
use serde::{Deserialize, Serialize};

/// Validated board dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub width: usize,
    pub height: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl BoardConfig {
    pub fn new(width: usize, height: usize) -> Result<Self, GameError> {
        if !is_valid_dimension(width) || !is_valid_dimension(height) {
            return Err(GameError::InvalidDimension { width, height });
        }
        Ok(Self { width, height })
    }

    /// Parse user-entered dimensions.
    ///
    /// Each axis is handled on its own: blank, non-numeric or out-of-range
    /// text falls back to that axis's default.
    pub fn from_input(width: &str, height: &str) -> Self {
        Self {
            width: parse_dimension(width).unwrap_or(DEFAULT_WIDTH),
            height: parse_dimension(height).unwrap_or(DEFAULT_HEIGHT),
        }
    }
}

/// Parse a single dimension, `None` if it is not a usable size
pub fn parse_dimension(input: &str) -> Option<usize> {
    input
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|&value| is_valid_dimension(value))
}
