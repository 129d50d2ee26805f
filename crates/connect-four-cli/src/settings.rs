//! Front-end settings: board size and player colours.

use connect_four_core::{BoardConfig, Player};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

pub const WIDTH_VAR: &str = "CONNECT_FOUR_WIDTH";
pub const HEIGHT_VAR: &str = "CONNECT_FOUR_HEIGHT";
pub const P1_COLOR_VAR: &str = "CONNECT_FOUR_P1_COLOR";
pub const P2_COLOR_VAR: &str = "CONNECT_FOUR_P2_COLOR";

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown colour: {0}")]
pub struct UnknownColor(String);

/// Piece colour for terminal rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerColor {
    Red,
    Yellow,
    Green,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl PlayerColor {
    /// Default colour for a player
    pub fn for_player(player: Player) -> Self {
        match player {
            Player::One => PlayerColor::Red,
            Player::Two => PlayerColor::Yellow,
        }
    }

    /// ANSI foreground colour code
    pub fn ansi_code(&self) -> u8 {
        match self {
            PlayerColor::Red => 31,
            PlayerColor::Green => 32,
            PlayerColor::Yellow => 33,
            PlayerColor::Blue => 34,
            PlayerColor::Magenta => 35,
            PlayerColor::Cyan => 36,
            PlayerColor::White => 37,
        }
    }
}

impl FromStr for PlayerColor {
    type Err = UnknownColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "red" => Ok(PlayerColor::Red),
            "yellow" => Ok(PlayerColor::Yellow),
            "green" => Ok(PlayerColor::Green),
            "blue" => Ok(PlayerColor::Blue),
            "magenta" | "purple" => Ok(PlayerColor::Magenta),
            "cyan" => Ok(PlayerColor::Cyan),
            "white" => Ok(PlayerColor::White),
            _ => Err(UnknownColor(s.to_string())),
        }
    }
}

/// Everything the console needs before the first game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Size used by `new` when no size is given
    pub board: BoardConfig,
    /// Piece colours for player one and player two
    pub colors: [PlayerColor; 2],
    /// Emit ANSI colour escapes
    pub use_color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            board: BoardConfig::default(),
            colors: [
                PlayerColor::for_player(Player::One),
                PlayerColor::for_player(Player::Two),
            ],
            use_color: true,
        }
    }
}

impl Settings {
    /// Read settings from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from a variable lookup. Missing or unusable values fall
    /// back to defaults; `NO_COLOR` disables colour output.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let board = BoardConfig::from_input(
            &lookup(WIDTH_VAR).unwrap_or_default(),
            &lookup(HEIGHT_VAR).unwrap_or_default(),
        );

        let color = |var: &str, player: Player| {
            lookup(var)
                .and_then(|name| name.parse().ok())
                .unwrap_or_else(|| PlayerColor::for_player(player))
        };

        Self {
            board,
            colors: [
                color(P1_COLOR_VAR, Player::One),
                color(P2_COLOR_VAR, Player::Two),
            ],
            use_color: lookup("NO_COLOR").is_none(),
        }
    }

    pub fn color_of(&self, player: Player) -> PlayerColor {
        match player {
            Player::One => self.colors[0],
            Player::Two => self.colors[1],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let settings = Settings::from_lookup(lookup_from(&[]));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_reads_board_and_colors() {
        let settings = Settings::from_lookup(lookup_from(&[
            (WIDTH_VAR, "9"),
            (HEIGHT_VAR, "8"),
            (P1_COLOR_VAR, "Blue"),
            (P2_COLOR_VAR, "green"),
            ("NO_COLOR", "1"),
        ]));

        assert_eq!(settings.board, BoardConfig::new(9, 8).unwrap());
        assert_eq!(settings.color_of(Player::One), PlayerColor::Blue);
        assert_eq!(settings.color_of(Player::Two), PlayerColor::Green);
        assert!(!settings.use_color);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let settings = Settings::from_lookup(lookup_from(&[
            (WIDTH_VAR, "99"),
            (P1_COLOR_VAR, "chartreuse"),
        ]));

        assert_eq!(settings.board, BoardConfig::default());
        assert_eq!(settings.color_of(Player::One), PlayerColor::Red);
    }

    #[test]
    fn test_color_parse() {
        assert_eq!(" CYAN ".parse(), Ok(PlayerColor::Cyan));
        assert_eq!(
            "mauve".parse::<PlayerColor>(),
            Err(UnknownColor("mauve".to_string()))
        );
    }
}
