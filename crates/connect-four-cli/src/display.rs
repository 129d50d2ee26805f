//! Terminal rendering of the board and status lines.

use crate::settings::Settings;
use connect_four_core::{Board, CellState, GameStatus, Player, WinningLine};

/// Render the board with a one-based column header.
///
/// Cells of `highlight` are drawn in bold when colour is on.
pub fn render_board(board: &Board, highlight: Option<&WinningLine>, settings: &Settings) -> String {
    let mut out = String::new();

    for column in 1..=board.width() {
        out.push_str(&format!("{:>3}", column));
    }
    out.push('\n');

    for (row, cells) in board.rows().iter().enumerate() {
        for (column, cell) in cells.iter().enumerate() {
            let winning = highlight.is_some_and(|line| line.cells.contains(&(row, column)));
            out.push_str("  ");
            out.push_str(&render_cell(*cell, winning, settings));
        }
        out.push('\n');
    }

    out
}

fn render_cell(cell: CellState, winning: bool, settings: &Settings) -> String {
    let Some(player) = cell.player() else {
        return ".".to_string();
    };

    if !settings.use_color {
        return match player {
            Player::One => "X".to_string(),
            Player::Two => "O".to_string(),
        };
    }

    let code = settings.color_of(player).ansi_code();
    if winning {
        format!("\x1b[1;{}m@\x1b[0m", code)
    } else {
        format!("\x1b[{}mo\x1b[0m", code)
    }
}

/// "Player N's Turn", in the player's colour
pub fn turn_heading(player: Player, settings: &Settings) -> String {
    paint(format!("Player {}'s Turn", player.id()), player, settings)
}

/// Final message for a finished game
pub fn announcement(status: GameStatus, settings: &Settings) -> Option<String> {
    match status {
        GameStatus::Won(player) => Some(paint(
            format!("Player {} won!", player.id()),
            player,
            settings,
        )),
        GameStatus::Draw => Some("The game is a draw.".to_string()),
        GameStatus::NotStarted | GameStatus::InProgress => None,
    }
}

fn paint(text: String, player: Player, settings: &Settings) -> String {
    if settings.use_color {
        format!("\x1b[{}m{}\x1b[0m", settings.color_of(player).ansi_code(), text)
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use connect_four_core::GameEngine;

    fn plain() -> Settings {
        Settings {
            use_color: false,
            ..Settings::default()
        }
    }

    #[test]
    fn test_render_plain_board() {
        let mut engine = GameEngine::new(3, 2).unwrap();
        engine.drop_piece(0).unwrap();
        engine.drop_piece(2).unwrap();

        let text = render_board(engine.board(), None, &plain());
        assert_eq!(text, "  1  2  3\n  .  .  .\n  X  .  O\n");
    }

    #[test]
    fn test_render_highlights_winning_line() {
        let mut engine = GameEngine::new(4, 4).unwrap();
        for column in [0, 1, 0, 1, 0, 1, 0] {
            engine.drop_piece(column).unwrap();
        }
        let settings = Settings::default();

        let text = render_board(engine.board(), engine.winning_line(), &settings);
        assert_eq!(text.matches("\x1b[1;31m@").count(), 4);
        assert_eq!(text.matches("\x1b[33mo").count(), 3);
    }

    #[test]
    fn test_wide_board_header() {
        let engine = GameEngine::new(12, 1).unwrap();
        let text = render_board(engine.board(), None, &plain());
        assert!(text.starts_with("  1  2  3  4  5  6  7  8  9 10 11 12\n"));
    }

    #[test]
    fn test_headings() {
        let settings = plain();
        assert_eq!(turn_heading(Player::Two, &settings), "Player 2's Turn");
        assert_eq!(
            announcement(GameStatus::Won(Player::One), &settings).as_deref(),
            Some("Player 1 won!")
        );
        assert_eq!(
            announcement(GameStatus::Draw, &settings).as_deref(),
            Some("The game is a draw.")
        );
        assert_eq!(announcement(GameStatus::InProgress, &settings), None);

        let colored = turn_heading(Player::One, &Settings::default());
        assert_eq!(colored, "\x1b[31mPlayer 1's Turn\x1b[0m");
    }
}
