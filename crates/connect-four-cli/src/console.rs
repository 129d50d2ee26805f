//! Console front end: reads commands, drives the session, renders results.

use crate::command::{Command, HELP};
use crate::display;
use crate::settings::Settings;
use connect_four_core::{BoardConfig, GameAction, GameError, GameEvent, GameSession, GameStatus};
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

/// Pause between the final board and the result message
pub const ANNOUNCE_DELAY: Duration = Duration::from_millis(200);

const RESTART_PROMPT: &str = "Are you sure you want to restart your current game? [y/N]";

const RESTART_CANCELLED: &str = "Restart cancelled.";

/// What to show in reply to one line of input.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Response {
    pub lines: Vec<String>,
    /// Shown after `ANNOUNCE_DELAY`
    pub announcement: Option<String>,
    pub quit: bool,
}

impl Response {
    fn say(line: impl Into<String>) -> Self {
        Self {
            lines: vec![line.into()],
            ..Self::default()
        }
    }
}

pub struct Console {
    session: GameSession,
    settings: Settings,
    /// Size of the game waiting on restart confirmation
    pending_restart: Option<BoardConfig>,
}

impl Console {
    pub fn new(settings: Settings) -> Self {
        Self {
            session: GameSession::new(),
            settings,
            pending_restart: None,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Handle one line of input
    pub fn handle_line(&mut self, line: &str) -> Response {
        let command = Command::parse(line);

        if let Some(config) = self.pending_restart.take() {
            return match command {
                Ok(Command::Confirm(true)) => self.start(config, true),
                Ok(Command::Confirm(false)) | Err(_) => Response::say(RESTART_CANCELLED),
                // Anything else declines the restart and is then carried out
                Ok(command) => {
                    let mut response = self.execute(command);
                    response.lines.insert(0, RESTART_CANCELLED.to_string());
                    response
                }
            };
        }

        match command {
            Ok(command) => self.execute(command),
            Err(e) => {
                warn!(input = line, error = %e, "Unrecognised input");
                Response::say(e.to_string())
            }
        }
    }

    fn execute(&mut self, command: Command) -> Response {
        match command {
            Command::Drop { column } => self.drop_piece(column),
            Command::NewGame { size } => {
                let config = size.map_or(self.settings.board, |(width, height)| {
                    BoardConfig::from_input(&width, &height)
                });

                if self.session.status() == GameStatus::InProgress {
                    self.pending_restart = Some(config);
                    Response::say(RESTART_PROMPT)
                } else {
                    self.start(config, false)
                }
            }
            Command::Confirm(_) => Response::say("Nothing to confirm."),
            Command::Board => Response {
                lines: self.render(),
                ..Response::default()
            },
            Command::Help => Response::say(HELP),
            Command::Quit => self.quit(),
        }
    }

    fn start(&mut self, config: BoardConfig, force_restart: bool) -> Response {
        let action = GameAction::StartGame {
            width: config.width,
            height: config.height,
            force_restart,
        };

        match self.session.apply_action(action) {
            Ok(events) => {
                log_events(&events);
                let mut lines = Vec::new();
                if events.contains(&GameEvent::GameAbandoned) {
                    lines.push("Previous game abandoned.".to_string());
                }
                lines.push(format!(
                    "New game on a {}x{} board.",
                    config.width, config.height
                ));
                lines.extend(self.render());
                Response {
                    lines,
                    ..Response::default()
                }
            }
            Err(e) => Response::say(self.describe(&e)),
        }
    }

    fn drop_piece(&mut self, column: usize) -> Response {
        match self.session.apply_action(GameAction::DropPiece { column }) {
            Ok(events) => {
                log_events(&events);
                Response {
                    lines: self.render(),
                    announcement: display::announcement(self.session.status(), &self.settings),
                    quit: false,
                }
            }
            Err(e) => {
                warn!(column, error = %e, "Move rejected");
                Response::say(self.describe(&e))
            }
        }
    }

    fn quit(&self) -> Response {
        Response {
            lines: vec!["Goodbye.".to_string()],
            quit: true,
            ..Response::default()
        }
    }

    /// Board followed by whose turn it is (while the game is running)
    fn render(&self) -> Vec<String> {
        let Some(game) = self.session.game() else {
            return vec!["No game in progress. Type 'new' to start one.".to_string()];
        };

        let mut lines = vec![display::render_board(
            game.board(),
            game.winning_line(),
            &self.settings,
        )];
        if game.is_active() {
            lines.push(display::turn_heading(
                game.current_player(),
                &self.settings,
            ));
        }
        lines
    }

    /// Error text with one-based column numbers, as the players see them
    fn describe(&self, error: &GameError) -> String {
        match error {
            GameError::InvalidColumn { width, .. } => {
                format!("Pick a column from 1 to {}.", width)
            }
            GameError::ColumnFull { column } => format!("Column {} is full.", column + 1),
            GameError::GameNotActive => {
                "No game in progress. Type 'new' to start one.".to_string()
            }
            other => other.to_string(),
        }
    }

    /// Start a game with the configured size, then process input until it
    /// ends or the player quits.
    pub async fn run<R, W>(mut self, reader: R, mut writer: W) -> anyhow::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let greeting = self.start(self.settings.board, false);
        write_lines(&mut writer, &["Connect Four".to_string()]).await?;
        write_lines(&mut writer, &greeting.lines).await?;

        let mut lines = reader.lines();
        while let Some(line) = lines.next_line().await? {
            let response = self.handle_line(&line);
            write_lines(&mut writer, &response.lines).await?;

            if let Some(message) = response.announcement {
                tokio::time::sleep(ANNOUNCE_DELAY).await;
                write_lines(&mut writer, &[message]).await?;
            }

            if response.quit {
                break;
            }
        }

        info!(status = ?self.session().status(), "Console closed");
        Ok(())
    }
}

fn log_events(events: &[GameEvent]) {
    if let Ok(json) = serde_json::to_string(events) {
        debug!(events = %json, "Applied action");
    }
}

async fn write_lines<W>(writer: &mut W, lines: &[String]) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    for line in lines {
        writer.write_all(line.as_bytes()).await?;
        if !line.ends_with('\n') {
            writer.write_all(b"\n").await?;
        }
    }
    writer.flush().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use connect_four_core::{CellState, Player};

    fn console() -> Console {
        Console::new(Settings {
            use_color: false,
            ..Settings::default()
        })
    }

    fn started() -> Console {
        let mut console = console();
        console.handle_line("new");
        console
    }

    #[test]
    fn test_drop_before_new_game() {
        let mut console = console();
        let response = console.handle_line("1");
        assert_eq!(
            response.lines,
            vec!["No game in progress. Type 'new' to start one."]
        );
    }

    #[test]
    fn test_new_game_renders_board() {
        let mut console = console();
        let response = console.handle_line("new 4 3");

        assert_eq!(response.lines[0], "New game on a 4x3 board.");
        assert_eq!(response.lines[1], "  1  2  3  4\n  .  .  .  .\n  .  .  .  .\n  .  .  .  .\n");
        assert_eq!(response.lines[2], "Player 1's Turn");
        assert_eq!(console.session().status(), GameStatus::InProgress);
    }

    #[test]
    fn test_out_of_range_size_uses_default() {
        let mut console = console();
        let response = console.handle_line("new 40 abc");
        assert_eq!(response.lines[0], "New game on a 7x6 board.");
    }

    #[test]
    fn test_drop_is_one_based() {
        let mut console = started();
        let response = console.handle_line("3");

        assert_eq!(
            console.session().cell(5, 2),
            Ok(CellState::Occupied(Player::One))
        );
        assert_eq!(response.lines.last().map(String::as_str), Some("Player 2's Turn"));
        assert_eq!(response.announcement, None);
    }

    #[test]
    fn test_rejected_moves_use_player_numbering() {
        let mut console = started();
        assert_eq!(
            console.handle_line("8").lines,
            vec!["Pick a column from 1 to 7."]
        );

        for _ in 0..6 {
            console.handle_line("2");
        }
        assert_eq!(console.handle_line("2").lines, vec!["Column 2 is full."]);
    }

    #[test]
    fn test_restart_asks_for_confirmation() {
        let mut console = started();
        console.handle_line("1");

        assert_eq!(console.handle_line("new").lines, vec![RESTART_PROMPT]);
        assert_eq!(console.handle_line("no").lines, vec!["Restart cancelled."]);
        assert_eq!(
            console.session().cell(5, 0),
            Ok(CellState::Occupied(Player::One))
        );

        console.handle_line("new 5 5");
        let response = console.handle_line("y");
        assert_eq!(response.lines[0], "Previous game abandoned.");
        assert_eq!(response.lines[1], "New game on a 5x5 board.");
        assert_eq!(console.session().board().unwrap().occupied_count(), 0);
    }

    #[test]
    fn test_move_while_restart_pending_is_played() {
        let mut console = started();
        console.handle_line("1");
        console.handle_line("new");

        let response = console.handle_line("2");
        assert_eq!(response.lines[0], RESTART_CANCELLED);
        assert_eq!(
            response.lines.last().map(String::as_str),
            Some("Player 1's Turn")
        );
        assert_eq!(
            console.session().cell(5, 1),
            Ok(CellState::Occupied(Player::Two))
        );
        assert_eq!(console.session().board().unwrap().occupied_count(), 2);

        // The prompt is gone; a later "yes" confirms nothing
        assert_eq!(console.handle_line("y").lines, vec!["Nothing to confirm."]);
    }

    #[test]
    fn test_win_is_announced() {
        let mut console = started();
        for column in ["1", "2", "1", "2", "1", "2"] {
            console.handle_line(column);
        }

        let response = console.handle_line("1");
        assert_eq!(response.announcement.as_deref(), Some("Player 1 won!"));
        // No turn heading once the game is over
        assert_eq!(response.lines.len(), 1);

        // Finished games restart without confirmation
        let response = console.handle_line("new");
        assert_eq!(response.lines[0], "New game on a 7x6 board.");
    }

    #[test]
    fn test_draw_is_announced() {
        let mut console = console();
        console.handle_line("new 1 1");
        let response = console.handle_line("1");
        assert_eq!(
            response.announcement.as_deref(),
            Some("The game is a draw.")
        );
    }

    #[test]
    fn test_quit_and_unknown_input() {
        let mut console = console();
        assert_eq!(
            console.handle_line("dance").lines,
            vec!["Unknown command: dance (type 'help')"]
        );
        assert!(console.handle_line("").lines[0].contains("Empty"));
        assert!(console.handle_line("quit").quit);
    }

    #[tokio::test]
    async fn test_run_plays_a_game_from_input() {
        let input: &[u8] = b"1\n2\n1\n2\n1\n2\n1\nquit\n";
        let mut output = Vec::new();

        console().run(input, &mut output).await.unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.starts_with("Connect Four\nNew game on a 7x6 board.\n"));
        assert!(text.contains("Player 1 won!\n"));
        assert!(text.ends_with("Goodbye.\n"));
    }

    #[tokio::test]
    async fn test_run_stops_at_end_of_input() {
        let input: &[u8] = b"4\n";
        let mut output = Vec::new();

        console().run(input, &mut output).await.unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.ends_with("Player 2's Turn\n"));
    }
}
