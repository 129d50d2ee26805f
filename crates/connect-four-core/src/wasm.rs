//! WebAssembly bindings for the Connect Four engine.
//!
//! This module exposes the game session to JavaScript through wasm-bindgen.
//! The browser page owns rendering, colours and restart confirmation.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use crate::actions::GameAction;
#[cfg(feature = "wasm")]
use crate::config::BoardConfig;
#[cfg(feature = "wasm")]
use crate::session::GameSession;

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// WASM-exposed game wrapper
#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub struct WasmGame {
    session: GameSession,
}

#[cfg(feature = "wasm")]
#[wasm_bindgen]
impl WasmGame {
    /// Create a session with no game started
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmGame {
        WasmGame {
            session: GameSession::new(),
        }
    }

    /// Start a game. Out-of-range dimensions are rejected with an
    /// "Invalid board size" error.
    #[wasm_bindgen(js_name = startGame)]
    pub fn start_game(
        &mut self,
        width: usize,
        height: usize,
        force_restart: bool,
    ) -> Result<(), JsValue> {
        self.session
            .start_game(width, height, force_restart)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Drop a piece, returns the move outcome as JSON
    #[wasm_bindgen(js_name = dropPiece)]
    pub fn drop_piece(&mut self, column: usize) -> Result<String, JsValue> {
        match self.session.drop_piece(column) {
            Ok(outcome) => {
                Ok(serde_json::to_string(&outcome).unwrap_or_else(|_| "null".to_string()))
            }
            Err(e) => Err(JsValue::from_str(&format!("Move rejected: {}", e))),
        }
    }

    /// Apply an action from JSON, returns events JSON or error
    #[wasm_bindgen(js_name = applyAction)]
    pub fn apply_action(&mut self, action_json: &str) -> Result<String, JsValue> {
        let action: GameAction = serde_json::from_str(action_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid action JSON: {}", e)))?;

        match self.session.apply_action(action) {
            Ok(events) => {
                Ok(serde_json::to_string(&events).unwrap_or_else(|_| "[]".to_string()))
            }
            Err(e) => Err(JsValue::from_str(&format!("Action failed: {}", e))),
        }
    }

    /// Get a cell: 0 for empty, otherwise the player id
    #[wasm_bindgen(js_name = getCell)]
    pub fn get_cell(&self, row: usize, column: usize) -> Result<u8, JsValue> {
        self.session
            .cell(row, column)
            .map(u8::from)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Get the current player ID (1 or 2)
    #[wasm_bindgen(js_name = getCurrentPlayer)]
    pub fn get_current_player(&self) -> u8 {
        self.session.current_player().id()
    }

    /// Get the status as JSON, e.g. `"InProgress"` or `{"Won":2}`
    #[wasm_bindgen(js_name = getStatus)]
    pub fn get_status(&self) -> String {
        serde_json::to_string(&self.session.status())
            .unwrap_or_else(|_| "\"NotStarted\"".to_string())
    }

    /// Get the board rows as JSON (for rendering)
    #[wasm_bindgen(js_name = getBoard)]
    pub fn get_board(&self) -> String {
        match self.session.board() {
            Some(board) => {
                serde_json::to_string(board.rows()).unwrap_or_else(|_| "[]".to_string())
            }
            None => "[]".to_string(),
        }
    }

    /// Get columns that can accept a piece
    #[wasm_bindgen(js_name = getValidColumns)]
    pub fn get_valid_columns(&self) -> Vec<u32> {
        self.session
            .valid_columns()
            .into_iter()
            .map(|column| column as u32)
            .collect()
    }

    /// Get the winning line as JSON (if the game was won)
    #[wasm_bindgen(js_name = getWinningLine)]
    pub fn get_winning_line(&self) -> String {
        match self.session.game().and_then(|g| g.winning_line()) {
            Some(line) => serde_json::to_string(line).unwrap_or_else(|_| "null".to_string()),
            None => "null".to_string(),
        }
    }
}

/// Turn the text of the settings inputs into `{"width":..,"height":..}`,
/// using 7x6 for anything unusable. The page passes the result to
/// `startGame`.
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = parseBoardConfig)]
pub fn parse_board_config(width: &str, height: &str) -> String {
    let config = BoardConfig::from_input(width, height);
    serde_json::to_string(&config).unwrap_or_else(|_| "null".to_string())
}

#[cfg(feature = "wasm")]
impl Default for WasmGame {
    fn default() -> Self {
        Self::new()
    }
}
