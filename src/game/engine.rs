use serde::{Deserialize, Serialize};

use super::board::{Board, MoveError};
use super::player::Player;

/// Board dimensions, loadable from the `[game]` section of the config
/// file. Validated by `AppConfig::validate` (both must be at least 4 so
/// a four-in-a-row fits on either axis).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            width: 7,
            height: 6,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Tied,
}

/// Outcome of a single drop request. Rejections (`ColumnFull`,
/// `GameOver`, `InvalidColumn`) are ordinary values and leave the
/// engine untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropResult {
    Placed { player: Player, row: usize, column: usize },
    Win { player: Player, row: usize, column: usize },
    Tie { row: usize, column: usize },
    ColumnFull { column: usize },
    GameOver,
    InvalidColumn { column: usize },
}

/// The game engine: owns the board, the active player, and the status
/// state machine. All rules live here; the UI layer only relays column
/// choices and reflects results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    board: Board,
    current_player: Player,
    status: GameStatus,
}

impl GameEngine {
    /// Create an engine with an empty board of the configured dimensions.
    /// Player 1 moves first.
    pub fn new(config: &GameConfig) -> Self {
        GameEngine {
            board: Board::new(config.width, config.height),
            current_player: Player::One,
            status: GameStatus::InProgress,
        }
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

    /// Check if the game has reached a terminal state.
    pub fn is_terminal(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Start over on an empty board of the same dimensions.
    pub fn reset(&mut self) {
        self.board = Board::new(self.board.width(), self.board.height());
        self.current_player = Player::One;
        self.status = GameStatus::InProgress;
    }

    /// Drop the active player's piece into `column`.
    ///
    /// The status transitions `InProgress -> Won | Tied` are terminal:
    /// once the game is over every further drop is rejected with
    /// `GameOver` and nothing changes. The turn only advances on a
    /// non-terminal placement.
    pub fn drop_piece(&mut self, column: usize) -> DropResult {
        if self.is_terminal() {
            return DropResult::GameOver;
        }

        let player = self.current_player;
        let row = match self.board.drop_piece(column, player.cell()) {
            Ok(row) => row,
            Err(MoveError::InvalidColumn) => return DropResult::InvalidColumn { column },
            Err(MoveError::ColumnFull) => return DropResult::ColumnFull { column },
        };

        // Win is evaluated for the player who just placed, before any
        // turn flip, and takes precedence over a simultaneous board fill.
        if self.board.has_win(player.cell()) {
            self.status = GameStatus::Won(player);
            return DropResult::Win { player, row, column };
        }
        if self.board.is_full() {
            self.status = GameStatus::Tied;
            return DropResult::Tie { row, column };
        }

        self.current_player = player.other();
        DropResult::Placed { player, row, column }
    }
}
