//! Core game logic: board representation, player types, and the engine
//! state machine that enforces drop legality, turn order, and win/tie
//! detection.

mod board;
mod engine;
mod player;

pub use board::{Board, Cell, MoveError, WIN_LENGTH};
pub use engine::{DropResult, GameConfig, GameEngine, GameStatus};
pub use player::Player;
