//! Tic-tac-toe board engine: grid state, terminal detection, and
//! computer-opponent move selection.

mod board;
pub mod engine;
pub mod rules;

pub use board::{Board, GameStatus, Marker, Square};
pub use engine::{CENTER, best_move, winning_position};
