//! Game engines, one module per game.

pub mod rpsls;
pub mod tictactoe;
