//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Square};
use super::win::winning_marker;
use tracing::instrument;

/// Checks if the board is full (all cells marked).
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// Checks if the round is a draw: a full board with no winner.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && winning_marker(board).is_none()
}
