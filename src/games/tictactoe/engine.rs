//! Computer-opponent move selection.
//!
//! A greedy one-ply lookahead: take a winning cell, block the opponent's
//! winning cell, take the center, or fall back to a random empty cell. It
//! is intentionally beatable by optimal play but never loses to naive play
//! through the two checked lines.

use super::rules::LINES;
use super::{Board, Marker, Square};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::instrument;

/// The center position, preferred when no line can be completed.
pub const CENTER: u8 = 5;

/// Finds the empty cell completing a line where `marker` already holds
/// the other two cells.
///
/// When several lines qualify, the first one in [`LINES`] order wins.
#[instrument]
pub fn winning_position(board: &Board, marker: Marker) -> Option<u8> {
    for line in LINES {
        let mut empty = None;
        let mut held = 0;
        for pos in line {
            match board.get(pos) {
                Some(Square::Marked(m)) if m == marker => held += 1,
                Some(Square::Empty) => empty = Some(pos),
                _ => {}
            }
        }
        if held == 2
            && let Some(pos) = empty
        {
            return Some(pos);
        }
    }
    None
}

/// Selects the best position for `my_marker`, in strict priority order:
///
/// 1. complete an own line (take the win),
/// 2. complete the opponent's line (block the loss),
/// 3. take the center if empty,
/// 4. a uniformly random empty cell.
///
/// Returns `None` only when the board is full.
#[instrument(skip(rng))]
pub fn best_move(
    board: &Board,
    my_marker: Marker,
    opponent_marker: Marker,
    rng: &mut impl Rng,
) -> Option<u8> {
    if let Some(pos) = winning_position(board, my_marker) {
        return Some(pos);
    }
    if let Some(pos) = winning_position(board, opponent_marker) {
        return Some(pos);
    }
    if board.is_unmarked(CENTER) {
        return Some(CENTER);
    }
    board.unmarked_positions().choose(rng).copied()
}
