//! Win detection logic for tic-tac-toe.

use super::super::{Board, Marker, Square};
use tracing::instrument;

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals, in that order.
///
/// This order is normative: tie-breaks in move selection take the first
/// qualifying line in this table.
pub const LINES: [[u8; 3]; 8] = [
    // Rows
    [1, 2, 3],
    [4, 5, 6],
    [7, 8, 9],
    // Columns
    [1, 4, 7],
    [2, 5, 8],
    [3, 6, 9],
    // Diagonals
    [1, 5, 9],
    [3, 5, 7],
];

/// Returns the marker owning a line whose 3 cells are identical and
/// non-empty, or `None` if no line is complete.
///
/// All 8 lines are candidates on every call; nothing is assumed about
/// which lines a legal game can complete.
#[instrument]
pub fn winning_marker(board: &Board) -> Option<Marker> {
    for line in LINES {
        if let Some(marker) = line_marker(board, line) {
            return Some(marker);
        }
    }
    None
}

/// Returns the marker completing the given line, if all 3 cells match.
fn line_marker(board: &Board, line: [u8; 3]) -> Option<Marker> {
    let [a, b, c] = line.map(|pos| board.get(pos));
    match (a?, b?, c?) {
        (Square::Marked(m1), Square::Marked(m2), Square::Marked(m3)) if m1 == m2 && m2 == m3 => {
            Some(m1)
        }
        _ => None,
    }
}
