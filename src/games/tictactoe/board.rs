//! Board storage for tic-tac-toe.
//!
//! Cells are addressed by position 1-9 in row-major order, matching the
//! numbering shown to players. Rules live in [`super::rules`]; move
//! selection lives in [`super::engine`].

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Token identifying the side occupying a cell.
///
/// Markers are opaque single-character tokens chosen by the driver; the
/// engine never assumes a particular alphabet, only that the two sides
/// use distinct markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Marker(pub char);

impl std::fmt::Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty cell.
    Empty,
    /// Cell occupied by a side.
    Marked(Marker),
}

/// Current status of a round.
///
/// `Won` and `Draw` are terminal until [`Board::reset`] restores the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Round is ongoing.
    InProgress,
    /// A side completed a line.
    Won(Marker),
    /// Board is full with no winner.
    Draw,
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order; index 0 holds position 1.
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the cell at the given position (1-9).
    ///
    /// Returns `None` if the position is out of range.
    pub fn get(&self, pos: u8) -> Option<Square> {
        if (1..=9).contains(&pos) {
            Some(self.squares[usize::from(pos - 1)])
        } else {
            None
        }
    }

    /// Checks whether a position is in range and unmarked.
    pub fn is_unmarked(&self, pos: u8) -> bool {
        matches!(self.get(pos), Some(Square::Empty))
    }

    /// Places a marker at the given position.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMove`] if the position is outside 1-9 or
    /// the cell is already marked. The board is left untouched on error.
    #[instrument]
    pub fn place(&mut self, pos: u8, marker: Marker) -> Result<()> {
        if !self.is_unmarked(pos) {
            return Err(Error::InvalidMove(pos));
        }
        self.squares[usize::from(pos - 1)] = Square::Marked(marker);
        Ok(())
    }

    /// Returns all unmarked positions, ascending by index.
    ///
    /// An empty result means the board is full.
    pub fn unmarked_positions(&self) -> Vec<u8> {
        (1..=9).filter(|&pos| self.is_unmarked(pos)).collect()
    }

    /// Checks if every cell is marked.
    pub fn is_full(&self) -> bool {
        super::rules::is_full(self)
    }

    /// Returns the marker owning a completed line, if any.
    pub fn winning_marker(&self) -> Option<Marker> {
        super::rules::winning_marker(self)
    }

    /// Checks if either side has completed a line.
    pub fn someone_won(&self) -> bool {
        self.winning_marker().is_some()
    }

    /// Returns the round status derived from the current grid.
    ///
    /// A completed line wins immediately; a full board with no winner is
    /// a draw; otherwise the round is in progress.
    pub fn status(&self) -> GameStatus {
        if let Some(marker) = self.winning_marker() {
            GameStatus::Won(marker)
        } else if self.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    /// Restores all 9 cells to empty for the next round.
    #[instrument]
    pub fn reset(&mut self) {
        self.squares = [Square::Empty; 9];
    }

    /// Returns all cells as a slice, row-major.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.squares[pos] {
                    Square::Empty => write!(f, "{}", pos + 1)?,
                    Square::Marked(marker) => write!(f, "{marker}")?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                writeln!(f, "\n-+-+-")?;
            }
        }
        Ok(())
    }
}
