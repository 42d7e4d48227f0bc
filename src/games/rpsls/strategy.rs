//! Counter-move selection heuristics.
//!
//! Every strategy takes the history as an explicit parameter and routes
//! randomness through the caller's RNG, so matches replay deterministically
//! under a seeded generator.

use super::history::History;
use super::types::Move;
use crate::error::{Error, Result};
use rand::Rng;
use strum::IntoEnumIterator;
use tracing::instrument;

/// Returns a move that beats the given move.
///
/// Each move has exactly two counters; the pick between them is uniform.
/// This non-determinism is intentional and seedable via `rng`.
#[instrument(skip(rng))]
pub fn counter_move(mv: Move, rng: &mut impl Rng) -> Move {
    let counters = mv.counters();
    counters[rng.random_range(0..counters.len())]
}

/// Counters the opponent's most recent move.
///
/// # Errors
///
/// Returns [`Error::EmptyHistory`] if no round has been recorded.
#[instrument(skip(rng))]
pub fn beat_last_human_move(history: &History, rng: &mut impl Rng) -> Result<Move> {
    let last = history.last().ok_or(Error::EmptyHistory)?;
    Ok(counter_move(last.human, rng))
}

/// Counters the opponent's most frequent move over the whole history.
///
/// Frequency ties break to the first maximal move in declaration order.
///
/// # Errors
///
/// Returns [`Error::EmptyHistory`] if no round has been recorded.
#[instrument(skip(rng))]
pub fn beat_most_frequent_human_move(history: &History, rng: &mut impl Rng) -> Result<Move> {
    if history.is_empty() {
        return Err(Error::EmptyHistory);
    }
    let mut most_frequent = Move::Rock;
    let mut best_count = 0;
    for mv in Move::iter() {
        let count = history.human_moves().filter(|&played| played == mv).count();
        if count > best_count {
            most_frequent = mv;
            best_count = count;
        }
    }
    Ok(counter_move(most_frequent, rng))
}

/// Returns the move following `last_own` in rotation order.
///
/// Total and cyclic; there is no empty-history special case. On a first
/// round callers supply the rotation's starting move themselves.
#[instrument]
pub fn rotate_following_move(last_own: Move) -> Move {
    last_own.successor()
}

/// Closed set of history-driven selection heuristics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Strategy {
    /// Counter the opponent's previous move.
    BeatLastMove,
    /// Counter the opponent's most played move.
    BeatMostFrequentMove,
    /// Cycle through the move alphabet.
    RotateMoves,
}

impl Strategy {
    /// Selects the next move for this heuristic.
    ///
    /// `last_own` feeds the rotation strategy; history-driven variants
    /// ignore it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyHistory`] for the history-driven variants
    /// when no round has been recorded.
    #[instrument(skip(rng))]
    pub fn choose(&self, history: &History, last_own: Move, rng: &mut impl Rng) -> Result<Move> {
        match self {
            Strategy::BeatLastMove => beat_last_human_move(history, rng),
            Strategy::BeatMostFrequentMove => beat_most_frequent_human_move(history, rng),
            Strategy::RotateMoves => Ok(rotate_following_move(last_own)),
        }
    }
}
