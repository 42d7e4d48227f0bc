//! Append-only log of completed rounds.

use super::types::{Move, RoundWinner, resolve};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A completed round: both moves and the resolved winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    /// The human's move.
    pub human: Move,
    /// The computer's move.
    pub computer: Move,
    /// Who took the round.
    pub winner: RoundWinner,
}

/// Ordered log of rounds within a match.
///
/// The log grows monotonically during a match; [`History::clear`] at
/// match reset is the only way to remove entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    rounds: Vec<Round>,
}

impl History {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self { rounds: Vec::new() }
    }

    /// Resolves the round, appends it, and returns the winner.
    #[instrument(skip(self))]
    pub fn record(&mut self, human: Move, computer: Move) -> RoundWinner {
        let winner = resolve(human, computer);
        self.rounds.push(Round {
            human,
            computer,
            winner,
        });
        winner
    }

    /// Returns all recorded rounds in order.
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    /// Returns the most recent round, if any.
    pub fn last(&self) -> Option<&Round> {
        self.rounds.last()
    }

    /// Checks whether any round has been recorded.
    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    /// Number of recorded rounds.
    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    /// Iterates over the human's moves in order.
    pub fn human_moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.rounds.iter().map(|round| round.human)
    }

    /// Iterates over the computer's moves in order.
    pub fn computer_moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.rounds.iter().map(|round| round.computer)
    }

    /// Clears the log at match reset.
    #[instrument(skip(self))]
    pub fn clear(&mut self) {
        self.rounds.clear();
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_resolves_and_appends() {
        let mut history = History::new();
        assert!(history.is_empty());

        let winner = history.record(Move::Rock, Move::Scissors);
        assert_eq!(winner, RoundWinner::Human);
        assert_eq!(history.len(), 1);

        let winner = history.record(Move::Paper, Move::Scissors);
        assert_eq!(winner, RoundWinner::Computer);

        let winner = history.record(Move::Spock, Move::Spock);
        assert_eq!(winner, RoundWinner::Tie);

        assert_eq!(
            history.human_moves().collect::<Vec<_>>(),
            vec![Move::Rock, Move::Paper, Move::Spock]
        );
        assert_eq!(history.last().map(|round| round.computer), Some(Move::Spock));
    }

    #[test]
    fn test_clear_empties_the_log() {
        let mut history = History::new();
        history.record(Move::Lizard, Move::Rock);
        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.last(), None);
    }
}
