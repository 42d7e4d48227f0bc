//! Core domain types for rock-paper-scissors-lizard-spock.

use serde::{Deserialize, Serialize};
use strum::EnumIter;
use tracing::instrument;

/// A throw in the five-way game.
///
/// Declaration order is normative: frequency tie-breaks take the first
/// maximal move in this order, and rotation follows it cyclically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Move {
    /// Rock crushes scissors and lizard.
    Rock,
    /// Paper covers rock and disproves Spock.
    Paper,
    /// Scissors cut paper and decapitate lizard.
    Scissors,
    /// Lizard eats paper and poisons Spock.
    Lizard,
    /// Spock vaporizes rock and smashes scissors.
    Spock,
}

impl Move {
    /// The two moves this move defeats.
    ///
    /// This table is the only source of truth for dominance; it is never
    /// derived from enumeration indices.
    pub fn victims(self) -> [Move; 2] {
        match self {
            Move::Rock => [Move::Scissors, Move::Lizard],
            Move::Paper => [Move::Rock, Move::Spock],
            Move::Scissors => [Move::Paper, Move::Lizard],
            Move::Lizard => [Move::Paper, Move::Spock],
            Move::Spock => [Move::Rock, Move::Scissors],
        }
    }

    /// The two moves that defeat this move.
    pub fn counters(self) -> [Move; 2] {
        match self {
            Move::Rock => [Move::Paper, Move::Spock],
            Move::Paper => [Move::Scissors, Move::Lizard],
            Move::Scissors => [Move::Rock, Move::Spock],
            Move::Lizard => [Move::Rock, Move::Scissors],
            Move::Spock => [Move::Paper, Move::Lizard],
        }
    }

    /// Checks whether this move defeats `other`.
    pub fn beats(self, other: Move) -> bool {
        self.victims().contains(&other)
    }

    /// Cyclic successor in declaration order; Spock wraps back to rock.
    pub fn successor(self) -> Move {
        match self {
            Move::Rock => Move::Paper,
            Move::Paper => Move::Scissors,
            Move::Scissors => Move::Lizard,
            Move::Lizard => Move::Spock,
            Move::Spock => Move::Rock,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
            Move::Lizard => "lizard",
            Move::Spock => "spock",
        };
        write!(f, "{name}")
    }
}

/// Side that took a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundWinner {
    /// The human's move defeated the computer's.
    Human,
    /// The computer's move defeated the human's.
    Computer,
    /// Neither move defeated the other.
    Tie,
}

/// Resolves a round per the dominance table.
///
/// The relation is irreflexive and antisymmetric: no move beats itself,
/// and at most one side can win.
#[instrument]
pub fn resolve(human: Move, computer: Move) -> RoundWinner {
    if human.beats(computer) {
        RoundWinner::Human
    } else if computer.beats(human) {
        RoundWinner::Computer
    } else {
        RoundWinner::Tie
    }
}
