//! Computer opponents with fixed, named policies.
//!
//! Each personality is a closed variant over the shared strategies, with
//! its move distribution written out as an explicit weighted table. All of
//! them read the recorded history passed in by the driver; none keeps
//! hidden state of its own.

use super::history::History;
use super::strategy;
use super::types::Move;
use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;
use strum::IntoEnumIterator;
use tracing::instrument;

/// Hal's move distribution: scissors 60%, lizard 30%, spock 10%.
const HAL_TABLE: [(Move, u32); 3] = [(Move::Scissors, 6), (Move::Lizard, 3), (Move::Spock, 1)];

/// A computer opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize, strum::EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Personality {
    /// Always plays rock.
    R2d2,
    /// Plays from a fixed weighted table.
    Hal,
    /// Rotates through the move alphabet, starting at rock.
    Chappie,
    /// Counters the human's previous move; random on the first round.
    Sonny,
    /// Counters the human's most played move; random on the first round.
    Number5,
}

impl Personality {
    /// Selects this personality's next move given the match history.
    #[instrument(skip(rng))]
    pub fn choose(&self, history: &History, rng: &mut impl Rng) -> Move {
        match self {
            Personality::R2d2 => Move::Rock,
            Personality::Hal => weighted_pick(&HAL_TABLE, rng),
            Personality::Chappie => match history.last() {
                None => Move::Rock,
                Some(round) => strategy::rotate_following_move(round.computer),
            },
            Personality::Sonny => match strategy::beat_last_human_move(history, rng) {
                Ok(mv) => mv,
                Err(_) => random_move(rng),
            },
            Personality::Number5 => match strategy::beat_most_frequent_human_move(history, rng) {
                Ok(mv) => mv,
                Err(_) => random_move(rng),
            },
        }
    }
}

impl std::fmt::Display for Personality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Personality::R2d2 => "R2D2",
            Personality::Hal => "Hal",
            Personality::Chappie => "Chappie",
            Personality::Sonny => "Sonny",
            Personality::Number5 => "Number 5",
        };
        write!(f, "{name}")
    }
}

/// Uniform pick over the full move alphabet.
fn random_move(rng: &mut impl Rng) -> Move {
    let moves: Vec<Move> = Move::iter().collect();
    moves[rng.random_range(0..moves.len())]
}

/// Samples a move from a weighted table.
fn weighted_pick(table: &[(Move, u32)], rng: &mut impl Rng) -> Move {
    let dist =
        WeightedIndex::new(table.iter().map(|(_, weight)| *weight)).expect("weights are positive");
    table[dist.sample(rng)].0
}
