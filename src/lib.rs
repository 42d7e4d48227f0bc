//! Decision engines for turn-based parlor games.
//!
//! Two independent cores, each a pure decision function over explicit
//! state with no I/O:
//!
//! - **Board engine** ([`games::tictactoe`]): 3x3 grid state, win/draw
//!   detection, and a greedy computer-opponent move selector.
//! - **Move strategies** ([`games::rpsls`]): adaptive counter-move
//!   heuristics for rock-paper-scissors-lizard-spock, driven by an
//!   explicit round history.
//!
//! A game driver owns the grid and the history, alternates turns, and
//! feeds results back; neither core depends on the other. All randomness
//! goes through caller-supplied [`rand::Rng`] values so matches replay
//! deterministically under a seeded generator.
//!
//! # Example
//!
//! ```
//! use parlor::{Board, Marker, best_move};
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//!
//! # fn main() -> parlor::Result<()> {
//! let mut board = Board::new();
//! let (me, them) = (Marker('O'), Marker('X'));
//! board.place(1, them)?;
//!
//! let mut rng = SmallRng::seed_from_u64(1);
//! let pos = best_move(&board, me, them, &mut rng).expect("board not full");
//! board.place(pos, me)?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod error;
pub mod games;

pub use error::{Error, Result};
pub use games::rpsls::{
    History, Move, Personality, Round, RoundWinner, Strategy, beat_last_human_move,
    beat_most_frequent_human_move, counter_move, resolve, rotate_following_move,
};
pub use games::tictactoe::{Board, GameStatus, Marker, Square, best_move, winning_position};
