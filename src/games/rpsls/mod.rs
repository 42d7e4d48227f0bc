//! Rock-paper-scissors-lizard-spock: dominance relation, round history,
//! and adaptive counter-move strategies.

mod history;
mod personality;
mod strategy;
mod types;

pub use history::{History, Round};
pub use personality::Personality;
pub use strategy::{
    Strategy, beat_last_human_move, beat_most_frequent_human_move, counter_move,
    rotate_following_move,
};
pub use types::{Move, RoundWinner, resolve};
