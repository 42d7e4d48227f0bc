//! Integration tests for the rock-paper-scissors-lizard-spock strategies.

use parlor::{
    Error, History, Move, Personality, RoundWinner, Strategy, beat_last_human_move,
    beat_most_frequent_human_move, counter_move, resolve, rotate_following_move,
};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use strum::IntoEnumIterator;

fn rng() -> SmallRng {
    SmallRng::seed_from_u64(5)
}

#[test]
fn test_dominance_table_is_exact() {
    let expected = [
        (Move::Rock, [Move::Scissors, Move::Lizard]),
        (Move::Paper, [Move::Rock, Move::Spock]),
        (Move::Scissors, [Move::Paper, Move::Lizard]),
        (Move::Lizard, [Move::Paper, Move::Spock]),
        (Move::Spock, [Move::Rock, Move::Scissors]),
    ];
    for (mv, victims) in expected {
        assert_eq!(mv.victims(), victims);
        for victim in victims {
            assert!(mv.beats(victim));
            assert!(!victim.beats(mv));
        }
    }
}

#[test]
fn test_counter_move_stays_in_counter_set() {
    let mut rng = rng();
    for mv in Move::iter() {
        for _ in 0..30 {
            assert!(mv.counters().contains(&counter_move(mv, &mut rng)));
        }
    }
}

#[test]
fn test_counter_move_is_seedable() {
    let mut a = SmallRng::seed_from_u64(99);
    let mut b = SmallRng::seed_from_u64(99);
    for mv in Move::iter() {
        assert_eq!(counter_move(mv, &mut a), counter_move(mv, &mut b));
    }
}

#[test]
fn test_beat_most_frequent_counters_majority_move() {
    let mut history = History::new();
    for human in [Move::Rock, Move::Paper, Move::Paper, Move::Spock] {
        history.record(human, Move::Rock);
    }
    // Paper is strictly most frequent; the result must counter paper.
    let mut rng = rng();
    for _ in 0..30 {
        let mv = beat_most_frequent_human_move(&history, &mut rng).expect("history is non-empty");
        assert!(Move::Paper.counters().contains(&mv));
    }
}

#[test]
fn test_beat_last_uses_final_round_only() {
    let mut history = History::new();
    history.record(Move::Spock, Move::Rock);
    history.record(Move::Rock, Move::Rock);

    let mut rng = rng();
    for _ in 0..30 {
        let mv = beat_last_human_move(&history, &mut rng).expect("history is non-empty");
        assert!(mv.beats(Move::Rock));
    }
}

#[test]
fn test_empty_history_errors() {
    let history = History::new();
    let mut rng = rng();
    assert_eq!(
        beat_last_human_move(&history, &mut rng),
        Err(Error::EmptyHistory)
    );
    assert_eq!(
        beat_most_frequent_human_move(&history, &mut rng),
        Err(Error::EmptyHistory)
    );
    assert_eq!(
        Strategy::BeatLastMove.choose(&history, Move::Rock, &mut rng),
        Err(Error::EmptyHistory)
    );
}

#[test]
fn test_rotation_is_total_and_cyclic() {
    assert_eq!(rotate_following_move(Move::Spock), Move::Rock);

    let mut seen = Vec::new();
    let mut mv = Move::Rock;
    for _ in 0..5 {
        seen.push(mv);
        mv = rotate_following_move(mv);
    }
    assert_eq!(mv, Move::Rock);
    assert_eq!(seen, Move::iter().collect::<Vec<_>>());
}

#[test]
fn test_resolution_matches_recorded_winner() {
    let mut history = History::new();
    assert_eq!(history.record(Move::Lizard, Move::Spock), RoundWinner::Human);
    assert_eq!(history.record(Move::Rock, Move::Paper), RoundWinner::Computer);
    assert_eq!(
        history.record(Move::Scissors, Move::Scissors),
        RoundWinner::Tie
    );
    for round in history.rounds() {
        assert_eq!(resolve(round.human, round.computer), round.winner);
    }
}

#[test]
fn test_personality_match_is_deterministic_under_seed() {
    let play = || {
        let mut rng = SmallRng::seed_from_u64(123);
        let mut history = History::new();
        let mut mirrored = History::new();
        for _ in 0..10 {
            let human = Personality::Hal.choose(&mirrored, &mut rng);
            let computer = Personality::Number5.choose(&history, &mut rng);
            history.record(human, computer);
            mirrored.record(computer, human);
        }
        history
    };
    assert_eq!(play(), play());
}

#[test]
fn test_history_round_trip_through_serde() {
    let mut history = History::new();
    history.record(Move::Rock, Move::Spock);
    history.record(Move::Lizard, Move::Lizard);

    let json = serde_json::to_string(&history).expect("history serializes");
    let back: History = serde_json::from_str(&json).expect("history deserializes");
    assert_eq!(history, back);
}
