//! Selfplay driver: a non-interactive demonstration of both engines.
//!
//! Plays one game of tic-tac-toe between two copies of the board engine,
//! then a short rock-paper-scissors-lizard-spock match between two
//! personalities. With `--seed` the whole run replays deterministically.

use clap::Parser;
use parlor::{Board, GameStatus, History, Marker, Personality, RoundWinner, best_move};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Selfplay options.
#[derive(Parser, Debug)]
#[command(name = "selfplay")]
#[command(about = "Engine-vs-engine demonstration runs", long_about = None)]
#[command(version)]
struct Cli {
    /// RNG seed for deterministic replay; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Rounds of rock-paper-scissors-lizard-spock to play.
    #[arg(long, default_value = "7")]
    rounds: usize,

    /// Computer personality (r2d2, hal, chappie, sonny, number5).
    #[arg(long, default_value = "sonny")]
    personality: Personality,

    /// Challenger personality standing in for the human side.
    #[arg(long, default_value = "chappie")]
    challenger: Personality,
}

fn main() -> parlor::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let mut rng = match cli.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };

    play_tictactoe(&mut rng)?;
    play_rpsls(&cli, &mut rng);
    Ok(())
}

/// One engine-vs-engine game of tic-tac-toe.
fn play_tictactoe(rng: &mut SmallRng) -> parlor::Result<()> {
    let (x, o) = (Marker('X'), Marker('O'));
    let mut board = Board::new();
    let mut current = x;

    while board.status() == GameStatus::InProgress {
        let opponent = if current == x { o } else { x };
        let Some(pos) = best_move(&board, current, opponent, rng) else {
            break;
        };
        board.place(pos, current)?;
        info!(marker = %current, position = pos, "placed");
        current = opponent;
    }

    println!("{board}");
    match board.status() {
        GameStatus::Won(marker) => println!("{marker} wins"),
        GameStatus::Draw => println!("draw"),
        GameStatus::InProgress => {}
    }
    Ok(())
}

/// A personality-vs-personality match of rock-paper-scissors-lizard-spock.
///
/// The challenger plays the human side, so it is handed a mirrored view of
/// the history where its opponent's moves sit in the human slot.
fn play_rpsls(cli: &Cli, rng: &mut SmallRng) {
    let mut history = History::new();
    let mut mirrored = History::new();
    let (mut challenger_score, mut computer_score) = (0u32, 0u32);

    for round in 1..=cli.rounds {
        let challenger_mv = cli.challenger.choose(&mirrored, rng);
        let computer_mv = cli.personality.choose(&history, rng);

        let winner = history.record(challenger_mv, computer_mv);
        mirrored.record(computer_mv, challenger_mv);

        match winner {
            RoundWinner::Human => challenger_score += 1,
            RoundWinner::Computer => computer_score += 1,
            RoundWinner::Tie => {}
        }
        info!(
            round,
            challenger = %challenger_mv,
            computer = %computer_mv,
            winner = ?winner,
            "round complete"
        );
    }

    println!(
        "{}: {challenger_score}  {}: {computer_score}  (of {} rounds)",
        cli.challenger, cli.personality, cli.rounds
    );
}
