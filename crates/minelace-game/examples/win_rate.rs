//! Example measuring the automated player's win rate.
//!
//! This example plays many independently generated games to completion and
//! reports how often the player wins, along with how much guessing it had
//! to do. Games run in parallel across all cores.
//!
//! # Usage
//!
//! ```sh
//! cargo run --release --example win_rate
//! ```
//!
//! Control the board shape and mine density:
//!
//! ```sh
//! cargo run --release --example win_rate -- --height 16 --width 16 --mines 40
//! ```
//!
//! Control the sample size (default: 1000):
//!
//! ```sh
//! cargo run --release --example win_rate -- --games 10000
//! ```

use std::process;

use clap::Parser;
use minelace_core::Grid;
use minelace_game::{Game, GameState, Turn};
use minelace_generator::BoardGenerator;
use rayon::prelude::*;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Board height in cells.
    #[arg(long, value_name = "CELLS", default_value_t = 8)]
    height: u8,

    /// Board width in cells.
    #[arg(long, value_name = "CELLS", default_value_t = 8)]
    width: u8,

    /// Number of mines on each board.
    #[arg(long, value_name = "COUNT", default_value_t = 8)]
    mines: usize,

    /// Number of games to play.
    #[arg(long, value_name = "COUNT", default_value_t = 1_000)]
    games: usize,
}

struct Outcome {
    state: GameState,
    turns: usize,
    guesses: usize,
}

fn main() {
    let args = Args::parse();

    let generator = match BoardGenerator::new(Grid::new(args.height, args.width), args.mines) {
        Ok(generator) => generator,
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    };
    if args.games == 0 {
        eprintln!("--games must be at least 1.");
        process::exit(1);
    }

    let outcomes: Vec<Outcome> = (0..args.games)
        .into_par_iter()
        .map(|_| play_one(&generator))
        .collect();

    let games = outcomes.len();
    let wins = outcomes
        .iter()
        .filter(|outcome| outcome.state.is_won())
        .count();
    let turns: usize = outcomes.iter().map(|outcome| outcome.turns).sum();
    let guesses: usize = outcomes.iter().map(|outcome| outcome.guesses).sum();

    println!("Configuration:");
    println!(
        "  Board: {}x{} with {} mines",
        args.height, args.width, args.mines
    );
    println!("  Games: {games}");
    println!();
    println!("Results:");
    println!("  Wins: {wins} ({:.1}%)", 100.0 * ratio(wins, games));
    println!("  Losses: {}", games - wins);
    println!("  Average turns per game: {:.1}", ratio(turns, games));
    println!("  Average guesses per game: {:.1}", ratio(guesses, games));
}

fn play_one(generator: &BoardGenerator) -> Outcome {
    let mut rng = rand::rng();
    let mut game = Game::new(generator.generate());
    let mut turns = 0;
    let mut guesses = 0;

    while game.state().is_playing() {
        let turn = game
            .play_turn(&mut rng)
            .expect("clues from the session's own board never contradict");
        let Some(turn) = turn else { break };
        turns += 1;
        if matches!(turn, Turn::Guess(_)) {
            guesses += 1;
        }
    }

    Outcome {
        state: game.state(),
        turns,
        guesses,
    }
}

#[expect(clippy::cast_precision_loss)]
fn ratio(part: usize, total: usize) -> f64 {
    part as f64 / total as f64
}
