//! Minelace command-line driver.
//!
//! Generates a seeded board, lets the automated player work through it,
//! and prints the final view alongside the board and its seed. Turn-level
//! detail is available through `RUST_LOG=info`.

use std::process;

use clap::Parser;
use log::{debug, info};
use minelace_core::Grid;
use minelace_game::{Game, GameState};
use minelace_generator::{BoardGenerator, BoardSeed};

/// Watches the automated player work through one seeded board.
#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Board height in cells.
    #[arg(long, value_name = "CELLS", default_value_t = 8)]
    height: u8,

    /// Board width in cells.
    #[arg(long, value_name = "CELLS", default_value_t = 8)]
    width: u8,

    /// Number of mines to place.
    #[arg(long, value_name = "COUNT", default_value_t = 8)]
    mines: usize,

    /// Seed of the board to replay (64 hexadecimal digits).
    #[arg(long, value_name = "SEED", conflicts_with = "phrase")]
    seed: Option<BoardSeed>,

    /// Phrase naming the seed to play.
    #[arg(long, value_name = "PHRASE")]
    phrase: Option<String>,

    /// Stop after this many turns even if the game is still open.
    #[arg(long, value_name = "COUNT")]
    max_turns: Option<usize>,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();

    let generator = match BoardGenerator::new(Grid::new(args.height, args.width), args.mines) {
        Ok(generator) => generator,
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    };

    let seed = match (args.seed, &args.phrase) {
        (Some(seed), _) => seed,
        (None, Some(phrase)) => BoardSeed::from_phrase(phrase),
        (None, None) => BoardSeed::random(),
    };
    info!("playing board {seed}");

    let mut game = Game::new(generator.generate_with_seed(seed));
    let mut rng = rand::rng();
    let mut turn_count = 0_usize;
    while game.state().is_playing() {
        if args.max_turns.is_some_and(|limit| turn_count >= limit) {
            break;
        }
        let turn = match game.play_turn(&mut rng) {
            Ok(Some(turn)) => turn,
            Ok(None) => break,
            Err(err) => {
                eprintln!("{err}");
                process::exit(1);
            }
        };
        turn_count += 1;
        match game.clue_at(turn.cell()) {
            Some(clue) => info!("turn {turn_count}: {turn}, clue {clue}"),
            None => info!("turn {turn_count}: {turn}, a mine"),
        }
        debug!(
            "knowledge holds {} open statements",
            game.agent().knowledge().sentences().len()
        );
    }

    println!("Seed:");
    println!("  {seed}");
    println!();
    println!("Final view:");
    println!("{game}");
    println!();
    println!("Board:");
    println!("{}", game.board());
    println!();
    match game.state() {
        GameState::Won => println!("Outcome: won in {turn_count} turns"),
        GameState::Lost => println!("Outcome: lost after {turn_count} turns"),
        GameState::Playing => println!("Outcome: stopped after {turn_count} turns"),
    }
}
