//! Minesweeper sessions played by a deducing agent.
//!
//! This crate ties the other Minelace pieces into a playable loop. A
//! [`Game`] owns a board (usually seeded, via `minelace-generator`), the
//! player's view of it, and an [`Agent`] whose knowledge base grows with
//! every revealed clue. Turns can come from the agent or from manual
//! [`Game::reveal`] and [`Game::flag`] calls; the session is won when the
//! flags match the mines exactly.
//!
//! # Examples
//!
//! ```
//! use minelace_core::Grid;
//! use minelace_game::{Game, GameState};
//! use minelace_generator::BoardGenerator;
//!
//! let generator = BoardGenerator::new(Grid::new(8, 8), 8)?;
//! let mut game = Game::new(generator.generate());
//!
//! let mut rng = rand::rng();
//! let state = game.play_to_end(&mut rng)?;
//! assert!(matches!(state, GameState::Won | GameState::Lost));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{
    agent::Agent,
    game::{Game, GameError, GameState, Turn},
};

mod agent;
mod game;
