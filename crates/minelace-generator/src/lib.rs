//! Seeded random board generation.
//!
//! This crate produces Minesweeper boards whose mine placement is a
//! uniform random sample of the grid. Every board is tied to a
//! [`BoardSeed`]: print it, parse it back, and [`BoardGenerator`] rebuilds
//! the identical board, which keeps interesting games shareable and bug
//! reports reproducible.
//!
//! # Examples
//!
//! ```
//! use minelace_core::Grid;
//! use minelace_generator::{BoardGenerator, BoardSeed};
//!
//! let generator = BoardGenerator::new(Grid::new(8, 8), 8)?;
//!
//! // A phrase names a seed, and a seed names a board
//! let seed = BoardSeed::from_phrase("lucky streak");
//! let generated = generator.generate_with_seed(seed);
//! assert_eq!(generator.generate_with_seed(seed), generated);
//! # Ok::<(), minelace_generator::GeneratorError>(())
//! ```

pub use self::{
    generator::{BoardGenerator, GeneratedBoard, GeneratorError},
    seed::{BoardSeed, ParseBoardSeedError},
};

mod generator;
mod seed;
