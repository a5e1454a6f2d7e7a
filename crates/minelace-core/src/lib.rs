//! Core data structures for Minesweeper boards.
//!
//! This crate provides the fundamental types shared by the solver, generator,
//! and game components.
//!
//! # Overview
//!
//! - [`cell`]: Board coordinates ([`Cell`]) and ordered cell collections
//!   ([`CellSet`]).
//! - [`grid`]: Board dimensions and geometry ([`Grid`]), including the
//!   clipped eight-cell neighborhood used for clue counting and inference.
//! - [`board`]: The board itself ([`Board`]) with its true mine placement,
//!   adjacent-mine counting, and the flag-based win check.
//!
//! # Examples
//!
//! ```
//! use minelace_core::{Board, Cell, Grid};
//!
//! let grid = Grid::new(3, 3);
//! let board = Board::new(grid, [Cell::new(0, 0)])?;
//!
//! assert!(board.is_mine(Cell::new(0, 0)));
//! assert_eq!(board.adjacent_mines(Cell::new(1, 1)), 1);
//! assert_eq!(board.adjacent_mines(Cell::new(2, 2)), 0);
//! # Ok::<(), minelace_core::BoardError>(())
//! ```

pub mod board;
pub mod cell;
pub mod grid;

// Re-export commonly used types
pub use self::{
    board::{Board, BoardError},
    cell::{Cell, CellSet},
    grid::Grid,
};
