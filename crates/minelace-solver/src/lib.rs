//! Knowledge-based mine deduction for Minesweeper boards.
//!
//! This crate implements the reasoning half of Minelace. A [`Sentence`]
//! states how many mines a set of unresolved cells holds; a
//! [`KnowledgeBase`] accumulates such statements from revealed clues and
//! derives every consequence they imply, resolving cells as mines or safe
//! along the way. The [`testing`] module provides a fluent harness for
//! exercising deductions in tests.
//!
//! # Examples
//!
//! ```
//! use minelace_core::{Cell, Grid};
//! use minelace_solver::KnowledgeBase;
//!
//! let mut kb = KnowledgeBase::new(Grid::new(2, 2));
//!
//! // A zero clue proves every neighbor safe
//! kb.add_knowledge(Cell::new(0, 0), 0)?;
//! assert!(kb.is_known_safe(Cell::new(1, 1)));
//! # Ok::<(), minelace_solver::SolverError>(())
//! ```

pub use self::{error::SolverError, knowledge::KnowledgeBase, sentence::Sentence};

mod error;
mod knowledge;
mod sentence;
pub mod testing;
