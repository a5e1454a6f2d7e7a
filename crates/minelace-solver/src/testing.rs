//! Test utilities for knowledge-base deductions.
//!
//! This module provides [`KnowledgeTester`], a testing harness for verifying
//! what a [`KnowledgeBase`] deduces from a sequence of clues.
//!
//! # Example
//!
//! ```
//! use minelace_solver::testing::KnowledgeTester;
//!
//! KnowledgeTester::new(1, 3)
//!     .sentence([(0, 0), (0, 1), (0, 2)], 1)
//!     .sentence([(0, 0), (0, 1)], 1)
//!     .assert_safe((0, 2))
//!     .assert_unresolved((0, 0))
//!     .assert_sentence_count(1);
//! ```

use minelace_core::{Cell, Grid};

use crate::{KnowledgeBase, Sentence};

/// A test harness for verifying knowledge-base deductions.
///
/// `KnowledgeTester` owns a [`KnowledgeBase`], feeds it clues and statements,
/// and asserts what it resolved.
///
/// # Method Chaining
///
/// All methods return `self`, enabling fluent method chaining for readable tests.
///
/// # Panics
///
/// All assertion methods panic with detailed messages on failure, using
/// `#[track_caller]` to report the correct source location.
#[derive(Debug)]
pub struct KnowledgeTester {
    kb: KnowledgeBase,
}

impl KnowledgeTester {
    /// Creates a new tester over an empty knowledge base for a board of the
    /// given dimensions.
    #[must_use]
    pub fn new(height: u8, width: u8) -> Self {
        Self {
            kb: KnowledgeBase::new(Grid::new(height, width)),
        }
    }

    /// Feeds the knowledge base a revealed cell and its clue.
    ///
    /// # Panics
    ///
    /// Panics if the knowledge base rejects the clue.
    #[track_caller]
    pub fn reveal<C>(mut self, cell: C, clue: usize) -> Self
    where
        C: Into<Cell>,
    {
        self.kb.add_knowledge(cell.into(), clue).unwrap();
        self
    }

    /// Feeds the knowledge base an externally formed statement.
    ///
    /// # Panics
    ///
    /// Panics if the knowledge base rejects the statement.
    #[track_caller]
    pub fn sentence<C, I>(mut self, cells: C, count: usize) -> Self
    where
        C: IntoIterator<Item = I>,
        I: Into<Cell>,
    {
        let sentence = Sentence::new(cells.into_iter().map(Into::into), count);
        self.kb.add_sentence(sentence).unwrap();
        self
    }

    /// Asserts that a cell is resolved as safe.
    ///
    /// # Panics
    ///
    /// Panics if the cell is not resolved as safe.
    #[track_caller]
    pub fn assert_safe<C>(self, cell: C) -> Self
    where
        C: Into<Cell>,
    {
        let cell = cell.into();
        assert!(
            self.kb.is_known_safe(cell),
            "Expected {cell} to be resolved safe, but safes are: {:?}",
            self.kb.safes()
        );
        self
    }

    /// Asserts that a cell is resolved as a mine.
    ///
    /// # Panics
    ///
    /// Panics if the cell is not resolved as a mine.
    #[track_caller]
    pub fn assert_mine<C>(self, cell: C) -> Self
    where
        C: Into<Cell>,
    {
        let cell = cell.into();
        assert!(
            self.kb.is_known_mine(cell),
            "Expected {cell} to be resolved as a mine, but mines are: {:?}",
            self.kb.mines()
        );
        self
    }

    /// Asserts that a cell is resolved neither way.
    ///
    /// # Panics
    ///
    /// Panics if the cell is resolved as safe or as a mine.
    #[track_caller]
    pub fn assert_unresolved<C>(self, cell: C) -> Self
    where
        C: Into<Cell>,
    {
        let cell = cell.into();
        assert!(
            !self.kb.is_known_safe(cell),
            "Expected {cell} to be unresolved, but it is resolved safe"
        );
        assert!(
            !self.kb.is_known_mine(cell),
            "Expected {cell} to be unresolved, but it is resolved as a mine"
        );
        self
    }

    /// Asserts the number of statements left open.
    ///
    /// # Panics
    ///
    /// Panics if the knowledge base holds a different number of statements.
    #[track_caller]
    pub fn assert_sentence_count(self, count: usize) -> Self {
        assert_eq!(
            self.kb.sentences().len(),
            count,
            "Expected {count} open statements, but the knowledge base holds: {:?}",
            self.kb.sentences()
        );
        self
    }

    /// Returns the knowledge base under test.
    #[must_use]
    pub const fn knowledge_base(&self) -> &KnowledgeBase {
        &self.kb
    }

    /// Consumes the tester, returning the knowledge base.
    #[must_use]
    pub fn into_knowledge_base(self) -> KnowledgeBase {
        self.kb
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_chains_through_assertions() {
        KnowledgeTester::new(2, 2)
            .reveal((0, 0), 3)
            .assert_safe((0, 0))
            .assert_mine((0, 1))
            .assert_mine((1, 0))
            .assert_mine((1, 1))
            .assert_sentence_count(0);
    }

    #[test]
    fn test_sentence_accepts_any_cell_like_iterable() {
        let cells = vec![Cell::new(0, 0), Cell::new(0, 1)];
        KnowledgeTester::new(1, 2)
            .sentence(cells, 2)
            .assert_mine((0, 0))
            .assert_mine((0, 1));
    }

    #[test]
    fn test_into_knowledge_base_keeps_deductions() {
        let kb = KnowledgeTester::new(3, 3)
            .reveal((1, 1), 0)
            .into_knowledge_base();

        assert_eq!(kb.safes().len(), 9);
        assert!(kb.sentences().is_empty());
    }

    #[test]
    #[should_panic(expected = "Expected (0, 1) to be resolved safe")]
    fn test_assert_safe_fails_on_unresolved_cell() {
        KnowledgeTester::new(1, 3)
            .sentence([(0, 1), (0, 2)], 1)
            .assert_safe((0, 1));
    }

    #[test]
    #[should_panic(expected = "Expected (0, 2) to be unresolved")]
    fn test_assert_unresolved_fails_on_resolved_cell() {
        KnowledgeTester::new(1, 3)
            .sentence([(0, 2)], 1)
            .assert_unresolved((0, 2));
    }

    #[test]
    #[should_panic(expected = "Expected 2 open statements")]
    fn test_assert_sentence_count_fails_on_mismatch() {
        KnowledgeTester::new(3, 3)
            .reveal((0, 0), 1)
            .assert_sentence_count(2);
    }
}
