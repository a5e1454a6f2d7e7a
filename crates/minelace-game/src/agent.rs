//! The automated player.

use minelace_core::{Cell, Grid};
use minelace_solver::{KnowledgeBase, SolverError};
use rand::{Rng, seq::IndexedRandom as _};

/// An automated Minesweeper player.
///
/// The agent wraps a [`KnowledgeBase`] and turns its conclusions into
/// moves: [`make_safe_move`] plays a cell deduction has proven safe, and
/// [`make_random_move`] falls back to a uniform guess over the cells that
/// are neither played nor known mines. Both are read-only; the agent only
/// learns through [`add_knowledge`].
///
/// [`make_safe_move`]: Self::make_safe_move
/// [`make_random_move`]: Self::make_random_move
/// [`add_knowledge`]: Self::add_knowledge
///
/// # Examples
///
/// ```
/// use minelace_core::{Cell, Grid};
/// use minelace_game::Agent;
///
/// let mut agent = Agent::new(Grid::new(3, 3));
/// assert_eq!(agent.make_safe_move(), None);
///
/// // A zero clue proves the whole neighborhood safe
/// agent.add_knowledge(Cell::new(1, 1), 0)?;
/// assert_eq!(agent.make_safe_move(), Some(Cell::new(0, 0)));
/// # Ok::<(), minelace_solver::SolverError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Agent {
    kb: KnowledgeBase,
}

impl Agent {
    /// Creates an agent knowing nothing about a board of the given
    /// dimensions.
    #[must_use]
    pub fn new(grid: Grid) -> Self {
        Self {
            kb: KnowledgeBase::new(grid),
        }
    }

    /// Returns everything the agent has deduced so far.
    #[must_use]
    pub const fn knowledge(&self) -> &KnowledgeBase {
        &self.kb
    }

    /// Feeds the agent a revealed cell and its clue.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`SolverError`] if the clue contradicts what
    /// the agent already knows. Truthful clues never do.
    pub fn add_knowledge(&mut self, cell: Cell, clue: usize) -> Result<(), SolverError> {
        self.kb.add_knowledge(cell, clue)
    }

    /// Records an externally confirmed mine, such as a trusted flag.
    /// Returns whether the agent learned anything new.
    pub fn mark_mine(&mut self, cell: Cell) -> bool {
        self.kb.mark_mine(cell)
    }

    /// Picks a cell proven safe but not yet played.
    ///
    /// Cells are scanned in row-major order, so the choice is deterministic
    /// for a given knowledge state. Returns `None` when no proven-safe cell
    /// remains unplayed.
    #[must_use]
    pub fn make_safe_move(&self) -> Option<Cell> {
        self.kb
            .grid()
            .cells()
            .find(|&cell| self.kb.is_known_safe(cell) && !self.kb.moves_made().contains(&cell))
    }

    /// Picks a uniformly random cell that is neither played nor a known
    /// mine. Returns `None` when no such cell remains.
    pub fn make_random_move<R>(&self, rng: &mut R) -> Option<Cell>
    where
        R: Rng + ?Sized,
    {
        let candidates: Vec<Cell> = self
            .kb
            .grid()
            .cells()
            .filter(|cell| !self.kb.moves_made().contains(cell) && !self.kb.is_known_mine(*cell))
            .collect();
        candidates.choose(rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use minelace_generator::BoardSeed;
    use minelace_solver::Sentence;

    use super::*;

    #[test]
    fn test_safe_move_scans_in_row_major_order() {
        let mut agent = Agent::new(Grid::new(2, 2));
        agent.add_knowledge(Cell::new(0, 0), 0).unwrap();

        // All four cells are safe; (0, 0) is already played
        assert_eq!(agent.make_safe_move(), Some(Cell::new(0, 1)));
        // Choosing is read-only, so the same move comes back
        assert_eq!(agent.make_safe_move(), Some(Cell::new(0, 1)));
    }

    #[test]
    fn test_safe_move_requires_a_proof() {
        let mut agent = Agent::new(Grid::new(2, 2));
        agent.add_knowledge(Cell::new(0, 0), 1).unwrap();

        // One revealed clue leaves every neighbor undecided
        assert_eq!(agent.make_safe_move(), None);
    }

    #[test]
    fn test_random_move_avoids_played_cells_and_known_mines() {
        let mut agent = Agent::new(Grid::new(2, 2));
        agent.add_knowledge(Cell::new(0, 0), 3).unwrap();

        // Every unplayed cell is a known mine, so no guess is possible
        let mut rng = BoardSeed::from_phrase("guess").to_rng();
        assert_eq!(agent.make_random_move(&mut rng), None);
    }

    #[test]
    fn test_random_move_draws_from_all_eligible_cells() {
        let agent = Agent::new(Grid::new(1, 3));
        let mut rng = BoardSeed::from_phrase("spread").to_rng();

        let mut seen: Vec<Cell> = Vec::new();
        for _ in 0..64 {
            let cell = agent.make_random_move(&mut rng).unwrap();
            assert!(agent.knowledge().grid().contains(cell));
            if !seen.contains(&cell) {
                seen.push(cell);
            }
        }
        // 64 uniform draws over three cells visit more than one of them
        assert!(seen.len() > 1);
    }

    #[test]
    fn test_mark_mine_feeds_into_open_statements() {
        let mut agent = Agent::new(Grid::new(1, 3));
        agent.add_knowledge(Cell::new(0, 1), 1).unwrap();
        assert_eq!(agent.knowledge().sentences().len(), 1);

        // Confirming one boundary cell shrinks the clue's statement
        assert!(agent.mark_mine(Cell::new(0, 0)));
        assert!(agent.knowledge().is_known_mine(Cell::new(0, 0)));
        assert_eq!(
            agent.knowledge().sentences(),
            &[Sentence::new([Cell::new(0, 2)], 0)],
        );
    }
}
