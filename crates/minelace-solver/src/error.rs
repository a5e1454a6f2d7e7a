use minelace_core::Cell;

use crate::Sentence;

/// An error that can occur during knowledge-base deduction.
///
/// Clues produced by querying a real board never trigger these; they
/// surface caller-contract violations such as fabricated clues or
/// contradictory injected statements.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SolverError {
    /// A revealed clue cannot be satisfied by the cell's neighborhood.
    #[display("clue {clue} at {cell} cannot be satisfied by its neighborhood")]
    ImpossibleClue {
        /// The revealed cell.
        cell: Cell,
        /// The clue value that does not fit.
        clue: usize,
    },
    /// A statement requires more mines than it has unresolved cells.
    #[display("statement {sentence} requires more mines than it has unresolved cells")]
    UnsatisfiableSentence {
        /// The offending statement.
        sentence: Sentence,
    },
    /// Two statements that cannot both be true.
    #[display("statement {subset} demands more mines than its superset {superset} admits")]
    ConflictingSentences {
        /// The statement over the smaller cell-set.
        subset: Sentence,
        /// The statement whose cells cover the subset's.
        superset: Sentence,
    },
    /// A cell was deduced to be both a mine and safe.
    #[display("{cell} was deduced to be both a mine and safe")]
    Contradiction {
        /// The doubly resolved cell.
        cell: Cell,
    },
}
