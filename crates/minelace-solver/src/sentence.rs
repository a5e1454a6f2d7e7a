//! Logical statements about groups of board cells.

use std::fmt::{self, Display};

use minelace_core::{Cell, CellSet};

/// A logical statement asserting that exactly `count` of a group of cells
/// are mines.
///
/// Sentences are the unit of knowledge in the inference engine. Their cells
/// always refer to not-yet-individually-resolved cells: as soon as a cell's
/// status is confirmed elsewhere, it is removed from every sentence through
/// [`mark_mine`](Self::mark_mine) or [`mark_safe`](Self::mark_safe), which
/// keep the statement's meaning intact for the remaining cells.
///
/// Two sentences are equal iff their cell-sets and counts are equal; the
/// ordered cell-set representation makes the derived equality and hash
/// canonical regardless of insertion order.
///
/// # Examples
///
/// ```
/// use minelace_core::Cell;
/// use minelace_solver::Sentence;
///
/// // "exactly 1 of (0,0) and (0,1) is a mine"
/// let sentence = Sentence::new([Cell::new(0, 0), Cell::new(0, 1)], 1);
/// assert_eq!(sentence.known_mines(), None);
/// assert_eq!(sentence.known_safes(), None);
/// assert_eq!(sentence.to_string(), "{(0, 0), (0, 1)} = 1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sentence {
    cells: CellSet,
    count: usize,
}

impl Sentence {
    /// Creates a statement that exactly `count` of `cells` are mines.
    ///
    /// The constructor does not validate that `count` fits the cell-set;
    /// an oversized count makes the statement unsatisfiable, which the
    /// knowledge base rejects when the sentence is inserted.
    #[must_use]
    pub fn new(cells: impl IntoIterator<Item = Cell>, count: usize) -> Self {
        let cells = cells.into_iter().collect();
        Self { cells, count }
    }

    /// Returns the unresolved cells this statement ranges over.
    #[must_use]
    pub const fn cells(&self) -> &CellSet {
        &self.cells
    }

    /// Returns how many of the cells are mines.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Returns true if the statement has no cells left.
    ///
    /// Empty sentences carry no information and are pruned by the
    /// knowledge base.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the cells known to be mines, if the statement decides them.
    ///
    /// Every cell is a mine exactly when the mine count equals the number
    /// of cells. Returns `None` when the statement is not yet decisive.
    ///
    /// # Examples
    ///
    /// ```
    /// use minelace_core::{Cell, CellSet};
    /// use minelace_solver::Sentence;
    ///
    /// let cells = [Cell::new(0, 0), Cell::new(0, 1)];
    ///
    /// let decided = Sentence::new(cells, 2);
    /// assert_eq!(decided.known_mines().map(CellSet::len), Some(2));
    ///
    /// let open = Sentence::new(cells, 1);
    /// assert_eq!(open.known_mines(), None);
    /// ```
    #[must_use]
    pub fn known_mines(&self) -> Option<&CellSet> {
        (self.cells.len() == self.count).then_some(&self.cells)
    }

    /// Returns the cells known to be safe, if the statement decides them.
    ///
    /// Every cell is safe exactly when the mine count is zero. Returns
    /// `None` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use minelace_core::Cell;
    /// use minelace_solver::Sentence;
    ///
    /// let cells = [Cell::new(0, 0), Cell::new(0, 1)];
    ///
    /// let safe = Sentence::new(cells, 0);
    /// assert!(safe.known_safes().is_some());
    ///
    /// let open = Sentence::new(cells, 1);
    /// assert_eq!(open.known_safes(), None);
    /// ```
    #[must_use]
    pub fn known_safes(&self) -> Option<&CellSet> {
        (self.count == 0).then_some(&self.cells)
    }

    /// Records that `cell` is confirmed to be a mine.
    ///
    /// If the statement ranges over `cell`, the cell is removed and the
    /// mine count decremented in lock-step, preserving the meaning for the
    /// remaining cells. Returns whether the statement changed.
    ///
    /// # Examples
    ///
    /// ```
    /// use minelace_core::Cell;
    /// use minelace_solver::Sentence;
    ///
    /// let mut sentence = Sentence::new([Cell::new(0, 0), Cell::new(0, 1)], 1);
    ///
    /// assert!(sentence.mark_mine(Cell::new(0, 0)));
    /// assert_eq!(sentence.to_string(), "{(0, 1)} = 0");
    ///
    /// // Cells outside the statement leave it untouched
    /// assert!(!sentence.mark_mine(Cell::new(5, 5)));
    /// ```
    pub fn mark_mine(&mut self, cell: Cell) -> bool {
        if !self.cells.remove(&cell) {
            return false;
        }
        debug_assert!(self.count > 0, "mine budget exhausted marking {cell}");
        self.count = self.count.saturating_sub(1);
        true
    }

    /// Records that `cell` is confirmed to be safe.
    ///
    /// If the statement ranges over `cell`, the cell is removed; the mine
    /// count is unchanged because a safe cell never contributed to it.
    /// Returns whether the statement changed.
    ///
    /// # Examples
    ///
    /// ```
    /// use minelace_core::Cell;
    /// use minelace_solver::Sentence;
    ///
    /// let mut sentence = Sentence::new([Cell::new(0, 0), Cell::new(0, 1)], 1);
    ///
    /// assert!(sentence.mark_safe(Cell::new(0, 0)));
    /// assert_eq!(sentence.to_string(), "{(0, 1)} = 1");
    /// assert!(!sentence.mark_safe(Cell::new(0, 0)));
    /// ```
    pub fn mark_safe(&mut self, cell: Cell) -> bool {
        self.cells.remove(&cell)
    }

    /// Returns true if this statement's cells form a strict subset of
    /// `other`'s.
    #[must_use]
    pub fn is_strict_subset_of(&self, other: &Self) -> bool {
        self.cells.len() < other.cells.len() && self.cells.is_subset(&other.cells)
    }

    /// Derives the statement about the cells of `self` not covered by
    /// `subset`.
    ///
    /// With `subset` a strict subset of this statement, exactly
    /// `self.count() - subset.count()` of the remaining cells are mines.
    ///
    /// # Examples
    ///
    /// ```
    /// use minelace_core::Cell;
    /// use minelace_solver::Sentence;
    ///
    /// let a = Sentence::new([Cell::new(0, 0), Cell::new(0, 1)], 1);
    /// let b = Sentence::new([Cell::new(0, 0), Cell::new(0, 1), Cell::new(0, 2)], 1);
    ///
    /// assert_eq!(b.difference(&a), Sentence::new([Cell::new(0, 2)], 0));
    /// ```
    #[must_use]
    pub fn difference(&self, subset: &Self) -> Self {
        debug_assert!(
            subset.is_strict_subset_of(self),
            "{subset} is not a strict subset of {self}"
        );
        debug_assert!(subset.count <= self.count, "{subset} outweighs {self}");
        let cells = self.cells.difference(&subset.cells).copied().collect();
        let count = self.count.saturating_sub(subset.count);
        Self { cells, count }
    }
}

impl Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{cell}")?;
        }
        write!(f, "}} = {}", self.count)
    }
}
