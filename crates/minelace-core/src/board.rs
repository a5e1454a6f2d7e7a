//! The Minesweeper board: true mine placement and clue counting.

use std::fmt::{self, Display};

use crate::{
    cell::{Cell, CellSet},
    grid::Grid,
};

/// An error that can occur when constructing a [`Board`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// A mine was placed outside the board bounds.
    #[display("mine at {cell} lies outside the {grid} board")]
    MineOutOfBounds {
        /// The offending mine cell.
        cell: Cell,
        /// The board dimensions.
        grid: Grid,
    },
}

/// A Minesweeper board with a fixed mine placement.
///
/// The board is constructed once per game and never mutated afterwards. It
/// answers ground-truth queries only: whether a cell is a mine, how many
/// mines surround a cell, and whether an externally tracked flag set
/// matches the true mines. It knows nothing about which cells a player has
/// revealed or deduced.
///
/// # Examples
///
/// ```
/// use minelace_core::{Board, Cell, Grid};
///
/// let board = Board::new(Grid::new(3, 3), [Cell::new(0, 0), Cell::new(2, 2)])?;
///
/// assert!(board.is_mine(Cell::new(0, 0)));
/// assert!(!board.is_mine(Cell::new(1, 1)));
/// assert_eq!(board.adjacent_mines(Cell::new(1, 1)), 2);
/// # Ok::<(), minelace_core::BoardError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
    mines: CellSet,
}

impl Board {
    /// Creates a board with the given dimensions and mine placement.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::MineOutOfBounds`] if any mine lies outside the
    /// grid.
    ///
    /// # Examples
    ///
    /// ```
    /// use minelace_core::{Board, BoardError, Cell, Grid};
    ///
    /// let grid = Grid::new(2, 2);
    /// assert!(Board::new(grid, [Cell::new(1, 1)]).is_ok());
    /// assert_eq!(
    ///     Board::new(grid, [Cell::new(2, 0)]),
    ///     Err(BoardError::MineOutOfBounds { cell: Cell::new(2, 0), grid }),
    /// );
    /// ```
    pub fn new(grid: Grid, mines: impl IntoIterator<Item = Cell>) -> Result<Self, BoardError> {
        let mines: CellSet = mines.into_iter().collect();
        if let Some(&cell) = mines.iter().find(|cell| !grid.contains(**cell)) {
            return Err(BoardError::MineOutOfBounds { cell, grid });
        }
        Ok(Self { grid, mines })
    }

    /// Returns the board dimensions.
    #[must_use]
    pub const fn grid(&self) -> Grid {
        self.grid
    }

    /// Returns the true mine set.
    #[must_use]
    pub const fn mines(&self) -> &CellSet {
        &self.mines
    }

    /// Returns the number of mines on the board.
    #[must_use]
    pub fn mine_count(&self) -> usize {
        self.mines.len()
    }

    /// Returns true if `cell` holds a mine.
    ///
    /// `cell` must lie within the board bounds; callers only query cells
    /// they obtained from a bounded scan.
    #[must_use]
    pub fn is_mine(&self, cell: Cell) -> bool {
        debug_assert!(self.grid.contains(cell), "is_mine on out-of-bounds {cell}");
        self.mines.contains(&cell)
    }

    /// Counts the mines among the up-to-8 in-bounds neighbors of `cell`,
    /// excluding `cell` itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use minelace_core::{Board, Cell, Grid};
    ///
    /// let board = Board::new(Grid::new(3, 3), [Cell::new(0, 0), Cell::new(0, 2)])?;
    ///
    /// assert_eq!(board.adjacent_mines(Cell::new(0, 1)), 2);
    /// assert_eq!(board.adjacent_mines(Cell::new(2, 0)), 0);
    /// // The cell itself is never counted
    /// assert_eq!(board.adjacent_mines(Cell::new(0, 0)), 1);
    /// # Ok::<(), minelace_core::BoardError>(())
    /// ```
    #[must_use]
    pub fn adjacent_mines(&self, cell: Cell) -> usize {
        self.grid
            .neighbors(cell)
            .into_iter()
            .filter(|neighbor| self.mines.contains(neighbor))
            .count()
    }

    /// Returns true if the externally tracked `flagged` set equals the true
    /// mine set.
    ///
    /// Flagging is the caller's concern; the board never tracks flags
    /// itself, and whether an inference engine happens to know every mine
    /// is a separate question from whether the player has flagged them.
    ///
    /// # Examples
    ///
    /// ```
    /// use minelace_core::{Board, Cell, CellSet, Grid};
    ///
    /// let board = Board::new(Grid::new(2, 2), [Cell::new(1, 1)])?;
    ///
    /// let mut flagged = CellSet::new();
    /// assert!(!board.is_won(&flagged));
    ///
    /// flagged.insert(Cell::new(1, 1));
    /// assert!(board.is_won(&flagged));
    ///
    /// // Overflagging is not a win
    /// flagged.insert(Cell::new(0, 0));
    /// assert!(!board.is_won(&flagged));
    /// # Ok::<(), minelace_core::BoardError>(())
    /// ```
    #[must_use]
    pub fn is_won(&self, flagged: &CellSet) -> bool {
        *flagged == self.mines
    }
}

impl Display for Board {
    // Bordered text grid, `X` for mines.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "-".repeat(usize::from(self.grid.width()) * 2 + 1);
        for row in 0..self.grid.height() {
            writeln!(f, "{rule}")?;
            for col in 0..self.grid.width() {
                let mark = if self.is_mine(Cell::new(row, col)) { 'X' } else { ' ' };
                write!(f, "|{mark}")?;
            }
            writeln!(f, "|")?;
        }
        write!(f, "{rule}")
    }
}
