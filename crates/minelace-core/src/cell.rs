//! Board coordinates and cell collections.

use std::{
    collections::BTreeSet,
    fmt::{self, Display},
};

/// An ordered set of cells.
///
/// `BTreeSet` keeps the cells in [`Cell`]'s row-major order, so iterating a
/// `CellSet` always scans rows top to bottom and columns left to right. All
/// cell collections in this workspace use this alias to keep iteration
/// deterministic.
pub type CellSet = BTreeSet<Cell>;

/// A single board coordinate `(row, col)`.
///
/// Rows count from the top, columns from the left, both starting at zero.
/// The derived ordering compares rows first and columns second, so sorting
/// cells yields row-major order.
///
/// # Examples
///
/// ```
/// use minelace_core::Cell;
///
/// let cell = Cell::new(2, 3);
/// assert_eq!(cell.row(), 2);
/// assert_eq!(cell.col(), 3);
///
/// // Ordering is row-major
/// let mut cells = vec![Cell::new(1, 0), Cell::new(0, 5)];
/// cells.sort();
/// assert_eq!(cells, [Cell::new(0, 5), Cell::new(1, 0)]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    row: u8,
    col: u8,
}

impl Cell {
    /// Creates a cell at the given row and column.
    ///
    /// # Examples
    ///
    /// ```
    /// use minelace_core::Cell;
    ///
    /// let cell = Cell::new(0, 7);
    /// assert_eq!(cell.row(), 0);
    /// assert_eq!(cell.col(), 7);
    /// ```
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Returns the zero-based row of this cell.
    #[must_use]
    pub const fn row(&self) -> u8 {
        self.row
    }

    /// Returns the zero-based column of this cell.
    #[must_use]
    pub const fn col(&self) -> u8 {
        self.col
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(u8, u8)> for Cell {
    fn from((row, col): (u8, u8)) -> Self {
        Self::new(row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        // Constructor and accessors
        let cell = Cell::new(3, 5);
        assert_eq!(cell.row(), 3);
        assert_eq!(cell.col(), 5);

        // Display trait
        assert_eq!(format!("{cell}"), "(3, 5)");
        assert_eq!(format!("{}", Cell::new(0, 0)), "(0, 0)");

        // From tuple
        assert_eq!(Cell::from((1, 2)), Cell::new(1, 2));
    }

    #[test]
    fn test_ordering_is_row_major() {
        // All cells of a 2x3 grid, shuffled, sort back to row-major order
        let mut cells = vec![
            Cell::new(1, 2),
            Cell::new(0, 1),
            Cell::new(1, 0),
            Cell::new(0, 0),
            Cell::new(1, 1),
            Cell::new(0, 2),
        ];
        cells.sort();
        assert_eq!(
            cells,
            [
                Cell::new(0, 0),
                Cell::new(0, 1),
                Cell::new(0, 2),
                Cell::new(1, 0),
                Cell::new(1, 1),
                Cell::new(1, 2),
            ]
        );
    }

    #[test]
    fn test_cell_set_iterates_in_order() {
        // BTreeSet iteration follows the row-major Ord
        let set: CellSet = [Cell::new(2, 0), Cell::new(0, 2), Cell::new(0, 1)]
            .into_iter()
            .collect();
        let cells: Vec<_> = set.iter().copied().collect();
        assert_eq!(cells, [Cell::new(0, 1), Cell::new(0, 2), Cell::new(2, 0)]);
    }
}
