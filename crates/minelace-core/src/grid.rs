//! Board dimensions and geometry.

use std::fmt::{self, Display};

use tinyvec::ArrayVec;

use crate::cell::Cell;

/// Board dimensions with the geometry queries built on them.
///
/// A grid is `height` rows by `width` columns. It knows nothing about
/// mines; it only answers containment and adjacency questions, which both
/// the board and the inference engine rely on.
///
/// # Examples
///
/// ```
/// use minelace_core::{Cell, Grid};
///
/// let grid = Grid::new(3, 4);
/// assert_eq!(grid.cell_count(), 12);
/// assert!(grid.contains(Cell::new(2, 3)));
/// assert!(!grid.contains(Cell::new(3, 0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    height: u8,
    width: u8,
}

impl Grid {
    /// Creates a grid with the given dimensions.
    #[must_use]
    pub const fn new(height: u8, width: u8) -> Self {
        Self { height, width }
    }

    /// Returns the number of rows.
    #[must_use]
    pub const fn height(&self) -> u8 {
        self.height
    }

    /// Returns the number of columns.
    #[must_use]
    pub const fn width(&self) -> u8 {
        self.width
    }

    /// Returns the total number of cells on the grid.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        usize::from(self.height) * usize::from(self.width)
    }

    /// Returns true if `cell` lies within the grid bounds.
    #[must_use]
    pub const fn contains(&self, cell: Cell) -> bool {
        cell.row() < self.height && cell.col() < self.width
    }

    /// Returns an iterator over every cell in row-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// use minelace_core::{Cell, Grid};
    ///
    /// let cells: Vec<_> = Grid::new(2, 2).cells().collect();
    /// assert_eq!(
    ///     cells,
    ///     [
    ///         Cell::new(0, 0),
    ///         Cell::new(0, 1),
    ///         Cell::new(1, 0),
    ///         Cell::new(1, 1),
    ///     ]
    /// );
    /// ```
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        (0..self.height).flat_map(move |row| (0..self.width).map(move |col| Cell::new(row, col)))
    }

    /// Returns the in-bounds cells within Chebyshev distance 1 of `cell`,
    /// excluding `cell` itself.
    ///
    /// Interior cells have 8 neighbors; edge and corner cells have fewer.
    /// `cell` must lie within the grid bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use minelace_core::{Cell, Grid};
    ///
    /// let grid = Grid::new(3, 3);
    /// assert_eq!(grid.neighbors(Cell::new(1, 1)).len(), 8);
    /// assert_eq!(grid.neighbors(Cell::new(0, 0)).len(), 3);
    /// assert_eq!(grid.neighbors(Cell::new(0, 1)).len(), 5);
    /// ```
    #[must_use]
    pub fn neighbors(&self, cell: Cell) -> ArrayVec<[Cell; 8]> {
        debug_assert!(self.contains(cell), "neighbors of out-of-bounds {cell}");
        let mut neighbors = ArrayVec::new();
        for row in cell.row().saturating_sub(1)..=cell.row().saturating_add(1) {
            for col in cell.col().saturating_sub(1)..=cell.col().saturating_add(1) {
                let neighbor = Cell::new(row, col);
                if neighbor != cell && self.contains(neighbor) {
                    neighbors.push(neighbor);
                }
            }
        }
        neighbors
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.height, self.width)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_basic_operations() {
        let grid = Grid::new(2, 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.cell_count(), 6);

        // Containment at the boundary
        assert!(grid.contains(Cell::new(0, 0)));
        assert!(grid.contains(Cell::new(1, 2)));
        assert!(!grid.contains(Cell::new(2, 0)));
        assert!(!grid.contains(Cell::new(0, 3)));

        // Display trait
        assert_eq!(format!("{grid}"), "2x3");
    }

    #[test]
    fn test_cells_row_major() {
        let cells: Vec<_> = Grid::new(2, 2).cells().collect();
        assert_eq!(
            cells,
            [
                Cell::new(0, 0),
                Cell::new(0, 1),
                Cell::new(1, 0),
                Cell::new(1, 1),
            ]
        );

        // Degenerate grids have no cells
        assert_eq!(Grid::new(0, 5).cells().count(), 0);
        assert_eq!(Grid::new(5, 0).cells().count(), 0);
    }

    #[test]
    fn test_neighbors_clipped_to_bounds() {
        let grid = Grid::new(3, 3);

        // Corner: 3 neighbors
        let corner: Vec<_> = grid.neighbors(Cell::new(0, 0)).into_iter().collect();
        assert_eq!(
            corner,
            [Cell::new(0, 1), Cell::new(1, 0), Cell::new(1, 1)]
        );

        // Edge: 5 neighbors
        assert_eq!(grid.neighbors(Cell::new(2, 1)).len(), 5);

        // Center: all 8
        let center = grid.neighbors(Cell::new(1, 1));
        assert_eq!(center.len(), 8);
        assert!(!center.contains(&Cell::new(1, 1)));
    }

    #[test]
    fn test_neighbors_single_cell_grid() {
        // A 1x1 grid has a lone cell with no neighbors
        assert!(Grid::new(1, 1).neighbors(Cell::new(0, 0)).is_empty());
    }

    proptest! {
        #[test]
        fn neighbors_are_adjacent_and_in_bounds(
            height in 1u8..12,
            width in 1u8..12,
            row in 0u8..12,
            col in 0u8..12,
        ) {
            prop_assume!(row < height && col < width);
            let grid = Grid::new(height, width);
            let cell = Cell::new(row, col);

            let neighbors = grid.neighbors(cell);
            prop_assert!(neighbors.len() <= 8);
            for neighbor in neighbors {
                prop_assert!(grid.contains(neighbor));
                prop_assert_ne!(neighbor, cell);
                let row_delta = neighbor.row().abs_diff(cell.row());
                let col_delta = neighbor.col().abs_diff(cell.col());
                prop_assert!(row_delta.max(col_delta) == 1);
            }
        }

        #[test]
        fn neighbor_relation_is_symmetric(
            height in 1u8..8,
            width in 1u8..8,
            row in 0u8..8,
            col in 0u8..8,
        ) {
            prop_assume!(row < height && col < width);
            let grid = Grid::new(height, width);
            let cell = Cell::new(row, col);

            for neighbor in grid.neighbors(cell) {
                prop_assert!(grid.neighbors(neighbor).contains(&cell));
            }
        }
    }
}
