//! Random mine placement over a grid.

use minelace_core::{Board, Cell, Grid};

use crate::BoardSeed;

/// A generated board together with the seed that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedBoard {
    /// The board with its mines placed.
    pub board: Board,
    /// The seed that reproduces this exact board.
    pub seed: BoardSeed,
}

/// An error constructing a [`BoardGenerator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GeneratorError {
    /// More mines were requested than the grid has cells.
    #[display("cannot place {requested} mines on a board with {capacity} cells")]
    TooManyMines {
        /// The requested number of mines.
        requested: usize,
        /// The number of cells the grid holds.
        capacity: usize,
    },
}

/// Generates boards of a fixed shape and mine count.
///
/// Mine placement is a uniform sample of the grid's cells, drawn from a
/// [`BoardSeed`]. The same generator configuration and seed always yield
/// the same board.
///
/// # Examples
///
/// ```
/// use minelace_core::Grid;
/// use minelace_generator::BoardGenerator;
///
/// let generator = BoardGenerator::new(Grid::new(8, 8), 8)?;
/// let generated = generator.generate();
/// assert_eq!(generated.board.mine_count(), 8);
///
/// // The seed alone reproduces the board
/// let replay = generator.generate_with_seed(generated.seed);
/// assert_eq!(replay.board, generated.board);
/// # Ok::<(), minelace_generator::GeneratorError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardGenerator {
    grid: Grid,
    mine_count: usize,
}

impl BoardGenerator {
    /// Creates a generator placing `mine_count` mines on boards of the
    /// given dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::TooManyMines`] if `mine_count` exceeds the
    /// number of cells on the grid.
    pub fn new(grid: Grid, mine_count: usize) -> Result<Self, GeneratorError> {
        let capacity = grid.cell_count();
        if mine_count > capacity {
            return Err(GeneratorError::TooManyMines {
                requested: mine_count,
                capacity,
            });
        }
        Ok(Self { grid, mine_count })
    }

    /// Returns the board dimensions this generator produces.
    #[must_use]
    pub const fn grid(&self) -> Grid {
        self.grid
    }

    /// Returns the number of mines placed on each board.
    #[must_use]
    pub const fn mine_count(&self) -> usize {
        self.mine_count
    }

    /// Generates a board from a fresh random seed.
    #[must_use]
    pub fn generate(&self) -> GeneratedBoard {
        self.generate_with_seed(BoardSeed::random())
    }

    /// Generates the board the given seed denotes.
    #[must_use]
    pub fn generate_with_seed(&self, seed: BoardSeed) -> GeneratedBoard {
        let mut rng = seed.to_rng();
        let cells: Vec<Cell> = self.grid.cells().collect();
        let mines = rand::seq::index::sample(&mut rng, cells.len(), self.mine_count)
            .into_iter()
            .map(|i| cells[i]);
        let board = match Board::new(self.grid, mines) {
            Ok(board) => board,
            // sample draws indices below cell_count, so every mine is on the grid
            Err(_) => unreachable!("sampled mine is off the grid"),
        };
        GeneratedBoard { board, seed }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_new_rejects_more_mines_than_cells() {
        let grid = Grid::new(2, 2);
        assert_eq!(
            BoardGenerator::new(grid, 5),
            Err(GeneratorError::TooManyMines {
                requested: 5,
                capacity: 4,
            }),
        );
        // A fully mined board is still a board
        assert!(BoardGenerator::new(grid, 4).is_ok());
    }

    #[test]
    fn test_generate_places_the_requested_mines() {
        let grid = Grid::new(8, 8);
        let generator = BoardGenerator::new(grid, 8).unwrap();
        let generated = generator.generate();

        assert_eq!(generated.board.grid(), grid);
        assert_eq!(generated.board.mine_count(), 8);
        assert!(generated.board.mines().iter().all(|&cell| grid.contains(cell)));
    }

    #[test]
    fn test_same_seed_reproduces_the_same_board() {
        let generator = BoardGenerator::new(Grid::new(8, 8), 8).unwrap();
        let seed = BoardSeed::from_phrase("replay");

        assert_eq!(generator.generate_with_seed(seed), generator.generate_with_seed(seed));
    }

    #[test]
    fn test_fresh_seeds_vary_the_board() {
        let generator = BoardGenerator::new(Grid::new(8, 8), 8).unwrap();
        let boards: Vec<_> = (0..16).map(|_| generator.generate().board).collect();

        // 16 uniform draws of 8 mines out of 64 cells never all collide
        assert!(boards.iter().any(|board| board != &boards[0]));
    }

    #[test]
    fn test_extreme_mine_counts() {
        let grid = Grid::new(3, 3);
        let none = BoardGenerator::new(grid, 0).unwrap().generate();
        assert!(none.board.mines().is_empty());

        let full = BoardGenerator::new(grid, 9).unwrap().generate();
        assert_eq!(full.board.mines().len(), 9);
    }

    proptest! {
        #[test]
        fn generated_boards_honor_the_configuration(
            height in 1_u8..=8,
            width in 1_u8..=8,
            requested in 0_usize..=64,
            bytes in any::<[u8; 32]>(),
        ) {
            let grid = Grid::new(height, width);
            let mine_count = requested.min(grid.cell_count());
            let generator = BoardGenerator::new(grid, mine_count).unwrap();
            let seed = BoardSeed::from_bytes(bytes);

            let generated = generator.generate_with_seed(seed);
            prop_assert_eq!(generated.seed, seed);
            prop_assert_eq!(generated.board.mine_count(), mine_count);
            prop_assert!(generated.board.mines().iter().all(|&cell| grid.contains(cell)));

            let replay = generator.generate_with_seed(seed);
            prop_assert_eq!(replay, generated);
        }
    }
}
