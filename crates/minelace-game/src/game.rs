//! A Minesweeper session driven by the automated player.

use std::{collections::BTreeMap, fmt};

use minelace_core::{Board, Cell, CellSet};
use minelace_generator::{BoardSeed, GeneratedBoard};
use minelace_solver::SolverError;
use rand::Rng;

use crate::Agent;

/// The lifecycle of a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum GameState {
    /// Moves are still being accepted.
    Playing,
    /// The flags match the mines exactly.
    Won,
    /// A mine was revealed.
    Lost,
}

/// One move taken by [`Game::play_turn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Turn {
    /// A cell the knowledge base had proven safe.
    #[display("revealed safe {_0}")]
    Safe(Cell),
    /// A uniformly random guess among the remaining candidates.
    #[display("guessed {_0}")]
    Guess(Cell),
}

impl Turn {
    /// Returns the cell this turn revealed.
    #[must_use]
    pub const fn cell(self) -> Cell {
        match self {
            Self::Safe(cell) | Self::Guess(cell) => cell,
        }
    }
}

/// An error operating a [`Game`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum GameError {
    /// The session has already ended.
    #[display("the game is already over")]
    Finished,
    /// A cell outside the board was addressed.
    #[display("{cell} lies outside the board")]
    OutOfBounds {
        /// The offending cell.
        cell: Cell,
    },
    /// A flagged cell was asked to be revealed.
    #[display("{cell} is flagged; unflag it before revealing")]
    CannotRevealFlagged {
        /// The flagged cell.
        cell: Cell,
    },
    /// The clues fed to the player contradict each other.
    #[display("deduction rejected the clue: {source}")]
    #[from]
    Solver {
        /// The underlying deduction failure.
        source: SolverError,
    },
}

/// A Minesweeper session.
///
/// The game owns the true [`Board`], the player's view of it (revealed
/// clues and flags), and an [`Agent`] that learns from every reveal. Turns
/// may come from the agent via [`play_turn`] or from a human via
/// [`reveal`] and [`flag`]; both feed the same knowledge base.
///
/// The session is won when the flagged cells match the mines exactly, and
/// lost the moment a mine is revealed. Whenever deduction proves a cell to
/// be a mine, the game flags it automatically.
///
/// [`play_turn`]: Self::play_turn
/// [`reveal`]: Self::reveal
/// [`flag`]: Self::flag
///
/// # Examples
///
/// ```
/// use minelace_core::Grid;
/// use minelace_game::Game;
/// use minelace_generator::BoardGenerator;
///
/// let generator = BoardGenerator::new(Grid::new(8, 8), 8)?;
/// let mut game = Game::new(generator.generate());
/// assert!(game.state().is_playing());
///
/// // Let the automated player finish the board
/// let mut rng = rand::rng();
/// while game.state().is_playing() {
///     if game.play_turn(&mut rng)?.is_none() {
///         break;
///     }
/// }
/// assert!(game.state().is_won() || game.state().is_lost());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    agent: Agent,
    revealed: BTreeMap<Cell, usize>,
    flagged: CellSet,
    exploded: Option<Cell>,
    state: GameState,
    seed: Option<BoardSeed>,
}

impl Game {
    /// Creates a session on a generated board, remembering its seed.
    ///
    /// A board with no mines counts as won before the first turn.
    #[must_use]
    pub fn new(generated: GeneratedBoard) -> Self {
        let GeneratedBoard { board, seed } = generated;
        Self::with_seed(board, Some(seed))
    }

    /// Creates a session on a hand-built board.
    #[must_use]
    pub fn from_board(board: Board) -> Self {
        Self::with_seed(board, None)
    }

    fn with_seed(board: Board, seed: Option<BoardSeed>) -> Self {
        let agent = Agent::new(board.grid());
        let mut this = Self {
            board,
            agent,
            revealed: BTreeMap::new(),
            flagged: CellSet::new(),
            exploded: None,
            state: GameState::Playing,
            seed,
        };
        this.check_won();
        this
    }

    /// Returns the true board underneath the session.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the seed the board was generated from, if any.
    #[must_use]
    pub const fn seed(&self) -> Option<BoardSeed> {
        self.seed
    }

    /// Returns where the session stands.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the automated player attached to this session.
    #[must_use]
    pub const fn agent(&self) -> &Agent {
        &self.agent
    }

    /// Returns the revealed cells with their clues.
    #[must_use]
    pub const fn revealed(&self) -> &BTreeMap<Cell, usize> {
        &self.revealed
    }

    /// Returns the clue shown at a cell, if it has been revealed.
    #[must_use]
    pub fn clue_at(&self, cell: Cell) -> Option<usize> {
        self.revealed.get(&cell).copied()
    }

    /// Returns the currently flagged cells.
    #[must_use]
    pub const fn flagged(&self) -> &CellSet {
        &self.flagged
    }

    /// Returns the revealed mine that ended the session, if it is lost.
    #[must_use]
    pub const fn exploded(&self) -> Option<Cell> {
        self.exploded
    }

    /// Plays one turn of the automated player.
    ///
    /// The agent reveals a proven-safe cell when deduction has produced
    /// one, and otherwise guesses uniformly among the cells that are
    /// neither played nor known mines. Returns the turn taken, or `None`
    /// when no cell is eligible.
    ///
    /// # Errors
    ///
    /// - [`GameError::Finished`] if the session is already over.
    /// - [`GameError::Solver`] if the clue contradicts earlier knowledge,
    ///   which cannot happen while clues come from the session's own board.
    ///
    /// # Examples
    ///
    /// ```
    /// use minelace_core::Grid;
    /// use minelace_game::{Game, Turn};
    /// use minelace_generator::BoardGenerator;
    ///
    /// let generator = BoardGenerator::new(Grid::new(4, 4), 2)?;
    /// let mut game = Game::new(generator.generate());
    ///
    /// // The very first move has nothing to go on, so it is a guess
    /// let mut rng = rand::rng();
    /// let turn = game.play_turn(&mut rng)?;
    /// assert!(matches!(turn, Some(Turn::Guess(_))));
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn play_turn<R>(&mut self, rng: &mut R) -> Result<Option<Turn>, GameError>
    where
        R: Rng + ?Sized,
    {
        if !self.state.is_playing() {
            return Err(GameError::Finished);
        }
        let turn = if let Some(cell) = self.agent.make_safe_move() {
            Turn::Safe(cell)
        } else if let Some(cell) = self.agent.make_random_move(rng) {
            Turn::Guess(cell)
        } else {
            return Ok(None);
        };
        self.reveal_inner(turn.cell())?;
        Ok(Some(turn))
    }

    /// Plays automated turns until the session ends.
    ///
    /// # Errors
    ///
    /// Propagates the first [`play_turn`] error.
    ///
    /// [`play_turn`]: Self::play_turn
    pub fn play_to_end<R>(&mut self, rng: &mut R) -> Result<GameState, GameError>
    where
        R: Rng + ?Sized,
    {
        while self.state.is_playing() {
            if self.play_turn(rng)?.is_none() {
                break;
            }
        }
        Ok(self.state)
    }

    /// Reveals a cell by hand, as a human player would.
    ///
    /// The clue still feeds the agent, so manual play and automated play
    /// share one knowledge base. Revealing an already revealed cell is a
    /// no-op; revealing a mine ends the session.
    ///
    /// # Errors
    ///
    /// - [`GameError::Finished`] if the session is already over.
    /// - [`GameError::OutOfBounds`] if the cell is not on the board.
    /// - [`GameError::CannotRevealFlagged`] if the cell is flagged.
    /// - [`GameError::Solver`] if the clue contradicts earlier knowledge.
    pub fn reveal(&mut self, cell: Cell) -> Result<(), GameError> {
        if !self.state.is_playing() {
            return Err(GameError::Finished);
        }
        if !self.board.grid().contains(cell) {
            return Err(GameError::OutOfBounds { cell });
        }
        if self.flagged.contains(&cell) {
            return Err(GameError::CannotRevealFlagged { cell });
        }
        if self.revealed.contains_key(&cell) {
            return Ok(());
        }
        self.reveal_inner(cell)
    }

    /// Plants a flag on a hidden cell. Returns whether the flag is new.
    ///
    /// Flags are the player's claims, not knowledge: they do not feed the
    /// agent. The session is won the moment the flags match the mines
    /// exactly.
    ///
    /// # Errors
    ///
    /// - [`GameError::Finished`] if the session is already over.
    /// - [`GameError::OutOfBounds`] if the cell is not on the board.
    pub fn flag(&mut self, cell: Cell) -> Result<bool, GameError> {
        if !self.state.is_playing() {
            return Err(GameError::Finished);
        }
        if !self.board.grid().contains(cell) {
            return Err(GameError::OutOfBounds { cell });
        }
        if self.revealed.contains_key(&cell) {
            return Ok(false);
        }
        let inserted = self.flagged.insert(cell);
        self.check_won();
        Ok(inserted)
    }

    /// Removes a flag. Returns whether a flag was there.
    ///
    /// Removing a misplaced flag can win the session, since the win
    /// condition is an exact match between flags and mines.
    ///
    /// # Errors
    ///
    /// - [`GameError::Finished`] if the session is already over.
    /// - [`GameError::OutOfBounds`] if the cell is not on the board.
    pub fn unflag(&mut self, cell: Cell) -> Result<bool, GameError> {
        if !self.state.is_playing() {
            return Err(GameError::Finished);
        }
        if !self.board.grid().contains(cell) {
            return Err(GameError::OutOfBounds { cell });
        }
        let removed = self.flagged.remove(&cell);
        self.check_won();
        Ok(removed)
    }

    fn reveal_inner(&mut self, cell: Cell) -> Result<(), GameError> {
        if self.board.is_mine(cell) {
            self.exploded = Some(cell);
            self.state = GameState::Lost;
            return Ok(());
        }
        let clue = self.board.adjacent_mines(cell);
        self.revealed.insert(cell, clue);
        self.agent.add_knowledge(cell, clue)?;

        // Deduction may have proven new mines; flag them for the player
        self.flagged
            .extend(self.agent.knowledge().mines().iter().copied());
        self.check_won();
        Ok(())
    }

    fn check_won(&mut self) {
        if self.state.is_playing() && self.board.is_won(&self.flagged) {
            self.state = GameState::Won;
        }
    }
}

// The player's view: clues, flags, `*` for a revealed mine, `.` for hidden.
impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let grid = self.board.grid();
        let rule = "-".repeat(usize::from(grid.width()) * 2 + 1);
        f.write_str(&rule)?;
        for row in 0..grid.height() {
            f.write_str("\n")?;
            for col in 0..grid.width() {
                let cell = Cell::new(row, col);
                f.write_str("|")?;
                if self.exploded == Some(cell) {
                    f.write_str("*")?;
                } else if self.flagged.contains(&cell) {
                    f.write_str("F")?;
                } else if let Some(clue) = self.clue_at(cell) {
                    write!(f, "{clue}")?;
                } else {
                    f.write_str(".")?;
                }
            }
            f.write_str("|\n")?;
            f.write_str(&rule)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use minelace_core::Grid;
    use minelace_generator::{BoardGenerator, BoardSeed};

    use super::*;

    fn board_2x2_with_mine() -> Board {
        // Mine in the lower-right corner
        Board::new(Grid::new(2, 2), [Cell::new(1, 1)]).unwrap()
    }

    #[test]
    fn test_new_session_is_playing() {
        let game = Game::from_board(board_2x2_with_mine());

        assert!(game.state().is_playing());
        assert!(game.revealed().is_empty());
        assert!(game.flagged().is_empty());
        assert_eq!(game.exploded(), None);
        assert_eq!(game.seed(), None);
    }

    #[test]
    fn test_mine_free_board_is_won_before_the_first_turn() {
        let board = Board::new(Grid::new(2, 2), []).unwrap();
        let mut game = Game::from_board(board);

        assert!(game.state().is_won());
        let mut rng = BoardSeed::from_phrase("idle").to_rng();
        assert_eq!(game.play_turn(&mut rng), Err(GameError::Finished));
    }

    #[test]
    fn test_generated_sessions_remember_their_seed() {
        let generator = BoardGenerator::new(Grid::new(4, 4), 3).unwrap();
        let seed = BoardSeed::from_phrase("remember");
        let game = Game::new(generator.generate_with_seed(seed));

        assert_eq!(game.seed(), Some(seed));
        assert_eq!(game.board().mine_count(), 3);
    }

    #[test]
    fn test_manual_reveals_feed_the_agent_to_victory() {
        let mut game = Game::from_board(board_2x2_with_mine());

        game.reveal(Cell::new(0, 0)).unwrap();
        assert_eq!(game.clue_at(Cell::new(0, 0)), Some(1));
        assert!(game.state().is_playing());

        game.reveal(Cell::new(0, 1)).unwrap();
        game.reveal(Cell::new(1, 0)).unwrap();

        // The third clue pins the mine; the game flags it and wins
        assert!(game.state().is_won());
        assert_eq!(game.flagged(), &[Cell::new(1, 1)].into_iter().collect());
        assert!(game.agent().knowledge().is_known_mine(Cell::new(1, 1)));
    }

    #[test]
    fn test_revealing_a_mine_loses() {
        let mut game = Game::from_board(board_2x2_with_mine());

        game.reveal(Cell::new(1, 1)).unwrap();
        assert!(game.state().is_lost());
        assert_eq!(game.exploded(), Some(Cell::new(1, 1)));

        // The fatal cell shows up in the player's view
        let expected = "-----\n\
                        |.|.|\n\
                        -----\n\
                        |.|*|\n\
                        -----";
        assert_eq!(game.to_string(), expected);

        assert_eq!(game.reveal(Cell::new(0, 0)), Err(GameError::Finished));
    }

    #[test]
    fn test_reveal_is_idempotent() {
        let mut game = Game::from_board(board_2x2_with_mine());

        game.reveal(Cell::new(0, 0)).unwrap();
        game.reveal(Cell::new(0, 0)).unwrap();

        assert_eq!(game.revealed().len(), 1);
        assert_eq!(game.agent().knowledge().moves_made().len(), 1);
    }

    #[test]
    fn test_reveal_guards_bounds_and_flags() {
        let mut game = Game::from_board(board_2x2_with_mine());

        assert_eq!(
            game.reveal(Cell::new(5, 5)),
            Err(GameError::OutOfBounds {
                cell: Cell::new(5, 5),
            }),
        );

        game.flag(Cell::new(1, 0)).unwrap();
        assert_eq!(
            game.reveal(Cell::new(1, 0)),
            Err(GameError::CannotRevealFlagged {
                cell: Cell::new(1, 0),
            }),
        );

        game.unflag(Cell::new(1, 0)).unwrap();
        game.reveal(Cell::new(1, 0)).unwrap();
        assert_eq!(game.clue_at(Cell::new(1, 0)), Some(1));
    }

    #[test]
    fn test_exact_flags_win_even_without_reveals() {
        let mut game = Game::from_board(board_2x2_with_mine());

        // A wrong flag plus the right one is not an exact match
        game.flag(Cell::new(0, 0)).unwrap();
        game.flag(Cell::new(1, 1)).unwrap();
        assert!(game.state().is_playing());

        // Removing the wrong flag leaves flags == mines
        game.unflag(Cell::new(0, 0)).unwrap();
        assert!(game.state().is_won());
        assert_eq!(game.unflag(Cell::new(1, 1)), Err(GameError::Finished));
    }

    #[test]
    fn test_flag_on_a_revealed_cell_is_refused() {
        let mut game = Game::from_board(board_2x2_with_mine());

        game.reveal(Cell::new(0, 0)).unwrap();
        assert_eq!(game.flag(Cell::new(0, 0)), Ok(false));
        assert!(game.flagged().is_empty());
    }

    #[test]
    fn test_play_to_end_flags_the_last_mine() {
        // One mine tucked in the corner; a clue-0 opening clears the rest
        let board = Board::new(Grid::new(3, 3), [Cell::new(2, 2)]).unwrap();
        let mut game = Game::from_board(board);
        game.reveal(Cell::new(0, 0)).unwrap();

        // Every move from here is proven safe, so the rng goes untouched
        let mut rng = BoardSeed::from_phrase("steady").to_rng();
        let state = game.play_to_end(&mut rng).unwrap();

        assert!(state.is_won());
        assert_eq!(game.flagged(), &[Cell::new(2, 2)].into_iter().collect());
        assert_eq!(game.clue_at(Cell::new(2, 2)), None);
    }

    #[test]
    fn test_display_shows_clues_flags_and_hidden_cells() {
        let mut game = Game::from_board(board_2x2_with_mine());

        game.reveal(Cell::new(0, 0)).unwrap();
        game.flag(Cell::new(0, 1)).unwrap();

        let expected = "-----\n\
                        |1|F|\n\
                        -----\n\
                        |.|.|\n\
                        -----";
        assert_eq!(game.to_string(), expected);
    }

    #[test]
    fn test_solver_errors_convert_into_game_errors() {
        let err = GameError::from(SolverError::Contradiction {
            cell: Cell::new(0, 0),
        });
        assert_eq!(
            err.to_string(),
            "deduction rejected the clue: (0, 0) was deduced to be both a mine and safe",
        );
    }
}
