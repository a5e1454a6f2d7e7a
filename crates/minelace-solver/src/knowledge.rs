//! The knowledge base and its deduction fixed point.

use std::mem;

use minelace_core::{Cell, CellSet, Grid};

use crate::{Sentence, SolverError};

/// A knowledge base accumulating everything deduced about one board.
///
/// The knowledge base records the cells the player has revealed, the cells
/// whose status is fully resolved, and the open [`Sentence`]s relating the
/// rest. Each revealed clue enters through [`add_knowledge`], which builds
/// a statement about the cell's unresolved neighbors and then runs
/// deduction to a fixed point. A pass resolves every decisive statement
/// into per-cell facts and prunes statements with no cells left; a strict
/// subset splits its superset into the subset and their difference. Passes
/// repeat until one changes nothing.
///
/// Resolved cells never reappear in any statement, and a cell is never
/// both a mine and safe.
///
/// [`add_knowledge`]: Self::add_knowledge
///
/// # Examples
///
/// ```
/// use minelace_core::{Cell, Grid};
/// use minelace_solver::KnowledgeBase;
///
/// let mut kb = KnowledgeBase::new(Grid::new(3, 3));
///
/// // Revealing the center with clue 0 proves all 8 neighbors safe
/// kb.add_knowledge(Cell::new(1, 1), 0)?;
/// assert_eq!(kb.safes().len(), 9);
/// assert!(kb.mines().is_empty());
/// assert!(kb.sentences().is_empty());
/// # Ok::<(), minelace_solver::SolverError>(())
/// ```
///
/// Combining statements deduces facts no single clue reveals:
///
/// ```
/// use minelace_core::{Cell, Grid};
/// use minelace_solver::{KnowledgeBase, Sentence};
///
/// let mut kb = KnowledgeBase::new(Grid::new(1, 3));
/// let (a, b, c) = (Cell::new(0, 0), Cell::new(0, 1), Cell::new(0, 2));
///
/// kb.add_sentence(Sentence::new([a, b, c], 1))?;
/// kb.add_sentence(Sentence::new([a, b], 1))?;
///
/// // {a,b,c}=1 minus {a,b}=1 leaves {c}=0
/// assert!(kb.is_known_safe(c));
/// # Ok::<(), minelace_solver::SolverError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnowledgeBase {
    grid: Grid,
    moves_made: CellSet,
    mines: CellSet,
    safes: CellSet,
    knowledge: Vec<Sentence>,
}

impl KnowledgeBase {
    /// Creates an empty knowledge base for a board of the given dimensions.
    #[must_use]
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            moves_made: CellSet::new(),
            mines: CellSet::new(),
            safes: CellSet::new(),
            knowledge: Vec::new(),
        }
    }

    /// Returns the board dimensions this knowledge base reasons over.
    #[must_use]
    pub const fn grid(&self) -> Grid {
        self.grid
    }

    /// Returns the cells the player has revealed so far.
    #[must_use]
    pub const fn moves_made(&self) -> &CellSet {
        &self.moves_made
    }

    /// Returns the cells resolved as mines.
    #[must_use]
    pub const fn mines(&self) -> &CellSet {
        &self.mines
    }

    /// Returns the cells resolved as safe.
    #[must_use]
    pub const fn safes(&self) -> &CellSet {
        &self.safes
    }

    /// Returns the open statements about not-yet-resolved cells.
    #[must_use]
    pub fn sentences(&self) -> &[Sentence] {
        &self.knowledge
    }

    /// Returns true if `cell` is resolved as a mine.
    #[must_use]
    pub fn is_known_mine(&self, cell: Cell) -> bool {
        self.mines.contains(&cell)
    }

    /// Returns true if `cell` is resolved as safe.
    #[must_use]
    pub fn is_known_safe(&self, cell: Cell) -> bool {
        self.safes.contains(&cell)
    }

    /// Records a revealed cell and its clue, then deduces everything the
    /// combined knowledge now implies.
    ///
    /// The cell is recorded as played and safe. Its clue becomes a
    /// statement about the cell's unresolved neighbors: neighbors already
    /// known to be mines are left out with their contribution subtracted
    /// from the count, and neighbors already resolved safe or already
    /// played are left out without count adjustment. The deduction fixed
    /// point then runs until no further fact can be derived, so a single
    /// reveal may resolve cells far beyond the revealed neighborhood.
    ///
    /// # Errors
    ///
    /// - [`SolverError::Contradiction`] if `cell` was already resolved as a
    ///   mine, or if deduction resolves some cell both ways.
    /// - [`SolverError::ImpossibleClue`] if `clue` cannot be satisfied by
    ///   the cell's neighborhood.
    /// - [`SolverError::ConflictingSentences`] if the clue's statement
    ///   cannot hold together with an earlier one.
    ///
    /// None of these occurs when clues come from a real board and moves
    /// avoid known mines.
    ///
    /// # Examples
    ///
    /// ```
    /// use minelace_core::{Cell, Grid};
    /// use minelace_solver::KnowledgeBase;
    ///
    /// let mut kb = KnowledgeBase::new(Grid::new(2, 2));
    ///
    /// // A corner clue covering every neighbor resolves them all as mines
    /// kb.add_knowledge(Cell::new(0, 0), 3)?;
    /// assert!(kb.is_known_mine(Cell::new(0, 1)));
    /// assert!(kb.is_known_mine(Cell::new(1, 0)));
    /// assert!(kb.is_known_mine(Cell::new(1, 1)));
    /// # Ok::<(), minelace_solver::SolverError>(())
    /// ```
    pub fn add_knowledge(&mut self, cell: Cell, clue: usize) -> Result<(), SolverError> {
        debug_assert!(self.grid.contains(cell), "revealed out-of-bounds {cell}");
        self.check_consistency()?;

        if self.mines.contains(&cell) {
            // Revealing a cell the engine knows is a mine contradicts the
            // clue's implicit claim that the cell is safe.
            return Err(SolverError::Contradiction { cell });
        }
        self.moves_made.insert(cell);
        self.mark_safe(cell);

        let sentence = self.neighbor_sentence(cell, clue)?;
        self.knowledge.push(sentence);
        self.deduce()?;

        self.check_consistency()
    }

    /// Inserts an externally formed statement and re-runs deduction.
    ///
    /// The statement is first normalized against resolved cells, exactly
    /// like a clue's neighborhood: known mines are dropped with their
    /// contribution subtracted, known safes dropped unchanged. Useful for
    /// out-of-band knowledge such as a remaining-mine-total statement over
    /// all unresolved cells.
    ///
    /// # Errors
    ///
    /// - [`SolverError::UnsatisfiableSentence`] if the statement requires
    ///   more mines than its unresolved cells can hold.
    /// - [`SolverError::ConflictingSentences`] if the statement cannot hold
    ///   together with an earlier one.
    /// - [`SolverError::Contradiction`] if deduction then resolves some
    ///   cell both ways.
    pub fn add_sentence(&mut self, sentence: Sentence) -> Result<(), SolverError> {
        self.check_consistency()?;

        let mut remaining = sentence.count();
        let mut unresolved = CellSet::new();
        for &cell in sentence.cells() {
            if self.mines.contains(&cell) {
                remaining = remaining
                    .checked_sub(1)
                    .ok_or_else(|| SolverError::UnsatisfiableSentence {
                        sentence: sentence.clone(),
                    })?;
            } else if !self.safes.contains(&cell) {
                unresolved.insert(cell);
            }
        }
        if remaining > unresolved.len() {
            return Err(SolverError::UnsatisfiableSentence { sentence });
        }

        self.knowledge.push(Sentence::new(unresolved, remaining));
        self.deduce()?;

        self.check_consistency()
    }

    /// Records that `cell` is confirmed to be a mine and propagates the
    /// fact into every statement. Returns whether anything changed.
    pub fn mark_mine(&mut self, cell: Cell) -> bool {
        debug_assert!(!self.safes.contains(&cell), "{cell} is already resolved safe");
        let mut changed = self.mines.insert(cell);
        for sentence in &mut self.knowledge {
            changed |= sentence.mark_mine(cell);
        }
        changed
    }

    /// Records that `cell` is confirmed to be safe and propagates the fact
    /// into every statement. Returns whether anything changed.
    pub fn mark_safe(&mut self, cell: Cell) -> bool {
        debug_assert!(!self.mines.contains(&cell), "{cell} is already resolved as a mine");
        let mut changed = self.safes.insert(cell);
        for sentence in &mut self.knowledge {
            changed |= sentence.mark_safe(cell);
        }
        changed
    }

    /// Verifies the knowledge base invariants.
    ///
    /// # Errors
    ///
    /// - [`SolverError::Contradiction`] if some cell is resolved both as a
    ///   mine and as safe.
    /// - [`SolverError::UnsatisfiableSentence`] if some statement requires
    ///   more mines than it has cells.
    pub fn check_consistency(&self) -> Result<(), SolverError> {
        if let Some(&cell) = self.mines.intersection(&self.safes).next() {
            return Err(SolverError::Contradiction { cell });
        }
        for sentence in &self.knowledge {
            if sentence.count() > sentence.cells().len() {
                return Err(SolverError::UnsatisfiableSentence {
                    sentence: sentence.clone(),
                });
            }
            debug_assert!(
                sentence
                    .cells()
                    .iter()
                    .all(|cell| !self.mines.contains(cell) && !self.safes.contains(cell)),
                "{sentence} ranges over a resolved cell"
            );
        }
        Ok(())
    }

    /// Builds the statement a clue makes about the cell's unresolved
    /// neighbors.
    fn neighbor_sentence(&self, cell: Cell, clue: usize) -> Result<Sentence, SolverError> {
        let mut remaining = clue;
        let mut cells = CellSet::new();
        for neighbor in self.grid.neighbors(cell) {
            if self.mines.contains(&neighbor) {
                remaining = remaining
                    .checked_sub(1)
                    .ok_or(SolverError::ImpossibleClue { cell, clue })?;
            } else if !self.safes.contains(&neighbor) && !self.moves_made.contains(&neighbor) {
                cells.insert(neighbor);
            }
        }
        if remaining > cells.len() {
            return Err(SolverError::ImpossibleClue { cell, clue });
        }
        Ok(Sentence::new(cells, remaining))
    }

    /// Runs deduction passes until a full pass changes nothing.
    fn deduce(&mut self) -> Result<(), SolverError> {
        while self.deduce_pass()? {}
        Ok(())
    }

    /// Runs one resolve / prune / subsume pass.
    ///
    /// Candidate changes are collected into side buffers during read-only
    /// scans and applied afterwards, so no collection is mutated while it
    /// is being iterated.
    fn deduce_pass(&mut self) -> Result<bool, SolverError> {
        let mut changed = false;

        // Resolve: decisive statements fix the status of all their cells.
        let mut found_mines = CellSet::new();
        let mut found_safes = CellSet::new();
        for sentence in &self.knowledge {
            if let Some(cells) = sentence.known_mines() {
                found_mines.extend(cells.iter().copied());
            }
            if let Some(cells) = sentence.known_safes() {
                found_safes.extend(cells.iter().copied());
            }
        }
        for &cell in &found_mines {
            if self.safes.contains(&cell) || self.sentence_proves_safe(cell) {
                return Err(SolverError::Contradiction { cell });
            }
            changed |= self.mark_mine(cell);
        }
        for &cell in &found_safes {
            if self.mines.contains(&cell) || self.sentence_proves_mine(cell) {
                return Err(SolverError::Contradiction { cell });
            }
            changed |= self.mark_safe(cell);
        }

        // Prune: emptied statements carry no information.
        let before = self.knowledge.len();
        self.knowledge.retain(|sentence| !sentence.is_empty());
        changed |= self.knowledge.len() != before;

        // Subsume: a strict subset splits its superset into the subset and
        // their difference, keeping the knowledge base minimal.
        let mut derived: Vec<Sentence> = Vec::new();
        let mut subsumed = vec![false; self.knowledge.len()];
        for (i, subset) in self.knowledge.iter().enumerate() {
            for (j, superset) in self.knowledge.iter().enumerate() {
                if i == j || !subset.is_strict_subset_of(superset) {
                    continue;
                }
                // A superset never admits fewer mines than its subset
                if subset.count() > superset.count() {
                    return Err(SolverError::ConflictingSentences {
                        subset: subset.clone(),
                        superset: superset.clone(),
                    });
                }
                subsumed[j] = true;
                let difference = superset.difference(subset);
                if !self.knowledge.contains(&difference) && !derived.contains(&difference) {
                    derived.push(difference);
                }
            }
        }
        if subsumed.contains(&true) || !derived.is_empty() {
            changed = true;
            let knowledge = mem::take(&mut self.knowledge);
            self.knowledge = knowledge
                .into_iter()
                .zip(subsumed)
                .filter_map(|(sentence, subsumed)| (!subsumed).then_some(sentence))
                .chain(derived)
                .collect();
        }

        Ok(changed)
    }

    /// Returns true if some open statement by itself proves `cell` safe.
    fn sentence_proves_safe(&self, cell: Cell) -> bool {
        self.knowledge
            .iter()
            .any(|sentence| sentence.known_safes().is_some_and(|cells| cells.contains(&cell)))
    }

    /// Returns true if some open statement by itself proves `cell` a mine.
    fn sentence_proves_mine(&self, cell: Cell) -> bool {
        self.knowledge
            .iter()
            .any(|sentence| sentence.known_mines().is_some_and(|cells| cells.contains(&cell)))
    }
}
