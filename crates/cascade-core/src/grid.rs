//! The 9x9 candidate grid and constraint propagation.

use std::fmt::{self, Display};
use std::ops::Index;

use crate::{candidate_set::CandidateSet, coord::Coord, groups};

/// A 9x9 grid of candidate sets.
///
/// Cells start with all nine candidates and shrink in place as values are
/// settled and propagated. The grid itself carries no notion of the cell
/// currently being worked on; drivers hand coordinates in per call.
///
/// # Examples
///
/// ```
/// use cascade_core::{Coord, Grid};
///
/// let mut grid = Grid::new();
/// assert_eq!(grid.candidates(Coord::new(0, 0)).len(), 9);
///
/// grid.settle(Coord::new(0, 0), 5);
/// grid.propagate(Coord::new(0, 0), 5);
///
/// // 5 is gone from the rest of subgrid 0...
/// assert!(!grid.candidates(Coord::new(0, 1)).contains(5));
/// // ...while the settled cell keeps it.
/// assert_eq!(grid.candidates(Coord::new(0, 0)).as_single(), Some(5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [CandidateSet; 81],
}

impl Grid {
    /// Creates a grid with every cell holding all nine candidates.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [CandidateSet::FULL; 81],
        }
    }

    /// Returns the candidate set of the cell at `coord`.
    #[must_use]
    pub fn candidates(&self, coord: Coord) -> CandidateSet {
        self.cells[coord.index()]
    }

    /// Replaces the cell's candidates with the single `value`.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range 1-9.
    pub fn settle(&mut self, coord: Coord, value: u8) {
        self.cells[coord.index()] = CandidateSet::singleton(value);
    }

    /// Removes `value` from the cell's candidates, unless the cell is
    /// already settled. A settled cell is never shrunk.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range 1-9.
    pub fn eliminate(&mut self, coord: Coord, value: u8) {
        let cell = &mut self.cells[coord.index()];
        if cell.len() > 1 {
            cell.remove(value);
        }
    }

    /// Removes `value` from every peer of `coord` across its subgrid,
    /// derived-row, and derived-column groups.
    ///
    /// Settled peers keep their value. A cell driven down to its last
    /// candidate is not flagged here; drivers check for emptied sets
    /// before sampling.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range 1-9.
    pub fn propagate(&mut self, coord: Coord, value: u8) {
        for group in groups::groups_of(coord) {
            for &peer in group {
                if peer != coord {
                    self.eliminate(peer, value);
                }
            }
        }
    }

    /// Returns the union of the values of settled peers of `coord` across
    /// all three constraint groups.
    #[must_use]
    pub fn settled_peer_values(&self, coord: Coord) -> CandidateSet {
        let mut values = CandidateSet::EMPTY;
        for group in groups::groups_of(coord) {
            for &peer in group {
                if peer == coord {
                    continue;
                }
                if let Some(value) = self.cells[peer.index()].as_single() {
                    values.insert(value);
                }
            }
        }
        values
    }

    /// Returns how many cells are settled (exactly one candidate).
    #[must_use]
    pub fn settled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_settled()).count()
    }

    /// Returns `true` once all 81 cells are settled.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_settled())
    }

    /// Reads the 81 settled values in raster order.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Unsettled`] naming the first cell in raster
    /// order that still holds more or fewer than one candidate; no partial
    /// sequence is ever produced.
    pub fn flatten(&self) -> Result<TokenSequence, GridError> {
        let mut values = [0u8; 81];
        for coord in Coord::ALL {
            values[coord.index()] = self.cells[coord.index()]
                .as_single()
                .ok_or(GridError::Unsettled { coord })?;
        }
        Ok(TokenSequence { values })
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Coord> for Grid {
    type Output = CandidateSet;

    fn index(&self, coord: Coord) -> &CandidateSet {
        &self.cells[coord.index()]
    }
}

/// The 81 settled values of a fully collapsed grid, in raster order.
///
/// This is the only artifact downstream decision drivers consume: one
/// digit per decision, read left to right.
///
/// # Examples
///
/// ```
/// use cascade_core::{Coord, Grid};
///
/// let mut grid = Grid::new();
/// for (i, coord) in Coord::ALL.into_iter().enumerate() {
///     grid.settle(coord, (i % 9) as u8 + 1);
/// }
///
/// let sequence = grid.flatten()?;
/// assert_eq!(sequence.as_slice().len(), 81);
/// assert!(sequence.to_string().starts_with("123456789"));
/// # Ok::<(), cascade_core::GridError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenSequence {
    values: [u8; 81],
}

impl TokenSequence {
    /// Returns the values as a slice of 81 digits in 1-9.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.values
    }

    /// Returns an iterator over the 81 values.
    pub fn iter(&self) -> impl Iterator<Item = u8> {
        self.values.into_iter()
    }
}

impl Display for TokenSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self.values {
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

impl IntoIterator for &TokenSequence {
    type Item = u8;
    type IntoIter = std::array::IntoIter<u8, 81>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

/// Errors produced by grid inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridError {
    /// A cell does not hold exactly one candidate.
    #[display("cell {coord} is not settled")]
    Unsettled {
        /// The first offending coordinate in raster order.
        coord: Coord,
    },
}
