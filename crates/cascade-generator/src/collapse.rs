//! The collapse driver.
//!
//! One run starts from a random coordinate and repeats a fixed step:
//! prune the cell against its settled peers, sample one surviving
//! candidate, settle the cell, and propagate the choice through its three
//! constraint groups, always moving on to the unsettled cell with the
//! fewest candidates, until every cell is settled. Each step settles one
//! cell, so a run is bounded by 81 steps.

use cascade_core::{Coord, Grid};
use rand::{Rng, RngExt as _};
use rand::seq::IteratorRandom as _;

/// The cell settled in the current step and the value chosen for it.
///
/// Lives for exactly one step, passed from sampling to propagation and
/// then dropped; no step state is kept between iterations.
#[derive(Debug, Clone, Copy)]
struct Settlement {
    coord: Coord,
    value: u8,
}

/// Errors raised by a collapse run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum CollapseError {
    /// Pruning removed every candidate of the cell about to be settled.
    #[display("pruning emptied the candidate set at {coord}")]
    Contradiction {
        /// The coordinate whose candidate set was emptied.
        coord: Coord,
    },
}

/// Scans the grid for the unsettled cell with the fewest candidates.
///
/// Returns the winning coordinate and whether the grid is terminal (all 81
/// cells settled). The scan runs in raster order and only accepts a cell
/// whose candidate count is above one and strictly below the best seen so
/// far, starting from nine. Ties therefore go to the first cell seen, and
/// a cell still holding all nine candidates is never selected. When the
/// grid is terminal the returned coordinate carries no meaning.
#[must_use]
pub fn select_lowest_entropy(grid: &Grid) -> (Coord, bool) {
    let mut best = Coord::new(0, 0);
    let mut smallest = 9;
    let mut settled = 0;
    for coord in Coord::ALL {
        let len = grid.candidates(coord).len();
        if len == 1 {
            settled += 1;
        } else if len > 1 && len < smallest {
            best = coord;
            smallest = len;
        }
    }
    (best, settled == 81)
}

/// Collapses `grid` in place until every cell is settled.
///
/// The starting coordinate is drawn uniformly from the grid; every later
/// step works on the cell chosen by [`select_lowest_entropy`]. Given the
/// same RNG state the run is fully reproducible.
///
/// # Errors
///
/// Returns [`CollapseError::Contradiction`] when pruning removes every
/// candidate of the cell about to be settled. The grid is left in its
/// partially collapsed state; whether to retry with a fresh grid is the
/// caller's decision.
pub fn collapse<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> Result<(), CollapseError> {
    let mut current = Coord::new(rng.random_range(0..9), rng.random_range(0..9));
    loop {
        let settlement = settle_one(grid, current, rng)?;
        grid.propagate(settlement.coord, settlement.value);

        let (next, terminal) = select_lowest_entropy(grid);
        if terminal {
            return Ok(());
        }
        current = next;
    }
}

/// Runs prune, sample, and settle for a single cell.
fn settle_one<R: Rng + ?Sized>(
    grid: &mut Grid,
    coord: Coord,
    rng: &mut R,
) -> Result<Settlement, CollapseError> {
    // Prune: values already settled among the peers cannot recur here.
    // Same guard as propagation, so a settled cell passes through intact.
    for value in grid.settled_peer_values(coord) {
        grid.eliminate(coord, value);
    }

    let value = grid
        .candidates(coord)
        .iter()
        .choose(rng)
        .ok_or(CollapseError::Contradiction { coord })?;

    grid.settle(coord, value);
    log::trace!("settled {coord} to {value}");
    Ok(Settlement { coord, value })
}
