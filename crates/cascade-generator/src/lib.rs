//! Randomized collapse of candidate grids into digit sequences.
//!
//! This crate drives the model in `cascade-core`: it picks the cell to
//! settle next (fewest candidates first), samples a value for it, and
//! propagates the choice until the grid is fully settled, then reads the
//! 81 digits off in raster order. Downstream code treats those digits as
//! a stream of decision tokens; how a digit maps to an action (for
//! instance buy below some threshold, sell above it) is entirely the
//! caller's business.
//!
//! Runs are reproducible: a [`SequenceSeed`] pins the whole run, and the
//! same seed always yields the same sequence.
//!
//! # Examples
//!
//! ```
//! use cascade_generator::SequenceGenerator;
//!
//! let generated = SequenceGenerator::new().generate();
//! println!("{}", generated.seed);
//! assert_eq!(generated.sequence.as_slice().len(), 81);
//! ```
//!
//! Lower-level control over the grid and RNG:
//!
//! ```
//! use cascade_core::Grid;
//! use cascade_generator::collapse;
//! use rand::SeedableRng as _;
//! use rand_pcg::Pcg64;
//!
//! let mut grid = Grid::new();
//! let mut rng = Pcg64::from_seed([42; 32]);
//! collapse(&mut grid, &mut rng)?;
//! let sequence = grid.flatten()?;
//! assert_eq!(sequence.to_string().len(), 81);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod collapse;
pub mod generator;
pub mod seed;

pub use self::{
    collapse::{CollapseError, collapse, select_lowest_entropy},
    generator::{GeneratedSequence, SequenceGenerator},
    seed::{ParseSeedError, SequenceSeed},
};
