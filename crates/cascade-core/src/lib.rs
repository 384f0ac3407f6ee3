//! Core data structures for the cascade collapse engine.
//!
//! This crate models a 9x9 grid whose cells each hold a set of candidate
//! values 1-9, together with the three overlapping constraint groupings
//! (subgrid, derived row, derived column) that force settled values apart,
//! and the propagation primitives that shrink candidate sets as cells are
//! settled. It is a pure value model: no randomness, no I/O, no
//! cross-run state. Drivers that choose which cell to settle next, and to
//! which value, live in `cascade-generator`.
//!
//! # Overview
//!
//! - [`candidate_set`]: per-cell candidate sets, bitset-backed
//! - [`coord`]: validated cell addresses (subgrid index, slot index)
//! - [`groups`]: precomputed constraint-group membership tables
//! - [`grid`]: the grid itself, propagation, and sequence extraction
//!
//! # Examples
//!
//! ```
//! use cascade_core::{Coord, Grid};
//!
//! let mut grid = Grid::new();
//! grid.settle(Coord::new(0, 0), 5);
//! grid.propagate(Coord::new(0, 0), 5);
//!
//! assert!(!grid.candidates(Coord::new(0, 1)).contains(5));
//! assert!(grid.flatten().is_err()); // 80 cells still unsettled
//! ```

pub mod candidate_set;
pub mod coord;
pub mod grid;
pub mod groups;

pub use self::{
    candidate_set::CandidateSet,
    coord::Coord,
    grid::{Grid, GridError, TokenSequence},
    groups::GroupKind,
};
