//! End-to-end properties of collapse runs.

use std::str::FromStr as _;

use cascade_core::{Coord, Grid, GroupKind, groups};
use cascade_generator::{SequenceGenerator, SequenceSeed, collapse};
use proptest::prelude::*;
use rand::SeedableRng as _;
use rand_pcg::Pcg64;

fn collapsed(seed: [u8; 32]) -> Grid {
    let mut grid = Grid::new();
    let mut rng = Pcg64::from_seed(seed);
    collapse(&mut grid, &mut rng).expect("collapse failed");
    grid
}

/// Representative coordinates covering all nine groups of `kind` exactly once.
fn partition_representatives(kind: GroupKind) -> Vec<Coord> {
    let axis: &[u8] = match kind {
        GroupKind::Subgrid => &[0, 1, 2, 3, 4, 5, 6, 7, 8],
        // One coordinate per (group band, slot band) combination.
        GroupKind::DerivedRow => &[0, 3, 6],
        GroupKind::DerivedColumn => &[0, 1, 2],
    };
    match kind {
        GroupKind::Subgrid => axis.iter().map(|&g| Coord::new(g, 0)).collect(),
        GroupKind::DerivedRow | GroupKind::DerivedColumn => axis
            .iter()
            .flat_map(|&g| axis.iter().map(move |&s| Coord::new(g, s)))
            .collect(),
    }
}

#[test]
fn every_cell_ends_settled_in_range() {
    let grid = collapsed([1; 32]);
    for coord in Coord::ALL {
        let value = grid.candidates(coord).as_single().expect("unsettled cell");
        assert!((1..=9).contains(&value));
    }
}

#[test]
fn every_group_of_every_kind_holds_each_value_once() {
    let grid = collapsed([2; 32]);
    for kind in GroupKind::ALL {
        let representatives = partition_representatives(kind);
        assert_eq!(representatives.len(), 9);
        for origin in representatives {
            let mut values: Vec<_> = groups::group_of(origin, kind)
                .iter()
                .map(|&coord| grid.candidates(coord).as_single().unwrap())
                .collect();
            values.sort_unstable();
            assert_eq!(values, (1..=9).collect::<Vec<_>>(), "{kind:?} at {origin}");
        }
    }
}

#[test]
fn flatten_after_collapse_matches_subgrid_zero() {
    let grid = collapsed([3; 32]);
    let sequence = grid.flatten().expect("grid not complete");

    assert_eq!(sequence.as_slice().len(), 81);
    let mut first_subgrid: Vec<_> = sequence.as_slice()[..9].to_vec();
    first_subgrid.sort_unstable();
    assert_eq!(first_subgrid, (1..=9).collect::<Vec<_>>());
}

#[test]
fn generator_round_trips_its_seed_display() {
    let generator = SequenceGenerator::new();
    let generated = generator.generate();

    let reparsed = SequenceSeed::from_str(&generated.seed.to_string()).unwrap();
    let replayed = generator.generate_with_seed(reparsed);
    assert_eq!(replayed.sequence, generated.sequence);
}

#[test]
fn fixed_seed_replays_bit_identically() {
    let seed = SequenceSeed::from_str(
        "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
    )
    .unwrap();
    let generator = SequenceGenerator::new();

    let baseline = generator.generate_with_seed(seed).sequence.to_string();
    for _ in 0..3 {
        assert_eq!(generator.generate_with_seed(seed).sequence.to_string(), baseline);
    }
}

proptest! {
    #[test]
    fn arbitrary_seeds_produce_valid_sequences(bytes in any::<[u8; 32]>()) {
        let generated =
            SequenceGenerator::new().generate_with_seed(SequenceSeed::from_bytes(bytes));
        let values = generated.sequence.as_slice();

        prop_assert_eq!(values.len(), 81);
        prop_assert!(values.iter().all(|value| (1..=9).contains(value)));

        // Each subgrid is a permutation of 1..=9.
        for subgrid in values.chunks_exact(9) {
            let mut sorted = subgrid.to_vec();
            sorted.sort_unstable();
            prop_assert_eq!(sorted, (1..=9).collect::<Vec<_>>());
        }
    }
}
