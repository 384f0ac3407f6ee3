//! Constraint-group membership.
//!
//! Every cell belongs to three 9-cell groups whose settled values must be
//! pairwise distinct: its subgrid, a derived row, and a derived column.
//! The derived groups are band cross-products over the (group, slot) axes,
//! not geometric rows and columns of a reassembled board; together with the
//! subgrids they form three overlapping partitions of the grid. Membership
//! is precomputed once into a `const` table and looked up from there.

use crate::coord::Coord;

/// The three kinds of constraint groups overlapping each cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKind {
    /// The nine slots sharing the cell's group index.
    Subgrid,
    /// The cross product of the row bands of the cell's group and slot.
    DerivedRow,
    /// The cross product of the column bands of the cell's group and slot.
    DerivedColumn,
}

impl GroupKind {
    /// All group kinds, in resolver order.
    pub const ALL: [Self; 3] = [Self::Subgrid, Self::DerivedRow, Self::DerivedColumn];
}

/// Returns the three indices sharing `n`'s third: {0,1,2}, {3,4,5}, or {6,7,8}.
///
/// # Panics
///
/// Panics if `n` is not in the range 0-8.
#[must_use]
pub const fn row_band(n: u8) -> [u8; 3] {
    assert!(n < 9);
    let base = (n / 3) * 3;
    [base, base + 1, base + 2]
}

/// Returns the three indices sharing `n`'s residue class mod 3: {0,3,6}, {1,4,7}, or {2,5,8}.
///
/// # Panics
///
/// Panics if `n` is not in the range 0-8.
#[must_use]
pub const fn col_band(n: u8) -> [u8; 3] {
    assert!(n < 9);
    let residue = n % 3;
    [residue, residue + 3, residue + 6]
}

/// Group membership for every cell, indexed by raster position.
///
/// Entry order per cell follows [`GroupKind::ALL`]. Each group contains the
/// cell itself.
const GROUP_TABLE: [[[Coord; 9]; 3]; 81] = {
    let mut table = [[[Coord::new(0, 0); 9]; 3]; 81];
    let mut g = 0u8;
    while g < 9 {
        let mut s = 0u8;
        while s < 9 {
            let i = (g * 9 + s) as usize;

            let mut k = 0u8;
            while k < 9 {
                table[i][0][k as usize] = Coord::new(g, k);
                k += 1;
            }

            let group_rows = row_band(g);
            let slot_rows = row_band(s);
            let group_cols = col_band(g);
            let slot_cols = col_band(s);
            let mut a = 0;
            while a < 3 {
                let mut b = 0;
                while b < 3 {
                    table[i][1][a * 3 + b] = Coord::new(group_rows[a], slot_rows[b]);
                    table[i][2][a * 3 + b] = Coord::new(group_cols[a], slot_cols[b]);
                    b += 1;
                }
                a += 1;
            }

            s += 1;
        }
        g += 1;
    }
    table
};

/// Returns the three constraint groups containing `coord`, in
/// [`GroupKind::ALL`] order.
#[must_use]
pub fn groups_of(coord: Coord) -> &'static [[Coord; 9]; 3] {
    &GROUP_TABLE[coord.index()]
}

/// Returns the single group of `kind` containing `coord`.
#[must_use]
pub fn group_of(coord: Coord, kind: GroupKind) -> &'static [Coord; 9] {
    let groups = groups_of(coord);
    match kind {
        GroupKind::Subgrid => &groups[0],
        GroupKind::DerivedRow => &groups[1],
        GroupKind::DerivedColumn => &groups[2],
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_bands_partition_indices() {
        for n in 0..9 {
            assert!(row_band(n).contains(&n));
            assert!(col_band(n).contains(&n));
        }
        assert_eq!(row_band(0), [0, 1, 2]);
        assert_eq!(row_band(4), [3, 4, 5]);
        assert_eq!(row_band(8), [6, 7, 8]);
        assert_eq!(col_band(0), [0, 3, 6]);
        assert_eq!(col_band(4), [1, 4, 7]);
        assert_eq!(col_band(8), [2, 5, 8]);
    }

    #[test]
    fn test_subgrid_group() {
        let group = group_of(Coord::new(3, 5), GroupKind::Subgrid);
        let expected: Vec<_> = (0..9).map(|s| Coord::new(3, s)).collect();
        assert_eq!(group.to_vec(), expected);
    }

    #[test]
    fn test_derived_row_group() {
        // (4, 7): group band {3,4,5}, slot band {6,7,8}.
        let group = group_of(Coord::new(4, 7), GroupKind::DerivedRow);
        let members: HashSet<_> = group.iter().copied().collect();
        let expected: HashSet<_> = [3, 4, 5]
            .into_iter()
            .flat_map(|g| [6, 7, 8].into_iter().map(move |s| Coord::new(g, s)))
            .collect();
        assert_eq!(members, expected);
    }

    #[test]
    fn test_derived_column_group() {
        // (4, 7): group residues {1,4,7}, slot residues {1,4,7}.
        let group = group_of(Coord::new(4, 7), GroupKind::DerivedColumn);
        let members: HashSet<_> = group.iter().copied().collect();
        let expected: HashSet<_> = [1, 4, 7]
            .into_iter()
            .flat_map(|g| [1, 4, 7].into_iter().map(move |s| Coord::new(g, s)))
            .collect();
        assert_eq!(members, expected);
    }

    #[test]
    fn test_groups_contain_origin_and_nine_distinct_members() {
        for coord in Coord::ALL {
            for group in groups_of(coord) {
                let members: HashSet<_> = group.iter().copied().collect();
                assert_eq!(members.len(), 9);
                assert!(members.contains(&coord));
            }
        }
    }

    #[test]
    fn test_peer_relation_is_symmetric() {
        for a in Coord::ALL {
            for (kind, group) in GroupKind::ALL.into_iter().zip(groups_of(a)) {
                for &b in group {
                    assert!(
                        group_of(b, kind).contains(&a),
                        "{a} in {kind:?} group of {b}, but not vice versa"
                    );
                }
            }
        }
    }

    #[test]
    fn test_each_kind_partitions_the_grid() {
        for kind in GroupKind::ALL {
            let mut seen: HashSet<Coord> = HashSet::new();
            let mut groups: HashSet<Vec<Coord>> = HashSet::new();
            for coord in Coord::ALL {
                let mut group = group_of(coord, kind).to_vec();
                group.sort_unstable();
                groups.insert(group);
                seen.insert(coord);
            }
            assert_eq!(seen.len(), 81);
            assert_eq!(groups.len(), 9, "{kind:?} must split the grid 9 ways");
        }
    }
}
