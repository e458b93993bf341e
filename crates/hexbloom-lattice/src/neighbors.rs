//! Neighbor relation on the two-sublattice tiling.
//!
//! The relation is symmetric: if `b` is among `a.neighbors()` then `a` is
//! among `b.neighbors()`. Horizontal neighbors share a sublattice; the other
//! four cross to the opposite sublattice, whose row offset depends on which
//! side they start from.

use crate::Address;

/// Every cell has exactly six neighbors.
pub const NEIGHBOR_COUNT: usize = 6;

/// Check whether two addresses are adjacent.
pub fn are_neighbors(a: Address, b: Address) -> bool {
    a.neighbors().contains(&b)
}

/// Count how many of a cell's six neighbors satisfy `is_present`.
pub fn count_present_neighbors<F>(addr: Address, is_present: F) -> usize
where
    F: Fn(Address) -> bool,
{
    addr.neighbors()
        .iter()
        .filter(|&&n| is_present(n))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Sublattice;
    use proptest::prelude::*;

    fn sublattice() -> impl Strategy<Value = Sublattice> {
        prop_oneof![Just(Sublattice::Base), Just(Sublattice::Shifted)]
    }

    proptest! {
        #[test]
        fn neighbor_relation_symmetric(
            s in sublattice(),
            row in -10_000i64..10_000,
            column in -10_000i64..10_000,
        ) {
            let a = Address::new(s, row, column);
            for b in a.neighbors() {
                prop_assert!(are_neighbors(b, a), "{} -> {} is not mutual", a, b);
            }
        }

        #[test]
        fn two_neighbors_share_sublattice(
            s in sublattice(),
            row in -10_000i64..10_000,
            column in -10_000i64..10_000,
        ) {
            let a = Address::new(s, row, column);
            let same = count_present_neighbors(a, |n| n.sublattice == s);
            prop_assert_eq!(same, 2);
        }
    }

    #[test]
    fn symmetric_over_dense_window() {
        for s in [Sublattice::Base, Sublattice::Shifted] {
            for row in -6..=6 {
                for column in -6..=6 {
                    let a = Address::new(s, row, column);
                    for b in a.neighbors() {
                        assert!(are_neighbors(b, a), "{} -> {} is not mutual", a, b);
                    }
                }
            }
        }
    }

    #[test]
    fn not_neighbors_if_too_far() {
        let far = Address::new(Sublattice::Base, 0, 2);
        assert!(!are_neighbors(Address::ORIGIN, far));
        assert!(!are_neighbors(Address::ORIGIN, Address::ORIGIN));
    }

    #[test]
    fn count_neighbors_empty_and_full() {
        assert_eq!(count_present_neighbors(Address::ORIGIN, |_| false), 0);
        assert_eq!(count_present_neighbors(Address::ORIGIN, |_| true), NEIGHBOR_COUNT);
    }

    #[test]
    fn count_neighbors_partial() {
        // Only the row above the origin.
        let count = count_present_neighbors(Address::ORIGIN, |a| a.row < 0);
        assert_eq!(count, 2);
    }
}
