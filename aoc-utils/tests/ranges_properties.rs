//! Property-based tests for `Range` and `Ranges`
//!
//! **Feature: ranges**

use std::collections::BTreeSet;

use aoc_utils::{Overlap, Range, Ranges};
use proptest::prelude::*;

fn small_range() -> impl Strategy<Value = Range> {
    (-50i64..50, 0i64..20).prop_map(|(from, len)| Range::new(from, from + len))
}

/// Every integer covered by the ranges, computed the slow way.
fn expand<'a>(ranges: impl IntoIterator<Item = &'a Range>) -> BTreeSet<i64> {
    ranges
        .into_iter()
        .flat_map(|range| range.start()..=range.end())
        .collect()
}

fn assert_disjoint_and_sorted(ranges: &Ranges) -> Result<(), TestCaseError> {
    let members: Vec<Range> = ranges.iter().copied().collect();
    for pair in members.windows(2) {
        prop_assert!(pair[0].end() < pair[1].start(), "{} overlaps {}", pair[0], pair[1]);
    }
    let expected_bounds = members
        .first()
        .zip(members.last())
        .map(|(first, last)| Range::new(first.start(), last.end()));
    prop_assert_eq!(ranges.bounds(), expected_bounds);
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// **Property 1: Adding keeps members disjoint**
    /// *For any* sequence of ranges, the set covers exactly their union, with
    /// sorted non-overlapping members and matching bounds.
    #[test]
    fn prop_add_covers_union(inputs in prop::collection::vec(small_range(), 0..12)) {
        let ranges: Ranges = inputs.iter().copied().collect();

        assert_disjoint_and_sorted(&ranges)?;
        prop_assert_eq!(expand(&ranges), expand(&inputs));
        prop_assert_eq!(ranges.covered(), expand(&inputs).len() as u128);
    }

    /// **Property 2: Subtraction removes exactly the subtracted values**
    #[test]
    fn prop_subtract_is_set_difference(
        inputs in prop::collection::vec(small_range(), 0..8),
        removed in prop::collection::vec(small_range(), 0..4),
    ) {
        let mut ranges: Ranges = inputs.iter().copied().collect();
        let removed_set: Ranges = removed.iter().copied().collect();
        ranges.subtract_ranges(&removed_set);

        assert_disjoint_and_sorted(&ranges)?;
        let expected: BTreeSet<i64> = expand(&inputs).difference(&expand(&removed)).copied().collect();
        prop_assert_eq!(expand(&ranges), expected);
    }

    /// **Property 3: Adding twice is idempotent**
    #[test]
    fn prop_add_idempotent(inputs in prop::collection::vec(small_range(), 0..8), extra in small_range()) {
        let mut ranges: Ranges = inputs.into_iter().collect();
        ranges.add_range(extra);
        let once = ranges.clone();
        ranges.add_range(extra);
        prop_assert_eq!(ranges, once);
    }

    /// **Property 4: Overlap classification is consistent with its mirror**
    /// *For any* two ranges, `None` and `PartialBoth`/`All` pair up, and the
    /// one-sided kinds swap sides.
    #[test]
    fn prop_overlap_mirror(a in small_range(), b in small_range()) {
        let forward = a.overlap(&b);
        let backward = b.overlap(&a);
        match forward {
            Overlap::None => prop_assert_eq!(backward, Overlap::None),
            Overlap::PartialBoth => prop_assert_eq!(backward, Overlap::All),
            Overlap::PartialLeft => prop_assert!(matches!(backward, Overlap::PartialRight | Overlap::All)),
            Overlap::PartialRight => prop_assert!(matches!(backward, Overlap::PartialLeft | Overlap::All)),
            Overlap::All => prop_assert!(backward != Overlap::None),
        }
    }

    /// **Property 5: Range subtraction matches value-level difference**
    #[test]
    fn prop_range_subtract(a in small_range(), b in small_range()) {
        match a.subtract(&b) {
            Ok(pieces) => {
                prop_assert!(a.overlap(&b) != Overlap::None);
                let expected: BTreeSet<i64> = expand([&a]).difference(&expand([&b])).copied().collect();
                prop_assert_eq!(expand(&pieces), expected);
            }
            Err(_) => prop_assert_eq!(a.overlap(&b), Overlap::None),
        }
    }
}
