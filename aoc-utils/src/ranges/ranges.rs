//! A set of disjoint ranges with merge-on-insert and subtraction

use std::collections::BTreeSet;
use std::collections::btree_set;
use std::fmt;

use itertools::Itertools;
use tracing::trace;

use super::range::{Overlap, Range};

/// A set of non-overlapping [`Range`]s.
///
/// Adding a range merges it with every member it overlaps, so the set always
/// holds the fewest ranges covering the same values. Members iterate in
/// ascending order. The overall span is cached and kept current on every
/// mutation.
///
/// # Example
///
/// ```
/// use aoc_utils::{Range, Ranges};
///
/// let mut ranges: Ranges = [Range::new(1, 4), Range::new(3, 7), Range::new(10, 11)]
///     .into_iter()
///     .collect();
/// assert_eq!(ranges.to_string(), "1-7, 10-11");
///
/// ranges.subtract_range(Range::new(3, 4));
/// assert_eq!(ranges.to_string(), "1-2, 5-7, 10-11");
/// assert_eq!(ranges.bounds(), Some(Range::new(1, 11)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ranges {
    members: BTreeSet<Range>,
    bounds: Option<Range>,
}

impl Ranges {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lowest value covered by any member.
    pub fn start(&self) -> Option<i64> {
        self.bounds.map(|bounds| bounds.start())
    }

    /// Highest value covered by any member.
    pub fn end(&self) -> Option<i64> {
        self.bounds.map(|bounds| bounds.end())
    }

    /// The span from the lowest to the highest covered value.
    pub fn bounds(&self) -> Option<Range> {
        self.bounds
    }

    /// Number of member ranges.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Members in ascending order.
    pub fn iter(&self) -> btree_set::Iter<'_, Range> {
        self.members.iter()
    }

    pub fn contains(&self, value: i64) -> bool {
        self.members
            .range(..=Range::new(value, i64::MAX))
            .next_back()
            .is_some_and(|member| member.contains(value))
    }

    /// Total count of integers covered by the set.
    pub fn covered(&self) -> u128 {
        self.members.iter().map(Range::size).sum()
    }

    /// Inserts `range`, merging it with every member it overlaps.
    pub fn add_range(&mut self, range: Range) {
        let mut merged = range;
        loop {
            let overlapping: Vec<Range> = self.overlapping(&merged).map(|(member, _)| member).collect();
            if overlapping.is_empty() {
                break;
            }
            for member in overlapping {
                self.members.remove(&member);
                merged = merged.merge(&member);
                trace!(%member, %merged, "merged overlapping range");
            }
        }

        self.members.insert(merged);
        // Every consumed member lies inside `merged`, so the span can only grow.
        self.bounds = Some(match self.bounds {
            Some(bounds) => bounds.merge(&merged),
            None => merged,
        });
    }

    /// Adds every member of `other`.
    pub fn add_ranges(&mut self, other: &Ranges) {
        for range in other {
            self.add_range(*range);
        }
    }

    /// Removes the member equal to `range`.
    ///
    /// Returns whether a member was removed.
    pub fn remove(&mut self, range: &Range) -> bool {
        let removed = self.members.remove(range);
        if removed {
            trace!(%range, "removed range");
            self.recompute_bounds();
        }
        removed
    }

    /// Removes every value of `range` from the set.
    ///
    /// Members inside `range` disappear; members it only partly covers are
    /// trimmed, or split in two when `range` lies strictly inside them.
    pub fn subtract_range(&mut self, range: Range) {
        let overlapping: Vec<(Range, Overlap)> = self.overlapping(&range).collect();
        if overlapping.is_empty() {
            return;
        }

        for (member, kind) in overlapping {
            self.members.remove(&member);
            let remainder = member.remainder(&range, kind);
            trace!(%member, %range, ?kind, pieces = remainder.len(), "trimmed range");
            for piece in remainder {
                self.add_range(piece);
            }
        }
        self.recompute_bounds();
    }

    /// Subtracts every member of `other`.
    pub fn subtract_ranges(&mut self, other: &Ranges) {
        for range in other {
            self.subtract_range(*range);
        }
    }

    fn overlapping<'a>(&'a self, with: &'a Range) -> impl Iterator<Item = (Range, Overlap)> + 'a {
        self.members.iter().filter_map(move |member| {
            let kind = member.overlap(with);
            (kind != Overlap::None).then_some((*member, kind))
        })
    }

    fn recompute_bounds(&mut self) {
        self.bounds = self.members.iter().copied().reduce(|a, b| a.merge(&b));
    }
}

impl<'a> IntoIterator for &'a Ranges {
    type Item = &'a Range;
    type IntoIter = btree_set::Iter<'a, Range>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

impl Extend<Range> for Ranges {
    fn extend<I: IntoIterator<Item = Range>>(&mut self, iter: I) {
        for range in iter {
            self.add_range(range);
        }
    }
}

impl FromIterator<Range> for Ranges {
    fn from_iter<I: IntoIterator<Item = Range>>(iter: I) -> Self {
        let mut ranges = Ranges::new();
        ranges.extend(iter);
        ranges
    }
}

impl fmt::Display for Ranges {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.members.iter().join(", "))
    }
}
