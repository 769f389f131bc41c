//! A single closed integer range and its overlap arithmetic

use std::fmt;
use std::ops::RangeInclusive;

use crate::error::RangeError;

/// How a second range covers a first one.
///
/// Produced by [`Range::overlap`]; the left/right naming refers to which end
/// of the *first* range gets covered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Overlap {
    /// The ranges share no value
    None,
    /// The second range covers the first one completely
    All,
    /// The second range covers the first range's left end only
    PartialLeft,
    /// The second range covers the first range's right end only
    PartialRight,
    /// The second range sits strictly inside the first; both ends stick out
    PartialBoth,
}

/// A closed range of integers `from..=to`.
///
/// Both ends are inclusive for all arithmetic, so subtracting `3..=5` from
/// `1..=8` leaves `1..=2` and `6..=8`. Use the `TryFrom<std::ops::Range>`
/// conversion when the source data is half-open.
///
/// Ranges order by `from`, then `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Range {
    from: i64,
    to: i64,
}

impl Range {
    /// Creates the range between `from` and `to`, swapping them if needed.
    pub fn new(from: i64, to: i64) -> Self {
        if from > to {
            Self { from: to, to: from }
        } else {
            Self { from, to }
        }
    }

    pub fn start(&self) -> i64 {
        self.from
    }

    pub fn end(&self) -> i64 {
        self.to
    }

    /// The exclusive upper end, `to + 1`, or `None` when `to` is `i64::MAX`.
    pub fn to_exclusive(&self) -> Option<i64> {
        self.to.checked_add(1)
    }

    /// Number of integers in the range.
    ///
    /// `u128` because `i64::MIN..=i64::MAX` holds `2^64` values.
    pub fn size(&self) -> u128 {
        u128::from(self.to.abs_diff(self.from)) + 1
    }

    pub fn contains(&self, value: i64) -> bool {
        (self.from..=self.to).contains(&value)
    }

    /// Classifies how `other` covers `self`.
    ///
    /// ```
    /// use aoc_utils::{Overlap, Range};
    ///
    /// let a = Range::new(1, 9);
    /// assert_eq!(a.overlap(&Range::new(20, 29)), Overlap::None);
    /// assert_eq!(a.overlap(&Range::new(0, 10)), Overlap::All);
    /// assert_eq!(a.overlap(&Range::new(2, 4)), Overlap::PartialBoth);
    /// assert_eq!(a.overlap(&Range::new(5, 14)), Overlap::PartialRight);
    /// assert_eq!(a.overlap(&Range::new(-5, 3)), Overlap::PartialLeft);
    /// ```
    pub fn overlap(&self, other: &Range) -> Overlap {
        if other.to < self.from || other.from > self.to {
            Overlap::None
        } else if other.from <= self.from && other.to >= self.to {
            Overlap::All
        } else if other.from > self.from && other.to < self.to {
            Overlap::PartialBoth
        } else if self.from < other.from {
            Overlap::PartialRight
        } else {
            Overlap::PartialLeft
        }
    }

    /// The span from the lower start to the higher end of both ranges.
    ///
    /// Meant for ranges that overlap; for disjoint ranges the gap between
    /// them is included as well.
    pub fn merge(&self, other: &Range) -> Range {
        Range {
            from: self.from.min(other.from),
            to: self.to.max(other.to),
        }
    }

    /// The parts of `self` not covered by `other`.
    ///
    /// # Returns
    /// * `Ok(vec)` - Zero, one or two remaining ranges, in ascending order
    /// * `Err(RangeError::Disjoint)` - The ranges do not overlap
    pub fn subtract(&self, other: &Range) -> Result<Vec<Range>, RangeError> {
        match self.overlap(other) {
            Overlap::None => Err(RangeError::Disjoint {
                range: *self,
                other: *other,
            }),
            kind => Ok(self.remainder(other, kind)),
        }
    }

    /// `kind` must be `self.overlap(other)` and not `Overlap::None`.
    pub(super) fn remainder(&self, other: &Range, kind: Overlap) -> Vec<Range> {
        match kind {
            Overlap::None => vec![*self],
            Overlap::All => Vec::new(),
            Overlap::PartialBoth => vec![
                Range::new(self.from, other.from - 1),
                Range::new(other.to + 1, self.to),
            ],
            Overlap::PartialRight => vec![Range::new(self.from, other.from - 1)],
            Overlap::PartialLeft => vec![Range::new(other.to + 1, self.to)],
        }
    }
}

impl From<RangeInclusive<i64>> for Range {
    fn from(range: RangeInclusive<i64>) -> Self {
        let (from, to) = range.into_inner();
        Range::new(from, to)
    }
}

impl TryFrom<std::ops::Range<i64>> for Range {
    type Error = RangeError;

    fn try_from(range: std::ops::Range<i64>) -> Result<Self, Self::Error> {
        if range.is_empty() {
            return Err(RangeError::Empty {
                from: range.start,
                to: range.end,
            });
        }
        Ok(Range::new(range.start, range.end - 1))
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}
