//! Integer ranges and disjoint range sets
//!
//! [`Range`] is a closed range with overlap classification ([`Overlap`]),
//! merging and subtraction. [`Ranges`] keeps a set of them disjoint: adding
//! merges overlapping members, subtracting trims or splits them.
//!
//! All range ends are inclusive. Half-open input converts through
//! `Range::try_from(start..end)`.

mod range;
mod ranges;

pub use range::{Overlap, Range};
pub use ranges::Ranges;
