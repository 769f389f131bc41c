//! Error types for the utility structures

use thiserror::Error;

use crate::ranges::Range;
use crate::vec2d::Vec2D;

/// Error type for grid construction, insertion and search
#[derive(Debug, Error)]
pub enum GridError {
    /// Input contained no rows
    #[error("Grid input is empty")]
    EmptyInput,
    /// A row's length differs from the first row
    #[error("Row {row} has {actual} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
    /// An inserted row or column does not match the orthogonal dimension
    #[error("Inserted line has {actual} cells, expected {expected}")]
    LengthMismatch { expected: usize, actual: usize },
    /// An insertion index lies outside the current grid
    #[error("Index {index} is out of bounds (limit {bound})")]
    IndexOutOfBounds { index: usize, bound: usize },
    /// The search pattern failed to compile
    #[error("Invalid search pattern: {0}")]
    InvalidPattern(#[source] Box<dyn std::error::Error + Send + Sync>),
    /// Pattern search was requested but the `regex` feature is off
    #[error("Pattern search requires the `regex` feature")]
    PatternSearchDisabled,
}

/// Error type for range arithmetic
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    /// Subtraction needs the two ranges to share at least one value
    #[error("Cannot subtract {other} from {range}: ranges do not overlap")]
    Disjoint { range: Range, other: Range },
    /// A half-open range with no values cannot be represented
    #[error("Half-open range {from}..{to} is empty")]
    Empty { from: i64, to: i64 },
}

/// Error type for route building
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// The next point is more than one orthogonal step from the head
    #[error("Point {point} is not adjacent to route head {head}")]
    NotAdjacent { head: Vec2D, point: Vec2D },
}
