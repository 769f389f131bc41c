//! Shared helpers for Advent of Code puzzle solutions
//!
//! Puzzle inputs are mostly character grids or lists of numeric ranges, so
//! this crate bundles the two structures nearly every day ends up needing.
//!
//! # Overview
//!
//! - [`Map2D`]: a rectangular grid with bounds-safe access, region walking in
//!   either direction per axis, and value/pattern search
//! - [`Ranges`]: a set of disjoint integer [`Range`]s that merges on insert and
//!   supports carving out sub-ranges
//! - [`Vec2D`] / [`Vec3D`]: integer coordinates
//! - [`Map3D`]: a bounded, sparsely occupied 3D grid
//! - [`Route`]: a step-by-step path with visit counts
//!
//! # Quick Example
//!
//! ```
//! use aoc_utils::{Map2D, Range, Ranges, SearchTerm, Vec2D, WalkOrder};
//!
//! let map: Map2D = "#..\n.S.\n..#".parse().unwrap();
//! let start = map.find(&SearchTerm::exact("S"), WalkOrder::default());
//! assert_eq!(start, Some(Vec2D::new(1, 1)));
//!
//! let mut fresh = Ranges::new();
//! fresh.add_range(Range::new(3, 5));
//! fresh.add_range(Range::new(10, 14));
//! fresh.add_range(Range::new(12, 18));
//! assert_eq!(fresh.len(), 2);
//! assert_eq!(fresh.covered(), 12);
//! ```
//!
//! # Features
//!
//! - `regex` (default): pattern search in [`Map2D::find`] and friends

mod error;
pub mod grid;
pub mod map3d;
pub mod ranges;
pub mod route;
pub mod util;
mod vec2d;
mod vec3d;

pub use error::{GridError, RangeError, RouteError};
pub use grid::{Map2D, Region, SearchTerm, WalkOrder};
pub use map3d::Map3D;
pub use ranges::{Overlap, Range, Ranges};
pub use route::Route;
pub use vec2d::Vec2D;
pub use vec3d::Vec3D;
