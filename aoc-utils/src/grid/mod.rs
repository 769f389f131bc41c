//! Two dimensional grids
//!
//! [`Map2D`] stores a rectangle of cells (characters by default) and builds
//! every traversal on one primitive: [`Map2D::walk_region`], which visits an
//! inclusive [`Region`] row by row in the direction chosen by [`WalkOrder`].
//! Searching, scanning and mapping are all parameterisations of that walk.
//!
//! # Example
//!
//! ```
//! use aoc_utils::{Map2D, Region, SearchTerm, Vec2D, WalkOrder};
//!
//! let map: Map2D = "
//! #.#.
//! .S..
//! ..#E
//! ".parse().unwrap();
//!
//! // Scan from the bottom right corner
//! let end = map.find(&SearchTerm::exact("E"), WalkOrder::default().reverse_x().reverse_y());
//! assert_eq!(end, Some(Vec2D::new(3, 2)));
//!
//! // Walls in the top two rows only
//! let walls = map.find_all_in_region(Region::new(0, 3, 0, 1), &SearchTerm::exact("#"), WalkOrder::default());
//! assert_eq!(walls["#"], vec![Vec2D::new(0, 0), Vec2D::new(2, 0)]);
//!
//! // Mapping leaves the source alone
//! let open = map.map(|_, _, v| v == Some(&'.'));
//! assert_eq!(open.get(1, 0), Some(&true));
//! assert_eq!(map.get(1, 0), Some(&'.'));
//! ```

mod map2d;
mod search;
mod walk;

pub use map2d::Map2D;
pub use search::SearchTerm;
pub use walk::{Region, WalkOrder};
