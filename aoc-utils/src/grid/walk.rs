//! Region-scoped traversal and mapping

use std::ops::ControlFlow;

use super::map2d::Map2D;
use crate::util::axis;
use crate::vec2d::Vec2D;

/// An axis-aligned rectangle given by inclusive bounds on both axes.
///
/// A region may reach past the grid; cells outside are visited as `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    pub x_min: i64,
    pub x_max: i64,
    pub y_min: i64,
    pub y_max: i64,
}

impl Region {
    pub const fn new(x_min: i64, x_max: i64, y_min: i64, y_max: i64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Smallest region containing both corners.
    pub fn spanning(a: Vec2D, b: Vec2D) -> Self {
        Self::new(a.x.min(b.x), a.x.max(b.x), a.y.min(b.y), a.y.max(b.y))
    }

    /// Number of columns, `0` when `x_max < x_min`.
    pub fn width(&self) -> usize {
        span(self.x_min, self.x_max)
    }

    /// Number of rows, `0` when `y_max < y_min`.
    pub fn height(&self) -> usize {
        span(self.y_min, self.y_max)
    }

    pub fn contains(&self, point: Vec2D) -> bool {
        (self.x_min..=self.x_max).contains(&point.x) && (self.y_min..=self.y_max).contains(&point.y)
    }
}

/// Count of integers in `min..=max`, saturating at `usize::MAX`.
fn span(min: i64, max: i64) -> usize {
    if max < min {
        return 0;
    }
    usize::try_from(max.abs_diff(min)).map_or(usize::MAX, |d| d.saturating_add(1))
}

/// Direction of a walk along each axis.
///
/// The default walks left to right, then top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WalkOrder {
    pub reverse_x: bool,
    pub reverse_y: bool,
}

impl WalkOrder {
    pub const fn new(reverse_x: bool, reverse_y: bool) -> Self {
        Self {
            reverse_x,
            reverse_y,
        }
    }

    pub const fn reverse_x(self) -> Self {
        Self::new(true, self.reverse_y)
    }

    pub const fn reverse_y(self) -> Self {
        Self::new(self.reverse_x, true)
    }
}

/// Highest index of an axis of `len` cells, `-1` when the axis is empty.
fn last_index(len: usize) -> i64 {
    i64::try_from(len).map_or(i64::MAX, |len| len - 1)
}

impl<T> Map2D<T> {
    /// The region covering the whole grid.
    pub fn region(&self) -> Region {
        Region::new(0, last_index(self.width()), 0, last_index(self.height()))
    }

    /// Walks the whole grid. See [`walk_region`](Map2D::walk_region).
    pub fn walk<B, F>(&self, order: WalkOrder, visit: F) -> ControlFlow<B>
    where
        F: FnMut(i64, i64, Option<&T>) -> ControlFlow<B>,
    {
        self.walk_region(self.region(), order, visit)
    }

    /// Calls `visit(x, y, value)` for every position in `region`.
    ///
    /// Rows are the outer loop and columns the inner one; `order` reverses
    /// either axis independently. Returning `ControlFlow::Break` from `visit`
    /// ends the whole walk and hands the break value back to the caller.
    ///
    /// # Example
    ///
    /// ```
    /// use std::ops::ControlFlow;
    /// use aoc_utils::{Map2D, Region, WalkOrder};
    ///
    /// let map: Map2D = "123\n456\n789".parse().unwrap();
    /// let mut seen = String::new();
    /// let stopped = map.walk_region(Region::new(1, 2, 0, 2), WalkOrder::default().reverse_y(), |_, _, v| {
    ///     let v = *v.unwrap();
    ///     seen.push(v);
    ///     if v == '5' { ControlFlow::Break(v) } else { ControlFlow::Continue(()) }
    /// });
    /// assert_eq!(seen, "895");
    /// assert_eq!(stopped, ControlFlow::Break('5'));
    /// ```
    pub fn walk_region<B, F>(&self, region: Region, order: WalkOrder, mut visit: F) -> ControlFlow<B>
    where
        F: FnMut(i64, i64, Option<&T>) -> ControlFlow<B>,
    {
        for y in axis(region.y_min, region.y_max, order.reverse_y) {
            for x in axis(region.x_min, region.x_max, order.reverse_x) {
                if let ControlFlow::Break(value) = visit(x, y, self.get(x, y)) {
                    return ControlFlow::Break(value);
                }
            }
        }
        ControlFlow::Continue(())
    }

    /// Builds a new grid by transforming every cell. The source is not changed.
    pub fn map<U, F>(&self, transform: F) -> Map2D<U>
    where
        F: FnMut(i64, i64, Option<&T>) -> U,
    {
        self.map_region(self.region(), transform)
    }

    /// Builds a new grid the size of `region` from `transform(x, y, value)`.
    ///
    /// Cell `(0, 0)` of the result comes from `(region.x_min, region.y_min)`
    /// of the source. Positions outside the source grid are passed as `None`.
    pub fn map_region<U, F>(&self, region: Region, mut transform: F) -> Map2D<U>
    where
        F: FnMut(i64, i64, Option<&T>) -> U,
    {
        let rows = axis(region.y_min, region.y_max, false)
            .map(|y| {
                axis(region.x_min, region.x_max, false)
                    .map(|x| transform(x, y, self.get(x, y)))
                    .collect()
            })
            .collect();
        Map2D::from_rows_unchecked(rows)
    }
}
