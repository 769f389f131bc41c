//! Grid storage, bounds-safe access and row/column insertion

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::GridError;
use crate::util::split_by_lines;
use crate::vec2d::Vec2D;

/// A rectangular grid of cells indexed by `(x, y)`.
///
/// Rows are stored top to bottom, so `y` selects the row and `x` the column.
/// Every row has exactly [`width`](Map2D::width) cells.
///
/// Reads outside `[0, w) x [0, h)` return `None` and writes there are
/// ignored, which keeps neighbour lookups at the edges free of special cases.
///
/// # Example
///
/// ```
/// use aoc_utils::Map2D;
///
/// let mut map: Map2D = "ab\ncd".parse().unwrap();
/// assert_eq!(map.get(1, 0), Some(&'b'));
/// assert_eq!(map.get(-1, 0), None);
///
/// assert!(map.set(0, 1, 'x'));
/// assert!(!map.set(5, 5, 'x'));
/// assert_eq!(map.to_string(), "ab\nxd\n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Map2D<T = char> {
    rows: Vec<Vec<T>>,
    w: usize,
    h: usize,
}

impl<T> Map2D<T> {
    /// Creates a grid from rows of cells.
    ///
    /// # Returns
    /// * `Ok(Map2D)` - All rows have the same length (no rows is allowed)
    /// * `Err(GridError::RaggedRow)` - A row differs in length from the first
    pub fn new(rows: Vec<Vec<T>>) -> Result<Self, GridError> {
        let w = rows.first().map_or(0, Vec::len);
        if let Some((row, actual)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|(_, len)| *len != w)
        {
            return Err(GridError::RaggedRow {
                row,
                expected: w,
                actual,
            });
        }

        Ok(Self::from_rows_unchecked(rows))
    }

    /// Callers guarantee that all rows share one length.
    pub(super) fn from_rows_unchecked(rows: Vec<Vec<T>>) -> Self {
        let w = rows.first().map_or(0, Vec::len);
        Self {
            h: rows.len(),
            w,
            rows,
        }
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn height(&self) -> usize {
        self.h
    }

    pub fn in_bounds(&self, x: i64, y: i64) -> bool {
        self.index(x, y).is_some()
    }

    fn index(&self, x: i64, y: i64) -> Option<(usize, usize)> {
        let x = usize::try_from(x).ok().filter(|x| *x < self.w)?;
        let y = usize::try_from(y).ok().filter(|y| *y < self.h)?;
        Some((x, y))
    }

    pub fn get(&self, x: i64, y: i64) -> Option<&T> {
        self.index(x, y).map(|(x, y)| &self.rows[y][x])
    }

    pub fn get_mut(&mut self, x: i64, y: i64) -> Option<&mut T> {
        self.index(x, y).map(|(x, y)| &mut self.rows[y][x])
    }

    pub fn get_point(&self, point: Vec2D) -> Option<&T> {
        self.get(point.x, point.y)
    }

    /// Writes `value` at `(x, y)`.
    ///
    /// Returns `false` and leaves the grid untouched when the position is out
    /// of bounds.
    pub fn set(&mut self, x: i64, y: i64, value: T) -> bool {
        match self.get_mut(x, y) {
            Some(cell) => {
                *cell = value;
                true
            }
            None => false,
        }
    }

    pub fn set_point(&mut self, point: Vec2D, value: T) -> bool {
        self.set(point.x, point.y, value)
    }

    pub fn get_row(&self, y: usize) -> Option<&[T]> {
        self.rows.get(y).map(Vec::as_slice)
    }

    pub fn get_column(&self, x: usize) -> Option<Vec<&T>> {
        if x >= self.w {
            return None;
        }
        Some(self.rows.iter().map(|row| &row[x]).collect())
    }

    /// All cells with their positions, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (Vec2D, &T)> {
        self.rows.iter().zip(0..).flat_map(|(row, y)| {
            row.iter()
                .zip(0..)
                .map(move |(value, x)| (Vec2D::new(x, y), value))
        })
    }

    /// Inserts a column before index `x`, shifting later columns right.
    ///
    /// # Returns
    /// * `Ok(())` - The column was inserted and the width grew by one
    /// * `Err(GridError::LengthMismatch)` - `column` does not have `height` cells
    /// * `Err(GridError::IndexOutOfBounds)` - `x` is not an existing column
    pub fn insert_column(&mut self, x: usize, column: Vec<T>) -> Result<(), GridError> {
        Self::check_insert(x, self.w, column.len(), self.h)
            .inspect_err(|e| debug!(x, error = %e, "rejected column insertion"))?;

        for (row, value) in self.rows.iter_mut().zip(column) {
            row.insert(x, value);
        }
        self.w += 1;
        Ok(())
    }

    /// Inserts a row before index `y`, shifting later rows down.
    ///
    /// # Returns
    /// * `Ok(())` - The row was inserted and the height grew by one
    /// * `Err(GridError::LengthMismatch)` - `row` does not have `width` cells
    /// * `Err(GridError::IndexOutOfBounds)` - `y` is not an existing row
    pub fn insert_row(&mut self, y: usize, row: Vec<T>) -> Result<(), GridError> {
        Self::check_insert(y, self.h, row.len(), self.w)
            .inspect_err(|e| debug!(y, error = %e, "rejected row insertion"))?;

        self.rows.insert(y, row);
        self.h += 1;
        Ok(())
    }

    fn check_insert(
        index: usize,
        bound: usize,
        len: usize,
        expected: usize,
    ) -> Result<(), GridError> {
        if len != expected {
            return Err(GridError::LengthMismatch {
                expected,
                actual: len,
            });
        }
        if index >= bound {
            return Err(GridError::IndexOutOfBounds { index, bound });
        }
        Ok(())
    }
}

impl<T: Clone> Map2D<T> {
    /// Creates a `width` x `height` grid with every cell set to `fill`.
    pub fn from_fill(width: usize, height: usize, fill: T) -> Self {
        Self {
            rows: vec![vec![fill; width]; height],
            w: if height == 0 { 0 } else { width },
            h: height,
        }
    }
}

impl Map2D<char> {
    /// Parses puzzle text into a character grid, one row per line.
    ///
    /// Surrounding whitespace of the whole input is trimmed first.
    pub fn from_input(input: &str) -> Result<Self, GridError> {
        let rows: Vec<Vec<char>> = split_by_lines(input)
            .map(|line| line.chars().collect())
            .collect();
        if rows.iter().all(Vec::is_empty) {
            return Err(GridError::EmptyInput);
        }
        Self::new(rows)
    }
}

impl FromStr for Map2D<char> {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_input(s)
    }
}

impl<T: fmt::Display> fmt::Display for Map2D<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            for value in row {
                write!(f, "{value}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
