//! Bounded, sparsely occupied three dimensional grid

use std::collections::HashSet;
use std::fmt;

use crate::vec3d::Vec3D;

/// A `w` x `h` x `d` box of optional cells.
///
/// Cells start empty. Positions outside the box read as empty and ignore
/// writes. Occupied positions are tracked separately so membership checks
/// and iteration over filled cells do not scan the whole box.
///
/// # Example
///
/// ```
/// use aoc_utils::{Map3D, Vec3D};
///
/// let mut space = Map3D::new(3, 3, 10);
/// assert!(space.set(Vec3D::new(1, 1, 4), Some('A')));
/// assert!(!space.set(Vec3D::new(1, 1, 10), Some('B')));
///
/// assert!(space.has(Vec3D::new(1, 1, 4)));
/// assert_eq!(space.get(Vec3D::new(1, 1, 4)), Some(&'A'));
/// assert_eq!(space.get(Vec3D::new(0, 0, 0)), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Map3D<T> {
    w: usize,
    h: usize,
    d: usize,
    cells: Vec<Option<T>>,
    occupied: HashSet<Vec3D>,
}

impl<T> Map3D<T> {
    /// Creates an empty box.
    pub fn new(w: usize, h: usize, d: usize) -> Self {
        Self {
            w,
            h,
            d,
            cells: (0..w * h * d).map(|_| None).collect(),
            occupied: HashSet::new(),
        }
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn height(&self) -> usize {
        self.h
    }

    pub fn depth(&self) -> usize {
        self.d
    }

    fn index(&self, point: Vec3D) -> Option<usize> {
        let x = usize::try_from(point.x).ok().filter(|x| *x < self.w)?;
        let y = usize::try_from(point.y).ok().filter(|y| *y < self.h)?;
        let z = usize::try_from(point.z).ok().filter(|z| *z < self.d)?;
        Some((x * self.h + y) * self.d + z)
    }

    pub fn in_bounds(&self, point: Vec3D) -> bool {
        self.index(point).is_some()
    }

    /// The value at `point`, `None` if it is empty or out of bounds.
    pub fn get(&self, point: Vec3D) -> Option<&T> {
        self.index(point).and_then(|index| self.cells[index].as_ref())
    }

    /// Fills (`Some`) or clears (`None`) the cell at `point`.
    ///
    /// Returns `false` without writing when `point` is out of bounds.
    pub fn set(&mut self, point: Vec3D, value: Option<T>) -> bool {
        let Some(index) = self.index(point) else {
            return false;
        };

        if value.is_some() {
            self.occupied.insert(point);
        } else {
            self.occupied.remove(&point);
        }
        self.cells[index] = value;
        true
    }

    pub fn has(&self, point: Vec3D) -> bool {
        self.occupied.contains(&point)
    }

    /// Positions of all filled cells, in no particular order.
    pub fn occupied(&self) -> impl Iterator<Item = Vec3D> + '_ {
        self.occupied.iter().copied()
    }

    fn at(&self, x: usize, y: usize, z: usize) -> Option<&T> {
        self.cells[(x * self.h + y) * self.d + z].as_ref()
    }
}

/// One projected column: ` .` when empty, ` ?` when ambiguous.
fn write_stack<'a, T: fmt::Display + 'a>(
    f: &mut fmt::Formatter<'_>,
    stack: impl Iterator<Item = Option<&'a T>>,
) -> fmt::Result {
    let mut filled = stack.flatten();
    match (filled.next(), filled.next()) {
        (None, _) => write!(f, " ."),
        (Some(value), None) => write!(f, " {value}"),
        (Some(_), Some(_)) => write!(f, " ?"),
    }
}

/// Renders a front view (x by z) and a side view (y by z), top layer first.
impl<T: fmt::Display> fmt::Display for Map3D<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for x in 0..self.w {
            write!(f, " {x}")?;
        }
        writeln!(f)?;
        for z in (0..self.d).rev() {
            for x in 0..self.w {
                write_stack(f, (0..self.h).map(|y| self.at(x, y, z)))?;
            }
            writeln!(f, " {z}")?;
        }
        writeln!(f)?;

        for y in 0..self.h {
            write!(f, " {y}")?;
        }
        writeln!(f)?;
        for z in (0..self.d).rev() {
            for y in 0..self.h {
                write_stack(f, (0..self.w).map(|x| self.at(x, y, z)))?;
            }
            writeln!(f, " {z}")?;
        }
        writeln!(f)
    }
}
