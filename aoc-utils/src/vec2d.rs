//! Two dimensional integer coordinates

use std::fmt;
use std::ops::{Add, Neg, Sub};

/// An `(x, y)` coordinate or offset.
///
/// `x` grows to the right and `y` grows downwards, matching the row/column
/// layout of [`Map2D`](crate::Map2D). Ordering is by `x` then `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Vec2D {
    pub x: i64,
    pub y: i64,
}

impl Vec2D {
    pub const UP: Vec2D = Vec2D::new(0, -1);
    pub const RIGHT: Vec2D = Vec2D::new(1, 0);
    pub const DOWN: Vec2D = Vec2D::new(0, 1);
    pub const LEFT: Vec2D = Vec2D::new(-1, 0);

    /// The four orthogonal unit steps, clockwise from up.
    pub const ORTHOGONAL: [Vec2D; 4] = [Self::UP, Self::RIGHT, Self::DOWN, Self::LEFT];

    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Sum of the absolute components.
    pub fn manhattan(self) -> u64 {
        self.x.unsigned_abs() + self.y.unsigned_abs()
    }

    /// The four orthogonally adjacent points.
    pub fn neighbours(self) -> impl Iterator<Item = Vec2D> {
        Self::ORTHOGONAL.into_iter().map(move |step| self + step)
    }
}

impl Add for Vec2D {
    type Output = Vec2D;

    fn add(self, rhs: Vec2D) -> Vec2D {
        Vec2D::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2D {
    type Output = Vec2D;

    fn sub(self, rhs: Vec2D) -> Vec2D {
        Vec2D::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vec2D {
    type Output = Vec2D;

    fn neg(self) -> Vec2D {
        Vec2D::new(-self.x, -self.y)
    }
}

impl From<(i64, i64)> for Vec2D {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Vec2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic() {
        let a = Vec2D::new(3, -2);
        let b = Vec2D::new(-1, 5);
        assert_eq!(a + b, Vec2D::new(2, 3));
        assert_eq!(a - b, Vec2D::new(4, -7));
        assert_eq!(-a, Vec2D::new(-3, 2));
        assert_eq!((a - b).manhattan(), 11);
    }

    #[test]
    fn test_neighbours_are_one_step_away() {
        let origin = Vec2D::new(4, 4);
        let neighbours: Vec<_> = origin.neighbours().collect();
        assert_eq!(neighbours.len(), 4);
        assert!(neighbours.iter().all(|n| (*n - origin).manhattan() == 1));
        assert_eq!(neighbours[0], Vec2D::new(4, 3));
    }

    #[test]
    fn test_display_matches_key_format() {
        assert_eq!(Vec2D::new(-3, 12).to_string(), "-3-12");
    }
}
