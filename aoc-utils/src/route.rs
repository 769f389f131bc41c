//! Step-by-step paths over a 2D grid

use std::collections::HashMap;

use tracing::debug;

use crate::error::RouteError;
use crate::vec2d::Vec2D;

/// An ordered path of points where each step moves at most one orthogonal
/// cell, with a count of how often every point was visited.
///
/// # Example
///
/// ```
/// use aoc_utils::{Route, Vec2D};
///
/// let mut route = Route::default();
/// route.add(Vec2D::new(0, 0)).unwrap();
/// route.add(Vec2D::new(1, 0)).unwrap();
/// route.add(Vec2D::new(0, 0)).unwrap();
/// assert!(route.add(Vec2D::new(5, 5)).is_err());
///
/// assert_eq!(route.len(), 3);
/// assert_eq!(route.visits(Vec2D::new(0, 0)), Some(2));
/// assert_eq!(route.head(), Some(Vec2D::new(0, 0)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Route {
    points: Vec<Vec2D>,
    visits: HashMap<Vec2D, usize>,
}

impl Route {
    /// Builds a route from already known points. Adjacency is not checked.
    pub fn new(points: Vec<Vec2D>) -> Self {
        let mut visits = HashMap::new();
        for point in &points {
            *visits.entry(*point).or_insert(0) += 1;
        }
        Self { points, visits }
    }

    /// The most recently added point.
    pub fn head(&self) -> Option<Vec2D> {
        self.points.last().copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Vec2D] {
        &self.points
    }

    /// Appends `point` if it is at most one orthogonal step from the head.
    pub fn add(&mut self, point: Vec2D) -> Result<(), RouteError> {
        if let Some(head) = self.head() {
            if (point - head).manhattan() > 1 {
                debug!(%head, %point, "rejected route step");
                return Err(RouteError::NotAdjacent { head, point });
            }
        }

        self.points.push(point);
        *self.visits.entry(point).or_insert(0) += 1;
        Ok(())
    }

    /// How often `point` appears on the route, `None` if never.
    pub fn visits(&self, point: Vec2D) -> Option<usize> {
        self.visits.get(&point).copied()
    }

    pub fn contains(&self, point: Vec2D) -> bool {
        self.visits.contains_key(&point)
    }
}
