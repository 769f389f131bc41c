//! Value and pattern search over grid regions

use std::fmt::{self, Write};
use std::ops::ControlFlow;

use indexmap::IndexMap;
#[cfg(feature = "regex")]
use regex::Regex;

use super::map2d::Map2D;
use super::walk::{Region, WalkOrder};
use crate::error::GridError;
use crate::vec2d::Vec2D;

/// What a grid search looks for.
///
/// Cells are compared through their `Display` form, so numeric cells match
/// their decimal text.
#[derive(Debug, Clone)]
pub enum SearchTerm {
    /// The rendered cell equals this text
    Exact(String),
    /// The rendered cell matches this expression anywhere
    #[cfg(feature = "regex")]
    Pattern(Regex),
}

impl SearchTerm {
    pub fn exact(term: impl Into<String>) -> Self {
        Self::Exact(term.into())
    }

    /// Compiles `pattern` with the `regex` crate syntax (no delimiters).
    #[cfg(feature = "regex")]
    pub fn pattern(pattern: &str) -> Result<Self, GridError> {
        Regex::new(pattern)
            .map(Self::Pattern)
            .map_err(|e| GridError::InvalidPattern(Box::new(e)))
    }

    /// Builds an exact term, or a pattern when `regex` is set.
    pub fn new(term: &str, regex: bool) -> Result<Self, GridError> {
        if !regex {
            return Ok(Self::exact(term));
        }

        #[cfg(feature = "regex")]
        {
            Self::pattern(term)
        }
        #[cfg(not(feature = "regex"))]
        {
            Err(GridError::PatternSearchDisabled)
        }
    }

    pub fn matches(&self, value: &str) -> bool {
        match self {
            Self::Exact(term) => term == value,
            #[cfg(feature = "regex")]
            Self::Pattern(regex) => regex.is_match(value),
        }
    }
}

/// Renders `value` into the reused buffer.
///
/// `None` when the `Display` impl reports an error; such a cell never matches.
fn render<'b, T: fmt::Display>(buf: &'b mut String, value: &T) -> Option<&'b str> {
    buf.clear();
    write!(buf, "{value}").ok()?;
    Some(buf.as_str())
}

impl<T: fmt::Display> Map2D<T> {
    /// First position in walk order whose value matches `term`.
    pub fn find(&self, term: &SearchTerm, order: WalkOrder) -> Option<Vec2D> {
        self.find_in_region(self.region(), term, order)
    }

    /// First position in `region`, in walk order, whose value matches `term`.
    pub fn find_in_region(
        &self,
        region: Region,
        term: &SearchTerm,
        order: WalkOrder,
    ) -> Option<Vec2D> {
        let mut buf = String::new();
        self.walk_region(region, order, |x, y, value| {
            let Some(value) = value else {
                return ControlFlow::Continue(());
            };
            match render(&mut buf, value) {
                Some(value) if term.matches(value) => ControlFlow::Break(Vec2D::new(x, y)),
                _ => ControlFlow::Continue(()),
            }
        })
        .break_value()
    }

    /// Every matching position, grouped by the matched value.
    ///
    /// Groups appear in the order their first position was found, and
    /// positions within a group keep walk order.
    ///
    /// # Example
    ///
    /// ```
    /// use aoc_utils::{Map2D, SearchTerm, Vec2D, WalkOrder};
    ///
    /// let map: Map2D = "a1b\n2c3".parse().unwrap();
    /// let digits = map.find_all(&SearchTerm::pattern(r"\d").unwrap(), WalkOrder::default());
    /// assert_eq!(digits.len(), 3);
    /// assert_eq!(digits["2"], vec![Vec2D::new(0, 1)]);
    /// ```
    pub fn find_all(&self, term: &SearchTerm, order: WalkOrder) -> IndexMap<String, Vec<Vec2D>> {
        self.find_all_in_region(self.region(), term, order)
    }

    /// Every matching position in `region`, grouped by the matched value.
    pub fn find_all_in_region(
        &self,
        region: Region,
        term: &SearchTerm,
        order: WalkOrder,
    ) -> IndexMap<String, Vec<Vec2D>> {
        let mut buf = String::new();
        let mut matches: IndexMap<String, Vec<Vec2D>> = IndexMap::new();
        let _ = self.walk_region(region, order, |x, y, value| {
            if let Some(value) = value {
                match render(&mut buf, value) {
                    Some(value) if term.matches(value) => matches
                        .entry(value.to_owned())
                        .or_default()
                        .push(Vec2D::new(x, y)),
                    _ => {}
                }
            }
            ControlFlow::<()>::Continue(())
        });
        matches
    }
}
