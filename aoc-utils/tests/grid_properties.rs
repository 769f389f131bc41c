//! Property-based tests for `Map2D`
//!
//! **Feature: grid**

use std::ops::ControlFlow;

use aoc_utils::{Map2D, Region, SearchTerm, Vec2D, WalkOrder};
use proptest::prelude::*;

/// Grids of lowercase letters, 1..8 wide and 1..8 high.
fn letter_grid() -> impl Strategy<Value = Map2D> {
    (1usize..8, 1usize..8).prop_flat_map(|(w, h)| {
        prop::collection::vec(prop::collection::vec(prop::char::range('a', 'z'), w), h)
            .prop_map(|rows| Map2D::new(rows).unwrap())
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// **Property 1: Set then get**
    /// *For any* in-bounds position, `get` returns what `set` wrote.
    #[test]
    fn prop_set_then_get(map in letter_grid(), x in 0i64..8, y in 0i64..8, value in prop::char::range('A', 'Z')) {
        let mut map = map;
        let in_bounds = map.in_bounds(x, y);
        prop_assert_eq!(map.set(x, y, value), in_bounds);
        if in_bounds {
            prop_assert_eq!(map.get(x, y), Some(&value));
        }
    }

    /// **Property 2: Out-of-bounds reads are absent**
    /// *For any* position outside the grid, `get` returns `None` even after a
    /// write to that position.
    #[test]
    fn prop_out_of_bounds_absent(map in letter_grid(), x in -10i64..20, y in -10i64..20) {
        let mut map = map;
        prop_assume!(!map.in_bounds(x, y));
        let before = map.clone();
        map.set(x, y, '#');
        prop_assert_eq!(map.get(x, y), None);
        prop_assert_eq!(map, before);
    }

    /// **Property 3: Mapping the whole grid**
    /// *For any* grid, `map` keeps the dimensions, applies the transform per
    /// cell and leaves the source untouched.
    #[test]
    fn prop_map_is_pure_and_cellwise(map in letter_grid()) {
        let before = map.clone();
        let mapped = map.map(|x, y, v| (x, y, v.copied()));

        prop_assert_eq!(mapped.width(), map.width());
        prop_assert_eq!(mapped.height(), map.height());
        for (point, value) in map.cells() {
            prop_assert_eq!(mapped.get_point(point), Some(&(point.x, point.y, Some(*value))));
        }
        prop_assert_eq!(map, before);
    }

    /// **Property 4: Row insertion**
    /// *For any* grid and existing row index, inserting a full row grows the
    /// height by one and shifts the rows below it; a short row is rejected.
    #[test]
    fn prop_insert_row(map in letter_grid(), y in 0usize..8) {
        let mut map = map;
        prop_assume!(y < map.height());
        let before = map.clone();

        prop_assert!(map.insert_row(y, vec!['#'; map.width() + 1]).is_err());
        prop_assert_eq!(&map, &before);

        map.insert_row(y, vec!['#'; map.width()]).unwrap();
        prop_assert_eq!(map.height(), before.height() + 1);
        prop_assert_eq!(map.width(), before.width());
        for (point, value) in before.cells() {
            let shifted = if point.y < y as i64 { point } else { point + Vec2D::DOWN };
            prop_assert_eq!(map.get_point(shifted), Some(value));
        }
    }

    /// **Property 5: Column insertion**
    /// *For any* grid and existing column index, inserting a full column grows
    /// the width by one and shifts the columns right of it.
    #[test]
    fn prop_insert_column(map in letter_grid(), x in 0usize..8) {
        let mut map = map;
        prop_assume!(x < map.width());
        let before = map.clone();

        prop_assert!(map.insert_column(x, vec!['#'; map.height() + 1]).is_err());
        prop_assert_eq!(&map, &before);

        map.insert_column(x, vec!['#'; map.height()]).unwrap();
        prop_assert_eq!(map.width(), before.width() + 1);
        for (point, value) in before.cells() {
            let shifted = if point.x < x as i64 { point } else { point + Vec2D::RIGHT };
            prop_assert_eq!(map.get_point(shifted), Some(value));
        }
    }

    /// **Property 6: Walks visit every region cell once**
    /// *For any* region and order, an uninterrupted walk visits exactly
    /// `width * height` positions, each inside the region.
    #[test]
    fn prop_walk_covers_region(
        map in letter_grid(),
        x_min in -2i64..6, x_len in 0i64..6,
        y_min in -2i64..6, y_len in 0i64..6,
        reverse_x in any::<bool>(), reverse_y in any::<bool>(),
    ) {
        let region = Region::new(x_min, x_min + x_len, y_min, y_min + y_len);
        let mut visited = Vec::new();
        let _ = map.walk_region(region, WalkOrder::new(reverse_x, reverse_y), |x, y, _| {
            visited.push(Vec2D::new(x, y));
            ControlFlow::<()>::Continue(())
        });

        prop_assert_eq!(visited.len(), region.width() * region.height());
        prop_assert!(visited.iter().all(|p| region.contains(*p)));
        let mut unique = visited.clone();
        unique.sort();
        unique.dedup();
        prop_assert_eq!(unique.len(), visited.len());
    }

    /// **Property 7: Find agrees with find_all**
    /// *For any* grid, letter and order, `find` returns the first position
    /// `find_all` lists for that letter.
    #[test]
    fn prop_find_is_first_of_find_all(
        map in letter_grid(),
        letter in prop::char::range('a', 'z'),
        reverse_x in any::<bool>(), reverse_y in any::<bool>(),
    ) {
        let term = SearchTerm::exact(letter.to_string());
        let order = WalkOrder::new(reverse_x, reverse_y);
        let first = map.find(&term, order);
        let all = map.find_all(&term, order);

        prop_assert_eq!(first, all.get(&letter.to_string()).and_then(|points| points.first().copied()));
        for points in all.values() {
            for point in points {
                prop_assert_eq!(map.get_point(*point), Some(&letter));
            }
        }
    }
}
