//! Small text and iteration helpers shared by the grid types

use itertools::Either;

/// Splits puzzle input into lines after trimming surrounding whitespace.
///
/// Handles both `\n` and `\r\n` line endings.
///
/// ```
/// use aoc_utils::util::split_by_lines;
///
/// let lines: Vec<_> = split_by_lines("\nab\r\ncd\n\n").collect();
/// assert_eq!(lines, ["ab", "cd"]);
/// ```
pub fn split_by_lines(input: &str) -> impl Iterator<Item = &str> {
    input.trim().lines()
}

/// Inclusive range over one axis, optionally walked backwards.
///
/// Yields nothing when `min > max`.
pub fn axis(min: i64, max: i64, reverse: bool) -> impl Iterator<Item = i64> + Clone {
    if reverse {
        Either::Left((min..=max).rev())
    } else {
        Either::Right(min..=max)
    }
}

/// Smallest and largest value of a sequence, `None` if it is empty.
pub fn bounds<I>(values: I) -> Option<(i64, i64)>
where
    I: IntoIterator<Item = i64>,
{
    values.into_iter().fold(None, |acc, value| match acc {
        None => Some((value, value)),
        Some((min, max)) => Some((min.min(value), max.max(value))),
    })
}
