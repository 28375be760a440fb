//! Core types for sortbench.
//!
//! This module defines:
//! - [`Algorithm`]: The closed set of sort strategies, dispatched by tag.
//! - [`resolve`]: Name-based lookup of an [`Algorithm`].
//! - [`SortError`]: Failures raised while selecting a strategy.

use std::fmt;
use std::str::FromStr;

use crate::algo::{bubble_sort, merge_sort, quick_sort, shell_sort};

/// Inputs at least this long are returned unsorted by [`Algorithm::Bubble`].
pub const BUBBLE_SORT_LIMIT: usize = 1_000_000;

/// Errors raised while selecting a sort strategy.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SortError {
    #[error("unsupported algorithm: {0:?}")]
    UnsupportedAlgorithm(String),
}

/// A sort strategy.
///
/// Each variant is stateless; the same value can be reused for any number of
/// [`sort`](Algorithm::sort) calls.
///
/// # Examples
///
/// ```
/// use sortbench::Algorithm;
///
/// let input = vec![5, 3, 8, 1, 9, 2];
/// let sorted = Algorithm::Merge.sort(&input);
///
/// assert_eq!(sorted, vec![1, 2, 3, 5, 8, 9]);
/// assert_eq!(input, vec![5, 3, 8, 1, 9, 2]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bubble,
    Shell,
    Merge,
    Quick,
}

impl Algorithm {
    /// Every strategy, in report order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Bubble,
        Algorithm::Shell,
        Algorithm::Merge,
        Algorithm::Quick,
    ];

    /// Upper-case identifier used in reports.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Bubble => "BUBBLE",
            Algorithm::Shell => "SHELL",
            Algorithm::Merge => "MERGE",
            Algorithm::Quick => "QUICK",
        }
    }

    /// Sorts a private copy of `input` and returns it.
    ///
    /// `input` itself is never modified. For [`Algorithm::Bubble`] with at
    /// least [`BUBBLE_SORT_LIMIT`] elements the copy is returned as-is and a
    /// warning is logged.
    pub fn sort(&self, input: &[i32]) -> Vec<i32> {
        let mut data = input.to_vec();
        match self {
            Algorithm::Bubble => {
                bubble_sort(&mut data);
            }
            Algorithm::Shell => shell_sort(&mut data),
            Algorithm::Merge => merge_sort(&mut data),
            Algorithm::Quick => quick_sort(&mut data),
        }
        data
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| SortError::UnsupportedAlgorithm(s.to_string()))
    }
}

/// Looks up a strategy by name, ignoring case and surrounding whitespace.
///
/// ```
/// use sortbench::{resolve, Algorithm, SortError};
///
/// assert_eq!(resolve("quick"), Ok(Algorithm::Quick));
/// assert!(matches!(resolve("heap"), Err(SortError::UnsupportedAlgorithm(_))));
/// ```
pub fn resolve(name: &str) -> Result<Algorithm, SortError> {
    name.parse()
}
