//! # Sortbench
//!
//! `sortbench` times four classical comparison sorts (Bubble, Shell, Merge and
//! Quick sort) on random integer arrays of growing size and reports how long
//! each one took, together with a preview of the sorted output.
//!
//! ## Strategies
//!
//! Every strategy is a variant of [`Algorithm`]. Strategies can be picked
//! directly or resolved by name at runtime:
//!
//! ```rust
//! use sortbench::{resolve, Algorithm};
//!
//! let input = vec![5, 3, 8, 1, 9, 2];
//!
//! for algorithm in Algorithm::ALL {
//!     assert_eq!(algorithm.sort(&input), vec![1, 2, 3, 5, 8, 9]);
//! }
//!
//! let quick = resolve("quick").unwrap();
//! assert_eq!(quick.sort(&[2, 1]), vec![1, 2]);
//! ```
//!
//! [`Algorithm::sort`] always works on a private copy, so the caller's slice is
//! left untouched.
//!
//! ## Bubble sort limit
//!
//! Bubble sort refuses inputs of [`BUBBLE_SORT_LIMIT`] elements or more: it
//! logs a warning and hands the copy back unsorted.
//!
//! ## Running a benchmark
//!
//! ```rust
//! use sortbench::prelude::*;
//!
//! let config = BenchConfig::new().with_sizes(vec![10, 100]).with_seed(1);
//! let mut out = Vec::new();
//! run(&config, |event| write_event(&mut out, event)).unwrap();
//!
//! let text = String::from_utf8(out).unwrap();
//! assert!(text.starts_with("Array size: 10\n"));
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Bubble**: O(n²) comparisons, in place.
//! - **Shell**: gap sequence `n/2, n/4, .., 1`; in place.
//! - **Merge**: O(n log n), stable, O(n) scratch per merge.
//! - **Quick**: O(n log n) on average, O(n²) on sorted input; not stable.

pub mod algo;
pub mod config;
pub mod core;
pub mod harness;

pub use crate::config::{BenchConfig, ConfigError};
pub use crate::core::{Algorithm, BUBBLE_SORT_LIMIT, SortError, resolve};
pub use crate::harness::{RunError, RunReport};

pub mod prelude {
    pub use crate::config::{BenchConfig, ConfigError};
    pub use crate::core::{Algorithm, BUBBLE_SORT_LIMIT, SortError, resolve};
    pub use crate::harness::{Event, RunError, RunReport, run, time_sort, write_event};
}
