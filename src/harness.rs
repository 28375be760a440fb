//! Benchmark harness: random input generation, timed runs and text reports.
//!
//! [`run`] drives a whole [`BenchConfig`]: each size gets one random array,
//! and every configured [`Algorithm`] sorts its own clone of it.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::config::{BenchConfig, ConfigError};
use crate::core::Algorithm;

/// Line printed after every report block.
pub const SEPARATOR: &str = "----------------------------------";

/// Outcome of a single timed sort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub size: usize,
    pub algorithm: Algorithm,
    pub elapsed: Duration,
    /// Leading elements of the sorted output.
    pub preview: Vec<i32>,
}

/// Generates `size` integers drawn uniformly from `[0, size)`.
pub fn generate_array<R: Rng + ?Sized>(
    rng: &mut R,
    size: usize,
) -> Result<Vec<i32>, ConfigError> {
    if size == 0 {
        return Ok(Vec::new());
    }
    let upper = i32::try_from(size).map_err(|_| ConfigError::SizeOutOfRange(size))?;
    Ok((0..size).map(|_| rng.random_range(0..upper)).collect())
}

/// Sorts `input` with `algorithm` and measures wall-clock time.
pub fn time_sort(algorithm: Algorithm, input: &[i32]) -> (Vec<i32>, Duration) {
    let start = Instant::now();
    let sorted = algorithm.sort(input);
    (sorted, start.elapsed())
}

/// Errors that abort a benchmark run.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),
}

/// Runs every configured size and algorithm, passing progress to `sink`.
///
/// For each size, `sink` first receives [`Event::Size`], then one
/// [`Event::Run`] per algorithm. A sink error stops the run.
pub fn run<F>(config: &BenchConfig, mut sink: F) -> Result<(), RunError>
where
    F: FnMut(Event<'_>) -> io::Result<()>,
{
    config.validate()?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    for &size in &config.sizes {
        let input = generate_array(&mut rng, size)?;
        sink(Event::Size(size))?;

        for &algorithm in &config.algorithms {
            debug!(size, %algorithm, "starting run");
            let (sorted, elapsed) = time_sort(algorithm, &input);
            info!(size, %algorithm, elapsed_ms = elapsed.as_millis() as u64, "run finished");

            let preview_len = config.preview_len.min(size);
            let report = RunReport {
                size,
                algorithm,
                elapsed,
                preview: sorted[..preview_len].to_vec(),
            };
            sink(Event::Run(&report))?;
        }
    }
    Ok(())
}

/// Writes every [`Event`] of a run as plain text.
pub fn write_event<W: Write + ?Sized>(w: &mut W, event: Event<'_>) -> io::Result<()> {
    match event {
        Event::Size(size) => write_size_header(w, size),
        Event::Run(report) => write_report(w, report),
    }
}

/// Progress notifications emitted by [`run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event<'a> {
    /// A new array of this size was generated.
    Size(usize),
    /// One algorithm finished on the current array.
    Run(&'a RunReport),
}

/// Writes the header that opens a size group.
pub fn write_size_header<W: Write + ?Sized>(w: &mut W, size: usize) -> io::Result<()> {
    writeln!(w, "Array size: {size}")?;
    writeln!(w)
}

/// Writes one report block, closed by [`SEPARATOR`].
pub fn write_report<W: Write + ?Sized>(w: &mut W, report: &RunReport) -> io::Result<()> {
    writeln!(w, "Sorting type: {}", report.algorithm)?;
    writeln!(
        w,
        "Execution time: {} milliseconds",
        report.elapsed.as_millis()
    )?;
    writeln!(
        w,
        "Sorted array (first {} elements): {}",
        report.preview.len(),
        format_preview(&report.preview)
    )?;
    writeln!(w, "{SEPARATOR}")
}

/// Renders `values` as `[a, b, c]`.
fn format_preview(values: &[i32]) -> String {
    let items: Vec<String> = values.iter().map(i32::to_string).collect();
    format!("[{}]", items.join(", "))
}
