//! Runs the fixed sort benchmark and prints one report per size and algorithm.
//!
//! Set `SORTBENCH_SEED` for a reproducible run and `RUST_LOG` to adjust
//! logging (default `warn`).

use std::io::{self, Write};

use anyhow::Result;
use sortbench::BenchConfig;
use sortbench::harness::{self, write_event};

fn main() -> Result<()> {
    setup_logging();

    let config = BenchConfig::from_env()?;
    tracing::debug!(?config, "loaded configuration");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    harness::run(&config, |event| write_event(&mut out, event))?;
    out.flush()?;
    Ok(())
}

/// Setup logging from `RUST_LOG`, falling back to `warn`
fn setup_logging() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();
}
