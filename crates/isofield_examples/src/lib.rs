#![forbid(unsafe_code)]

use isofield::prelude::*;
use tracing_subscriber::EnvFilter;

/// Installs a fmt subscriber honoring `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// One-line summary of a simulation frame for terminal output.
pub fn frame_summary(sim: &Simulation) -> String {
    format!(
        "t={:6.2}s quality={:4} points={:7} segments={:6} thresholds={:?}",
        sim.time(),
        sim.quality(),
        sim.grid().points.len(),
        sim.isolines().segment_count(),
        sim.levels().thresholds(),
    )
}
