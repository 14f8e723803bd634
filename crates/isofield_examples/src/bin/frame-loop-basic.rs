use isofield::prelude::*;
use isofield_examples::{frame_summary, init_tracing};

/// Runs the plain frame loop headlessly: no input, fixed 60 Hz deltas, and
/// a summary line every half second of simulated time.
fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = SimulationConfig::new().with_initial_quality(100);
    let mut sim = Simulation::new(config, Box::new(WaveField::new()))?;

    let dt = 1.0 / 60.0;
    for frame in 0..180 {
        sim.advance(dt, &InputSnapshot::idle())?;
        if frame % 30 == 29 {
            println!("{}", frame_summary(&sim));
        }
    }

    Ok(())
}
