use isofield::prelude::*;
use isofield_examples::{frame_summary, init_tracing};

/// Demonstrates held-key resolution stepping: the grid shrinks by 10 points
/// per axis every frame while "decrease" stays held, then grows back. Step
/// rate is coupled to frame cadence, not to wall-clock time.
fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = SimulationConfig::new().with_initial_quality(120);
    let mut sim = Simulation::new(config, Box::new(WaveField::new()))?;

    let dt = 1.0 / 60.0;
    let coarser = InputSnapshot {
        decrease_resolution: true,
        ..InputSnapshot::idle()
    };
    let finer = InputSnapshot {
        increase_resolution: true,
        ..InputSnapshot::idle()
    };

    println!("holding decrease:");
    for _ in 0..8 {
        sim.advance(dt, &coarser)?;
        println!("{}", frame_summary(&sim));
    }

    println!("holding increase:");
    for _ in 0..8 {
        sim.advance(dt, &finer)?;
        println!("{}", frame_summary(&sim));
    }

    Ok(())
}
