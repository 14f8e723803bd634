use isofield::prelude::*;
use isofield_examples::{frame_summary, init_tracing};

/// Grows and shrinks the level set through held input. Each added threshold
/// is the previous one plus 200, modulo 255; removal stops at one threshold.
fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = SimulationConfig::new().with_initial_quality(64);
    let mut sim = Simulation::new(config, Box::new(WaveField::new()))?;

    let dt = 1.0 / 60.0;
    let add = InputSnapshot {
        add_threshold: true,
        ..InputSnapshot::idle()
    };
    let remove = InputSnapshot {
        remove_threshold: true,
        ..InputSnapshot::idle()
    };

    println!("holding add:");
    for _ in 0..5 {
        sim.advance(dt, &add)?;
        println!("{}", frame_summary(&sim));
    }

    println!("holding remove (floor is one threshold):");
    for _ in 0..10 {
        sim.advance(dt, &remove)?;
        println!("{}", frame_summary(&sim));
    }

    Ok(())
}
