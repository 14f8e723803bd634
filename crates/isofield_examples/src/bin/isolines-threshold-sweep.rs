use isofield::prelude::*;
use isofield_examples::init_tracing;

/// Uses the library pieces directly, without the frame driver: refresh one
/// grid at a fixed time and sweep single thresholds across the byte range,
/// printing how much isoline geometry each one produces.
fn main() -> anyhow::Result<()> {
    init_tracing();

    let field = WaveField::new();
    let mut grid = GridModel::generate(GridDimensions::square(128))?;
    grid.refresh(&field, 3.5);

    for threshold in (0u16..=255).step_by(32) {
        let levels = LevelSet::from_thresholds(vec![threshold as u8])?;
        let buffers = extract_isolines(&grid, &levels);
        println!(
            "threshold {:3}: {:5} segments ({:6} vertices)",
            threshold,
            buffers.segment_count(),
            buffers.vertices.len()
        );
    }

    Ok(())
}
