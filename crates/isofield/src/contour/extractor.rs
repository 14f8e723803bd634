//! Marching-squares isoline extraction.
//!
//! Each invocation is a pure function from a grid and a level set to a flat
//! vertex/index buffer pair. Nothing persists between frames; callers that
//! want to reuse allocations pass their buffers to
//! [`extract_isolines_into`].
use glam::Vec2;

use crate::contour::{LevelSet, Threshold};
use crate::grid::GridModel;

/// Isoline geometry for one frame.
///
/// Consecutive vertex pairs form independent line segments; there is no
/// shared-vertex topology. A crossing shared by two adjacent cells is emitted
/// once per cell, so the same coordinates can occur twice. Indices are plain
/// `0..N-1`, matching the line-list layout renderers consume directly.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IsolineBuffers {
    pub vertices: Vec<Vec2>,
    pub indices: Vec<u32>,
}

impl IsolineBuffers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }

    /// Number of line segments (vertex pairs).
    pub fn segment_count(&self) -> usize {
        self.vertices.len() / 2
    }
}

/// Extracts isolines for every threshold of `levels` over `grid`.
///
/// Output ordering is deterministic: thresholds in level-set order, cells in
/// column-major order, cell edges in the fixed order `(lu, ru)`, `(rd, ru)`,
/// `(ld, rd)`, `(ld, lu)`. A corner exactly equal to a threshold counts as
/// not above it.
pub fn extract_isolines(grid: &GridModel, levels: &LevelSet) -> IsolineBuffers {
    let mut buffers = IsolineBuffers::new();
    extract_isolines_into(grid, levels, &mut buffers);
    buffers
}

/// Like [`extract_isolines`], but clears and refills caller-owned buffers.
pub fn extract_isolines_into(grid: &GridModel, levels: &LevelSet, out: &mut IsolineBuffers) {
    out.clear();

    let dims = grid.dims();
    for &threshold in levels.thresholds() {
        for i in 0..dims.width - 1 {
            for j in 0..dims.height - 1 {
                let lu = dims.point_index(i, j);
                let ru = dims.point_index(i + 1, j);
                let ld = dims.point_index(i, j + 1);
                let rd = dims.point_index(i + 1, j + 1);

                let lu_above = grid.intensities[lu] > threshold;
                let ru_above = grid.intensities[ru] > threshold;
                let ld_above = grid.intensities[ld] > threshold;
                let rd_above = grid.intensities[rd] > threshold;

                let above = usize::from(lu_above)
                    + usize::from(ru_above)
                    + usize::from(ld_above)
                    + usize::from(rd_above);
                if above == 0 || above == 4 {
                    continue;
                }

                if lu_above != ru_above {
                    push_crossing(grid, lu, ru, threshold, out);
                }
                if rd_above != ru_above {
                    push_crossing(grid, rd, ru, threshold, out);
                }
                if ld_above != rd_above {
                    push_crossing(grid, ld, rd, threshold, out);
                }
                if ld_above != lu_above {
                    push_crossing(grid, ld, lu, threshold, out);
                }
            }
        }
    }
}

/// Appends the interpolated crossing of the edge `(a, b)` at `threshold`.
///
/// The endpoints straddle the threshold, so the intensities differ and the
/// division is well defined. Every crossing gets its own vertex; the index
/// list just counts along.
fn push_crossing(
    grid: &GridModel,
    a: usize,
    b: usize,
    threshold: Threshold,
    out: &mut IsolineBuffers,
) {
    let value_a = grid.intensities[a] as f32;
    let value_b = grid.intensities[b] as f32;
    let q = (threshold as f32 - value_a) / (value_b - value_a);
    let vertex = grid.points[a].lerp(grid.points[b], q);

    out.indices.push(out.vertices.len() as u32);
    out.vertices.push(vertex);
}
