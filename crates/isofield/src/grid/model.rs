//! Grid storage: points, intensity samples, and triangulation indices.
use glam::Vec2;
use tracing::debug;

use crate::error::Result;
use crate::field::{quantize_intensity, ScalarField};
use crate::grid::GridDimensions;

/// Intensity assigned to every point on (re)generation, before the first
/// field refresh.
pub const DEFAULT_INTENSITY: u8 = 255;

/// A regular lattice over `[-1, 1]^2` with per-point intensity bytes and a
/// triangle index list covering the lattice as a continuous mesh.
///
/// Invariant: `points.len() == intensities.len() == dims.point_count()` and
/// `indices.len() == dims.index_count()`. Points and indices only change on
/// [`GridModel::generate`]; intensities are rewritten in place by
/// [`GridModel::refresh`].
#[derive(Clone, Debug)]
pub struct GridModel {
    dims: GridDimensions,
    /// Lattice points in normalized space, column-major per
    /// [`GridDimensions::point_index`].
    pub points: Vec<Vec2>,
    /// One intensity byte per point.
    pub intensities: Vec<u8>,
    /// Triangle indices, six per cell, consistent winding across the mesh.
    pub indices: Vec<u32>,
}

impl GridModel {
    /// Allocates a fresh grid for the given dimensions.
    ///
    /// Corners land exactly on `(-1, -1)` and `(1, 1)`; each axis is
    /// normalized by its own extent, so asymmetric dimensions stretch the
    /// lattice rather than preserving aspect. Intensities start at
    /// [`DEFAULT_INTENSITY`] until the first [`GridModel::refresh`].
    pub fn generate(dims: GridDimensions) -> Result<Self> {
        dims.validate()?;

        let mut points = Vec::with_capacity(dims.point_count());
        let x_denom = (dims.width - 1) as f32;
        let y_denom = (dims.height - 1) as f32;
        for i in 0..dims.width {
            for j in 0..dims.height {
                let x = ((2 * i) as f32 - x_denom) / x_denom;
                let y = ((2 * j) as f32 - y_denom) / y_denom;
                points.push(Vec2::new(x, y));
            }
        }

        let mut indices = Vec::with_capacity(dims.index_count());
        for i in 0..dims.width - 1 {
            for j in 0..dims.height - 1 {
                indices.push(dims.point_index(i, j) as u32);
                indices.push(dims.point_index(i + 1, j) as u32);
                indices.push(dims.point_index(i, j + 1) as u32);
                indices.push(dims.point_index(i + 1, j) as u32);
                indices.push(dims.point_index(i + 1, j + 1) as u32);
                indices.push(dims.point_index(i, j + 1) as u32);
            }
        }

        debug!(
            "Generated {}x{} grid: {} points, {} indices.",
            dims.width,
            dims.height,
            points.len(),
            indices.len()
        );

        Ok(Self {
            dims,
            points,
            intensities: vec![DEFAULT_INTENSITY; dims.point_count()],
            indices,
        })
    }

    /// Dimensions this grid was generated for.
    pub fn dims(&self) -> GridDimensions {
        self.dims
    }

    /// Recomputes every intensity sample from `field` at elapsed time `t`.
    ///
    /// Rewrites the intensity array in place; points and indices are
    /// untouched.
    pub fn refresh(&mut self, field: &dyn ScalarField, t: f32) {
        for (intensity, point) in self.intensities.iter_mut().zip(&self.points) {
            *intensity = quantize_intensity(field.value(point.x, point.y, t));
        }
    }

    /// Intensity at column `i`, row `j`.
    #[inline]
    pub fn intensity_at(&self, i: usize, j: usize) -> u8 {
        self.intensities[self.dims.point_index(i, j)]
    }

    /// Point at column `i`, row `j`.
    #[inline]
    pub fn point_at(&self, i: usize, j: usize) -> Vec2 {
        self.points[self.dims.point_index(i, j)]
    }
}
