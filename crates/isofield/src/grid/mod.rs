//! Grid lattice over the normalized `[-1, 1]^2` domain.
//!
//! This module defines [`GridDimensions`] and [`GridModel`]: a regular point
//! lattice with one intensity byte per point and a triangle index list that
//! covers the lattice as a continuous mesh.
pub mod model;

pub use model::{GridModel, DEFAULT_INTENSITY};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Dimensions of a grid in points per axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridDimensions {
    /// Number of points along the X axis.
    pub width: usize,
    /// Number of points along the Y axis.
    pub height: usize,
}

impl GridDimensions {
    /// Minimum point count per axis; anything smaller has no cells to mesh
    /// and a zero normalization denominator.
    pub const MIN_EXTENT: usize = 2;

    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Creates square dimensions with `extent` points per axis.
    pub fn square(extent: usize) -> Self {
        Self::new(extent, extent)
    }

    /// Validates the dimensions, returning an error if either axis is
    /// degenerate.
    pub fn validate(&self) -> Result<()> {
        if self.width < Self::MIN_EXTENT || self.height < Self::MIN_EXTENT {
            return Err(Error::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Total number of lattice points.
    pub fn point_count(&self) -> usize {
        self.width * self.height
    }

    /// Number of interior cells.
    pub fn cell_count(&self) -> usize {
        (self.width - 1) * (self.height - 1)
    }

    /// Length of the triangle index list: two triangles per cell.
    pub fn index_count(&self) -> usize {
        6 * self.cell_count()
    }

    /// Flat index of the point at column `i`, row `j`. Columns are the major
    /// axis: points of one column are contiguous.
    #[inline]
    pub fn point_index(&self, i: usize, j: usize) -> usize {
        i * self.height + j
    }
}
