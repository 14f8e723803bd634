#![forbid(unsafe_code)]
//! isofield: animated scalar-field grids with marching-squares isoline extraction.
//!
//! Modules:
//! - field: scalar field evaluation and intensity quantization
//! - grid: point lattice, per-point intensity samples, triangulation indices
//! - contour: level sets and per-frame isoline extraction
//! - frame: input snapshots, resolution control, and the frame-loop driver
//!
//! The crate produces pure geometric data (grid points, intensity bytes,
//! triangle indices, isoline segment vertices); uploading those buffers to a
//! renderer is the caller's concern.
pub mod contour;
pub mod error;
pub mod field;
pub mod frame;
pub mod grid;

/// Convenient re-exports for common types. Import with `use isofield::prelude::*;`.
pub mod prelude {
    pub use crate::contour::{
        extract_isolines, extract_isolines_into, IsolineBuffers, LevelSet, Threshold,
    };
    pub use crate::error::{Error, Result};
    pub use crate::field::{quantize_intensity, ScalarField, WaveField};
    pub use crate::frame::{InputSnapshot, ResolutionControl, Simulation, SimulationConfig};
    pub use crate::grid::{GridDimensions, GridModel};
}
