//! Level sets and marching-squares isoline extraction.
//!
//! This module defines the ordered [`LevelSet`] of active thresholds and the
//! per-frame extraction of isoline segment vertices from a grid.
pub mod extractor;
pub mod level_set;

pub use extractor::{extract_isolines, extract_isolines_into, IsolineBuffers};
pub use level_set::LevelSet;

/// An isovalue used to classify grid points as above/below for contouring.
pub type Threshold = u8;
