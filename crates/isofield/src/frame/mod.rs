//! Per-frame orchestration: input snapshots, resolution control, and the
//! simulation driver that ties field, grid, and contour extraction together.
pub mod input;
pub mod resolution;
pub mod simulation;

pub use input::InputSnapshot;
pub use resolution::ResolutionControl;
pub use simulation::{Simulation, SimulationConfig};
