//! The frame-loop driver owning grid, level set, and isoline buffers.
use tracing::debug;

use crate::contour::{extract_isolines_into, IsolineBuffers, LevelSet};
use crate::error::{Error, Result};
use crate::field::ScalarField;
use crate::frame::{InputSnapshot, ResolutionControl};
use crate::grid::{GridDimensions, GridModel};

/// Configuration for a [`Simulation`].
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// Initial points-per-axis of the square grid.
    pub initial_quality: usize,
    /// Initial thresholds, in extraction order.
    pub thresholds: Vec<u8>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            initial_quality: 500,
            thresholds: vec![200, 100, 50],
        }
    }
}

impl SimulationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the initial points-per-axis.
    pub fn with_initial_quality(mut self, initial_quality: usize) -> Self {
        self.initial_quality = initial_quality;
        self
    }

    /// Sets the initial threshold list.
    pub fn with_thresholds(mut self, thresholds: Vec<u8>) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.initial_quality < GridDimensions::MIN_EXTENT {
            return Err(Error::InvalidConfig(format!(
                "initial_quality must be at least {}, got {}",
                GridDimensions::MIN_EXTENT,
                self.initial_quality
            )));
        }
        if self.thresholds.is_empty() {
            return Err(Error::InvalidConfig(
                "thresholds must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Runs the synchronous per-frame pipeline: apply input, advance time,
/// refresh intensities, extract isolines.
///
/// Everything is single-threaded and runs to completion within
/// [`Simulation::advance`]; after it returns, the grid and isoline buffers
/// are a consistent snapshot for the renderer to consume.
pub struct Simulation {
    field: Box<dyn ScalarField>,
    resolution: ResolutionControl,
    grid: GridModel,
    levels: LevelSet,
    isolines: IsolineBuffers,
    time: f32,
}

impl Simulation {
    pub fn new(config: SimulationConfig, field: Box<dyn ScalarField>) -> Result<Self> {
        config.validate()?;
        let grid = GridModel::generate(GridDimensions::square(config.initial_quality))?;
        Ok(Self {
            field,
            resolution: ResolutionControl::new(config.initial_quality),
            grid,
            levels: LevelSet::from_thresholds(config.thresholds)?,
            isolines: IsolineBuffers::new(),
            time: 0.0,
        })
    }

    /// Advances one frame: applies held input, accumulates `dt` seconds,
    /// refreshes every intensity sample, and rebuilds the isoline buffers.
    ///
    /// Held input is applied once per call, so resize and threshold rates
    /// track the caller's frame cadence rather than wall-clock time. Fails
    /// only when a resolution decrease lands on degenerate dimensions; the
    /// previous grid is kept intact in that case.
    pub fn advance(&mut self, dt: f32, input: &InputSnapshot) -> Result<()> {
        self.apply_input(input)?;
        self.time += dt;
        self.grid.refresh(self.field.as_ref(), self.time);
        extract_isolines_into(&self.grid, &self.levels, &mut self.isolines);
        Ok(())
    }

    /// Applies at most one action per frame, in fixed priority order:
    /// decrease resolution, increase resolution, add threshold, remove
    /// threshold.
    fn apply_input(&mut self, input: &InputSnapshot) -> Result<()> {
        if input.decrease_resolution {
            if self.resolution.decrease() {
                self.regenerate_grid()?;
            }
        } else if input.increase_resolution {
            self.resolution.increase();
            self.regenerate_grid()?;
        } else if input.add_threshold {
            let added = self.levels.add();
            debug!("Appended threshold {added}; {} active.", self.levels.len());
        } else if input.remove_threshold && self.levels.remove() {
            debug!("Removed last threshold; {} active.", self.levels.len());
        }
        Ok(())
    }

    /// Replaces the grid wholesale for the current quality, discarding the
    /// old buffers.
    fn regenerate_grid(&mut self) -> Result<()> {
        self.grid = GridModel::generate(GridDimensions::square(self.resolution.quality()))?;
        Ok(())
    }

    /// Grid snapshot for mesh and index buffer uploads.
    pub fn grid(&self) -> &GridModel {
        &self.grid
    }

    /// Active level set.
    pub fn levels(&self) -> &LevelSet {
        &self.levels
    }

    /// Isoline snapshot for line buffer uploads; pairs of consecutive
    /// vertices form segments.
    pub fn isolines(&self) -> &IsolineBuffers {
        &self.isolines
    }

    /// Elapsed simulation time in seconds.
    pub fn time(&self) -> f32 {
        self.time
    }

    /// Current points-per-axis.
    pub fn quality(&self) -> usize {
        self.resolution.quality()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::WaveField;
    use crate::grid::DEFAULT_INTENSITY;

    fn small_sim(quality: usize) -> Simulation {
        let config = SimulationConfig::new()
            .with_initial_quality(quality)
            .with_thresholds(vec![100]);
        Simulation::new(config, Box::new(WaveField::new())).unwrap()
    }

    #[test]
    fn config_defaults_match_startup_state() {
        let config = SimulationConfig::new();
        assert_eq!(config.initial_quality, 500);
        assert_eq!(config.thresholds, vec![200, 100, 50]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn config_rejects_degenerate_quality_and_empty_thresholds() {
        assert!(SimulationConfig::new()
            .with_initial_quality(1)
            .validate()
            .is_err());
        assert!(SimulationConfig::new()
            .with_thresholds(vec![])
            .validate()
            .is_err());
    }

    #[test]
    fn advance_accumulates_time_and_fills_buffers() {
        let mut sim = small_sim(16);
        assert!(sim
            .grid()
            .intensities
            .iter()
            .all(|&v| v == DEFAULT_INTENSITY));

        sim.advance(0.25, &InputSnapshot::idle()).unwrap();
        sim.advance(0.25, &InputSnapshot::idle()).unwrap();

        assert!((sim.time() - 0.5).abs() < 1e-6);
        assert!(sim.grid().intensities.iter().any(|&v| v != DEFAULT_INTENSITY));
        assert_eq!(sim.isolines().indices.len(), sim.isolines().vertices.len());
    }

    #[test]
    fn held_decrease_steps_once_per_frame() {
        let mut sim = small_sim(50);
        let held = InputSnapshot {
            decrease_resolution: true,
            ..InputSnapshot::idle()
        };

        sim.advance(0.016, &held).unwrap();
        assert_eq!(sim.quality(), 40);
        assert_eq!(sim.grid().points.len(), 40 * 40);

        sim.advance(0.016, &held).unwrap();
        assert_eq!(sim.quality(), 30);
    }

    #[test]
    fn held_increase_grows_without_bound() {
        let mut sim = small_sim(16);
        let held = InputSnapshot {
            increase_resolution: true,
            ..InputSnapshot::idle()
        };

        for _ in 0..3 {
            sim.advance(0.016, &held).unwrap();
        }
        assert_eq!(sim.quality(), 46);
        assert_eq!(sim.grid().indices.len(), 6 * 45 * 45);
    }

    #[test]
    fn decrease_outranks_other_held_inputs() {
        let mut sim = small_sim(50);
        let all_held = InputSnapshot {
            decrease_resolution: true,
            increase_resolution: true,
            add_threshold: true,
            remove_threshold: true,
        };

        sim.advance(0.016, &all_held).unwrap();

        assert_eq!(sim.quality(), 40);
        assert_eq!(sim.levels().thresholds(), &[100]);
    }

    #[test]
    fn held_add_appends_one_threshold_per_frame() {
        let mut sim = small_sim(8);
        let held = InputSnapshot {
            add_threshold: true,
            ..InputSnapshot::idle()
        };

        sim.advance(0.016, &held).unwrap();
        sim.advance(0.016, &held).unwrap();

        // (100 + 200) % 255 = 45, then (45 + 200) % 255 = 245.
        assert_eq!(sim.levels().thresholds(), &[100, 45, 245]);
    }

    #[test]
    fn held_remove_keeps_the_floor_threshold() {
        let mut sim = small_sim(8);
        let held = InputSnapshot {
            remove_threshold: true,
            ..InputSnapshot::idle()
        };

        for _ in 0..4 {
            sim.advance(0.016, &held).unwrap();
        }
        assert_eq!(sim.levels().thresholds(), &[100]);
    }

    #[test]
    fn decrease_below_minimum_dimensions_fails_and_keeps_grid() {
        let mut sim = small_sim(11);
        let held = InputSnapshot {
            decrease_resolution: true,
            ..InputSnapshot::idle()
        };

        // 11 steps to 1, which is below the 2-point minimum per axis.
        let err = sim.advance(0.016, &held).unwrap_err();
        assert!(matches!(err, Error::InvalidDimensions { .. }));
        assert_eq!(sim.grid().points.len(), 11 * 11);
    }
}
