//! Scalar field evaluation for the animated grid.
//!
//! This module defines the [`ScalarField`] trait used by grid refreshes, the
//! built-in [`WaveField`], and the quantization from field values to the
//! intensity bytes stored per grid point.
pub mod wave;

pub use wave::WaveField;

/// Trait for a time-varying scalar field over normalized 2-D coordinates.
///
/// Implementations must be pure: the same `(x, y, t)` always yields the same
/// value, with no side effects.
pub trait ScalarField: Send + Sync {
    /// Evaluates the field at `(x, y)` in `[-1, 1]^2` at elapsed time `t`
    /// (seconds, starting at 0).
    fn value(&self, x: f32, y: f32, t: f32) -> f32;
}

/// Quantizes a field value to an intensity byte as `round(|value| * 255)`.
///
/// The narrowing wraps instead of saturating: magnitudes above 1.0 roll over
/// when reduced to a byte. Recorded intensity streams depend on this, so the
/// cast goes through `i64` rather than a float-to-`u8` cast (which saturates).
#[inline]
pub fn quantize_intensity(value: f32) -> u8 {
    (value.abs() * 255.0).round() as i64 as u8
}
