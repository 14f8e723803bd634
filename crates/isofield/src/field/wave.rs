//! The built-in animated wave field.
use crate::field::ScalarField;

/// A superposition of travelling and standing waves, normalized to `[-1, 1]`:
///
/// ```text
/// f(x, y, t) = (sin(x + t + y) - cos(2y + t) * cos(x)
///               + sin(t/2) + cos(x * y) * sin(t/2)) / 4
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct WaveField;

impl WaveField {
    pub fn new() -> Self {
        Self
    }
}

impl ScalarField for WaveField {
    fn value(&self, x: f32, y: f32, t: f32) -> f32 {
        ((x + t + y).sin() - (2.0 * y + t).cos() * x.cos()
            + (t / 2.0).sin()
            + (x * y).cos() * (t / 2.0).sin())
            / 4.0
    }
}
