//! Grid resolution ("quality") stepping.

/// Tracks the square-grid resolution and applies discrete step requests.
///
/// The caller re-evaluates held input once per rendered frame, so the
/// step rate is coupled to frame rate, exactly like the system this models.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolutionControl {
    quality: usize,
}

impl ResolutionControl {
    /// Points added or removed per axis by one step.
    pub const STEP: usize = 10;

    pub fn new(quality: usize) -> Self {
        Self { quality }
    }

    /// Current points-per-axis of the square grid.
    pub fn quality(&self) -> usize {
        self.quality
    }

    /// Steps the resolution down; returns whether anything changed.
    ///
    /// The guard is checked before stepping: a decrease is permitted only
    /// while `quality > 10`, so stepping from 11 lands on 1 rather than
    /// stopping at 10. Compatibility requires keeping that asymmetry.
    pub fn decrease(&mut self) -> bool {
        if self.quality > Self::STEP {
            self.quality -= Self::STEP;
            true
        } else {
            false
        }
    }

    /// Steps the resolution up unconditionally; always reports a change.
    pub fn increase(&mut self) -> bool {
        self.quality += Self::STEP;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decrease_steps_down_by_ten() {
        let mut control = ResolutionControl::new(500);
        assert!(control.decrease());
        assert_eq!(control.quality(), 490);
    }

    #[test]
    fn decrease_stops_at_ten_for_round_qualities() {
        let mut control = ResolutionControl::new(20);
        assert!(control.decrease());
        assert_eq!(control.quality(), 10);
        assert!(!control.decrease());
        assert_eq!(control.quality(), 10);
    }

    #[test]
    fn decrease_from_eleven_lands_on_one() {
        let mut control = ResolutionControl::new(11);
        assert!(control.decrease());
        assert_eq!(control.quality(), 1);
        assert!(!control.decrease());
    }

    #[test]
    fn increase_is_unbounded() {
        let mut control = ResolutionControl::new(10);
        for _ in 0..5 {
            assert!(control.increase());
        }
        assert_eq!(control.quality(), 60);
    }
}
