//! The ordered collection of thresholds currently being contoured.
use crate::contour::Threshold;
use crate::error::{Error, Result};

/// Thresholds the contour extractor runs against, in insertion order.
///
/// Invariant: never empty. [`LevelSet::remove`] refuses to drop the last
/// threshold, and construction from an explicit list rejects empty input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelSet {
    thresholds: Vec<Threshold>,
}

/// Step added (mod 255) to the last threshold by [`LevelSet::add`].
const ADD_STEP: u16 = 200;

impl Default for LevelSet {
    fn default() -> Self {
        Self {
            thresholds: vec![200, 100, 50],
        }
    }
}

impl LevelSet {
    /// Creates the preset level set `[200, 100, 50]`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a level set from an explicit threshold list.
    pub fn from_thresholds(thresholds: Vec<Threshold>) -> Result<Self> {
        if thresholds.is_empty() {
            return Err(Error::InvalidConfig(
                "level set must hold at least one threshold".into(),
            ));
        }
        Ok(Self { thresholds })
    }

    /// Active thresholds in extraction order.
    pub fn thresholds(&self) -> &[Threshold] {
        &self.thresholds
    }

    /// Number of active thresholds, always at least 1.
    pub fn len(&self) -> usize {
        self.thresholds.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Appends `(last + 200) mod 255` and returns the new threshold.
    ///
    /// Always succeeds; duplicates are not checked. The modulus is 255, not
    /// 256, so the step is not a plain byte wrap.
    pub fn add(&mut self) -> Threshold {
        let last = *self
            .thresholds
            .last()
            .expect("level set is never empty");
        let next = ((last as u16 + ADD_STEP) % 255) as Threshold;
        self.thresholds.push(next);
        next
    }

    /// Removes the last threshold unless exactly one remains.
    ///
    /// Returns whether a threshold was removed.
    pub fn remove(&mut self) -> bool {
        if self.thresholds.len() > 1 {
            self.thresholds.pop();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_preset_thresholds() {
        assert_eq!(LevelSet::new().thresholds(), &[200, 100, 50]);
    }

    #[test]
    fn from_thresholds_rejects_empty_list() {
        assert!(LevelSet::from_thresholds(vec![]).is_err());
        assert!(LevelSet::from_thresholds(vec![128]).is_ok());
    }

    #[test]
    fn add_appends_last_plus_200_mod_255() {
        let mut levels = LevelSet::new();
        assert_eq!(levels.add(), 250); // (50 + 200) % 255
        assert_eq!(levels.add(), 195); // (250 + 200) % 255
        assert_eq!(levels.thresholds(), &[200, 100, 50, 250, 195]);
    }

    #[test]
    fn add_on_250_yields_195() {
        let mut levels = LevelSet::from_thresholds(vec![250]).unwrap();
        levels.add();
        assert_eq!(levels.thresholds(), &[250, 195]);
    }

    #[test]
    fn remove_keeps_at_least_one_threshold() {
        let mut levels = LevelSet::new();
        assert!(levels.remove());
        assert!(levels.remove());
        assert!(!levels.remove());
        assert_eq!(levels.thresholds(), &[200]);
        assert!(!levels.remove());
        assert_eq!(levels.len(), 1);
    }

    #[test]
    fn length_never_drops_below_one_under_mixed_operations() {
        let mut levels = LevelSet::new();
        for step in 0..64 {
            if step % 3 == 0 {
                levels.add();
            } else {
                levels.remove();
            }
            assert!(levels.len() >= 1);
        }
    }
}
