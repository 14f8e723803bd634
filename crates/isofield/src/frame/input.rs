//! Per-frame input snapshot.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Held-key state sampled once per frame by the platform layer.
///
/// Each flag means "currently held", not "pressed this frame": its effect
/// repeats every frame while the flag stays set. Passing a snapshot in keeps
/// the controllers free of process-wide input state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct InputSnapshot {
    /// Step the grid resolution down.
    pub decrease_resolution: bool,
    /// Step the grid resolution up.
    pub increase_resolution: bool,
    /// Append a threshold to the level set.
    pub add_threshold: bool,
    /// Drop the most recently added threshold.
    pub remove_threshold: bool,
}

impl InputSnapshot {
    /// A snapshot with nothing held.
    pub fn idle() -> Self {
        Self::default()
    }
}
