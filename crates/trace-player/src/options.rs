//! Playback configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Upper end of the speed slider. The delay between steps is
/// `MAX_SPEED - speed` milliseconds.
pub const MAX_SPEED: u64 = 3500;

/// Slider position used when nothing else is configured (2500 ms per step).
pub const DEFAULT_SPEED: u64 = 1000;

/// Fixed per-step delay used by multi-step animated operations.
pub const DEFAULT_ANIMATION_DELAY_MS: u64 = 800;

/// Options controlling auto-advance.
///
/// `speed` is inverted: a larger value means a shorter delay between steps.
/// Deserializing a partial document fills the missing fields from
/// [`PlaybackOptions::default`].
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use trace_player::PlaybackOptions;
///
/// assert_eq!(PlaybackOptions::default().step_delay(), Duration::from_millis(2500));
/// assert_eq!(PlaybackOptions::with_speed(3500).step_delay(), Duration::ZERO);
/// assert_eq!(PlaybackOptions::fixed(800).step_delay(), Duration::from_millis(800));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlaybackOptions {
    pub speed: u64,
}

impl Default for PlaybackOptions {
    fn default() -> Self {
        Self { speed: DEFAULT_SPEED }
    }
}

impl PlaybackOptions {
    /// Options for a slider position, clamped to `[0, MAX_SPEED]`.
    pub fn with_speed(speed: u64) -> Self {
        Self {
            speed: speed.min(MAX_SPEED),
        }
    }

    /// Options whose step delay is exactly `delay_ms` milliseconds.
    ///
    /// Delays longer than `MAX_SPEED` milliseconds are clamped to it.
    pub fn fixed(delay_ms: u64) -> Self {
        Self {
            speed: MAX_SPEED.saturating_sub(delay_ms),
        }
    }

    /// Time between two automatic advances.
    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(MAX_SPEED - self.speed.min(MAX_SPEED))
    }
}
