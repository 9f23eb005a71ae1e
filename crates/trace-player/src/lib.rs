//! trace-player - playback of recorded algorithm traces
//!
//! A trace is an immutable `Vec<T>` of steps. This crate walks a cursor over
//! such a sequence and drives it forward on a timer, without knowing anything
//! about the algorithm that produced the steps.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use trace_player::{Playback, PlaybackOptions};
//!
//! let mut playback = Playback::new(PlaybackOptions::fixed(100));
//! playback.load(vec!["low", "mid", "high"]);
//! playback.play();
//!
//! assert_eq!(playback.advance_by(Duration::from_millis(250)), 2);
//! assert_eq!(playback.player().current(), Some(&"high"));
//! assert!(!playback.is_playing());
//! ```

pub mod options;
pub mod playback;
pub mod player;
pub mod scheduler;

pub use options::{PlaybackOptions, DEFAULT_ANIMATION_DELAY_MS, DEFAULT_SPEED, MAX_SPEED};
pub use playback::Playback;
pub use player::StepsPlayer;
pub use scheduler::{AdvanceHandle, Scheduler};
