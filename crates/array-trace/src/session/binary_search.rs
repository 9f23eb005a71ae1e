use crate::binary_search::{trace, BinarySearchStep};
use crate::error::TraceError;
use crate::parse::{parse_array_input, parse_target};
use crate::random::ArrayGenerator;
use std::time::Duration;
use trace_player::{Playback, PlaybackOptions};
use tracing::debug;

/// Binary search input plus the playback of its latest trace.
///
/// Changing the array discards the trace. Starting a new search replaces the
/// trace and cancels any pending advance of the old one.
#[derive(Debug, Default)]
pub struct BinarySearchSession {
    array: Vec<i64>,
    target: Option<i64>,
    playback: Playback<BinarySearchStep>,
}

impl BinarySearchSession {
    pub fn new(options: PlaybackOptions) -> Self {
        Self {
            array: Vec::new(),
            target: None,
            playback: Playback::new(options),
        }
    }

    pub fn array(&self) -> &[i64] {
        &self.array
    }

    /// Target of the latest search.
    pub fn target(&self) -> Option<i64> {
        self.target
    }

    pub fn playback(&self) -> &Playback<BinarySearchStep> {
        &self.playback
    }

    /// Play/pause/step/seek controls.
    pub fn playback_mut(&mut self) -> &mut Playback<BinarySearchStep> {
        &mut self.playback
    }

    pub fn current_step(&self) -> Option<&BinarySearchStep> {
        self.playback.current()
    }

    pub fn set_array(&mut self, array: Vec<i64>) {
        self.array = array;
        self.target = None;
        self.playback.clear();
    }

    pub fn set_array_from_input(&mut self, input: &str) {
        self.set_array(parse_array_input(input));
    }

    pub fn generate_random(&mut self, generator: &mut ArrayGenerator) {
        self.set_array(generator.demo_array());
    }

    /// Traces a search for the parsed target and loads it, paused on the
    /// first step.
    ///
    /// An empty array is searched too; its trace is the single not-found step.
    ///
    /// # Errors
    ///
    /// [`TraceError::InvalidTarget`] if `target_input` is not a number. The
    /// previous trace is kept in that case.
    pub fn start_search(&mut self, target_input: &str) -> Result<&[BinarySearchStep], TraceError> {
        let target = parse_target(target_input)?;
        let steps = trace(&self.array, target);
        debug!(target, steps = steps.len(), "search started");
        self.target = Some(target);
        self.playback.load(steps);
        Ok(self.playback.player().steps())
    }

    pub fn advance_by(&mut self, elapsed: Duration) -> usize {
        self.playback.advance_by(elapsed)
    }

    /// Clears the array, the target and the trace.
    pub fn reset(&mut self) {
        self.array.clear();
        self.target = None;
        self.playback.clear();
    }
}
