//! Auto-advancing playback: a [`StepsPlayer`] paired with a [`Scheduler`].

use crate::options::PlaybackOptions;
use crate::player::StepsPlayer;
use crate::scheduler::Scheduler;
use std::time::Duration;
use tracing::debug;

/// Plays a trace forward on a timer.
///
/// While playing, exactly one advance is pending. Every operation that
/// supersedes the current position (loading a new trace, pausing, resetting,
/// manual navigation) cancels that advance first, so a stale timer can never
/// move the cursor of a sequence it was not scheduled for.
#[derive(Debug)]
pub struct Playback<T> {
    player: StepsPlayer<T>,
    scheduler: Scheduler,
    options: PlaybackOptions,
}

impl<T> Default for Playback<T> {
    fn default() -> Self {
        Self::new(PlaybackOptions::default())
    }
}

impl<T> Playback<T> {
    pub fn new(options: PlaybackOptions) -> Self {
        Self {
            player: StepsPlayer::empty(),
            scheduler: Scheduler::new(),
            options,
        }
    }

    pub fn player(&self) -> &StepsPlayer<T> {
        &self.player
    }

    pub fn current(&self) -> Option<&T> {
        self.player.current()
    }

    pub fn options(&self) -> PlaybackOptions {
        self.options
    }

    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    pub fn is_playing(&self) -> bool {
        self.player.is_playing()
    }

    pub fn has_pending_advance(&self) -> bool {
        self.scheduler.has_pending()
    }

    /// Replaces the trace. Playback stops and the cursor rewinds.
    pub fn load(&mut self, steps: Vec<T>) {
        self.scheduler.cancel_all();
        debug!(steps = steps.len(), "loaded trace");
        self.player.load(steps);
    }

    pub fn clear(&mut self) {
        self.load(Vec::new());
    }

    /// Changes the speed. A pending advance is rescheduled with the new delay.
    pub fn set_options(&mut self, options: PlaybackOptions) {
        self.options = options;
        if self.scheduler.has_pending() {
            self.schedule();
        }
    }

    /// Starts auto-advance. Returns `false` when already on the last step.
    pub fn play(&mut self) -> bool {
        if self.player.play() {
            self.schedule();
            true
        } else {
            false
        }
    }

    pub fn pause(&mut self) {
        self.scheduler.cancel_all();
        self.player.pause();
    }

    /// Rewinds to the first step and pauses.
    pub fn reset(&mut self) {
        self.scheduler.cancel_all();
        self.player.reset();
    }

    pub fn step_forward(&mut self) -> bool {
        let moved = self.player.step_forward();
        self.restart_timer();
        moved
    }

    pub fn step_back(&mut self) -> bool {
        let moved = self.player.step_back();
        self.restart_timer();
        moved
    }

    pub fn seek(&mut self, index: usize) {
        self.player.seek(index);
        self.restart_timer();
    }

    /// Moves time forward by `elapsed`, applying every advance that falls due.
    ///
    /// Returns how many steps the cursor moved.
    pub fn advance_by(&mut self, elapsed: Duration) -> usize {
        let deadline = self.scheduler.now() + elapsed;
        let mut moved = 0;
        while self.scheduler.run_until(deadline) {
            if self.player.tick() {
                moved += 1;
            }
            if !self.player.is_playing() {
                break;
            }
            self.schedule();
        }
        self.scheduler.run_until(deadline);
        moved
    }

    fn schedule(&mut self) {
        self.scheduler.schedule_advance(self.options.step_delay());
    }

    // Manual navigation while playing restarts the delay from the new step.
    fn restart_timer(&mut self) {
        self.scheduler.cancel_all();
        if !self.player.is_playing() {
            return;
        }
        if self.player.is_at_end() {
            self.player.pause();
        } else {
            self.schedule();
        }
    }
}
