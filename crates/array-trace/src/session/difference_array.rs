use crate::difference_array::{DifferenceArrayState, RangeUpdate, ReconstructionStep, UpdateTraceStep};
use crate::error::TraceError;
use crate::parse::parse_array_input;
use std::borrow::Cow;
use std::time::Duration;
use trace_player::{PlaybackOptions, Scheduler, StepsPlayer, DEFAULT_ANIMATION_DELAY_MS};
use tracing::debug;

const INITIAL_STATUS: &str = "Initialize the array to begin.";
const INITIALIZED_STATUS: &str = "Difference array initialized. Formula: D[i] = A[i] - A[i-1]";
const INVALID_RANGE_STATUS: &str = "Error: Invalid L or R bounds.";
const RECONSTRUCTING_STATUS: &str = "Building final array: Final[i] = PrefixSum(Diff, i)";
const RECONSTRUCTED_STATUS: &str = "Final values calculated via Prefix Sum of the Difference Array.";
const CANCELLED_STATUS: &str = "Operation cancelled.";

#[derive(Debug)]
enum Animation {
    Update {
        update: RangeUpdate,
        player: StepsPlayer<UpdateTraceStep>,
        next: DifferenceArrayState,
    },
    Reconstruct {
        player: StepsPlayer<ReconstructionStep>,
        next: DifferenceArrayState,
    },
}

/// Difference-array state plus at most one running animation.
///
/// Range updates and reconstruction are animated: the first step is shown
/// immediately, each further step one delay later, and one delay after the
/// last step the precomputed state is committed. Until then every operation
/// that would start another trace is refused with [`TraceError::Busy`].
/// [`DifferenceArraySession::cancel`] drops the animation and leaves the
/// committed state exactly as it was.
#[derive(Debug)]
pub struct DifferenceArraySession {
    state: DifferenceArrayState,
    animation: Option<Animation>,
    scheduler: Scheduler,
    options: PlaybackOptions,
    status: String,
}

impl Default for DifferenceArraySession {
    fn default() -> Self {
        Self::new(PlaybackOptions::fixed(DEFAULT_ANIMATION_DELAY_MS))
    }
}

impl DifferenceArraySession {
    pub fn new(options: PlaybackOptions) -> Self {
        Self {
            state: DifferenceArrayState::default(),
            animation: None,
            scheduler: Scheduler::new(),
            options,
            status: INITIAL_STATUS.to_string(),
        }
    }

    /// Last committed state.
    pub fn state(&self) -> &DifferenceArrayState {
        &self.state
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    pub fn set_options(&mut self, options: PlaybackOptions) {
        self.options = options;
    }

    pub fn initialize(&mut self, original: Vec<i64>) -> Result<(), TraceError> {
        self.ensure_idle()?;
        self.state = DifferenceArrayState::initialize(original);
        self.status = INITIALIZED_STATUS.to_string();
        Ok(())
    }

    pub fn initialize_from_input(&mut self, input: &str) -> Result<(), TraceError> {
        self.initialize(parse_array_input(input))
    }

    /// Starts animating a range update.
    ///
    /// # Errors
    ///
    /// [`TraceError::Busy`] while another animation runs, or
    /// [`TraceError::InvalidRange`] for bad bounds. Neither changes the state.
    pub fn begin_update(&mut self, update: RangeUpdate) -> Result<(), TraceError> {
        self.ensure_idle()?;
        let (steps, next) = match self.state.apply_range_update(update) {
            Ok(traced) => traced,
            Err(err) => {
                self.status = INVALID_RANGE_STATUS.to_string();
                return Err(err);
            }
        };
        let player = StepsPlayer::new(steps);
        if let Some(step) = player.current() {
            self.status = step.status();
        }
        self.animation = Some(Animation::Update { update, player, next });
        self.schedule();
        Ok(())
    }

    /// Starts animating the prefix-sum pass. An empty array completes at once.
    pub fn begin_reconstruct(&mut self) -> Result<(), TraceError> {
        self.ensure_idle()?;
        let (steps, next) = self.state.reconstruct();
        if steps.is_empty() {
            self.state = next;
            self.status = RECONSTRUCTED_STATUS.to_string();
            return Ok(());
        }
        self.status = RECONSTRUCTING_STATUS.to_string();
        self.animation = Some(Animation::Reconstruct {
            player: StepsPlayer::new(steps),
            next,
        });
        self.schedule();
        Ok(())
    }

    /// Moves time forward. Returns `true` if the running animation completed.
    pub fn advance_by(&mut self, elapsed: Duration) -> bool {
        let deadline = self.scheduler.now() + elapsed;
        let mut completed = false;
        while self.scheduler.run_until(deadline) {
            if self.step_animation() {
                completed = true;
                break;
            }
            self.schedule();
        }
        self.scheduler.run_until(deadline);
        completed
    }

    /// Skips the remaining steps and commits the animation's result.
    pub fn complete(&mut self) {
        self.scheduler.cancel_all();
        self.finish();
    }

    /// Drops the running animation without touching the committed state.
    pub fn cancel(&mut self) {
        self.scheduler.cancel_all();
        if self.animation.take().is_some() {
            debug!("animation cancelled");
            self.status = CANCELLED_STATUS.to_string();
        }
    }

    /// Difference array as currently displayed: the committed `diff` with the
    /// writes played so far applied.
    pub fn displayed_diff(&self) -> Cow<'_, [i64]> {
        match &self.animation {
            Some(Animation::Update { player, .. }) => {
                let mut diff = self.state.diff().to_vec();
                for step in player.played() {
                    step.apply(&mut diff);
                }
                Cow::Owned(diff)
            }
            _ => Cow::Borrowed(self.state.diff()),
        }
    }

    /// Reconstructed array as currently displayed. While reconstructing,
    /// indices not reached yet show `0`.
    pub fn displayed_reconstructed(&self) -> Cow<'_, [i64]> {
        match &self.animation {
            Some(Animation::Reconstruct { player, .. }) => {
                let mut out = vec![0; self.state.len()];
                for step in player.played() {
                    step.apply(&mut out);
                }
                Cow::Owned(out)
            }
            _ => Cow::Borrowed(self.state.reconstructed()),
        }
    }

    /// Index touched by the step on screen, if any.
    pub fn active_index(&self) -> Option<usize> {
        match &self.animation {
            Some(Animation::Update { player, .. }) => player.current().and_then(UpdateTraceStep::index),
            Some(Animation::Reconstruct { player, .. }) => player.current().map(|step| step.index),
            None => None,
        }
    }

    fn ensure_idle(&self) -> Result<(), TraceError> {
        if self.animation.is_some() {
            return Err(TraceError::Busy);
        }
        Ok(())
    }

    fn schedule(&mut self) {
        self.scheduler.schedule_advance(self.options.step_delay());
    }

    // Shows the next step, or commits when the last one has had its turn.
    fn step_animation(&mut self) -> bool {
        let finished = match &mut self.animation {
            Some(Animation::Update { player, .. }) => {
                let moved = player.step_forward();
                if let (true, Some(step)) = (moved, player.current()) {
                    self.status = step.status();
                }
                !moved
            }
            Some(Animation::Reconstruct { player, .. }) => !player.step_forward(),
            None => true,
        };
        if finished {
            self.finish();
        }
        finished
    }

    fn finish(&mut self) {
        let Some(animation) = self.animation.take() else {
            return;
        };
        match animation {
            Animation::Update { update, next, .. } => {
                self.state = next;
                self.status = format!("Update [{}, {}] by {} completed.", update.l, update.r, update.x);
            }
            Animation::Reconstruct { next, .. } => {
                self.state = next;
                self.status = RECONSTRUCTED_STATUS.to_string();
            }
        }
        debug!(status = %self.status, "animation committed");
    }
}
