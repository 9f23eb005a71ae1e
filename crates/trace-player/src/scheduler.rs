//! Cooperative timed advances on a virtual clock.
//!
//! The scheduler never sleeps and never spawns anything. The host moves time
//! forward with [`Scheduler::advance_by`] (or [`Scheduler::run_until`]) and
//! learns whether the pending advance fired. At most one advance is in flight
//! at a time.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HandleState {
    Pending,
    Fired,
    Cancelled,
}

/// Handle to a scheduled advance.
///
/// Clones share state, so a handle kept by the caller observes the scheduler
/// firing or dropping the advance. Cancelling before the advance fires
/// guarantees it never fires.
#[derive(Debug, Clone)]
pub struct AdvanceHandle {
    state: Rc<Cell<HandleState>>,
}

impl AdvanceHandle {
    fn new() -> Self {
        Self {
            state: Rc::new(Cell::new(HandleState::Pending)),
        }
    }

    /// Cancels the advance. No effect once it has fired or was cancelled.
    pub fn cancel(&self) {
        if self.state.get() == HandleState::Pending {
            self.state.set(HandleState::Cancelled);
        }
    }

    pub fn is_pending(&self) -> bool {
        self.state.get() == HandleState::Pending
    }

    pub fn is_cancelled(&self) -> bool {
        self.state.get() == HandleState::Cancelled
    }

    pub fn has_fired(&self) -> bool {
        self.state.get() == HandleState::Fired
    }

    fn fire(&self) {
        self.state.set(HandleState::Fired);
    }
}

#[derive(Debug)]
struct PendingAdvance {
    due: Duration,
    handle: AdvanceHandle,
}

/// Single-slot timer queue driven by a virtual clock.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use trace_player::Scheduler;
///
/// let mut scheduler = Scheduler::new();
/// let handle = scheduler.schedule_advance(Duration::from_millis(500));
///
/// assert_eq!(scheduler.advance_by(Duration::from_millis(499)), 0);
/// assert_eq!(scheduler.advance_by(Duration::from_millis(1)), 1);
/// assert!(handle.has_fired());
/// ```
#[derive(Debug, Default)]
pub struct Scheduler {
    now: Duration,
    pending: Option<PendingAdvance>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Schedules one advance `delay` from now, cancelling any advance that is
    /// still pending.
    pub fn schedule_advance(&mut self, delay: Duration) -> AdvanceHandle {
        self.cancel_all();
        let handle = AdvanceHandle::new();
        let due = self.now + delay;
        trace!(?due, "scheduled advance");
        self.pending = Some(PendingAdvance {
            due,
            handle: handle.clone(),
        });
        handle
    }

    pub fn has_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|p| p.handle.is_pending())
    }

    /// Drops the pending advance, if any.
    pub fn cancel_all(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.handle.cancel();
        }
    }

    /// Moves the clock towards `deadline`.
    ///
    /// If the pending advance is due at or before `deadline`, the clock stops
    /// at its due time, the advance fires and `true` is returned. Otherwise
    /// the clock lands on `deadline`. The clock never moves backwards.
    pub fn run_until(&mut self, deadline: Duration) -> bool {
        match self.pending.take() {
            Some(pending) if pending.handle.is_pending() && pending.due <= deadline => {
                self.now = self.now.max(pending.due);
                pending.handle.fire();
                trace!(now = ?self.now, "advance fired");
                true
            }
            Some(pending) if pending.handle.is_pending() => {
                self.pending = Some(pending);
                self.now = self.now.max(deadline);
                false
            }
            _ => {
                self.now = self.now.max(deadline);
                false
            }
        }
    }

    /// Moves the clock by `elapsed` and returns how many advances fired.
    pub fn advance_by(&mut self, elapsed: Duration) -> usize {
        let deadline = self.now + elapsed;
        let fired = self.run_until(deadline);
        self.now = deadline;
        usize::from(fired)
    }
}
