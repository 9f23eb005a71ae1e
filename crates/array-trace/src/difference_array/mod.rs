//! Difference-array engine.
//!
//! For an array `A`, the difference array is `D[0] = A[0]` and
//! `D[i] = A[i] - A[i-1]`. Adding `X` to every element of `A[L..=R]` then
//! takes two writes to `D`: `D[L] += X` and, when it exists, `D[R+1] -= X`.
//! A prefix sum over `D` rebuilds the values.
//!
//! [`DifferenceArrayState::original`] is frozen at initialization. Updates only
//! touch `diff`, so after an update the two no longer agree; `reconstructed`
//! shows the effect of the updates once [`DifferenceArrayState::reconstruct`]
//! has run.
//!
//! Every operation borrows the state and returns a new one.
//!
//! Arithmetic wraps in two's complement. Differencing and prefix-summing are
//! exact inverses under wrapping, so values near `i64::MIN`/`i64::MAX`
//! round-trip unchanged.

mod steps;

pub use steps::{RangeUpdate, ReconstructionStep, UpdateTraceStep};

use crate::error::TraceError;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifferenceArrayState {
    original: Vec<i64>,
    diff: Vec<i64>,
    reconstructed: Vec<i64>,
}

impl DifferenceArrayState {
    /// Derives the difference array of `original` in one pass.
    ///
    /// `reconstructed` starts as zeros of the same length. An empty input
    /// gives an empty state on which updates are rejected and
    /// reconstruction emits nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use array_trace::DifferenceArrayState;
    ///
    /// let state = DifferenceArrayState::initialize(vec![10, 20, 30, 40, 50]);
    /// assert_eq!(state.diff(), &[10, 10, 10, 10, 10]);
    /// assert_eq!(state.reconstructed(), &[0, 0, 0, 0, 0]);
    /// ```
    pub fn initialize(original: Vec<i64>) -> Self {
        let mut diff = Vec::with_capacity(original.len());
        let mut previous = 0;
        for &value in &original {
            diff.push(value.wrapping_sub(previous));
            previous = value;
        }
        let reconstructed = vec![0; original.len()];
        debug!(len = original.len(), "difference array initialized");
        Self {
            original,
            diff,
            reconstructed,
        }
    }

    pub fn original(&self) -> &[i64] {
        &self.original
    }

    pub fn diff(&self) -> &[i64] {
        &self.diff
    }

    pub fn reconstructed(&self) -> &[i64] {
        &self.reconstructed
    }

    pub fn len(&self) -> usize {
        self.diff.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diff.is_empty()
    }

    /// Adds `update.x` to the logical range `[update.l, update.r]`.
    ///
    /// Returns the two-step trace (`Add` then `Subtract` or `Skip`) together
    /// with the updated state.
    ///
    /// # Errors
    ///
    /// [`TraceError::InvalidRange`] unless `0 <= L <= R <= len - 1`. `self` is
    /// never modified.
    ///
    /// # Examples
    ///
    /// ```
    /// use array_trace::{DifferenceArrayState, RangeUpdate, UpdateTraceStep};
    ///
    /// let state = DifferenceArrayState::initialize(vec![0; 5]);
    /// let (steps, next) = state.apply_range_update(RangeUpdate::new(1, 3, 10)).unwrap();
    /// assert_eq!(
    ///     steps,
    ///     vec![
    ///         UpdateTraceStep::Add { index: 1, delta: 10 },
    ///         UpdateTraceStep::Subtract { index: 4, delta: 10 },
    ///     ]
    /// );
    /// assert_eq!(next.diff(), &[0, 10, 0, 0, -10]);
    /// ```
    pub fn apply_range_update(
        &self,
        update: RangeUpdate,
    ) -> Result<(Vec<UpdateTraceStep>, Self), TraceError> {
        let len = self.diff.len();
        let RangeUpdate { l, r, x } = update;
        if l < 0 || l > r || r >= len as i64 {
            return Err(TraceError::InvalidRange { l, r, len });
        }
        let (l, r) = (l as usize, r as usize);

        let mut steps = Vec::with_capacity(2);
        steps.push(UpdateTraceStep::Add { index: l, delta: x });
        if r + 1 < len {
            steps.push(UpdateTraceStep::Subtract { index: r + 1, delta: x });
        } else {
            steps.push(UpdateTraceStep::skip());
        }

        let mut next = self.clone();
        for step in &steps {
            trace!(?step, "range update write");
            step.apply(&mut next.diff);
        }
        debug!(l, r, x, "range update applied");
        Ok((steps, next))
    }

    /// Prefix-sums `diff` left to right, one step per index.
    ///
    /// Depends only on `diff`, so running it again without an intervening
    /// update yields the same steps and the same state.
    pub fn reconstruct(&self) -> (Vec<ReconstructionStep>, Self) {
        let mut steps = Vec::with_capacity(self.diff.len());
        let mut reconstructed = Vec::with_capacity(self.diff.len());
        let mut running_sum: i64 = 0;
        for (index, &delta) in self.diff.iter().enumerate() {
            running_sum = running_sum.wrapping_add(delta);
            reconstructed.push(running_sum);
            steps.push(ReconstructionStep {
                index,
                running_sum,
                value: running_sum,
            });
        }
        debug!(len = steps.len(), "difference array reconstructed");
        let next = Self {
            original: self.original.clone(),
            diff: self.diff.clone(),
            reconstructed,
        };
        (steps, next)
    }
}
