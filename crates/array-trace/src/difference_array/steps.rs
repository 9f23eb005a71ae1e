use serde::{Deserialize, Serialize};

pub(crate) const SKIP_REASON: &str = "R+1 out of bounds";

/// "Add `x` to every logical element in `[l, r]`".
///
/// Bounds are signed so that out-of-range requests coming from user input can
/// be represented and rejected by the engine rather than by a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeUpdate {
    #[serde(rename = "L")]
    pub l: i64,
    #[serde(rename = "R")]
    pub r: i64,
    #[serde(rename = "X")]
    pub x: i64,
}

impl RangeUpdate {
    pub fn new(l: i64, r: i64, x: i64) -> Self {
        Self { l, r, x }
    }
}

/// One of the two point-writes a range update makes to the difference array.
///
/// A trace is always `Add` followed by either `Subtract` or `Skip`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum UpdateTraceStep {
    /// `diff[index] += delta`, with `index == L`.
    Add { index: usize, delta: i64 },
    /// `diff[index] -= delta`, with `index == R + 1`.
    Subtract { index: usize, delta: i64 },
    /// `R + 1` fell off the end, so there is no second write.
    Skip { reason: String },
}

impl UpdateTraceStep {
    pub(crate) fn skip() -> Self {
        Self::Skip {
            reason: SKIP_REASON.to_string(),
        }
    }

    /// Index of the cell this step writes, if any.
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::Add { index, .. } | Self::Subtract { index, .. } => Some(*index),
            Self::Skip { .. } => None,
        }
    }

    /// Performs the write on `diff`, which must be the array the step was
    /// traced against. Wraps on overflow.
    pub(crate) fn apply(&self, diff: &mut [i64]) {
        match *self {
            Self::Add { index, delta } => diff[index] = diff[index].wrapping_add(delta),
            Self::Subtract { index, delta } => diff[index] = diff[index].wrapping_sub(delta),
            Self::Skip { .. } => {}
        }
    }

    /// Status line describing the step.
    pub fn status(&self) -> String {
        match self {
            Self::Add { index, delta } => format!("Step 1: Adding {delta} to index L ({index})"),
            Self::Subtract { index, delta } => {
                format!("Step 2: Subtracting {delta} from index R+1 ({index})")
            }
            Self::Skip { .. } => "Step 2: R+1 is out of bounds, no subtraction needed.".to_string(),
        }
    }
}

/// One index of the prefix-sum pass. `value` always equals `running_sum`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReconstructionStep {
    pub index: usize,
    pub running_sum: i64,
    pub value: i64,
}

impl ReconstructionStep {
    /// Writes the partial sum into `out[index]`; `out` spans the whole array.
    pub(crate) fn apply(&self, out: &mut [i64]) {
        out[self.index] = self.value;
    }

    pub fn status(&self) -> String {
        format!("Final[{}] = PrefixSum(Diff, {}) = {}", self.index, self.index, self.running_sum)
    }
}
