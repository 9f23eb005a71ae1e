//! Binary search tracer.
//!
//! [`trace`] runs classic bounded bisection and records one
//! [`BinarySearchStep`] per probe. The result is only meaningful for arrays
//! sorted ascending; unsorted input is still traced mechanically. With
//! duplicates, whichever matching index the bisection lands on is reported.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::{debug, trace as trace_event};

/// How the probed value compared to the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Comparison {
    /// `array[mid] == target`.
    Equal,
    /// `array[mid] < target`, the search continues right of `mid`.
    Less,
    /// `array[mid] > target`, the search continues left of `mid`.
    Greater,
    /// The window is empty (`low > high`); the target is absent.
    Exhausted,
}

/// One observation of the search loop.
///
/// `low` and `high` are the inclusive window bounds the step was taken with.
/// They are signed because `high` reaches `-1` when the search exhausts at
/// the left edge (or the array is empty).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BinarySearchStep {
    pub low: i64,
    pub high: i64,
    /// Index probed by this step. `None` on the exhaustion step.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mid: Option<usize>,
    pub outcome: Comparison,
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub found_index: Option<usize>,
    pub message: String,
}

impl BinarySearchStep {
    /// True for the last step of a trace.
    pub fn is_terminal(&self) -> bool {
        matches!(self.outcome, Comparison::Equal | Comparison::Exhausted)
    }
}

/// Traces a binary search for `target` in `array`.
///
/// Every probe emits one step. A probe that hits the target is itself the
/// terminal step (`found = true`). When the window runs empty a final
/// [`Comparison::Exhausted`] step with `low > high` is appended, so the trace
/// is never empty: an empty array yields exactly that one step.
///
/// # Examples
///
/// ```
/// use array_trace::binary_search::{trace, Comparison};
///
/// let steps = trace(&[2, 4, 6, 8], 6);
/// assert_eq!(steps.len(), 2);
/// assert_eq!(steps[0].mid, Some(1));
/// assert_eq!(steps[0].outcome, Comparison::Less);
/// assert!(steps[1].found);
/// assert_eq!(steps[1].found_index, Some(2));
///
/// let steps = trace(&[], 1);
/// assert_eq!(steps.len(), 1);
/// assert!(!steps[0].found);
/// ```
pub fn trace(array: &[i64], target: i64) -> Vec<BinarySearchStep> {
    let mut steps = Vec::new();
    let mut low: i64 = 0;
    let mut high: i64 = array.len() as i64 - 1;

    while low <= high {
        let mid = ((low + high) / 2) as usize;
        let value = array[mid];
        let (outcome, message) = match value.cmp(&target) {
            Ordering::Equal => (
                Comparison::Equal,
                format!("arr[{mid}] = {value} equals target {target}, found at index {mid}"),
            ),
            Ordering::Less => (
                Comparison::Less,
                format!("arr[{mid}] = {value} < {target}, search right half"),
            ),
            Ordering::Greater => (
                Comparison::Greater,
                format!("arr[{mid}] = {value} > {target}, search left half"),
            ),
        };
        trace_event!(low, high, mid, outcome = ?outcome, "binary search probe");

        let found = outcome == Comparison::Equal;
        steps.push(BinarySearchStep {
            low,
            high,
            mid: Some(mid),
            outcome,
            found,
            found_index: found.then_some(mid),
            message,
        });

        match outcome {
            Comparison::Equal => {
                debug!(len = array.len(), target, steps = steps.len(), found, "binary search traced");
                return steps;
            }
            Comparison::Less => low = mid as i64 + 1,
            _ => high = mid as i64 - 1,
        }
    }

    let message = if array.is_empty() {
        format!("Array is empty, {target} not found")
    } else {
        format!("low ({low}) > high ({high}), {target} not found")
    };
    steps.push(BinarySearchStep {
        low,
        high,
        mid: None,
        outcome: Comparison::Exhausted,
        found: false,
        found_index: None,
        message,
    });
    debug!(len = array.len(), target, steps = steps.len(), found = false, "binary search traced");
    steps
}

/// Index the trace terminated on, if the target was found.
pub fn found_index(steps: &[BinarySearchStep]) -> Option<usize> {
    steps.last().and_then(|step| step.found_index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_found_in_middle() {
        let steps = trace(&[1, 3, 5, 7, 9], 5);
        assert_eq!(steps.len(), 1);
        let step = &steps[0];
        assert_eq!((step.low, step.high, step.mid), (0, 4, Some(2)));
        assert!(step.found);
        assert_eq!(step.found_index, Some(2));
        assert!(step.is_terminal());
        assert_eq!(step.message, "arr[2] = 5 equals target 5, found at index 2");
    }

    #[test]
    fn test_found_after_narrowing() {
        let steps = trace(&[1, 3, 5, 7, 9], 9);
        let windows: Vec<_> = steps.iter().map(|s| (s.low, s.high, s.mid)).collect();
        assert_eq!(windows, vec![(0, 4, Some(2)), (3, 4, Some(3)), (4, 4, Some(4))]);
        assert_eq!(steps[0].outcome, Comparison::Less);
        assert_eq!(steps[0].message, "arr[2] = 5 < 9, search right half");
        assert!(!steps[0].is_terminal());
        assert_eq!(found_index(&steps), Some(4));
    }

    #[test]
    fn test_not_found_ends_exhausted() {
        let steps = trace(&[1, 3, 5, 7, 9], 4);
        let last = steps.last().unwrap();
        assert_eq!(last.outcome, Comparison::Exhausted);
        assert!(!last.found);
        assert_eq!(last.mid, None);
        assert!(last.low > last.high);
        assert_eq!((last.low, last.high), (2, 1));
        assert_eq!(last.message, "low (2) > high (1), 4 not found");
        assert_eq!(found_index(&steps), None);
    }

    #[test]
    fn test_not_found_left_edge() {
        let steps = trace(&[10, 20, 30], 1);
        let last = steps.last().unwrap();
        assert_eq!((last.low, last.high), (0, -1));
        assert_eq!(steps[0].outcome, Comparison::Greater);
        assert_eq!(steps[0].message, "arr[1] = 20 > 1, search left half");
    }

    #[test]
    fn test_empty_array_yields_single_step() {
        let steps = trace(&[], 42);
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].outcome, Comparison::Exhausted);
        assert_eq!((steps[0].low, steps[0].high), (0, -1));
        assert_eq!(steps[0].message, "Array is empty, 42 not found");
    }

    #[test]
    fn test_duplicates_return_some_match() {
        let array = [2, 2, 2, 2, 2];
        let steps = trace(&array, 2);
        let index = found_index(&steps).unwrap();
        assert_eq!(array[index], 2);
        assert_eq!(index, 2);
    }

    #[test]
    fn test_unsorted_is_traced_mechanically() {
        // arr[0] = 5 > 1 pushes high below the 1 sitting at index 1.
        let steps = trace(&[5, 1, 9, 3, 7], 1);
        assert!(!steps.last().unwrap().found);
        assert!(steps.len() >= 2);
    }

    #[test]
    fn test_trace_is_deterministic() {
        let array = [-4, -1, 0, 3, 8, 12];
        assert_eq!(trace(&array, 8), trace(&array, 8));
    }

    #[test]
    fn test_window_shrinks_every_step() {
        let steps = trace(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11], 0);
        for pair in steps.windows(2) {
            assert!(pair[1].high - pair[1].low < pair[0].high - pair[0].low);
        }
    }
}
