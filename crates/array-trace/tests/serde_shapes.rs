//! JSON shapes consumed by presentation code.

use array_trace::binary_search::trace;
use array_trace::{DifferenceArrayState, RangeUpdate, ReconstructionStep, UpdateTraceStep};
use serde_json::json;

#[test]
fn test_binary_search_step_shape() {
    let steps = trace(&[1, 3, 5], 3);
    assert_eq!(
        serde_json::to_value(&steps[0]).unwrap(),
        json!({
            "low": 0,
            "high": 2,
            "mid": 1,
            "outcome": "equal",
            "found": true,
            "foundIndex": 1,
            "message": "arr[1] = 3 equals target 3, found at index 1",
        })
    );
}

#[test]
fn test_exhausted_step_omits_mid_and_found_index() {
    let steps = trace(&[], 3);
    let value = serde_json::to_value(&steps[0]).unwrap();
    assert_eq!(
        value,
        json!({
            "low": 0,
            "high": -1,
            "outcome": "exhausted",
            "found": false,
            "message": "Array is empty, 3 not found",
        })
    );
    let back: array_trace::BinarySearchStep = serde_json::from_value(value).unwrap();
    assert_eq!(back, steps[0]);
}

#[test]
fn test_update_steps_are_tagged_by_kind() {
    let state = DifferenceArrayState::initialize(vec![0, 0, 0]);
    let (steps, _) = state.apply_range_update(RangeUpdate::new(0, 1, 4)).unwrap();
    assert_eq!(
        serde_json::to_value(&steps).unwrap(),
        json!([
            {"kind": "add", "index": 0, "delta": 4},
            {"kind": "subtract", "index": 2, "delta": 4},
        ])
    );

    let skip: UpdateTraceStep = serde_json::from_value(json!({"kind": "skip", "reason": "R+1 out of bounds"})).unwrap();
    assert_eq!(skip.index(), None);
}

#[test]
fn test_reconstruction_step_shape() {
    let step = ReconstructionStep {
        index: 2,
        running_sum: 30,
        value: 30,
    };
    assert_eq!(
        serde_json::to_value(step).unwrap(),
        json!({"index": 2, "runningSum": 30, "value": 30})
    );
}

#[test]
fn test_range_update_uses_upper_case_fields() {
    let update: RangeUpdate = serde_json::from_value(json!({"L": 1, "R": 3, "X": 10})).unwrap();
    assert_eq!(update, RangeUpdate::new(1, 3, 10));
}

#[test]
fn test_state_shape() {
    let state = DifferenceArrayState::initialize(vec![10, 20]);
    assert_eq!(
        serde_json::to_value(&state).unwrap(),
        json!({"original": [10, 20], "diff": [10, 10], "reconstructed": [0, 0]})
    );
}
