//! Driving both sessions the way a UI loop would, one timer tick at a time.

use array_trace::{
    parse_range_update, BinarySearchSession, DifferenceArraySession, TraceError,
};
use std::sync::Once;
use std::time::Duration;
use trace_player::{PlaybackOptions, DEFAULT_ANIMATION_DELAY_MS};

static INIT: Once = Once::new();

fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::TRACE)
            .with_target(false)
            .init();
    });
}

#[test]
fn test_binary_search_plays_to_the_end() {
    init_tracing();
    let mut session = BinarySearchSession::new(PlaybackOptions::with_speed(3000));
    session.set_array_from_input("2, 4, 6, 8, 10, 12, 14");
    let steps = session.start_search("14").unwrap().len();
    assert_eq!(steps, 3);

    session.playback_mut().play();
    let mut seen = vec![session.current_step().unwrap().mid];
    while session.playback().is_playing() {
        if session.advance_by(Duration::from_millis(500)) > 0 {
            seen.push(session.current_step().unwrap().mid);
        }
    }
    assert_eq!(seen, vec![Some(3), Some(5), Some(6)]);
    assert_eq!(session.current_step().unwrap().found_index, Some(6));

    // Stepping backwards replays earlier observations.
    assert!(session.playback_mut().step_back());
    assert_eq!(session.current_step().unwrap().mid, Some(5));
}

#[test]
fn test_binary_search_rejects_blank_target() {
    init_tracing();
    let mut session = BinarySearchSession::default();
    session.set_array(vec![1, 2, 3]);
    assert_eq!(session.start_search("   "), Err(TraceError::InvalidTarget("   ".to_string())));
    assert!(session.playback().player().is_empty());
}

#[test]
fn test_difference_array_update_then_rebuild() {
    init_tracing();
    let delay = Duration::from_millis(DEFAULT_ANIMATION_DELAY_MS);
    let mut session = DifferenceArraySession::default();
    session.initialize_from_input("10,20,30,40,50").unwrap();

    session.begin_update(parse_range_update("1", "3", "10")).unwrap();
    assert_eq!(session.begin_reconstruct(), Err(TraceError::Busy));
    while !session.advance_by(delay) {}
    assert_eq!(session.state().diff(), &[10, 20, 10, 10, 0]);
    assert_eq!(session.state().original(), &[10, 20, 30, 40, 50]);

    session.begin_reconstruct().unwrap();
    let mut active = Vec::new();
    loop {
        active.push(session.active_index());
        if session.advance_by(delay) {
            break;
        }
    }
    assert_eq!(active, vec![Some(0), Some(1), Some(2), Some(3), Some(4)]);
    assert_eq!(session.state().reconstructed(), &[10, 30, 40, 50, 50]);
    assert_eq!(&*session.displayed_reconstructed(), &[10, 30, 40, 50, 50]);
}

#[test]
fn test_extreme_update_animates_without_overflow() {
    init_tracing();
    let delay = Duration::from_millis(100);
    let mut session = DifferenceArraySession::new(PlaybackOptions::fixed(100));
    session.initialize_from_input("9223372036854775807,-9223372036854775807").unwrap();
    session.begin_update(parse_range_update("0", "0", "9223372036854775807")).unwrap();
    assert_eq!(session.displayed_diff()[0], i64::MAX.wrapping_add(i64::MAX));
    while !session.advance_by(delay) {}

    session.begin_reconstruct().unwrap();
    while !session.advance_by(delay) {}
    assert_eq!(
        session.state().reconstructed(),
        &[i64::MAX.wrapping_add(i64::MAX), -i64::MAX]
    );
}

#[test]
fn test_cancelled_update_can_be_followed_by_another() {
    init_tracing();
    let mut session = DifferenceArraySession::new(PlaybackOptions::fixed(100));
    session.initialize(vec![0, 0, 0, 0]).unwrap();
    session.begin_update(parse_range_update("0", "3", "5")).unwrap();
    session.cancel();

    session.begin_update(parse_range_update("1", "2", "1")).unwrap();
    assert!(!session.advance_by(Duration::from_millis(100)));
    assert!(session.advance_by(Duration::from_millis(100)));
    assert_eq!(session.state().diff(), &[0, 1, 0, -1]);
}
