//! Sessions bind an engine to a player.
//!
//! A session is what a presentation layer holds on to: the current input, the
//! produced trace and the playback position. Time only moves when the host
//! calls `advance_by`.

mod binary_search;
mod difference_array;

pub use binary_search::BinarySearchSession;
pub use difference_array::DifferenceArraySession;
