//! array-trace - replayable traces of two classic array algorithms
//!
//! The engines are pure: they take an input and return the full ordered
//! sequence of steps the algorithm went through. Presentation code plays the
//! sequence back with [`trace_player`].
//!
//! - [`binary_search`] traces bounded bisection, one step per probe.
//! - [`difference_array`] derives a difference array, traces O(1) range
//!   updates against it and the prefix-sum pass that rebuilds the values.
//! - [`session`] binds an engine to a player and refuses to start a new
//!   operation while an animated one is still running.
//!
//! # Example
//!
//! ```
//! use array_trace::binary_search::{found_index, trace};
//! use array_trace::difference_array::{DifferenceArrayState, RangeUpdate};
//!
//! let steps = trace(&[1, 3, 5, 7, 9], 7);
//! assert_eq!(found_index(&steps), Some(3));
//!
//! let state = DifferenceArrayState::initialize(vec![0; 5]);
//! let (_, state) = state.apply_range_update(RangeUpdate::new(1, 3, 10)).unwrap();
//! let (_, state) = state.reconstruct();
//! assert_eq!(state.reconstructed(), &[0, 10, 10, 10, 0]);
//! ```

pub mod binary_search;
pub mod difference_array;
pub mod error;
pub mod parse;
pub mod random;
pub mod session;

pub use binary_search::{BinarySearchStep, Comparison};
pub use difference_array::{DifferenceArrayState, RangeUpdate, ReconstructionStep, UpdateTraceStep};
pub use error::TraceError;
pub use parse::{parse_array_input, parse_range_update, parse_target};
pub use random::{generate_random_array, ArrayGenerator};
pub use session::{BinarySearchSession, DifferenceArraySession};
