use thiserror::Error;

/// Input errors reported by the engines and sessions.
///
/// None of these are fatal; the state they were raised against is left as it
/// was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TraceError {
    #[error("Please enter a valid search value (got {0:?})")]
    InvalidTarget(String),

    #[error("Invalid L or R bounds: L={l}, R={r}, length={len}")]
    InvalidRange { l: i64, r: i64, len: usize },

    #[error("An animated operation is still in progress")]
    Busy,
}
