//! Boundary parsing of user-typed input.
//!
//! Array and range-update fields follow a lenient convention: each token is
//! read like JavaScript's `parseInt` (leading whitespace, optional sign,
//! then digits; anything after the digits is ignored), and a token with no
//! integer prefix becomes `0` instead of rejecting the whole input. The search
//! target is strict, since searching for a silently substituted `0` would be
//! misleading.

use crate::difference_array::RangeUpdate;
use crate::error::TraceError;

/// Reads the integer prefix of `token`.
///
/// Returns `None` when there are no digits or the value does not fit in `i64`.
fn parse_int_prefix(token: &str) -> Option<i64> {
    let token = token.trim_start();
    let sign_len = usize::from(matches!(token.as_bytes().first(), Some(b'-' | b'+')));
    let end = token[sign_len..]
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(token.len() - sign_len);
    if end == 0 {
        return None;
    }
    token[..sign_len + end].parse().ok()
}

/// Parses a comma-separated list of integers.
///
/// Unparseable tokens become `0`. Blank input gives an empty array.
///
/// # Examples
///
/// ```
/// use array_trace::parse_array_input;
///
/// assert_eq!(parse_array_input("10, 20,30"), vec![10, 20, 30]);
/// assert_eq!(parse_array_input("1,x,12abc,-4"), vec![1, 0, 12, -4]);
/// assert_eq!(parse_array_input("   "), Vec::<i64>::new());
/// ```
pub fn parse_array_input(input: &str) -> Vec<i64> {
    if input.trim().is_empty() {
        return Vec::new();
    }
    input
        .split(',')
        .map(|token| parse_int_prefix(token).unwrap_or(0))
        .collect()
}

/// Parses the search target.
///
/// The whole trimmed token must be a number. Integral decimals such as
/// `"5.0"` or `"1e2"` are accepted.
///
/// # Errors
///
/// [`TraceError::InvalidTarget`] for blank input, non-numbers and fractional
/// values.
///
/// # Examples
///
/// ```
/// use array_trace::{parse_target, TraceError};
///
/// assert_eq!(parse_target(" 7 "), Ok(7));
/// assert_eq!(parse_target("1e2"), Ok(100));
/// assert!(matches!(parse_target("seven"), Err(TraceError::InvalidTarget(_))));
/// ```
pub fn parse_target(input: &str) -> Result<i64, TraceError> {
    let trimmed = input.trim();
    let invalid = || TraceError::InvalidTarget(input.to_string());
    if trimmed.is_empty() {
        return Err(invalid());
    }
    if let Ok(value) = trimmed.parse::<i64>() {
        return Ok(value);
    }
    let value: f64 = trimmed.parse().map_err(|_| invalid())?;
    // i64::MAX as f64 rounds up to 2^63, which is itself out of range.
    if value.is_finite() && value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64 {
        Ok(value as i64)
    } else {
        Err(invalid())
    }
}

/// Builds a range update from the three form fields.
///
/// Each field falls back to `0`. Bounds are validated later by
/// [`DifferenceArrayState::apply_range_update`](crate::DifferenceArrayState::apply_range_update).
pub fn parse_range_update(l: &str, r: &str, x: &str) -> RangeUpdate {
    let field = |input: &str| parse_int_prefix(input).unwrap_or(0);
    RangeUpdate::new(field(l), field(r), field(x))
}
