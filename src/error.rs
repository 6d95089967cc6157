use thiserror::{Error};

/// The one error kind raised by this crate: an argument was out of range.
///
/// The variants say which argument, and why. Nothing is ever clamped or
/// wrapped; the operation that returns this error has not modified anything.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidArgument {
    /// An index was not in `0..length`.
    #[error("{op}: index {index} out of bounds for length {length}")]
    IndexOutOfBounds {op: &'static str, index: usize, length: usize},

    /// A requested length exceeds the maximum for the element type.
    ///
    /// If the true length does not fit in a `usize`, `length` is `usize::MAX`.
    #[error("{op}: length {length} exceeds the maximum {max}")]
    InvalidLength {op: &'static str, length: usize, max: usize},

    /// The range `pos..pos+len` does not fit in an array of length `length`.
    #[error("{op}: range {pos}+{len} out of bounds for length {length}")]
    InvalidRange {op: &'static str, pos: usize, len: usize, length: usize},

    /// Two arrays that must have the same length do not.
    #[error("{op}: arrays must have the same length ({left} != {right})")]
    LengthMismatch {op: &'static str, left: usize, right: usize},
}

/// Shorthand for results of fallible array operations.
pub type Result<T> = std::result::Result<T, InvalidArgument>;

impl InvalidArgument {
    /// Logs `self` and returns it, so callers can write `Err(e.raise())`.
    pub(crate) fn raise(self) -> Self {
        tracing::debug!(error = %self, "rejected argument");
        self
    }
}

// ----------------------------------------------------------------------------

/// Returns `Ok(index)` if `index < length`.
pub(crate) fn check_index(op: &'static str, index: usize, length: usize) -> Result<usize> {
    if index < length { return Ok(index); }
    Err(InvalidArgument::IndexOutOfBounds {op, index, length}.raise())
}

/// Returns `Ok(length)` if `length <= max`.
pub(crate) fn check_length(op: &'static str, length: usize, max: usize) -> Result<usize> {
    if length <= max { return Ok(length); }
    Err(InvalidArgument::InvalidLength {op, length, max}.raise())
}

/// Returns the sum of `lengths` if it is at most `max`.
pub(crate) fn check_total(
    op: &'static str,
    lengths: impl IntoIterator<Item=usize>,
    max: usize,
) -> Result<usize> {
    match lengths.into_iter().try_fold(0usize, usize::checked_add) {
        Some(length) => check_length(op, length, max),
        None => Err(InvalidArgument::InvalidLength {op, length: usize::MAX, max}.raise()),
    }
}

/// Returns `pos..pos+len` if it lies within `0..length`.
pub(crate) fn check_range(
    op: &'static str,
    pos: usize,
    len: usize,
    length: usize,
) -> Result<std::ops::Range<usize>> {
    match pos.checked_add(len) {
        Some(end) if end <= length => Ok(pos..end),
        _ => Err(InvalidArgument::InvalidRange {op, pos, len, length}.raise()),
    }
}

/// Returns `Ok(left)` if `left == right`.
pub(crate) fn check_same_length(op: &'static str, left: usize, right: usize) -> Result<usize> {
    if left == right { return Ok(left); }
    Err(InvalidArgument::LengthMismatch {op, left, right}.raise())
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index() {
        assert_eq!(check_index("get", 0, 1), Ok(0));
        assert_eq!(
            check_index("set", 1, 1),
            Err(InvalidArgument::IndexOutOfBounds {op: "set", index: 1, length: 1}),
        );
        assert!(check_index("get", 0, 0).is_err());
    }

    #[test]
    fn total() {
        assert_eq!(check_total("concat", [], 0), Ok(0));
        assert_eq!(check_total("concat", [2, 3], 5), Ok(5));
        assert_eq!(
            check_total("concat", [2, 3], 4),
            Err(InvalidArgument::InvalidLength {op: "concat", length: 5, max: 4}),
        );
        assert_eq!(
            check_total("append", [usize::MAX, 1], usize::MAX),
            Err(InvalidArgument::InvalidLength {op: "append", length: usize::MAX, max: usize::MAX}),
        );
    }

    #[test]
    fn range() {
        assert_eq!(check_range("sub", 0, 0, 0), Ok(0..0));
        assert_eq!(check_range("sub", 2, 3, 5), Ok(2..5));
        assert!(check_range("sub", 3, 3, 5).is_err());
        assert!(check_range("sub", 5, 0, 4).is_err());
        assert!(check_range("sub", usize::MAX, 2, 5).is_err());
    }

    #[test]
    fn messages() {
        let e = InvalidArgument::LengthMismatch {op: "map2", left: 2, right: 3};
        assert_eq!(e.to_string(), "map2: arrays must have the same length (2 != 3)");
        let e = InvalidArgument::InvalidRange {op: "fill", pos: 4, len: 2, length: 5};
        assert_eq!(e.to_string(), "fill: range 4+2 out of bounds for length 5");
        let e = InvalidArgument::IndexOutOfBounds {op: "get", index: 3, length: 3};
        assert_eq!(e.to_string(), "get: index 3 out of bounds for length 3");
    }
}
