use thiserror::Error;

/// Failures reported by fallible [`VecList`](crate::VecList) and cursor
/// operations.
///
/// Every operation validates its input before touching the list, so an
/// `Error` always means the list is exactly as it was before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A constructor received a negative capacity.
    #[error("invalid capacity: {0}")]
    InvalidCapacity(isize),

    /// An index fell outside the valid range of the operation.
    ///
    /// Access and removal accept indices in `0..len`, insertion and cursor
    /// placement accept `0..=len`.
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds {
        /// The rejected index.
        index: usize,
        /// The list length at the time of the call.
        len: usize,
    },

    /// Growing the backing buffer would exceed the maximum allocatable
    /// length.
    #[error("required capacity exceeds the maximum allocatable length")]
    CapacityOverflow,

    /// A cursor stepped past the end of iteration in either direction.
    #[error("cursor stepped past the end of iteration")]
    Exhausted,

    /// A cursor tried to remove or replace an element before yielding one
    /// through `next` or `previous`.
    #[error("cursor has no current element")]
    NoCurrentElement,
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            Error::InvalidCapacity(-5).to_string(),
            "invalid capacity: -5"
        );
        assert_eq!(
            Error::IndexOutOfBounds { index: 4, len: 3 }.to_string(),
            "index 4 out of bounds for length 3"
        );
        assert_eq!(
            Error::CapacityOverflow.to_string(),
            "required capacity exceeds the maximum allocatable length"
        );
        assert_eq!(
            Error::Exhausted.to_string(),
            "cursor stepped past the end of iteration"
        );
        assert_eq!(
            Error::NoCurrentElement.to_string(),
            "cursor has no current element"
        );
    }

    #[test]
    fn test_errors_are_comparable() {
        assert_eq!(Error::CapacityOverflow, Error::CapacityOverflow);
        assert_ne!(
            Error::IndexOutOfBounds { index: 0, len: 0 },
            Error::IndexOutOfBounds { index: 1, len: 0 }
        );
    }
}
