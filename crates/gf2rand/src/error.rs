//! Error taxonomy for generator construction and bulk operations.
//!
//! Draw operations never fail once a generator has been constructed, so
//! errors only surface from seed-array validation and from the bulk-fill
//! preconditions. Invalid arguments (bad input data) and protocol
//! violations (calling fill mid-sequence) are distinct kinds.

use thiserror::Error;

/// Errors reported by generator constructors and bulk-fill operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeneratorError {
    /// A seed array was supplied with length zero.
    #[error("seed array must not be empty")]
    EmptySeedArray,

    /// A bulk-fill buffer length violates the granularity or minimum-length
    /// requirement of the generator family.
    #[error(
        "fill buffer length {len} must be a positive multiple of {granularity} and at least {min}"
    )]
    InvalidFillLength {
        /// Length of the buffer the caller supplied.
        len: usize,
        /// Required element granularity (4 for 32-bit fills, 2 for 64-bit).
        granularity: usize,
        /// Family-specific minimum buffer length.
        min: usize,
    },

    /// Bulk fill was called while the internal cursor was mid-sequence.
    ///
    /// Fill is only legal when the state is fully consumed (right after
    /// construction, after `reset`, or after draining exactly a whole
    /// regeneration). This is a caller protocol violation, not bad input.
    #[error("bulk fill requires a fully consumed state (cursor at {index} of {capacity})")]
    FillMidSequence {
        /// Cursor position at the time of the call, in 32-bit words.
        index: usize,
        /// Full cursor capacity (`n32`) of the generator.
        capacity: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds_are_distinct() {
        let arg = GeneratorError::InvalidFillLength {
            len: 3,
            granularity: 4,
            min: 624,
        };
        let state = GeneratorError::FillMidSequence {
            index: 17,
            capacity: 624,
        };
        assert_ne!(arg, state);
    }

    #[test]
    fn test_error_display_mentions_values() {
        let err = GeneratorError::InvalidFillLength {
            len: 100,
            granularity: 4,
            min: 624,
        };
        let msg = err.to_string();
        assert!(msg.contains("100"));
        assert!(msg.contains("624"));
    }
}
