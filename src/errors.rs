// ============================================================================
// Codec Errors
// Error types for text/number conversion operations
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors that can occur while decoding text into a number.
///
/// Encoding never produces an error: unbounded encoders always succeed and
/// bounded-domain encoders signal out-of-range input with an empty string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CodecError {
    /// Input text does not match the codec's grammar
    InvalidInput,
    /// Parsed value does not fit the target numeric range
    Overflow,
    /// Input text exceeds the codec's maximum length
    TooLong,
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::InvalidInput => {
                write!(f, "invalid input: text does not match the expected grammar")
            },
            CodecError::Overflow => {
                write!(f, "overflow: value outside the representable range")
            },
            CodecError::TooLong => {
                write!(f, "input too long: exceeds the codec's maximum length")
            },
        }
    }
}

impl std::error::Error for CodecError {}

/// Result type alias for codec operations
pub type CodecResult<T> = Result<T, CodecError>;
