// ============================================================================
// Numeral Codec Library
// Strict codecs between textual representations and numeric values
// ============================================================================

//! # Numeral Codec
//!
//! Strict, allocation-light codecs between text and numbers.
//!
//! ## Features
//!
//! - **Strict decimal parsing**: full-consumption `i32`/`f64` literal
//!   grammars; malformed input fails, nothing is silently coerced
//! - **Canonical formatting**: deterministic round-trip float output plus a
//!   fixed-decimals mode, decimal separator always `.`
//! - **Bijective base-26 numbering**: spreadsheet-style "A".."ZZZZZZ"
//! - **Roman numerals**: greedy canonical encoding, permissive decoding
//!
//! Every operation is a pure, stateless function: identical inputs always
//! produce identical outputs, and concurrent callers need no coordination.
//! Decoders report failure through [`errors::CodecResult`]; bounded-domain
//! encoders return an empty string for out-of-range input.
//!
//! ## Example
//!
//! ```rust
//! use numeral_codec::prelude::*;
//!
//! // Strict parsing: the whole input must match the grammar
//! assert_eq!(parse_int("-42"), Ok(-42));
//! assert!(parse_int("42 ").is_err());
//!
//! // Round-trip float formatting
//! let text = format_float(0.1 + 0.2);
//! assert_eq!(parse_float(&text), Ok(0.1 + 0.2));
//!
//! // Positional numbering
//! assert_eq!(alpha::from_index(28), "AB");
//! assert_eq!(roman::from_index(1994), "MCMXCIV");
//! ```

pub mod ascii;
pub mod decimal;
pub mod errors;
pub mod numbering;

// Re-exports for convenience
pub mod prelude {
    pub use crate::decimal::{
        almost_equal, format_float, format_float_fixed, format_int, parse_float, parse_int,
    };
    pub use crate::errors::{CodecError, CodecResult};
    pub use crate::numbering::{alpha, roman};
}
