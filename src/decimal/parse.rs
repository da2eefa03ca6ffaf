// ============================================================================
// Strict Numeric Parsing
// Full-consumption text -> integer and text -> float conversion
// ============================================================================
//
// Both parsers validate the entire input against a fixed grammar before
// delegating to the native scanner. Anything the grammar does not cover
// (surrounding whitespace, trailing characters, lone signs, textual
// infinities) rejects. A parse either returns the value or an error; there
// is no partially-consumed success.

use crate::ascii;
use crate::errors::{CodecError, CodecResult};

/// Parse a strict decimal integer literal.
///
/// Accepts exactly `[+-]?[0-9]+`: an optional sign followed by one or more
/// digits, nothing else. The text is scanned with the native wide-integer
/// parser first, then narrowed into the `i32` range.
///
/// # Errors
/// - `InvalidInput` if the text is empty or does not match the grammar
/// - `Overflow` if the value does not fit in `i32`
///
/// # Example
/// ```
/// use numeral_codec::decimal::parse_int;
///
/// assert_eq!(parse_int("-42"), Ok(-42));
/// assert_eq!(parse_int("+5"), Ok(5));
/// assert!(parse_int("42 ").is_err());
/// assert!(parse_int("99999999999").is_err());
/// ```
pub fn parse_int(text: &str) -> CodecResult<i32> {
    if !is_int_grammar(text.as_bytes()) {
        tracing::trace!("rejected integer literal: {:?}", text);
        return Err(CodecError::InvalidInput);
    }

    // Wide scan first; a grammar-valid text can only fail here on overflow.
    let wide = text.parse::<i64>().map_err(|_| CodecError::Overflow)?;
    i32::try_from(wide).map_err(|_| CodecError::Overflow)
}

/// Parse a strict decimal float literal.
///
/// Accepts exactly `[+-]?(digits)?(\.digits)?([eE][+-]?digits)?` with at
/// least one mantissa digit. The grammar excludes the textual forms `inf`
/// and `NaN` that the native scanner would otherwise accept; a value that
/// overflows to infinity during conversion is rejected as well.
///
/// Underflow is gradual: texts denoting subnormal magnitudes parse to the
/// nearest representable double (possibly zero).
///
/// # Errors
/// - `InvalidInput` if the text is empty or does not match the grammar
/// - `Overflow` if the magnitude exceeds the finite `f64` range
///
/// # Example
/// ```
/// use numeral_codec::decimal::parse_float;
///
/// assert_eq!(parse_float("2.5e-3"), Ok(0.0025));
/// assert_eq!(parse_float(".5"), Ok(0.5));
/// assert!(parse_float("1e").is_err());
/// assert!(parse_float("1e999").is_err());
/// ```
pub fn parse_float(text: &str) -> CodecResult<f64> {
    if !is_float_grammar(text.as_bytes()) {
        tracing::trace!("rejected float literal: {:?}", text);
        return Err(CodecError::InvalidInput);
    }

    let value = text.parse::<f64>().map_err(|_| CodecError::InvalidInput)?;
    if !value.is_finite() {
        return Err(CodecError::Overflow);
    }
    Ok(value)
}

// ============================================================================
// Grammar Validation
// ============================================================================

/// `[+-]?[0-9]+`, whole input.
fn is_int_grammar(bytes: &[u8]) -> bool {
    let digits = match bytes.split_first() {
        Some((&first, rest)) if ascii::is_sign(first) => rest,
        _ => bytes,
    };
    !digits.is_empty() && digits.iter().all(u8::is_ascii_digit)
}

/// `[+-]?(digits)?(\.digits)?([eE][+-]?digits)?`, whole input, at least one
/// mantissa digit.
fn is_float_grammar(bytes: &[u8]) -> bool {
    let mut pos = 0;

    if pos < bytes.len() && ascii::is_sign(bytes[pos]) {
        pos += 1;
    }

    let int_digits = scan_digits(bytes, &mut pos);

    let mut frac_digits = 0;
    if pos < bytes.len() && bytes[pos] == b'.' {
        pos += 1;
        frac_digits = scan_digits(bytes, &mut pos);
        // A dot requires digits after it
        if frac_digits == 0 {
            return false;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return false;
    }

    if pos < bytes.len() && ascii::is_exponent_marker(bytes[pos]) {
        pos += 1;
        if pos < bytes.len() && ascii::is_sign(bytes[pos]) {
            pos += 1;
        }
        if scan_digits(bytes, &mut pos) == 0 {
            return false;
        }
    }

    pos == bytes.len()
}

/// Advance `pos` over a digit run, returning how many digits were consumed.
fn scan_digits(bytes: &[u8], pos: &mut usize) -> usize {
    let start = *pos;
    while *pos < bytes.len() && bytes[*pos].is_ascii_digit() {
        *pos += 1;
    }
    *pos - start
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_int_valid() {
        assert_eq!(parse_int("0"), Ok(0));
        assert_eq!(parse_int("5"), Ok(5));
        assert_eq!(parse_int("+5"), Ok(5));
        assert_eq!(parse_int("-5"), Ok(-5));
        assert_eq!(parse_int("007"), Ok(7));
        assert_eq!(parse_int("2147483647"), Ok(i32::MAX));
        assert_eq!(parse_int("-2147483648"), Ok(i32::MIN));
    }

    #[test]
    fn test_parse_int_invalid() {
        assert_eq!(parse_int(""), Err(CodecError::InvalidInput));
        assert_eq!(parse_int("+"), Err(CodecError::InvalidInput));
        assert_eq!(parse_int("-"), Err(CodecError::InvalidInput));
        assert_eq!(parse_int(" 5"), Err(CodecError::InvalidInput));
        assert_eq!(parse_int("5 "), Err(CodecError::InvalidInput));
        assert_eq!(parse_int("5a"), Err(CodecError::InvalidInput));
        assert_eq!(parse_int("5.0"), Err(CodecError::InvalidInput));
        assert_eq!(parse_int("+-5"), Err(CodecError::InvalidInput));
    }

    #[test]
    fn test_parse_int_overflow() {
        // Exceeds i32 but not the wide intermediate
        assert_eq!(parse_int("99999999999"), Err(CodecError::Overflow));
        assert_eq!(parse_int("2147483648"), Err(CodecError::Overflow));
        assert_eq!(parse_int("-2147483649"), Err(CodecError::Overflow));
        // Exceeds the wide intermediate as well
        assert_eq!(
            parse_int("99999999999999999999999"),
            Err(CodecError::Overflow)
        );
    }

    #[test]
    fn test_parse_float_valid() {
        assert_eq!(parse_float("0"), Ok(0.0));
        assert_eq!(parse_float("3.14"), Ok(3.14));
        assert_eq!(parse_float("-3.14"), Ok(-3.14));
        assert_eq!(parse_float("+.5"), Ok(0.5));
        assert_eq!(parse_float("5e3"), Ok(5000.0));
        assert_eq!(parse_float("1e+5"), Ok(100000.0));
        assert_eq!(parse_float("2.5E-3"), Ok(0.0025));
        // Wide for i32, fine for f64
        assert_eq!(parse_float("99999999999"), Ok(99_999_999_999.0));
    }

    #[test]
    fn test_parse_float_invalid() {
        assert_eq!(parse_float(""), Err(CodecError::InvalidInput));
        assert_eq!(parse_float("+"), Err(CodecError::InvalidInput));
        assert_eq!(parse_float("-"), Err(CodecError::InvalidInput));
        assert_eq!(parse_float("1e"), Err(CodecError::InvalidInput));
        assert_eq!(parse_float("e5"), Err(CodecError::InvalidInput));
        assert_eq!(parse_float("5."), Err(CodecError::InvalidInput));
        assert_eq!(parse_float("."), Err(CodecError::InvalidInput));
        assert_eq!(parse_float(" 5"), Err(CodecError::InvalidInput));
        assert_eq!(parse_float("5 "), Err(CodecError::InvalidInput));
        assert_eq!(parse_float("5a"), Err(CodecError::InvalidInput));
        assert_eq!(parse_float("1.2.3"), Err(CodecError::InvalidInput));
        // Textual non-finite forms are outside the grammar
        assert_eq!(parse_float("inf"), Err(CodecError::InvalidInput));
        assert_eq!(parse_float("NaN"), Err(CodecError::InvalidInput));
    }

    #[test]
    fn test_parse_float_overflow() {
        assert_eq!(parse_float("1e999"), Err(CodecError::Overflow));
        assert_eq!(parse_float("-1e999"), Err(CodecError::Overflow));
    }

    #[test]
    fn test_parse_float_underflow_is_gradual() {
        // Subnormal and below-subnormal magnitudes parse, they do not error
        assert_eq!(parse_float("5e-324"), Ok(5e-324));
        assert_eq!(parse_float("1e-999"), Ok(0.0));
    }
}
