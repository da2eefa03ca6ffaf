// ============================================================================
// Roman Numeral Codec
// 1-based index <-> Roman notation via a fixed descending symbol table
// ============================================================================

use arrayvec::ArrayString;

use crate::ascii;
use crate::errors::{CodecError, CodecResult};

/// Largest encodable index, "MMMCMXCIX".
pub const ROMAN_MAX: i32 = 3999;

/// Longest text the decoder accepts ("MMMDCCCLXXXVIII" for 3888).
const MAX_SYMBOLS: usize = 15;

/// One entry of the Roman symbol table.
struct RomanSymbol {
    symbol: &'static str,
    value: i32,
}

/// Symbol table in strictly descending value order. The greedy encoder and
/// the longest-match decoder both depend on this order: each two-character
/// subtractive form sits ahead of the single characters it could otherwise
/// be confused with.
const ROMAN_TABLE: [RomanSymbol; 13] = [
    RomanSymbol { symbol: "M", value: 1000 },
    RomanSymbol { symbol: "CM", value: 900 },
    RomanSymbol { symbol: "D", value: 500 },
    RomanSymbol { symbol: "CD", value: 400 },
    RomanSymbol { symbol: "C", value: 100 },
    RomanSymbol { symbol: "XC", value: 90 },
    RomanSymbol { symbol: "L", value: 50 },
    RomanSymbol { symbol: "XL", value: 40 },
    RomanSymbol { symbol: "X", value: 10 },
    RomanSymbol { symbol: "IX", value: 9 },
    RomanSymbol { symbol: "V", value: 5 },
    RomanSymbol { symbol: "IV", value: 4 },
    RomanSymbol { symbol: "I", value: 1 },
];

/// Encode a 1-based index as a Roman numeral.
///
/// Returns the empty string for any index outside `[1, ROMAN_MAX]`: empty
/// text is the out-of-range sentinel and is never a valid encoding. The
/// greedy table walk produces the unique canonical minimal form: 4 is "IV",
/// 900 is "CM", never "IIII" or "DCCCC".
///
/// # Example
/// ```
/// use numeral_codec::numbering::roman;
///
/// assert_eq!(roman::from_index(1994), "MCMXCIV");
/// assert_eq!(roman::from_index(4000), "");
/// ```
pub fn from_index(index: i32) -> String {
    if index < 1 || ROMAN_MAX < index {
        return String::new();
    }

    let mut out = ArrayString::<MAX_SYMBOLS>::new();
    let mut rest = index;
    for entry in &ROMAN_TABLE {
        while entry.value <= rest {
            rest -= entry.value;
            out.push_str(entry.symbol);
        }
        if rest == 0 {
            break;
        }
    }

    String::from(out.as_str())
}

/// Decode a Roman numeral into its 1-based index.
///
/// The decoder is deliberately permissive: it accepts any concatenation of
/// table symbols the ordered longest-match scan can consume, not only the
/// canonical minimal forms. "IIII" decodes to 4 and "IM" to 1001 even
/// though the encoder would never produce either. The round-trip guarantee
/// therefore runs in one direction only: every encoder output decodes back
/// to its index.
///
/// # Errors
/// - `InvalidInput` if the text is empty or contains anything outside the
///   Roman letters `I V X L C D M`
/// - `TooLong` if the text exceeds 15 characters
///
/// # Example
/// ```
/// use numeral_codec::numbering::roman;
///
/// assert_eq!(roman::to_index("MCMXCIV"), Ok(1994));
/// assert!(roman::to_index("ABC").is_err());
/// ```
pub fn to_index(text: &str) -> CodecResult<i32> {
    let bytes = text.as_bytes();
    if bytes.is_empty() {
        return Err(CodecError::InvalidInput);
    }
    if bytes.len() > MAX_SYMBOLS {
        return Err(CodecError::TooLong);
    }
    // Every byte must be a Roman letter before structural matching begins
    if !bytes.iter().all(|&byte| ascii::is_roman_digit(byte)) {
        return Err(CodecError::InvalidInput);
    }

    let mut index: i32 = 0;
    let mut rest = text;
    while !rest.is_empty() {
        let matched = ROMAN_TABLE.iter().find_map(|entry| {
            rest.strip_prefix(entry.symbol)
                .map(|tail| (entry.value, tail))
        });
        match matched {
            Some((value, tail)) => {
                index += value;
                rest = tail;
            },
            None => return Err(CodecError::InvalidInput),
        }
    }

    Ok(index)
}

// ============================================================================
// Tests
// ============================================================================
