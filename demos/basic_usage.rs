// ============================================================================
// Basic Usage Example
// ============================================================================

use numeral_codec::prelude::*;

fn main() {
    println!("=== Numeral Codec Example ===\n");

    // Strict decimal parsing: the whole input must match the grammar
    println!("Parsing integers...");
    for text in ["42", "+5", "-2147483648", "5 ", "5a", "99999999999"] {
        match parse_int(text) {
            Ok(value) => println!("  {:>14?} -> {}", text, value),
            Err(err) => println!("  {:>14?} -> error: {}", text, err),
        }
    }

    println!("\nParsing floats...");
    for text in ["3.14", ".5", "2.5e-3", "1e", "1e999"] {
        match parse_float(text) {
            Ok(value) => println!("  {:>14?} -> {}", text, value),
            Err(err) => println!("  {:>14?} -> error: {}", text, err),
        }
    }

    // Round-trip formatting: parsing the output reconstructs the value
    println!("\nFormatting floats...");
    for value in [0.1 + 0.2, 1.0 / 3.0, 6.022e23, 0.000004] {
        let text = format_float(value);
        assert_eq!(parse_float(&text), Ok(value));
        println!("  {:>24} (fixed 4: {})", text, format_float_fixed(value, 4));
    }

    // Spreadsheet-style column naming
    println!("\nBijective base-26 numbering...");
    for index in [1, 26, 27, 702, 703, alpha::ALPHA_MAX] {
        let text = alpha::from_index(index);
        println!("  {:>10} -> {:>7} -> {:?}", index, text, alpha::to_index(&text));
    }

    // Roman numerals
    println!("\nRoman numerals...");
    for index in [4, 9, 14, 1994, 2024, 3999] {
        let text = roman::from_index(index);
        println!("  {:>5} -> {:>10} -> {:?}", index, text, roman::to_index(&text));
    }

    // Out-of-range input yields the empty-string sentinel
    println!("\nSentinels:");
    println!("  alpha::from_index(0)    -> {:?}", alpha::from_index(0));
    println!("  roman::from_index(4000) -> {:?}", roman::from_index(4000));
}
