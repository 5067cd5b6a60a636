//! Currency input mask
//!
//! Normalizes whatever ends up in the amount input box (keystrokes, pastes)
//! into the shape the conversion layer expects: digits, at most one decimal
//! point, at most [`DECIMAL_LIMIT`] fractional digits, no sign, no leading
//! zeroes, thousands grouped with a single space.
//!
//! The separator is presentation only. Everything downstream works on the
//! stripped string.

use once_cell::sync::Lazy;
use regex::Regex;

/// Space, matching what the wallet renders between thousands groups.
pub const THOUSANDS_SEPARATOR: char = ' ';

/// Maximum fractional digits the mask lets through.
pub const DECIMAL_LIMIT: usize = 12;

static DISALLOWED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^0-9.]").expect("Failed to compile amount mask pattern")
});

/// Remove the thousands separators, leaving the semantic digits.
pub fn strip_separators(input: &str) -> String {
    input.replace(THOUSANDS_SEPARATOR, "")
}

/// Conform arbitrary input to the mask.
///
/// Empty input conforms to empty. A bare `.` becomes `0.` so the
/// conversion layer never sees a fractionless point.
pub fn conform_amount(input: &str) -> String {
    let cleaned = DISALLOWED.replace_all(input, "");
    if cleaned.is_empty() {
        return String::new();
    }

    // Split on the first decimal point; later points are dropped.
    let mut int_part = String::new();
    let mut frac_part = String::new();
    let mut seen_point = false;
    for c in cleaned.chars() {
        if c == '.' {
            seen_point = true;
        } else if seen_point {
            frac_part.push(c);
        } else {
            int_part.push(c);
        }
    }

    if frac_part.len() > DECIMAL_LIMIT {
        frac_part.truncate(DECIMAL_LIMIT);
    }

    // No leading zeroes: "007" -> "7", but keep the single zero of "0.5".
    while int_part.len() > 1 && int_part.starts_with('0') {
        int_part.remove(0);
    }
    if int_part.is_empty() {
        int_part.push('0');
    }

    let grouped = group_thousands(&int_part);
    if seen_point {
        format!("{}.{}", grouped, frac_part)
    } else {
        grouped
    }
}

// Insert the separator every three digits, counting from the right.
// Also used by the display formatter, which groups without the entry
// mask's fraction cap.
pub(crate) fn group_thousands(digits: &str) -> String {
    let mut result = String::new();
    let chars: Vec<char> = digits.chars().rev().collect();
    for (i, ch) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(THOUSANDS_SEPARATOR);
        }
        result.push(*ch);
    }
    result.chars().rev().collect()
}
