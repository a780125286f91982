//! Arabic→Roman conversion: range validation and greedy decomposition.
use crate::core::symbols::{MAX_ARABIC, ROMAN_TABLE};
use crate::types::ArabicInput;

/// Accepts integers in 1..=3899.
pub fn validate_arabic_number(n: i64) -> Option<u16> {
    if (1..=i64::from(MAX_ARABIC)).contains(&n) {
        u16::try_from(n).ok()
    } else {
        None
    }
}

/// Parses decimal text: digits only, no leading zero, value in 1..=3899.
pub fn parse_arabic_text(s: &str) -> Option<u16> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) || s.starts_with('0') {
        return None;
    }
    // More than four digits is always out of range; also keeps the parse in u16.
    if s.len() > 4 {
        return None;
    }
    let n: u16 = s.parse().ok()?;
    validate_arabic_number(i64::from(n))
}

/// True if `s` is the decimal text of a value in 1..=3899 without leading zeros.
pub fn is_non_zero_arabic_numeral(s: &str) -> bool {
    parse_arabic_text(s).is_some()
}

/// Value of well-formed decimal text (digits only, no leading zero except `"0"`)
/// regardless of range, saturating at `i64::MAX`.
pub fn decimal_text_value(s: &str) -> Option<i64> {
    let digits_only = !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !digits_only || (s.len() > 1 && s.starts_with('0')) {
        return None;
    }
    Some(s.bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    }))
}

/// Resolves either input form to a value in range.
pub fn resolve_arabic(input: ArabicInput<'_>) -> Option<u16> {
    match input {
        ArabicInput::Number(n) => validate_arabic_number(n),
        ArabicInput::Text(s) => parse_arabic_text(s),
    }
}

/// Greedy largest-first decomposition of an in-range value.
///
/// Callers validate the range first; zero yields an empty string.
pub fn encode(mut remaining: u16) -> String {
    let mut numeral = String::with_capacity(15);
    for &(symbols, value) in ROMAN_TABLE.iter() {
        while remaining >= value {
            numeral.push_str(symbols);
            remaining -= value;
        }
    }
    numeral
}

/// Validates then converts. `None` for anything out of range or malformed.
pub fn to_roman(input: ArabicInput<'_>) -> Option<String> {
    resolve_arabic(input).map(encode)
}
