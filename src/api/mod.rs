//! High-level library API: the sentinel-returning converters, their typed
//! `Result` counterparts, and a direction-driven `convert` used by the CLI.
//! Prefer these entrypoints over the low-level `core` modules.
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{arabic, roman};
use crate::error::{Error, Result};
use crate::types::{ArabicInput, Direction};

/// Converts a Roman numeral (any case) to its value, or `-1` if it is malformed.
///
/// ```
/// assert_eq!(numerus::roman_to_arabic("mMmccCXXXviii"), 3338);
/// assert_eq!(numerus::roman_to_arabic("IXX"), -1);
/// ```
pub fn roman_to_arabic(numeral: &str) -> i32 {
    match roman::to_arabic(numeral) {
        Some(value) => i32::from(value),
        None => {
            debug!(numeral, "rejected Roman numeral");
            -1
        }
    }
}

/// Converts an integer or its decimal text to a Roman numeral, or `""` if the
/// value is not in 1..=3899.
///
/// ```
/// assert_eq!(numerus::arabic_to_roman(3899), "MMMDCCCXCIX");
/// assert_eq!(numerus::arabic_to_roman("4"), "IV");
/// assert_eq!(numerus::arabic_to_roman(0), "");
/// ```
pub fn arabic_to_roman<'a>(input: impl Into<ArabicInput<'a>>) -> String {
    let input = input.into();
    match arabic::to_roman(input) {
        Some(numeral) => numeral,
        None => {
            debug!(%input, "rejected Arabic numeral");
            String::new()
        }
    }
}

/// Typed form of [`roman_to_arabic`].
pub fn parse_roman(numeral: &str) -> Result<u16> {
    roman::to_arabic(numeral).ok_or_else(|| Error::InvalidRoman {
        numeral: numeral.to_string(),
    })
}

/// Typed form of [`arabic_to_roman`], distinguishing malformed text from
/// well-formed values outside the classical range.
pub fn format_roman<'a>(input: impl Into<ArabicInput<'a>>) -> Result<String> {
    let input = input.into();
    if let Some(numeral) = arabic::to_roman(input) {
        return Ok(numeral);
    }
    Err(match input {
        ArabicInput::Number(value) => Error::OutOfRange { value },
        ArabicInput::Text(s) => match arabic::decimal_text_value(s) {
            Some(value) => Error::OutOfRange { value },
            None => Error::InvalidArabic {
                input: s.to_string(),
            },
        },
    })
}

/// Result of a conversion in either direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Converted {
    Arabic(u16),
    Roman(String),
}

/// A completed conversion, suitable for printing or JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversion {
    pub direction: Direction,
    pub input: String,
    pub output: Converted,
}

impl std::fmt::Display for Conversion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.output {
            Converted::Arabic(n) => write!(f, "Arabic Numeral: {}", n),
            Converted::Roman(s) => write!(f, "Roman Numeral: {}", s),
        }
    }
}

/// Converts `input`, read as the kind of numeral `direction` names.
pub fn convert(direction: Direction, input: &str) -> Result<Conversion> {
    let output = match direction {
        Direction::Roman => Converted::Arabic(parse_roman(input)?),
        Direction::Arabic => Converted::Roman(format_roman(input)?),
    };
    trace!(%direction, input, ?output, "converted");
    Ok(Conversion {
        direction,
        input: input.to_string(),
        output,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinels() {
        assert_eq!(roman_to_arabic("MMMDCCCXCIX"), 3899);
        assert_eq!(roman_to_arabic("CIVM"), -1);
        assert_eq!(arabic_to_roman(4), "IV");
        assert_eq!(arabic_to_roman(3900), "");
        assert_eq!(arabic_to_roman(-7i64), "");
        assert_eq!(arabic_to_roman(&"2888".to_string()), "MMDCCCLXXXVIII");
    }

    #[test]
    fn test_parse_roman() {
        assert_eq!(parse_roman("xiv"), Ok(14));
        assert_eq!(
            parse_roman("IIII"),
            Err(Error::InvalidRoman {
                numeral: "IIII".to_string()
            })
        );
    }

    #[test]
    fn test_format_roman_errors() {
        assert_eq!(format_roman(3900), Err(Error::OutOfRange { value: 3900 }));
        assert_eq!(format_roman("0"), Err(Error::OutOfRange { value: 0 }));
        assert_eq!(format_roman("5000"), Err(Error::OutOfRange { value: 5000 }));
        assert_eq!(
            format_roman("99999999999999999999"),
            Err(Error::OutOfRange { value: i64::MAX })
        );
        assert_eq!(
            format_roman("007"),
            Err(Error::InvalidArabic {
                input: "007".to_string()
            })
        );
        assert_eq!(
            format_roman("-1"),
            Err(Error::InvalidArabic {
                input: "-1".to_string()
            })
        );
    }

    #[test]
    fn test_convert_display() {
        let c = convert(Direction::Roman, "MCMXC").unwrap();
        assert_eq!(c.output, Converted::Arabic(1990));
        assert_eq!(c.to_string(), "Arabic Numeral: 1990");

        let c = convert(Direction::Arabic, "1990").unwrap();
        assert_eq!(c.output, Converted::Roman("MCMXC".to_string()));
        assert_eq!(c.to_string(), "Roman Numeral: MCMXC");
    }

    #[test]
    fn test_conversion_json() {
        let c = convert(Direction::Arabic, "4").unwrap();
        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "direction": "arabic", "input": "4", "output": "IV" })
        );
    }
}
