//! Shared types used across numerus.
//! Includes the conversion `Direction`, CLI `OutputFormat`, `SubtractivePair`,
//! and the `ArabicInput` accepted by the Arabic→Roman converter.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::core::symbols::{Symbol, VALID_PAIRS};

/// Which kind of numeral the input is.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Input is a Roman numeral, output is an Arabic number
    Roman,
    /// Input is an Arabic number, output is a Roman numeral
    Arabic,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Roman => write!(f, "roman"),
            Direction::Arabic => write!(f, "arabic"),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

/// Two adjacent symbols where the first is smaller than the second.
/// `leading` sits at `index`, `following` at `index + 1`.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct SubtractivePair {
    pub leading: Symbol,
    pub following: Symbol,
    pub index: usize,
}

impl SubtractivePair {
    pub fn new(leading: Symbol, following: Symbol, index: usize) -> Self {
        Self {
            leading,
            following,
            index,
        }
    }

    /// True for IV, IX, XL, XC, CD and CM.
    pub fn is_valid(&self) -> bool {
        VALID_PAIRS.contains(&(self.leading, self.following))
    }
}

impl std::fmt::Display for SubtractivePair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.leading, self.following)
    }
}

/// Input to the Arabic→Roman converter: a native integer or its decimal text.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ArabicInput<'a> {
    Number(i64),
    Text(&'a str),
}

impl From<i32> for ArabicInput<'_> {
    fn from(n: i32) -> Self {
        ArabicInput::Number(i64::from(n))
    }
}

impl From<i64> for ArabicInput<'_> {
    fn from(n: i64) -> Self {
        ArabicInput::Number(n)
    }
}

impl From<u16> for ArabicInput<'_> {
    fn from(n: u16) -> Self {
        ArabicInput::Number(i64::from(n))
    }
}

impl From<u32> for ArabicInput<'_> {
    fn from(n: u32) -> Self {
        ArabicInput::Number(i64::from(n))
    }
}

impl From<usize> for ArabicInput<'_> {
    fn from(n: usize) -> Self {
        // Anything that does not fit is out of range anyway.
        ArabicInput::Number(i64::try_from(n).unwrap_or(i64::MAX))
    }
}

impl<'a> From<&'a str> for ArabicInput<'a> {
    fn from(s: &'a str) -> Self {
        ArabicInput::Text(s)
    }
}

impl<'a> From<&'a String> for ArabicInput<'a> {
    fn from(s: &'a String) -> Self {
        ArabicInput::Text(s.as_str())
    }
}

impl std::fmt::Display for ArabicInput<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArabicInput::Number(n) => write!(f, "{}", n),
            ArabicInput::Text(s) => write!(f, "{}", s),
        }
    }
}
