//! Crate-level error type and `Result` alias for the typed conversion API.
//! The sentinel-returning functions never produce these; they exist for callers
//! that prefer `?` over checking for `-1` or an empty string.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid Roman numeral: {numeral:?}")]
    InvalidRoman { numeral: String },

    #[error("Invalid Arabic numeral: {input:?}. Must be a decimal integer without leading zeros")]
    InvalidArabic { input: String },

    #[error("Arabic numeral out of range: {value}. Must be between 1 and 3899")]
    OutOfRange { value: i64 },
}
