//! The seven Roman symbols, their values, and the fixed tables the converters
//! walk. Everything here is compile-time data.
use serde::{Deserialize, Serialize};

/// Largest value representable in classical notation.
pub const MAX_ARABIC: u16 = 3899;

/// Length of the longest classical numeral (`MMMDCCCLXXXVIII`, 3888).
pub const MAX_NUMERAL_LEN: usize = 15;

/// A Roman numeral symbol. Variant order is value order, so `Ord` ranks symbols.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub enum Symbol {
    I,
    V,
    X,
    L,
    C,
    D,
    M,
}

impl Symbol {
    pub const ALL: [Symbol; 7] = [
        Symbol::I,
        Symbol::V,
        Symbol::X,
        Symbol::L,
        Symbol::C,
        Symbol::D,
        Symbol::M,
    ];

    /// Symbols that may appear at most once in a numeral.
    pub const NON_REPEATABLE: [Symbol; 3] = [Symbol::V, Symbol::L, Symbol::D];

    /// Symbols that may repeat, up to three times in a row.
    pub const REPEATABLE: [Symbol; 4] = [Symbol::I, Symbol::X, Symbol::C, Symbol::M];

    /// Case-insensitive lookup. Anything outside the alphabet is `None`.
    pub const fn from_char(c: char) -> Option<Symbol> {
        match c.to_ascii_uppercase() {
            'I' => Some(Symbol::I),
            'V' => Some(Symbol::V),
            'X' => Some(Symbol::X),
            'L' => Some(Symbol::L),
            'C' => Some(Symbol::C),
            'D' => Some(Symbol::D),
            'M' => Some(Symbol::M),
            _ => None,
        }
    }

    pub const fn as_char(self) -> char {
        match self {
            Symbol::I => 'I',
            Symbol::V => 'V',
            Symbol::X => 'X',
            Symbol::L => 'L',
            Symbol::C => 'C',
            Symbol::D => 'D',
            Symbol::M => 'M',
        }
    }

    pub const fn value(self) -> u16 {
        match self {
            Symbol::I => 1,
            Symbol::V => 5,
            Symbol::X => 10,
            Symbol::L => 50,
            Symbol::C => 100,
            Symbol::D => 500,
            Symbol::M => 1000,
        }
    }

    /// Decimal place the symbol writes into: 0 for I/V, 1 for X/L, 2 for C/D, 3 for M.
    pub const fn place(self) -> u8 {
        match self {
            Symbol::I | Symbol::V => 0,
            Symbol::X | Symbol::L => 1,
            Symbol::C | Symbol::D => 2,
            Symbol::M => 3,
        }
    }

    /// True for the "five" symbols of a place (V, L, D).
    pub const fn is_five(self) -> bool {
        matches!(self, Symbol::V | Symbol::L | Symbol::D)
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Greedy decomposition table, highest value first.
pub const ROMAN_TABLE: [(&str, u16); 13] = [
    ("M", 1000),
    ("CM", 900),
    ("D", 500),
    ("CD", 400),
    ("C", 100),
    ("XC", 90),
    ("L", 50),
    ("XL", 40),
    ("X", 10),
    ("IX", 9),
    ("V", 5),
    ("IV", 4),
    ("I", 1),
];

/// The only leading/following combinations allowed in a subtractive pair.
pub const VALID_PAIRS: [(Symbol, Symbol); 6] = [
    (Symbol::I, Symbol::V),
    (Symbol::I, Symbol::X),
    (Symbol::X, Symbol::L),
    (Symbol::X, Symbol::C),
    (Symbol::C, Symbol::D),
    (Symbol::C, Symbol::M),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_char_is_case_insensitive() {
        for sym in Symbol::ALL {
            assert_eq!(Symbol::from_char(sym.as_char()), Some(sym));
            assert_eq!(Symbol::from_char(sym.as_char().to_ascii_lowercase()), Some(sym));
        }
        assert_eq!(Symbol::from_char('A'), None);
        assert_eq!(Symbol::from_char('1'), None);
        assert_eq!(Symbol::from_char(' '), None);
    }

    #[test]
    fn test_order_follows_value() {
        for window in Symbol::ALL.windows(2) {
            assert!(window[0] < window[1]);
            assert!(window[0].value() < window[1].value());
        }
    }

    #[test]
    fn test_table_is_descending() {
        for window in ROMAN_TABLE.windows(2) {
            assert!(window[0].1 > window[1].1);
        }
        assert_eq!(ROMAN_TABLE.last(), Some(&("I", 1)));
    }

    #[test]
    fn test_max_numeral_len_fits_longest_numeral() {
        let longest = crate::core::arabic::encode(3888);
        assert_eq!(longest, "MMMDCCCLXXXVIII");
        assert_eq!(longest.len(), MAX_NUMERAL_LEN);
        let max_len = (1..=MAX_ARABIC)
            .map(|n| crate::core::arabic::encode(n).len())
            .max();
        assert_eq!(max_len, Some(MAX_NUMERAL_LEN));
    }
}
