//! Roman numeral validity predicates.
//!
//! Each predicate is independent and pure. [`is_valid_numeral`] composes them
//! into the gate the Roman→Arabic converter runs before touching any value.
//! All predicates are case-insensitive.
use crate::core::symbols::{MAX_NUMERAL_LEN, Symbol};
use crate::types::SubtractivePair;

/// True if `s` has 1..=15 characters, all from the Roman alphabet.
///
/// Does not check that the symbols form a valid numeral.
pub fn is_possible_numeral(s: &str) -> bool {
    let mut len = 0;
    for c in s.chars() {
        if Symbol::from_char(c).is_none() {
            return false;
        }
        len += 1;
    }
    (1..=MAX_NUMERAL_LEN).contains(&len)
}

/// True if every symbol in `symbols` occurs at most once in `s`.
pub fn at_most_once_each(s: &str, symbols: &[Symbol]) -> bool {
    let mut seen: Vec<Symbol> = Vec::with_capacity(symbols.len());
    for sym in s.chars().filter_map(Symbol::from_char) {
        if symbols.contains(&sym) {
            if seen.contains(&sym) {
                return false;
            }
            seen.push(sym);
        }
    }
    true
}

/// True if no symbol in `symbols` occurs four or more times in a row.
///
/// Any other character, or a different listed symbol, resets the run.
pub fn at_most_three_in_a_row(s: &str, symbols: &[Symbol]) -> bool {
    let mut current: Option<Symbol> = None;
    let mut run = 0u8;

    for c in s.chars() {
        match Symbol::from_char(c).filter(|sym| symbols.contains(sym)) {
            Some(sym) if current == Some(sym) => {
                run += 1;
                if run > 3 {
                    return false;
                }
            }
            Some(sym) => {
                current = Some(sym);
                run = 1;
            }
            None => {
                current = None;
                run = 0;
            }
        }
    }
    true
}

/// Every adjacent pair where the second symbol outranks the first, left to right.
///
/// Characters outside the alphabet never take part in a pair.
pub fn find_subtractive_pairs(s: &str) -> Vec<SubtractivePair> {
    let mut pairs = Vec::new();
    let mut prev: Option<Symbol> = None;

    for (index, c) in s.chars().enumerate() {
        let cur = Symbol::from_char(c);
        if let (Some(p), Some(next)) = (prev, cur) {
            if next > p {
                pairs.push(SubtractivePair::new(p, next, index - 1));
            }
        }
        prev = cur;
    }
    pairs
}

/// True if every pair is one of IV, IX, XL, XC, CD, CM.
pub fn subtractive_pairs_valid(pairs: &[SubtractivePair]) -> bool {
    pairs.iter().all(SubtractivePair::is_valid)
}

enum Token {
    Single(Symbol),
    Pair(Symbol),
}

impl Token {
    fn place(&self) -> u8 {
        match self {
            Token::Single(sym) | Token::Pair(sym) => sym.place(),
        }
    }
}

/// Digit being assembled for one decimal place.
struct Digit {
    place: u8,
    closed: bool,
    ones: u8,
}

/// True if the numeral reads as descending decimal places, each written as one
/// classical digit: a lone subtractive pair, or an optional five-symbol
/// followed by up to three one-symbols.
///
/// Rejects forms such as `IVI`, `IIX`, `XCX`, `VIV` and `IXX` that the other
/// predicates let through.
pub fn is_descending_order(s: &str) -> bool {
    let Some(symbols) = s.chars().map(Symbol::from_char).collect::<Option<Vec<_>>>() else {
        return false;
    };

    let mut tokens = Vec::with_capacity(symbols.len());
    let mut i = 0;
    while i < symbols.len() {
        match symbols.get(i + 1) {
            Some(&next) if next > symbols[i] => {
                let pair = SubtractivePair::new(symbols[i], next, i);
                if !pair.is_valid() {
                    return false;
                }
                tokens.push(Token::Pair(symbols[i]));
                i += 2;
            }
            _ => {
                tokens.push(Token::Single(symbols[i]));
                i += 1;
            }
        }
    }

    let mut digit: Option<Digit> = None;
    for token in &tokens {
        let place = token.place();
        match digit.as_mut() {
            Some(d) if place > d.place => return false,
            Some(d) if place == d.place => match token {
                // A pair or a five-symbol must open its digit.
                Token::Pair(_) => return false,
                Token::Single(sym) if sym.is_five() => return false,
                Token::Single(_) => {
                    if d.closed {
                        return false;
                    }
                    d.ones += 1;
                    if d.ones > 3 {
                        return false;
                    }
                }
            },
            _ => {
                digit = Some(match token {
                    Token::Pair(_) => Digit {
                        place,
                        closed: true,
                        ones: 0,
                    },
                    Token::Single(sym) => Digit {
                        place,
                        closed: false,
                        ones: if sym.is_five() { 0 } else { 1 },
                    },
                });
            }
        }
    }
    true
}

/// Grammar gate without the ordering rule: alphabet and length, V/L/D at most
/// once, I/X/C/M at most three in a row, and only classical subtractive pairs.
pub fn passes_symbol_rules(s: &str) -> bool {
    is_possible_numeral(s)
        && at_most_once_each(s, &Symbol::NON_REPEATABLE)
        && at_most_three_in_a_row(s, &Symbol::REPEATABLE)
        && subtractive_pairs_valid(&find_subtractive_pairs(s))
}

/// True if `s` is a well-formed classical Roman numeral.
pub fn is_valid_numeral(s: &str) -> bool {
    passes_symbol_rules(s) && is_descending_order(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs_of(s: &str) -> Vec<(String, usize)> {
        find_subtractive_pairs(s)
            .iter()
            .map(|p| (p.to_string(), p.index))
            .collect()
    }

    #[test]
    fn test_is_possible_numeral() {
        assert!(!is_possible_numeral(""));
        assert!(!is_possible_numeral("0123456789"));
        assert!(!is_possible_numeral("!#$%&()=?/\\"));
        assert!(is_possible_numeral("IVXLCDM"));
        assert!(is_possible_numeral("ivxlcdm"));
        assert!(is_possible_numeral("iIvVxXlLcCdDmM"));
        assert!(!is_possible_numeral(" XXXI"));
        assert!(!is_possible_numeral("XXXI "));
        assert!(!is_possible_numeral("XX XI"));
        assert!(!is_possible_numeral("M\nC"));
    }

    #[test]
    fn test_is_possible_numeral_length_bounds() {
        assert!(is_possible_numeral("I"));
        assert!(is_possible_numeral(&"I".repeat(10)));
        assert!(is_possible_numeral(&"I".repeat(15)));
        assert!(is_possible_numeral("MMMDCCCLXXXVIII"));
        assert!(!is_possible_numeral(&"I".repeat(16)));
    }

    #[test]
    fn test_at_most_once_each() {
        let vld = Symbol::NON_REPEATABLE;
        assert!(!at_most_once_each("VV", &vld));
        assert!(!at_most_once_each("LL", &vld));
        assert!(!at_most_once_each("DD", &vld));
        assert!(!at_most_once_each("vIv", &vld));
        assert!(at_most_once_each("VLD", &vld));
        assert!(at_most_once_each("MMXXIII", &vld));
        assert!(at_most_once_each("", &vld));
    }

    #[test]
    fn test_at_most_three_in_a_row() {
        let ixcm = Symbol::REPEATABLE;
        for ok in ["III", "XXX", "CCC", "MMM", "IIXIICII", "xxxIxxx"] {
            assert!(at_most_three_in_a_row(ok, &ixcm), "{ok}");
        }
        for bad in ["IIII", "XXXX", "CCCC", "MMMM", "iiIi", "VIIII"] {
            assert!(!at_most_three_in_a_row(bad, &ixcm), "{bad}");
        }
        // V resets the run
        assert!(at_most_three_in_a_row("IIIVIII", &ixcm));
    }

    #[test]
    fn test_find_subtractive_pairs() {
        assert_eq!(
            pairs_of("CMXLIV"),
            vec![
                ("CM".to_string(), 0),
                ("XL".to_string(), 2),
                ("IV".to_string(), 4),
            ]
        );
        assert!(pairs_of("XXX").is_empty());
        assert!(pairs_of("").is_empty());
        assert_eq!(pairs_of("mcmxc"), vec![("CM".to_string(), 1), ("XC".to_string(), 3)]);
    }

    #[test]
    fn test_subtractive_pairs_valid() {
        for ok in ["IV", "IX", "XL", "XC", "CD", "CM"] {
            assert!(subtractive_pairs_valid(&find_subtractive_pairs(ok)), "{ok}");
        }
        for bad in ["IL", "IC", "ID", "IM", "XD", "XM", "VX", "LC", "DM"] {
            assert!(!subtractive_pairs_valid(&find_subtractive_pairs(bad)), "{bad}");
        }
    }

    #[test]
    fn test_is_descending_order() {
        for ok in ["I", "IV", "XIX", "MCMXC", "MMMDCCCXCIX", "CDXLIV", "VIII"] {
            assert!(is_descending_order(ok), "{ok}");
        }
        for bad in ["IVI", "IIX", "IXX", "XCX", "VIV", "LXL", "CMD", "IXI", "CIVM", "VX"] {
            assert!(!is_descending_order(bad), "{bad}");
        }
    }

    #[test]
    fn test_is_valid_numeral() {
        assert!(is_valid_numeral("mMmccCXXXviii"));
        assert!(is_valid_numeral("MMDCCCLXXXVIII"));
        assert!(!is_valid_numeral("IXX"));
        assert!(!is_valid_numeral("CIVM"));
        assert!(!is_valid_numeral("IVI"));
        assert!(!is_valid_numeral(""));
        // Passes the symbol rules, fails only on order.
        assert!(passes_symbol_rules("IIX"));
        assert!(!is_valid_numeral("IIX"));
    }
}
