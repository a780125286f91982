//! Roman→Arabic conversion.
//!
//! Two passes over the uppercased numeral: the validator gate (which also finds
//! the subtractive pairs), then a single left-to-right accumulation walk.
use std::collections::HashSet;

use crate::core::symbols::{MAX_ARABIC, Symbol};
use crate::core::validator::{find_subtractive_pairs, is_valid_numeral};

/// Converts a numeral of any case. `None` for anything malformed.
pub fn to_arabic(numeral: &str) -> Option<u16> {
    let numeral = numeral.to_ascii_uppercase();
    if !is_valid_numeral(&numeral) {
        return None;
    }

    let pair_starts: HashSet<usize> = find_subtractive_pairs(&numeral)
        .iter()
        .map(|p| p.index)
        .collect();

    let value = accumulate(&numeral, &pair_starts)?;
    if value == 0 || value > i32::from(MAX_ARABIC) {
        return None;
    }
    u16::try_from(value).ok()
}

/// Walks the numeral, subtracting at pair starts and adding everywhere else.
///
/// Symbols outside a pair must not increase in value; the second half of a
/// pair is exempt and does not become the new reference symbol.
fn accumulate(numeral: &str, pair_starts: &HashSet<usize>) -> Option<i32> {
    let mut total: i32 = 0;
    let mut last_primary = Symbol::M;
    let mut skip_next = false;

    for (index, c) in numeral.chars().enumerate() {
        let sym = Symbol::from_char(c)?;
        let value = i32::from(sym.value());

        if pair_starts.contains(&index) {
            total -= value;
            skip_next = true;
            continue;
        }

        if skip_next {
            skip_next = false;
        } else {
            if sym > last_primary {
                return None;
            }
            last_primary = sym;
        }
        total += value;
    }
    Some(total)
}
