#![doc = r#"
numerus — validate and convert classical Roman numerals.

Converts Roman numerals to Arabic numbers and back over the classical range
1..=3899. Input numerals are case-insensitive; output numerals are uppercase.
The crate powers the `numerus` CLI and can be embedded directly.

Quick start
-----------
```rust
use numerus::{arabic_to_roman, roman_to_arabic};

assert_eq!(roman_to_arabic("MMDCCCLXXXVIII"), 2888);
assert_eq!(arabic_to_roman(1990), "MCMXC");
assert_eq!(arabic_to_roman("1990"), "MCMXC");
```

Invalid input is an ordinary outcome: `roman_to_arabic` returns `-1` and
`arabic_to_roman` returns an empty string.

```rust
assert_eq!(numerus::roman_to_arabic("IIII"), -1);
assert_eq!(numerus::arabic_to_roman(3900), "");
```

Error handling
--------------
The typed counterparts return `numerus::Result<T>`; match on `numerus::Error`
to tell malformed input apart from out-of-range values.

```rust
use numerus::{format_roman, parse_roman, Error};

assert_eq!(parse_roman("xiv"), Ok(14));
match format_roman("4000") {
    Err(Error::OutOfRange { value }) => assert_eq!(value, 4000),
    other => panic!("unexpected: {other:?}"),
}
```

Validation only
---------------
```rust
use numerus::core::validator::{find_subtractive_pairs, is_valid_numeral};

assert!(is_valid_numeral("CMXLIV"));
let pairs: Vec<String> = find_subtractive_pairs("CMXLIV").iter().map(|p| p.to_string()).collect();
assert_eq!(pairs, ["CM", "XL", "IV"]);
```

Useful modules
--------------
- [`api`] — sentinel and typed conversion entry points.
- [`core`] — symbol tables, validator predicates, and the converters.
- [`types`] — `Direction`, `OutputFormat`, `SubtractivePair`, `ArabicInput`.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod types;

// Curated public API surface
pub use crate::core::symbols::{MAX_ARABIC, Symbol};
pub use error::{Error, Result};
pub use types::{ArabicInput, Direction, OutputFormat, SubtractivePair};

pub use api::{
    Conversion, Converted, arabic_to_roman, convert, format_roman, parse_roman, roman_to_arabic,
};
