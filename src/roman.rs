use regex::Regex;
use std::sync::LazyLock;

// Thousands are capped at MMM, so the largest accepted numeral is MMMCMXCIX.
static ROMAN_NUMERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^M{0,3}(CM|CD|D?C{0,3})(XC|XL|L?X{0,3})(IX|IV|V?I{0,3})$")
        .expect("roman numeral grammar is a valid pattern")
});

fn symbol_value(c: char) -> Option<u32> {
    match c {
        'I' => Some(1),
        'V' => Some(5),
        'X' => Some(10),
        'L' => Some(50),
        'C' => Some(100),
        'D' => Some(500),
        'M' => Some(1000),
        _ => None,
    }
}

/// Strict, uppercase-only check. The empty string is not a numeral.
pub fn is_valid_roman_numeral(token: &str) -> bool {
    !token.is_empty() && ROMAN_NUMERAL.is_match(token)
}

/// Converts a valid numeral to its value, scanning right to left.
pub fn roman_to_int(token: &str) -> Option<u32> {
    if !is_valid_roman_numeral(token) {
        return None;
    }

    let mut total = 0u32;
    let mut prev = 0u32;
    for c in token.chars().rev() {
        let value = symbol_value(c)?;
        if value < prev {
            total -= value;
        } else {
            total += value;
        }
        prev = value;
    }
    Some(total)
}
