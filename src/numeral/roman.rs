//! Roman numerals: strict ASCII validation/parsing plus Unicode glyphs (U+2160..).

/// English words made only of Roman letters that must stay text.
const COMMON_WORDS: &[&str] = &["IN", "DIM", "MIX", "VIM", "LID", "MID", "MILD", "LIVID"];

const MAX_LEN: usize = 15;

const REPEATS: &[&str] = &["IIII", "XXXX", "CCCC", "MMMM", "VV", "LL", "DD"];

const BAD_PAIRS: &[&str] = &[
    "IL", "IC", "ID", "IM", "XD", "XM", "VX", "VL", "VC", "VD", "VM", "LC", "LD", "LM", "DM",
];

fn letter_value(c: char) -> Option<i64> {
    let v = match c {
        'I' => 1,
        'V' => 5,
        'X' => 10,
        'L' => 50,
        'C' => 100,
        'D' => 500,
        'M' => 1000,
        _ => return None,
    };
    Some(v)
}

/// Strict canonical-form check (case-insensitive).
pub fn is_valid_roman(s: &str) -> bool {
    if s.is_empty() || s.len() > MAX_LEN {
        return false;
    }
    let up = s.to_ascii_uppercase();
    if !up.chars().all(|c| letter_value(c).is_some()) {
        return false;
    }
    if COMMON_WORDS.contains(&up.as_str()) {
        return false;
    }
    if REPEATS.iter().any(|r| up.contains(r)) {
        return false;
    }
    !BAD_PAIRS.iter().any(|p| up.contains(p))
}

/// Left-to-right: a letter smaller than its successor is subtracted.
/// Callers validate first; unknown letters count as 0.
pub fn parse_roman(s: &str) -> i64 {
    let vals: Vec<i64> = s
        .chars()
        .map(|c| letter_value(c.to_ascii_uppercase()).unwrap_or(0))
        .collect();

    let mut total = 0i64;
    for (i, &v) in vals.iter().enumerate() {
        let next = vals.get(i + 1).copied().unwrap_or(0);
        if v < next {
            total -= v;
        } else {
            total += v;
        }
    }
    total
}

/// Value of a single Unicode Roman numeral glyph (Ⅰ..Ⅿ, ⅰ..ⅿ).
pub fn unicode_roman_value(c: char) -> Option<i64> {
    let v = match c {
        'Ⅰ' | 'ⅰ' => 1,
        'Ⅱ' | 'ⅱ' => 2,
        'Ⅲ' | 'ⅲ' => 3,
        'Ⅳ' | 'ⅳ' => 4,
        'Ⅴ' | 'ⅴ' => 5,
        'Ⅵ' | 'ⅵ' => 6,
        'Ⅶ' | 'ⅶ' => 7,
        'Ⅷ' | 'ⅷ' => 8,
        'Ⅸ' | 'ⅸ' => 9,
        'Ⅹ' | 'ⅹ' => 10,
        'Ⅺ' | 'ⅺ' => 11,
        'Ⅻ' | 'ⅻ' => 12,
        'Ⅼ' | 'ⅼ' => 50,
        'Ⅽ' | 'ⅽ' => 100,
        'Ⅾ' | 'ⅾ' => 500,
        'Ⅿ' | 'ⅿ' => 1000,
        _ => return None,
    };
    Some(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_values() {
        for (s, v) in [("I", 1), ("iv", 4), ("IX", 9), ("XIV", 14), ("XL", 40), ("MCMXCIV", 1994)] {
            assert!(is_valid_roman(s), "{s} must be valid");
            assert_eq!(parse_roman(s), v, "{s}");
        }
    }

    #[test]
    fn rejects_bad_forms() {
        for s in ["IIII", "VV", "IL", "IC", "VX", "DM", "ABC", "", "MMMCCCXXXVIIIMMM"] {
            assert!(!is_valid_roman(s), "{s} must be rejected");
        }
    }

    #[test]
    fn rejects_common_words() {
        for s in ["in", "Mix", "MID", "livid", "vim"] {
            assert!(!is_valid_roman(s), "{s} is a word");
        }
    }

    #[test]
    fn unicode_glyphs() {
        assert_eq!(unicode_roman_value('Ⅻ'), Some(12));
        assert_eq!(unicode_roman_value('ⅳ'), Some(4));
        assert_eq!(unicode_roman_value('X'), None);
    }
}
