//! numeral: pure `&str -> i64` parsers used by the segment tokenizer.
//!
//! - chinese: 一二三 / 壹贰叁 / 十百千万亿 (simplified, traditional, financial)
//! - english: "twenty-one", "one hundred", ...
//! - roman:   strict canonical ASCII form + Unicode Roman glyphs (Ⅻ, ⅳ, ...)
//!
//! Ни один парсер не возвращает ошибку: отказ = None / 0, и токен
//! становится обычным текстом.

pub mod chinese;
pub mod english;
pub mod roman;

pub use chinese::{is_cjk_numeral, parse_chinese};
pub use english::parse_english;
pub use roman::{is_valid_roman, parse_roman, unicode_roman_value};

/// Parse a run of ASCII digits. Runs too long for i64 saturate.
pub fn parse_digits(s: &str) -> i64 {
    s.bytes()
        .filter(u8::is_ascii_digit)
        .fold(0i64, |acc, b| {
            acc.saturating_mul(10).saturating_add((b - b'0') as i64)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_plain_and_leading_zero() {
        assert_eq!(parse_digits("0"), 0);
        assert_eq!(parse_digits("007"), 7);
        assert_eq!(parse_digits("1234"), 1234);
    }

    #[test]
    fn digits_saturate() {
        assert_eq!(parse_digits("99999999999999999999999"), i64::MAX);
    }
}
