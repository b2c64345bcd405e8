//! Segment tokenizer: filename stem -> ordered `Numeric | Text` segments.
//!
//! 1. `[0-9]+` / `[^0-9]+` runs, order preserved.
//! 2. digit run -> Numeric.
//! 3. run with CJK numerals -> one Numeric, the whole run parsed as Chinese.
//! 4. other runs -> whitespace-split words, each tried as prologue keyword (0),
//!    Unicode Roman glyph, ASCII Roman, English words; otherwise Text (lowercased).

use std::cmp::Ordering;
use std::sync::LazyLock;

use regex::Regex;

use crate::numeral::{
    is_cjk_numeral, is_valid_roman, parse_chinese, parse_digits, parse_english, parse_roman,
    unicode_roman_value,
};

static RE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+|[^0-9]+").expect("valid run regex"));

/// One token of a parsed stem.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    Numeric(i64),
    /// Case-folded word.
    Text(String),
}

impl Segment {
    pub fn as_numeric(&self) -> Option<i64> {
        match self {
            Segment::Numeric(n) => Some(*n),
            Segment::Text(_) => None,
        }
    }
}

impl Ord for Segment {
    /// Numbers by value, text by ordinal string order; a number sorts before text.
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Segment::Numeric(a), Segment::Numeric(b)) => a.cmp(b),
            (Segment::Text(a), Segment::Text(b)) => a.as_bytes().cmp(b.as_bytes()),
            (Segment::Numeric(_), Segment::Text(_)) => Ordering::Less,
            (Segment::Text(_), Segment::Numeric(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for Segment {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TokenizeResult {
    /// True if any segment resolved to Numeric.
    pub has_number: bool,
    pub segments: Vec<Segment>,
}

impl TokenizeResult {
    fn push(&mut self, seg: Segment) {
        if matches!(seg, Segment::Numeric(_)) {
            self.has_number = true;
        }
        self.segments.push(seg);
    }

    /// Numeric values in order (text dropped).
    pub fn numbers(&self) -> impl Iterator<Item = i64> + '_ {
        self.segments.iter().filter_map(Segment::as_numeric)
    }
}

/// Tokenize a stem. `keywords` must already be lowercase.
/// Memoization lives in `ChapterComparator` (one table per sort).
pub fn tokenize_with(stem: &str, keywords: &[String]) -> TokenizeResult {
    let mut out = TokenizeResult::default();

    for run in RE_RUNS.find_iter(stem).map(|m| m.as_str()) {
        if run.bytes().all(|b| b.is_ascii_digit()) {
            out.push(Segment::Numeric(parse_digits(run)));
        } else if run.chars().any(is_cjk_numeral) {
            // весь отрезок целиком: "第十章" -> 10
            out.push(Segment::Numeric(parse_chinese(run)));
        } else {
            for word in run.split_whitespace() {
                out.push(classify_word(word, keywords));
            }
        }
    }

    out
}

fn classify_word(word: &str, keywords: &[String]) -> Segment {
    let lower = word.to_lowercase();

    // ключевое слово пролога всегда 0
    if keywords.iter().any(|k| *k == lower) {
        return Segment::Numeric(0);
    }

    if let Some(v) = word.chars().find_map(unicode_roman_value) {
        return Segment::Numeric(v);
    }

    if word.chars().all(|c| c.is_ascii_alphabetic()) && is_valid_roman(word) {
        return Segment::Numeric(parse_roman(word));
    }

    // "twenty-one" - дефис допустим
    if word.chars().all(|c| c.is_ascii_alphabetic() || c == '-') {
        let v = parse_english(word);
        if v != 0 {
            return Segment::Numeric(v);
        }
    }

    Segment::Text(lower)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::PROLOGUE_KEYWORDS;

    fn tok(stem: &str) -> TokenizeResult {
        let kw: Vec<String> = PROLOGUE_KEYWORDS.iter().map(|s| s.to_string()).collect();
        tokenize_with(stem, &kw)
    }

    fn num(n: i64) -> Segment {
        Segment::Numeric(n)
    }

    fn text(s: &str) -> Segment {
        Segment::Text(s.to_string())
    }

    #[test]
    fn digit_runs_and_text() {
        let r = tok("Chapter 10");
        assert!(r.has_number);
        assert_eq!(r.segments, vec![text("chapter"), num(10)]);

        let r = tok("vol2-part11");
        assert_eq!(r.segments, vec![text("vol"), num(2), text("-part"), num(11)]);
    }

    #[test]
    fn chinese_runs() {
        assert_eq!(tok("第十章").segments, vec![num(10)]);
        // один CJK-отрезок = одно число
        assert_eq!(tok("第一卷 第十二章").segments, vec![num(12)]);
        assert_eq!(tok("第一章 第二节").segments, vec![num(2)]);
        assert_eq!(tok("第二十三章").segments, vec![num(23)]);
        assert_eq!(tok("第3章 两个人").segments, vec![text("第"), num(3), num(2)]);
    }

    #[test]
    fn roman_and_english_words() {
        assert_eq!(tok("X").segments, vec![num(10)]);
        assert_eq!(tok("Part iv").segments, vec![text("part"), num(4)]);
        assert_eq!(tok("Book Twelve").segments, vec![text("book"), num(12)]);
        assert_eq!(tok("twenty-one").segments, vec![num(21)]);
    }

    #[test]
    fn common_words_stay_text() {
        let r = tok("mix in");
        assert!(!r.has_number);
        assert_eq!(r.segments, vec![text("mix"), text("in")]);
    }

    #[test]
    fn unicode_roman_takes_first_glyph() {
        assert_eq!(tok("卷Ⅻ").segments, vec![num(12)]);
        assert_eq!(tok("ⅲⅳ").segments, vec![num(3)]);
    }

    #[test]
    fn prologue_keyword_is_zero() {
        assert_eq!(tok("Prologue").segments, vec![num(0)]);
        assert_eq!(tok("序章1").segments, vec![num(0), num(1)]);
    }

    #[test]
    fn zero_word_is_text() {
        assert_eq!(tok("zero").segments, vec![text("zero")]);
    }

    #[test]
    fn plain_text_has_no_number() {
        let r = tok("后记");
        assert!(!r.has_number);
        assert_eq!(r.segments, vec![text("后记")]);
    }

    #[test]
    fn segment_order_numeric_before_text() {
        assert!(num(999) < text("a"));
        assert!(text("a") < text("b"));
        assert!(num(2) < num(10));
    }
}
