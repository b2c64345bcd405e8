//! Prologue (front matter) classification of a whole stem.

use std::sync::LazyLock;

use regex::Regex;

static RE_PROLOGUE_TAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\s0-9一二三四五六七八九十壹贰叁肆伍陆柒捌玖拾]+$")
        .expect("valid prologue tail regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prologue {
    /// Not front matter.
    No,
    /// Bare keyword: "序", "Prologue".
    Pure,
    /// Keyword followed by whitespace/digits/CJK numerals: "序章1", "Prologue 2".
    Numbered,
}

impl Prologue {
    pub fn is_prologue(self) -> bool {
        !matches!(self, Prologue::No)
    }

    pub fn is_pure(self) -> bool {
        matches!(self, Prologue::Pure)
    }
}

/// Classify `stem` against lowercase `keywords`.
pub fn classify_prologue(stem: &str, keywords: &[String]) -> Prologue {
    let lower = stem.to_lowercase();

    if keywords.iter().any(|k| *k == lower) {
        return Prologue::Pure;
    }

    let prefixed = keywords.iter().any(|k| {
        lower
            .strip_prefix(k.as_str())
            .is_some_and(|rest| RE_PROLOGUE_TAIL.is_match(rest))
    });

    if prefixed {
        Prologue::Numbered
    } else {
        Prologue::No
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::PROLOGUE_KEYWORDS;

    fn kw() -> Vec<String> {
        PROLOGUE_KEYWORDS.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn pure_keywords() {
        assert_eq!(classify_prologue("序", &kw()), Prologue::Pure);
        assert_eq!(classify_prologue("PROLOGUE", &kw()), Prologue::Pure);
        assert_eq!(classify_prologue("緒論", &kw()), Prologue::Pure);
    }

    #[test]
    fn numbered_prologues() {
        assert_eq!(classify_prologue("序章1", &kw()), Prologue::Numbered);
        assert_eq!(classify_prologue("Prologue 2", &kw()), Prologue::Numbered);
        assert_eq!(classify_prologue("序章 三", &kw()), Prologue::Numbered);
    }

    #[test]
    fn not_prologue() {
        assert_eq!(classify_prologue("第一章", &kw()), Prologue::No);
        assert_eq!(classify_prologue("Introduction to Rust", &kw()), Prologue::No);
        assert_eq!(classify_prologue("序幕", &kw()), Prologue::No);
        assert_eq!(classify_prologue("1", &kw()), Prologue::No);
    }
}
