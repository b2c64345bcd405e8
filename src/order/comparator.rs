//! Chapter comparator: total order over chapter file names.
//!
//! Порядок сравнения:
//! 1. PriorityClass: Prologue < Numbered < PlainText.
//! 2. Both prologue: a pure keyword goes before a numbered one.
//! 3. Numeric projection (all Numeric values, element-wise; exhausted first).
//! 4. Full segment lists (element-wise, Numeric < Text on a variant mismatch).
//! 5. File name bytes.
//!
//! Every step is a total preorder and the last is a total order, so the
//! composition is a strict weak order usable with `sort_by`.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::path::Path;

use super::prologue::{classify_prologue, Prologue};
use super::tokenizer::{tokenize_with, TokenizeResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PriorityClass {
    Prologue = 0,
    Numbered = 1,
    PlainText = 2,
}

/// Everything the comparator needs about one stem, computed once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterKey {
    pub class: PriorityClass,
    pub prologue: Prologue,
    pub tokens: TokenizeResult,
}

impl ChapterKey {
    pub fn build(stem: &str, keywords: &[String]) -> Self {
        let prologue = classify_prologue(stem, keywords);
        let tokens = tokenize_with(stem, keywords);
        let class = if prologue.is_prologue() {
            PriorityClass::Prologue
        } else if tokens.has_number {
            PriorityClass::Numbered
        } else {
            PriorityClass::PlainText
        };
        Self {
            class,
            prologue,
            tokens,
        }
    }
}

impl Ord for ChapterKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.class
            .cmp(&other.class)
            .then_with(|| {
                if self.class == PriorityClass::Prologue {
                    // pure first: true < false
                    other.prologue.is_pure().cmp(&self.prologue.is_pure())
                } else {
                    Ordering::Equal
                }
            })
            .then_with(|| self.tokens.numbers().cmp(other.tokens.numbers()))
            .then_with(|| self.tokens.segments.cmp(&other.tokens.segments))
    }
}

impl PartialOrd for ChapterKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// File stem of a name ("序章1.txt" -> "序章1"); a name without a stem is used as is.
pub fn stem_of(name: &str) -> &str {
    Path::new(name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(name)
}

/// Comparator owning a per-sort memo table (stem -> key).
#[derive(Debug)]
pub struct ChapterComparator {
    keywords: Vec<String>,
    memo: HashMap<String, ChapterKey>,
}

impl ChapterComparator {
    pub fn new<S: AsRef<str>>(prologue_keywords: &[S]) -> Self {
        Self {
            keywords: prologue_keywords
                .iter()
                .map(|k| k.as_ref().to_lowercase())
                .collect(),
            memo: HashMap::new(),
        }
    }

    fn prime(&mut self, stem: &str) {
        if !self.memo.contains_key(stem) {
            let key = ChapterKey::build(stem, &self.keywords);
            self.memo.insert(stem.to_string(), key);
        }
    }

    /// Key for a file name (memoized by stem).
    pub fn key(&mut self, name: &str) -> &ChapterKey {
        let stem = stem_of(name);
        self.prime(stem);
        &self.memo[stem]
    }

    /// Compare two file names.
    pub fn compare(&mut self, a: &str, b: &str) -> Ordering {
        let (sa, sb) = (stem_of(a), stem_of(b));
        self.prime(sa);
        self.prime(sb);
        self.memo[sa]
            .cmp(&self.memo[sb])
            .then_with(|| a.as_bytes().cmp(b.as_bytes()))
    }

    /// Sort any items by the file name `name_of` extracts.
    pub fn sort_by_name<T, F>(&mut self, items: &mut [T], name_of: F)
    where
        F: Fn(&T) -> &str,
    {
        items.sort_by(|x, y| self.compare(name_of(x), name_of(y)));
    }

    pub fn sort_names(&mut self, names: &mut [String]) {
        self.sort_by_name(names, |s| s.as_str());
    }

    pub fn memo_len(&self) -> usize {
        self.memo.len()
    }
}
