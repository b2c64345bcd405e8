//! Pagination splitter: text -> page boundary table.
//!
//! Walks the text in windows of `page_size` chars. In each window the first
//! delimiter (priority order) that occurs at all decides the split: the page
//! ends right after its last occurrence. No delimiter means a hard cut at the
//! window edge. Finally a short trailing page (< page_size * MERGE_RATIO) is
//! folded into the previous one, repeatedly.
//!
//! Offsets are char (Unicode scalar) indices, not bytes.

use crate::consts::MERGE_RATIO;
use crate::util::is_blank;

/// Delimiter patterns, pre-split into chars, strongest first.
#[derive(Debug, Clone)]
pub struct Punctuation {
    patterns: Vec<Vec<char>>,
}

impl Punctuation {
    pub fn new<S: AsRef<str>>(list: &[S]) -> Self {
        Self {
            patterns: list
                .iter()
                .map(|p| p.as_ref().chars().collect::<Vec<char>>())
                .filter(|p| !p.is_empty())
                .collect(),
        }
    }

    /// End offset (within `window`) just past the last occurrence of the
    /// strongest pattern present in it.
    pub fn split_in(&self, window: &[char]) -> Option<usize> {
        self.patterns
            .iter()
            .find_map(|p| rfind(window, p).map(|at| at + p.len()))
    }
}

impl Default for Punctuation {
    fn default() -> Self {
        Self::new(crate::consts::PUNCTUATION)
    }
}

fn rfind(hay: &[char], needle: &[char]) -> Option<usize> {
    if needle.len() > hay.len() {
        return None;
    }
    (0..=hay.len() - needle.len())
        .rev()
        .find(|&i| hay[i..i + needle.len()] == *needle)
}

/// Ordered char offsets `[0, p1, .., total]`; page i (1-based) is `[b[i-1], b[i])`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageBoundaries(Vec<usize>);

impl PageBoundaries {
    /// Wrap a raw table if it satisfies the invariants for a text of
    /// `total_chars`: starts at 0, strictly increasing, ends at total.
    pub fn from_raw(raw: Vec<usize>, total_chars: usize) -> Option<Self> {
        if raw.first() != Some(&0) || raw.last() != Some(&total_chars) {
            return None;
        }
        if raw.windows(2).any(|w| w[0] >= w[1]) {
            return None;
        }
        if total_chars > 0 && raw.len() < 2 {
            return None;
        }
        Some(Self(raw))
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<usize> {
        self.0
    }

    /// Number of pages; an empty chapter still has one (empty) page.
    pub fn page_count(&self) -> usize {
        self.0.len().saturating_sub(1).max(1)
    }

    pub fn total_chars(&self) -> usize {
        self.0.last().copied().unwrap_or(0)
    }

    /// Char span of 1-based page `page`, clamped into `[1, page_count]`.
    pub fn span(&self, page: usize) -> (usize, usize) {
        let page = page.clamp(1, self.page_count());
        let start = self.0.get(page - 1).copied().unwrap_or(0);
        let end = self.0.get(page).copied().unwrap_or_else(|| self.total_chars());
        (start, end)
    }

    pub fn spans(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (1..=self.page_count()).map(move |p| self.span(p))
    }
}

/// Split `text` into pages of about `page_size` chars. `page_size` of 0 is treated as 1.
pub fn split_pages(text: &str, page_size: usize, punct: &Punctuation) -> PageBoundaries {
    let chars: Vec<char> = text.chars().collect();
    split_chars(&chars, page_size, punct)
}

pub fn split_chars(chars: &[char], page_size: usize, punct: &Punctuation) -> PageBoundaries {
    let page_size = page_size.max(1);
    let total = chars.len();
    let mut bounds: Vec<usize> = Vec::with_capacity(total / page_size + 2);
    let mut pos = 0usize;

    while pos < total {
        let window_end = (pos + page_size).min(total);
        let window = &chars[pos..window_end];

        let split = match punct.split_in(window) {
            Some(rel) => pos + rel,
            None => pos + page_size,
        }
        .min(total);

        // пустой (пробельный) кусок не открывает новую страницу
        if is_blank(&chars[pos..split]) {
            pos = split;
            continue;
        }

        bounds.push(if bounds.is_empty() { 0 } else { pos });
        pos = split;
    }

    if bounds.is_empty() {
        bounds.push(0);
    }
    if bounds.last() != Some(&total) {
        bounds.push(total);
    }

    merge_short_tail(&mut bounds, page_size);
    PageBoundaries(bounds)
}

/// Drop the second-to-last boundary while the last page is under the threshold.
fn merge_short_tail(bounds: &mut Vec<usize>, page_size: usize) {
    let min_len = page_size as f64 * MERGE_RATIO;
    while bounds.len() > 2 {
        let n = bounds.len();
        let last_len = bounds[n - 1] - bounds[n - 2];
        if (last_len as f64) < min_len {
            bounds.remove(n - 2);
        } else {
            break;
        }
    }
}
