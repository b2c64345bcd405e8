//! paginate/view: Paginator (memo -> disk record -> splitter) and PageView.

use anyhow::Result;
use log::{debug, warn};
use std::path::Path;

use crate::config::ReaderConfig;
use crate::metrics;
use crate::util::file_mtime_secs;

use super::cache::{cache_path_for, lookup, store, MissReason, PaginationCacheRecord};
use super::memo::PaginationMemo;
use super::splitter::{split_chars, PageBoundaries, Punctuation};

/// Where the boundary table came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheOutcome {
    /// Valid on-disk record.
    Hit,
    /// In-process memo.
    Memo,
    /// Recomputed by the splitter.
    Miss(MissReason),
}

impl CacheOutcome {
    pub fn recomputed(self) -> bool {
        matches!(self, CacheOutcome::Miss(_))
    }
}

#[derive(Debug, Clone)]
pub struct Paginated {
    pub boundaries: PageBoundaries,
    pub outcome: CacheOutcome,
    /// Whether a fresh record reached disk (false on hit, bypass or write failure).
    pub persisted: bool,
}

/// One rendered page of a chapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    /// 1-based, already clamped.
    pub page: usize,
    pub max_pages: usize,
    pub start: usize,
    pub end: usize,
    pub content: String,
}

impl PageView {
    pub fn is_first(&self) -> bool {
        self.page == 1
    }

    pub fn is_last(&self) -> bool {
        self.page == self.max_pages
    }

    /// Lines of the page split on `\r\n`, `\r` or `\n`.
    pub fn paragraphs(&self) -> Vec<&str> {
        let mut out = Vec::new();
        let mut rest = self.content.as_str();
        while let Some(i) = rest.find(['\r', '\n']) {
            out.push(&rest[..i]);
            let skip = if rest[i..].starts_with("\r\n") { 2 } else { 1 };
            rest = &rest[i + skip..];
        }
        out.push(rest);
        out
    }
}

pub struct Paginator {
    cfg: ReaderConfig,
    punct: Punctuation,
    memo: PaginationMemo,
}

impl Paginator {
    pub fn new(cfg: ReaderConfig) -> Result<Self> {
        cfg.validate()?;
        let punct = Punctuation::new(&cfg.punctuation);
        let memo = PaginationMemo::new(cfg.memo_chapters);
        Ok(Self { cfg, punct, memo })
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.cfg
    }

    /// Boundary table for `text` read from `chapter_path`, served from memo or
    /// the sibling record when they match the live mtime and page size,
    /// recomputed (and persisted best-effort) otherwise.
    pub fn boundaries(&self, chapter_path: &Path, text: &str) -> Result<Paginated> {
        let chars: Vec<char> = text.chars().collect();
        self.boundaries_chars(chapter_path, &chars, true)
    }

    /// Same as `boundaries` but never touches the on-disk record or the memo.
    pub fn boundaries_uncached(&self, text: &str) -> PageBoundaries {
        let chars: Vec<char> = text.chars().collect();
        metrics::record_recompute(chars.len());
        split_chars(&chars, self.cfg.page_size, &self.punct)
    }

    fn boundaries_chars(
        &self,
        chapter_path: &Path,
        chars: &[char],
        use_cache: bool,
    ) -> Result<Paginated> {
        let page_size = self.cfg.page_size;

        // bypass не читает mtime: файл главы может быть уже недоступен
        if !use_cache {
            metrics::record_recompute(chars.len());
            return Ok(Paginated {
                boundaries: split_chars(chars, page_size, &self.punct),
                outcome: CacheOutcome::Miss(MissReason::Bypassed),
                persisted: false,
            });
        }

        let mtime = file_mtime_secs(chapter_path)?;

        if let Some(b) = self.memo.get(chapter_path, page_size, mtime) {
            if b.total_chars() == chars.len() {
                metrics::record_memo_hit();
                return Ok(Paginated {
                    boundaries: b,
                    outcome: CacheOutcome::Memo,
                    persisted: false,
                });
            }
        }

        let cache_path = cache_path_for(chapter_path);
        let reason = match lookup(&cache_path, page_size, mtime, chars.len()) {
            Ok(b) => {
                metrics::record_cache_hit();
                debug!("pagination cache hit: {}", cache_path.display());
                self.memo.put(chapter_path, page_size, mtime, b.clone());
                return Ok(Paginated {
                    boundaries: b,
                    outcome: CacheOutcome::Hit,
                    persisted: false,
                });
            }
            Err(reason) => reason,
        };

        metrics::record_cache_miss();
        debug!(
            "pagination cache miss ({}): {}, recomputing {} chars",
            reason,
            cache_path.display(),
            chars.len()
        );

        metrics::record_recompute(chars.len());
        let bounds = split_chars(chars, page_size, &self.punct);

        let rec = PaginationCacheRecord {
            page_size,
            file_mtime: mtime,
            pagination: bounds.as_slice().to_vec(),
        };
        let persisted = match store(&cache_path, &rec) {
            Ok(()) => {
                metrics::record_cache_write();
                true
            }
            Err(e) => {
                metrics::record_cache_write_failure();
                warn!("pagination cache not written ({}): {:#}", cache_path.display(), e);
                false
            }
        };

        self.memo.put(chapter_path, page_size, mtime, bounds.clone());
        Ok(Paginated {
            boundaries: bounds,
            outcome: CacheOutcome::Miss(reason),
            persisted,
        })
    }

    /// Page `requested` (clamped into `[1, max_pages]`) of `text`.
    pub fn page(&self, chapter_path: &Path, text: &str, requested: usize) -> Result<(PageView, Paginated)> {
        self.page_with(chapter_path, text, requested, true)
    }

    pub fn page_with(
        &self,
        chapter_path: &Path,
        text: &str,
        requested: usize,
        use_cache: bool,
    ) -> Result<(PageView, Paginated)> {
        let chars: Vec<char> = text.chars().collect();
        let pg = self.boundaries_chars(chapter_path, &chars, use_cache)?;
        let view = extract_page(&chars, &pg.boundaries, requested);
        Ok((view, pg))
    }
}

/// Cut page `requested` out of `chars`; out-of-range requests clamp.
pub fn extract_page(chars: &[char], bounds: &PageBoundaries, requested: usize) -> PageView {
    let max_pages = bounds.page_count();
    let page = requested.clamp(1, max_pages);
    let (start, end) = bounds.span(page);
    let end = end.min(chars.len());
    let start = start.min(end);
    PageView {
        page,
        max_pages,
        start,
        end,
        content: chars[start..end].iter().collect(),
    }
}
