//! Lightweight global metrics for ShelfReader.
//!
//! Потокобезопасные атомарные счётчики для подсистем:
//! - Pagination cache (on-disk record)
//! - Pagination memo (in-process layer)
//! - Splitter recomputations
//! - Chapter ordering

use std::sync::atomic::{AtomicU64, Ordering};

// ----- Pagination cache -----
static PAGINATION_CACHE_HITS: AtomicU64 = AtomicU64::new(0);
static PAGINATION_CACHE_MISSES: AtomicU64 = AtomicU64::new(0);
static PAGINATION_CACHE_WRITES: AtomicU64 = AtomicU64::new(0);
static PAGINATION_CACHE_WRITE_FAILURES: AtomicU64 = AtomicU64::new(0);

// ----- Memo -----
static PAGINATION_MEMO_HITS: AtomicU64 = AtomicU64::new(0);

// ----- Splitter -----
static PAGINATION_RECOMPUTES: AtomicU64 = AtomicU64::new(0);
static PAGINATION_CHARS_SPLIT: AtomicU64 = AtomicU64::new(0);

// ----- Ordering -----
static CHAPTER_SORTS: AtomicU64 = AtomicU64::new(0);
static CHAPTERS_SORTED: AtomicU64 = AtomicU64::new(0);

#[derive(Debug, Clone, Default)]
pub struct MetricsSnapshot {
    // Pagination cache
    pub pagination_cache_hits: u64,
    pub pagination_cache_misses: u64,
    pub pagination_cache_writes: u64,
    pub pagination_cache_write_failures: u64,

    // Memo
    pub pagination_memo_hits: u64,

    // Splitter
    pub pagination_recomputes: u64,
    pub pagination_chars_split: u64,

    // Ordering
    pub chapter_sorts: u64,
    pub chapters_sorted: u64,
}

impl MetricsSnapshot {
    pub fn cache_hit_ratio(&self) -> f64 {
        let hits = self.pagination_cache_hits + self.pagination_memo_hits;
        let total = hits + self.pagination_cache_misses;
        if total == 0 {
            0.0
        } else {
            hits as f64 / total as f64
        }
    }
}

// ----- Recorders (Pagination cache) -----
pub fn record_cache_hit() {
    PAGINATION_CACHE_HITS.fetch_add(1, Ordering::Relaxed);
}
pub fn record_cache_miss() {
    PAGINATION_CACHE_MISSES.fetch_add(1, Ordering::Relaxed);
}
pub fn record_cache_write() {
    PAGINATION_CACHE_WRITES.fetch_add(1, Ordering::Relaxed);
}
pub fn record_cache_write_failure() {
    PAGINATION_CACHE_WRITE_FAILURES.fetch_add(1, Ordering::Relaxed);
}

// ----- Recorders (Memo) -----
pub fn record_memo_hit() {
    PAGINATION_MEMO_HITS.fetch_add(1, Ordering::Relaxed);
}

// ----- Recorders (Splitter) -----
pub fn record_recompute(total_chars: usize) {
    PAGINATION_RECOMPUTES.fetch_add(1, Ordering::Relaxed);
    PAGINATION_CHARS_SPLIT.fetch_add(total_chars as u64, Ordering::Relaxed);
}

// ----- Recorders (Ordering) -----
pub fn record_chapter_sort(chapters: usize) {
    CHAPTER_SORTS.fetch_add(1, Ordering::Relaxed);
    CHAPTERS_SORTED.fetch_add(chapters as u64, Ordering::Relaxed);
}

// ----- Snapshot / Reset -----
pub fn snapshot() -> MetricsSnapshot {
    MetricsSnapshot {
        pagination_cache_hits: PAGINATION_CACHE_HITS.load(Ordering::Relaxed),
        pagination_cache_misses: PAGINATION_CACHE_MISSES.load(Ordering::Relaxed),
        pagination_cache_writes: PAGINATION_CACHE_WRITES.load(Ordering::Relaxed),
        pagination_cache_write_failures: PAGINATION_CACHE_WRITE_FAILURES.load(Ordering::Relaxed),

        pagination_memo_hits: PAGINATION_MEMO_HITS.load(Ordering::Relaxed),

        pagination_recomputes: PAGINATION_RECOMPUTES.load(Ordering::Relaxed),
        pagination_chars_split: PAGINATION_CHARS_SPLIT.load(Ordering::Relaxed),

        chapter_sorts: CHAPTER_SORTS.load(Ordering::Relaxed),
        chapters_sorted: CHAPTERS_SORTED.load(Ordering::Relaxed),
    }
}

pub fn reset() {
    PAGINATION_CACHE_HITS.store(0, Ordering::Relaxed);
    PAGINATION_CACHE_MISSES.store(0, Ordering::Relaxed);
    PAGINATION_CACHE_WRITES.store(0, Ordering::Relaxed);
    PAGINATION_CACHE_WRITE_FAILURES.store(0, Ordering::Relaxed);

    PAGINATION_MEMO_HITS.store(0, Ordering::Relaxed);

    PAGINATION_RECOMPUTES.store(0, Ordering::Relaxed);
    PAGINATION_CHARS_SPLIT.store(0, Ordering::Relaxed);

    CHAPTER_SORTS.store(0, Ordering::Relaxed);
    CHAPTERS_SORTED.store(0, Ordering::Relaxed);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorders_are_monotonic() {
        let before = snapshot();
        record_recompute(10);
        record_chapter_sort(3);
        let after = snapshot();
        assert!(after.pagination_recomputes >= before.pagination_recomputes + 1);
        assert!(after.pagination_chars_split >= before.pagination_chars_split + 10);
        assert!(after.chapters_sorted >= before.chapters_sorted + 3);
    }

    #[test]
    fn hit_ratio_handles_zero() {
        assert_eq!(MetricsSnapshot::default().cache_hit_ratio(), 0.0);
        let s = MetricsSnapshot {
            pagination_cache_hits: 1,
            pagination_memo_hits: 1,
            pagination_cache_misses: 2,
            ..Default::default()
        };
        assert!((s.cache_hit_ratio() - 0.5).abs() < f64::EPSILON);
    }
}
