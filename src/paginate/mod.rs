//! paginate: pagination engine.
//!
//! - splitter: text -> PageBoundaries (pure, deterministic)
//! - cache:    <stem>_pagination.json record, mtime/page_size validated
//! - memo:     optional in-process LRU in front of the record
//! - view:     Paginator + PageView (page extraction with clamping)

pub mod cache;
pub mod memo;
pub mod splitter;
pub mod view;

pub use cache::{cache_path_for, MissReason, PaginationCacheRecord};
pub use memo::PaginationMemo;
pub use splitter::{split_pages, PageBoundaries, Punctuation};
pub use view::{extract_page, CacheOutcome, PageView, Paginated, Paginator};
