#![allow(non_snake_case)]

// Базовые модули
pub mod consts;
pub mod config;
pub mod metrics;
pub mod lock;

// Парсеры чисел и упорядочивание глав
pub mod numeral; // src/numeral/{mod,chinese,english,roman}.rs
pub mod order;   // src/order/{mod,tokenizer,prologue,comparator}.rs
pub mod shelf;

// Пагинация + кэш
pub mod paginate; // src/paginate/{mod,splitter,cache,memo,view}.rs

// Утилиты (file_mtime_secs, decode_chapter_bytes, ...)
pub mod util;

// Удобные реэкспорты
pub use config::{ReaderBuilder, ReaderConfig};
pub use order::{ChapterComparator, PriorityClass, Segment, TokenizeResult};
pub use paginate::{
    split_pages, CacheOutcome, PageBoundaries, PageView, PaginationCacheRecord, Paginator,
    Punctuation,
};
pub use shelf::{
    list_books, list_chapters, resolve_chapter, BookEntry, ChapterEntry, ChapterKind, ChapterList,
};
