//! consts: default tables shared by ordering and pagination.
//!
//! Все списки - значения по умолчанию; ReaderConfig может их переопределить.

/// Target characters per page.
pub const DEFAULT_PAGE_SIZE: usize = 2000;

/// A trailing page shorter than `page_size * MERGE_RATIO` is merged into its predecessor.
pub const MERGE_RATIO: f64 = 0.25;

/// Suffix of the per-chapter cache record: `<dir>/<stem>_pagination.json`.
pub const CACHE_SUFFIX: &str = "_pagination.json";

/// Extension of files that are never chapters (cache records, metadata).
pub const METADATA_EXT: &str = "json";

/// Text chapters are addressed by stem; this extension is implied.
pub const TEXT_EXT: &str = "txt";

/// Front-matter markers (Chinese simplified/traditional + English). Lowercase.
pub const PROLOGUE_KEYWORDS: &[&str] = &[
    "序", "序章", "序言", "序曲", "前言", "前序", "引子", "引言", "楔子",
    "开篇", "開篇", "开场", "開場", "开端", "開端", "缘起", "緣起",
    "导言", "導言", "导读", "導讀", "绪论", "緒論",
    "prologue", "preface", "foreword", "introduction", "intro", "prelude", "opening",
];

/// Page split delimiters, strongest first.
pub const PUNCTUATION: &[&str] = &[
    // переводы строк
    "\r\n", "\r", "\n",
    // закрывающая кавычка после конца предложения
    "。”", "。’", "！”", "！’", "？”", "？’", ".\"", ".'", "!\"", "!'", "?\"", "?'",
    "”", "’",
    "？！", "?!", "！？", "!?",
    "。", ".", "！", "!", "？", "?",
    "；", ";", "：", ":", "，", ",",
    "}", "》", ">", "】", "]", "）", ")",
    "…", "---", "--",
];

pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "webp"];
