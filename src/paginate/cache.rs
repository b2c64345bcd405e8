//! paginate/cache: persisted page boundary table, one JSON file per chapter.
//!
//! Файл: <chapter dir>/<stem>_pagination.json
//! {"page_size":2000,"file_mtime":1700000000,"pagination":[0,1834,3790,...]}
//!
//! Правила:
//! - Запись валидна, только если page_size и file_mtime совпадают с живым файлом
//!   и таблица удовлетворяет инвариантам для текущей длины текста.
//! - Любая другая форма (лишние/отсутствующие поля, не JSON) = промах.
//! - Читатели не берут lock; писатель держит exclusive lock на самом файле
//!   на время truncate+write+flush.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{ErrorKind, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use crate::consts::CACHE_SUFFIX;
use crate::lock::acquire_exclusive_lock;
use crate::order::stem_of;

use super::splitter::PageBoundaries;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PaginationCacheRecord {
    pub page_size: usize,
    pub file_mtime: i64,
    pub pagination: Vec<usize>,
}

/// Why a cached table was not used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissReason {
    /// No record on disk.
    Absent,
    /// Record exists but could not be read.
    Unreadable,
    /// Not a record, or the table breaks the boundary invariants.
    Malformed,
    /// page_size or file_mtime differ from the live values.
    Stale,
    /// Caching was bypassed by the caller.
    Bypassed,
}

impl fmt::Display for MissReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MissReason::Absent => "absent",
            MissReason::Unreadable => "unreadable",
            MissReason::Malformed => "malformed",
            MissReason::Stale => "stale",
            MissReason::Bypassed => "bypassed",
        };
        f.write_str(s)
    }
}

/// Record path for a chapter file: sibling `<stem>_pagination.json`.
pub fn cache_path_for(chapter_path: &Path) -> PathBuf {
    let name = chapter_path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    let file = format!("{}{}", stem_of(name), CACHE_SUFFIX);
    match chapter_path.parent() {
        Some(dir) => dir.join(file),
        None => PathBuf::from(file),
    }
}

/// Read and parse a record. Every failure maps to a miss reason.
pub fn read_record(cache_path: &Path) -> std::result::Result<PaginationCacheRecord, MissReason> {
    let bytes = match std::fs::read(cache_path) {
        Ok(b) => b,
        Err(e) if e.kind() == ErrorKind::NotFound => return Err(MissReason::Absent),
        Err(_) => return Err(MissReason::Unreadable),
    };
    // пустой файл = писатель в середине truncate+write
    serde_json::from_slice(&bytes).map_err(|_| MissReason::Malformed)
}

/// Cached boundaries for the live `(page_size, file_mtime, total_chars)`, or why not.
pub fn lookup(
    cache_path: &Path,
    page_size: usize,
    file_mtime: i64,
    total_chars: usize,
) -> std::result::Result<PageBoundaries, MissReason> {
    let rec = read_record(cache_path)?;
    if rec.page_size != page_size || rec.file_mtime != file_mtime {
        return Err(MissReason::Stale);
    }
    PageBoundaries::from_raw(rec.pagination, total_chars).ok_or(MissReason::Malformed)
}

/// Rewrite the record in full under an exclusive lock.
pub fn store(cache_path: &Path, rec: &PaginationCacheRecord) -> Result<()> {
    let data = serde_json::to_vec(rec).context("serialize pagination record")?;

    let mut guard = acquire_exclusive_lock(cache_path)?;
    let f = guard.file_mut();
    f.set_len(0)
        .with_context(|| format!("truncate {}", cache_path.display()))?;
    f.seek(SeekFrom::Start(0))?;
    f.write_all(&data)
        .with_context(|| format!("write {}", cache_path.display()))?;
    f.flush()?;
    // guard drop -> unlock
    Ok(())
}
