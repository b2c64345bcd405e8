//! util: общие утилиты.
//!
//! Содержит:
//! - file_mtime_secs(): mtime файла в секундах Unix (ключ валидности кэша).
//! - decode_chapter_bytes(): UTF-8 (+BOM) -> String.
//! - is_blank(): "только пробельные символы".

use anyhow::{Context, Result};
use std::path::Path;
use std::time::UNIX_EPOCH;

/// Last-modified time of `path` in whole seconds since the Unix epoch.
/// Times before the epoch come out negative.
pub fn file_mtime_secs(path: &Path) -> Result<i64> {
    let md = std::fs::metadata(path).with_context(|| format!("stat {}", path.display()))?;
    let modified = md
        .modified()
        .with_context(|| format!("mtime {}", path.display()))?;
    let secs = match modified.duration_since(UNIX_EPOCH) {
        Ok(d) => d.as_secs() as i64,
        Err(e) => -(e.duration().as_secs() as i64),
    };
    Ok(secs)
}

/// Decode chapter bytes as UTF-8, dropping a leading BOM.
/// Other encodings are the caller's business.
pub fn decode_chapter_bytes(bytes: Vec<u8>) -> Result<String> {
    let mut s = String::from_utf8(bytes).context("chapter text is not valid UTF-8")?;
    if s.starts_with('\u{feff}') {
        s.drain(..'\u{feff}'.len_utf8());
    }
    Ok(s)
}

/// True if every char is whitespace (an empty slice counts as blank).
#[inline]
pub fn is_blank(chars: &[char]) -> bool {
    chars.iter().all(|c| c.is_whitespace())
}
