use anyhow::{Context, Result};
use std::path::Path;

use ShelfReader::util::decode_chapter_bytes;

/// Read a chapter file as text (UTF-8, BOM tolerated).
pub fn read_chapter_text(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).with_context(|| format!("read chapter {}", path.display()))?;
    decode_chapter_bytes(bytes).with_context(|| format!("decode {}", path.display()))
}

