// src/shelf.rs
//
// One book = one directory of chapter files. Listing is rebuilt on every call
// (no persistent identity); ordering goes through ChapterComparator.

use anyhow::{anyhow, Context, Result};
use encoding_rs::GBK;
use log::debug;
use std::path::{Path, PathBuf};

use crate::config::ReaderConfig;
use crate::consts::{METADATA_EXT, TEXT_EXT};
use crate::metrics;
use crate::order::ChapterComparator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChapterKind {
    Text,
    Image,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterEntry {
    pub full_path: PathBuf,
    pub file_stem: String,
    /// Without the dot; empty when the file has none.
    pub extension: String,
}

impl ChapterEntry {
    pub fn from_path(path: &Path) -> Option<Self> {
        let file_stem = path.file_stem()?.to_str()?.to_string();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_string();
        Some(Self {
            full_path: path.to_path_buf(),
            file_stem,
            extension,
        })
    }

    pub fn file_name(&self) -> &str {
        self.full_path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or(&self.file_stem)
    }

    pub fn kind(&self, cfg: &ReaderConfig) -> ChapterKind {
        let ext = self.extension.to_ascii_lowercase();
        if cfg.image_extensions.iter().any(|e| e.eq_ignore_ascii_case(&ext)) {
            ChapterKind::Image
        } else {
            ChapterKind::Text
        }
    }

    /// Name a reader addresses the chapter by: stem for `.txt`, full file name otherwise.
    pub fn link_name(&self) -> &str {
        if self.extension == TEXT_EXT {
            &self.file_stem
        } else {
            self.file_name()
        }
    }
}

/// Ordered chapters of one book.
#[derive(Debug, Clone)]
pub struct ChapterList {
    pub dir: PathBuf,
    pub chapters: Vec<ChapterEntry>,
}

impl ChapterList {
    pub fn len(&self) -> usize {
        self.chapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChapterEntry> {
        self.chapters.iter()
    }

    pub fn position(&self, link_name: &str) -> Option<usize> {
        self.chapters.iter().position(|c| c.link_name() == link_name)
    }

    /// Previous and next chapters around `link_name` in reading order.
    pub fn neighbors(&self, link_name: &str) -> (Option<&ChapterEntry>, Option<&ChapterEntry>) {
        match self.position(link_name) {
            Some(i) => (
                i.checked_sub(1).and_then(|p| self.chapters.get(p)),
                self.chapters.get(i + 1),
            ),
            None => (None, None),
        }
    }
}

/// List and order the chapter files of `dir`. No chapters is an error.
pub fn list_chapters(dir: &Path, cfg: &ReaderConfig) -> Result<ChapterList> {
    let rd = std::fs::read_dir(dir).with_context(|| format!("read dir {}", dir.display()))?;

    let mut chapters = Vec::new();
    for ent in rd {
        let ent = ent.with_context(|| format!("read dir entry in {}", dir.display()))?;
        let path = ent.path();
        if !path.is_file() {
            continue;
        }
        let Some(entry) = ChapterEntry::from_path(&path) else {
            debug!("skip non UTF-8 file name: {}", path.display());
            continue;
        };
        if entry.extension == METADATA_EXT {
            continue;
        }
        chapters.push(entry);
    }

    if chapters.is_empty() {
        return Err(anyhow!("no chapters in {}", dir.display()));
    }

    // детерминированный порядок до сортировки (read_dir порядок не гарантирует)
    chapters.sort_by(|a, b| a.file_name().as_bytes().cmp(b.file_name().as_bytes()));
    let mut cmp = ChapterComparator::new(&cfg.prologue_keywords);
    cmp.sort_by_name(&mut chapters, |c| c.file_name());

    metrics::record_chapter_sort(chapters.len());
    debug!("sorted {} chapters in {}", chapters.len(), dir.display());

    Ok(ChapterList {
        dir: dir.to_path_buf(),
        chapters,
    })
}

/// One book = one directory under the shelf root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookEntry {
    pub path: PathBuf,
    pub name: String,
}

/// Collation key of a book name: its GBK bytes (pinyin-ish order for common
/// hanzi). Unmappable chars come out as `&#NNNN;`, which still sorts stably.
fn gbk_key(name: &str) -> Vec<u8> {
    let (bytes, _, _) = GBK.encode(name);
    bytes.into_owned()
}

/// Book directories directly under `root`, in GBK collation order.
/// Dot-directories are skipped; an empty shelf is an empty list.
pub fn list_books(root: &Path) -> Result<Vec<BookEntry>> {
    let rd = std::fs::read_dir(root).with_context(|| format!("read dir {}", root.display()))?;

    let mut books = Vec::new();
    for ent in rd {
        let ent = ent.with_context(|| format!("read dir entry in {}", root.display()))?;
        let path = ent.path();
        if !path.is_dir() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|s| s.to_str()).map(str::to_string) else {
            debug!("skip non UTF-8 book dir: {}", path.display());
            continue;
        };
        if name.starts_with('.') {
            continue;
        }
        books.push(BookEntry { path, name });
    }

    books.sort_by_cached_key(|b| (gbk_key(&b.name), b.name.clone()));
    debug!("{} books in {}", books.len(), root.display());
    Ok(books)
}

/// Reject names that could escape the book directory.
pub fn validate_chapter_name(name: &str) -> Result<()> {
    let name_trimmed = name.trim();
    if name_trimmed.is_empty() || name_trimmed == "." {
        return Err(anyhow!("empty chapter name"));
    }
    const ILLEGAL: &[&str] = &["/", "\\", "\0", ".."];
    if let Some(bad) = ILLEGAL.iter().find(|s| name_trimmed.contains(**s)) {
        return Err(anyhow!("illegal {:?} in chapter name {:?}", bad, name));
    }
    Ok(())
}

/// Path of chapter `name` in `dir`. A name with an image extension is used as
/// is; anything else is a text chapter stem and gets `.txt`.
pub fn resolve_chapter(dir: &Path, name: &str, cfg: &ReaderConfig) -> Result<PathBuf> {
    validate_chapter_name(name)?;
    let name = name.trim();
    let is_image = Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| cfg.image_extensions.iter().any(|i| i.eq_ignore_ascii_case(e)));
    let file = if is_image {
        name.to_string()
    } else {
        format!("{}.{}", name, TEXT_EXT)
    };
    Ok(dir.join(file))
}
