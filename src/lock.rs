//! File-based locking for pagination cache writers.
//!
//! Cross-platform (fs2) advisory locks on the cache record itself:
//! - Exclusive: writers serialize on it for the truncate+write+flush window.
//! - Shared: available for callers that want a consistent read (readers of the
//!   pagination cache do not take it; an unparseable read is just a miss).
//!
//! Lock is released on Drop.

use anyhow::{Context, Result};
use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockMode {
    Shared,
    Exclusive,
}

/// An open file plus the advisory lock held on it.
pub struct LockGuard {
    file: File,
    path: PathBuf,
    mode: LockMode,
}

impl LockGuard {
    fn new(file: File, path: PathBuf, mode: LockMode) -> Self {
        Self { file, path, mode }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn mode(&self) -> LockMode {
        self.mode
    }

    /// The locked file (write through it while the guard lives).
    pub fn file_mut(&mut self) -> &mut File {
        &mut self.file
    }
}

impl Drop for LockGuard {
    fn drop(&mut self) {
        // fs2 unlock errors on drop are ignored deliberately.
        let _ = self.file.unlock();
    }
}

/// Open without truncation: truncating before the lock is held would let a
/// concurrent reader observe an empty record.
fn open_for_lock(path: &Path) -> Result<File> {
    let f = OpenOptions::new()
        .create(true)
        .read(true)
        .write(true)
        .truncate(false)
        .open(path)
        .with_context(|| format!("open lock target {}", path.display()))?;
    Ok(f)
}

/// Acquire a lock in the requested mode on `path`. Blocks until acquired.
pub fn acquire_lock(path: &Path, mode: LockMode) -> Result<LockGuard> {
    let file = open_for_lock(path)?;
    match mode {
        LockMode::Shared => file
            .lock_shared()
            .with_context(|| format!("lock_shared {}", path.display()))?,
        LockMode::Exclusive => file
            .lock_exclusive()
            .with_context(|| format!("lock_exclusive {}", path.display()))?,
    }
    Ok(LockGuard::new(file, path.to_path_buf(), mode))
}

/// Try to acquire a lock in the requested mode. Returns Err if already locked.
pub fn try_acquire_lock(path: &Path, mode: LockMode) -> Result<LockGuard> {
    let file = open_for_lock(path)?;
    match mode {
        LockMode::Shared => file
            .try_lock_shared()
            .with_context(|| format!("try_lock_shared failed: {}", path.display()))?,
        LockMode::Exclusive => file
            .try_lock_exclusive()
            .with_context(|| format!("try_lock_exclusive failed: {}", path.display()))?,
    }
    Ok(LockGuard::new(file, path.to_path_buf(), mode))
}

/// Convenience wrappers.
pub fn acquire_exclusive_lock(path: &Path) -> Result<LockGuard> {
    acquire_lock(path, LockMode::Exclusive)
}

pub fn try_acquire_exclusive_lock(path: &Path) -> Result<LockGuard> {
    try_acquire_lock(path, LockMode::Exclusive)
}
