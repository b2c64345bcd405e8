//! Centralized configuration and builder for ShelfReader.
//!
//! Goals:
//! - Single place to collect tunables (page size, delimiter list, prologue markers).
//! - The core never reads the environment: ordering/pagination take a ReaderConfig value.
//!   ReaderConfig::from_env() exists for the binary and the builder only.
//!
//! Env:
//! - SR_PAGE_SIZE     - target characters per page (default 2000)
//! - SR_MEMO_CHAPTERS - in-process pagination memo capacity (default 0 = off)

use anyhow::{anyhow, Result};
use std::fmt;

use crate::consts::{DEFAULT_PAGE_SIZE, IMAGE_EXTENSIONS, PROLOGUE_KEYWORDS, PUNCTUATION};

/// Top-level configuration consumed by the ordering and pagination engines.
#[derive(Clone, Debug)]
pub struct ReaderConfig {
    /// Target characters (Unicode scalar values) per page.
    /// Env: SR_PAGE_SIZE (default 2000)
    pub page_size: usize,

    /// Ordered delimiter list used to choose split points, strongest first.
    pub punctuation: Vec<String>,

    /// Front-matter markers, compared case-insensitively.
    pub prologue_keywords: Vec<String>,

    /// Extensions (lowercase, no dot) that mark a chapter as an image.
    pub image_extensions: Vec<String>,

    /// Capacity of the in-process pagination memo (0 disables it).
    /// Env: SR_MEMO_CHAPTERS (default 0)
    pub memo_chapters: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            punctuation: PUNCTUATION.iter().map(|s| s.to_string()).collect(),
            prologue_keywords: PROLOGUE_KEYWORDS.iter().map(|s| s.to_string()).collect(),
            image_extensions: IMAGE_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            memo_chapters: 0,
        }
    }
}

impl ReaderConfig {
    /// Load configuration from environment variables on top of the defaults.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(v) = std::env::var("SR_PAGE_SIZE") {
            if let Ok(n) = v.trim().parse::<usize>() {
                cfg.page_size = n;
            }
        }

        if let Ok(v) = std::env::var("SR_MEMO_CHAPTERS") {
            if let Ok(n) = v.trim().parse::<usize>() {
                cfg.memo_chapters = n;
            }
        }

        cfg
    }

    /// Fluent setters (builder-style) to override specific fields.

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_punctuation<S: Into<String>>(mut self, list: Vec<S>) -> Self {
        self.punctuation = list.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_prologue_keywords<S: Into<String>>(mut self, list: Vec<S>) -> Self {
        self.prologue_keywords = list.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_image_extensions<S: Into<String>>(mut self, list: Vec<S>) -> Self {
        self.image_extensions = list.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_memo_chapters(mut self, n: usize) -> Self {
        self.memo_chapters = n;
        self
    }

    /// Reject configurations the engines cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(anyhow!("page_size must be > 0"));
        }
        if self.punctuation.iter().any(|p| p.is_empty()) {
            return Err(anyhow!("punctuation list must not contain empty patterns"));
        }
        Ok(())
    }
}

impl fmt::Display for ReaderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ReaderConfig {{ \
             page_size: {}, \
             punctuation: {} patterns, \
             prologue_keywords: {} words, \
             image_extensions: [{}], \
             memo_chapters: {} \
             }}",
            self.page_size,
            self.punctuation.len(),
            self.prologue_keywords.len(),
            self.image_extensions.join(","),
            if self.memo_chapters == 0 {
                "off".to_string()
            } else {
                self.memo_chapters.to_string()
            },
        )
    }
}

/// Lightweight builder that produces a ReaderConfig.
#[derive(Clone, Debug)]
pub struct ReaderBuilder {
    cfg: ReaderConfig,
}

impl Default for ReaderBuilder {
    fn default() -> Self {
        // Start from env, then allow overrides.
        Self {
            cfg: ReaderConfig::from_env(),
        }
    }
}

impl ReaderBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a clean default (without reading env).
    pub fn from_default() -> Self {
        Self {
            cfg: ReaderConfig::default(),
        }
    }

    pub fn page_size(mut self, page_size: usize) -> Self {
        self.cfg.page_size = page_size;
        self
    }

    pub fn memo_chapters(mut self, n: usize) -> Self {
        self.cfg.memo_chapters = n;
        self
    }

    pub fn punctuation<S: Into<String>>(mut self, list: Vec<S>) -> Self {
        self.cfg = self.cfg.with_punctuation(list);
        self
    }

    pub fn prologue_keywords<S: Into<String>>(mut self, list: Vec<S>) -> Self {
        self.cfg = self.cfg.with_prologue_keywords(list);
        self
    }

    /// Finish the builder; the result is validated.
    pub fn build(self) -> Result<ReaderConfig> {
        self.cfg.validate()?;
        Ok(self.cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reader_tables() {
        let cfg = ReaderConfig::default();
        assert_eq!(cfg.page_size, 2000);
        assert_eq!(cfg.punctuation.first().map(String::as_str), Some("\r\n"));
        assert!(cfg.prologue_keywords.iter().any(|k| k == "序章"));
        assert_eq!(cfg.memo_chapters, 0);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn zero_page_size_rejected() {
        let err = ReaderBuilder::from_default().page_size(0).build();
        assert!(err.is_err());
    }

    #[test]
    fn display_mentions_page_size() {
        let s = ReaderConfig::default().with_page_size(321).to_string();
        assert!(s.contains("page_size: 321"), "{s}");
        assert!(s.contains("memo_chapters: off"), "{s}");
    }
}
