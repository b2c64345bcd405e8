use anyhow::{anyhow, Result};
use serde_json::json;
use std::path::PathBuf;

use ShelfReader::config::ReaderConfig;
use ShelfReader::paginate::Paginator;
use ShelfReader::shelf::{list_chapters, resolve_chapter, ChapterKind};

use super::cmd_paginate::outcome_label;
use super::util::read_chapter_text;

pub fn exec(
    dir: PathBuf,
    chapter: String,
    page: usize,
    page_size: Option<usize>,
    json: bool,
    mut cfg: ReaderConfig,
) -> Result<()> {
    if let Some(ps) = page_size {
        cfg = cfg.with_page_size(ps);
    }

    let list = list_chapters(&dir, &cfg)?;
    let path = resolve_chapter(&dir, &chapter, &cfg)?;
    if !path.is_file() {
        return Err(anyhow!("chapter not found: {}", path.display()));
    }

    let (prev, next) = list.neighbors(chapter.trim());
    let prev = prev.map(|c| c.link_name().to_string());
    let next = next.map(|c| c.link_name().to_string());

    let is_image = list
        .iter()
        .find(|c| c.full_path == path)
        .is_some_and(|c| c.kind(&cfg) == ChapterKind::Image);

    if is_image {
        if json {
            let out = json!({
                "chapter": chapter,
                "image": path.display().to_string(),
                "prev_chapter": prev,
                "next_chapter": next,
            });
            println!("{}", out);
        } else {
            println!("== {} ==", chapter);
            println!("[image] {}", path.display());
            print_nav(prev.as_deref(), next.as_deref(), None);
        }
        return Ok(());
    }

    let paginator = Paginator::new(cfg)?;
    let text = read_chapter_text(&path)?;
    let (view, pg) = paginator.page(&path, &text, page)?;

    // соседние главы показываем только на краях главы
    let prev = if view.is_first() { prev } else { None };
    let next = if view.is_last() { next } else { None };

    if json {
        let out = json!({
            "chapter": chapter,
            "page": view.page,
            "max_pages": view.max_pages,
            "start": view.start,
            "end": view.end,
            "cache": outcome_label(pg.outcome),
            "prev_chapter": prev,
            "next_chapter": next,
            "paragraphs": view.paragraphs(),
        });
        println!("{}", out);
        return Ok(());
    }

    println!("== {} ==", chapter);
    for p in view.paragraphs() {
        println!("{}", p);
    }
    println!();
    print_nav(prev.as_deref(), next.as_deref(), Some((view.page, view.max_pages)));
    Ok(())
}

fn print_nav(prev: Option<&str>, next: Option<&str>, page: Option<(usize, usize)>) {
    let mut parts: Vec<String> = Vec::new();
    if let Some(p) = prev {
        parts.push(format!("<< {}", p));
    }
    if let Some((cur, max)) = page {
        if cur > 1 {
            parts.push(format!("< page {}", cur - 1));
        }
        if cur < max {
            parts.push(format!("page {} >", cur + 1));
        }
    }
    match next {
        Some(n) => parts.push(format!("{} >>", n)),
        None if page.map_or(true, |(c, m)| c == m) => parts.push("(last chapter)".to_string()),
        None => {}
    }
    if !parts.is_empty() {
        println!("{}", parts.join(" | "));
    }
    if let Some((cur, max)) = page {
        println!("page {} / {}", cur, max);
    }
}
