use anyhow::Result;
use serde_json::json;
use std::path::PathBuf;

use ShelfReader::config::ReaderConfig;
use ShelfReader::paginate::{CacheOutcome, MissReason, Paginated, Paginator};

use super::util::read_chapter_text;

pub fn exec(
    file: PathBuf,
    page_size: Option<usize>,
    json: bool,
    no_cache: bool,
    mut cfg: ReaderConfig,
) -> Result<()> {
    if let Some(ps) = page_size {
        cfg = cfg.with_page_size(ps);
    }
    let paginator = Paginator::new(cfg)?;
    let text = read_chapter_text(&file)?;

    let pg = if no_cache {
        Paginated {
            boundaries: paginator.boundaries_uncached(&text),
            outcome: CacheOutcome::Miss(MissReason::Bypassed),
            persisted: false,
        }
    } else {
        paginator.boundaries(&file, &text)?
    };

    let outcome = outcome_label(pg.outcome);
    let b = pg.boundaries.as_slice();

    if json {
        let out = json!({
            "file": file.display().to_string(),
            "page_size": paginator.config().page_size,
            "total_chars": pg.boundaries.total_chars(),
            "pages": pg.boundaries.page_count(),
            "outcome": outcome,
            "persisted": pg.persisted,
            "pagination": b,
        });
        println!("{}", out);
        return Ok(());
    }

    println!(
        "{}: {} chars, {} page(s), page_size={}, cache={}{}",
        file.display(),
        pg.boundaries.total_chars(),
        pg.boundaries.page_count(),
        paginator.config().page_size,
        outcome,
        if pg.persisted { " (written)" } else { "" },
    );
    for (i, (s, e)) in pg.boundaries.spans().enumerate() {
        println!("  page {:>4}: [{}, {}) {} chars", i + 1, s, e, e - s);
    }
    Ok(())
}

pub fn outcome_label(o: CacheOutcome) -> String {
    match o {
        CacheOutcome::Hit => "hit".to_string(),
        CacheOutcome::Memo => "memo".to_string(),
        CacheOutcome::Miss(r) => format!("miss:{}", r),
    }
}
