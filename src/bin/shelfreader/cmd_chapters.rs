use anyhow::Result;
use serde_json::json;
use std::path::PathBuf;

use ShelfReader::config::ReaderConfig;
use ShelfReader::shelf::{list_chapters, ChapterKind};

pub fn exec(dir: PathBuf, json: bool, cfg: ReaderConfig) -> Result<()> {
    let list = list_chapters(&dir, &cfg)?;

    if json {
        let items: Vec<_> = list
            .iter()
            .map(|c| {
                json!({
                    "file": c.file_name(),
                    "link": c.link_name(),
                    "kind": match c.kind(&cfg) {
                        ChapterKind::Text => "text",
                        ChapterKind::Image => "image",
                    },
                })
            })
            .collect();
        println!("{}", serde_json::Value::Array(items));
        return Ok(());
    }

    for (i, c) in list.iter().enumerate() {
        let mark = match c.kind(&cfg) {
            ChapterKind::Text => "",
            ChapterKind::Image => " [image]",
        };
        println!("{:>4}  {}{}", i + 1, c.link_name(), mark);
    }
    Ok(())
}
