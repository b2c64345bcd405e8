use anyhow::Result;
use serde_json::json;

use ShelfReader::config::ReaderConfig;
use ShelfReader::order::{stem_of, ChapterComparator, PriorityClass, Segment};

pub fn exec(name: String, json: bool, cfg: ReaderConfig) -> Result<()> {
    let mut cmp = ChapterComparator::new(&cfg.prologue_keywords);
    let key = cmp.key(&name).clone();

    let class = match key.class {
        PriorityClass::Prologue => "prologue",
        PriorityClass::Numbered => "numbered",
        PriorityClass::PlainText => "plain",
    };

    if json {
        let segs: Vec<_> = key
            .tokens
            .segments
            .iter()
            .map(|s| match s {
                Segment::Numeric(n) => json!({ "numeric": n }),
                Segment::Text(t) => json!({ "text": t }),
            })
            .collect();
        let out = json!({
            "stem": stem_of(&name),
            "class": class,
            "pure_prologue": key.prologue.is_pure(),
            "has_number": key.tokens.has_number,
            "segments": segs,
        });
        println!("{}", out);
        return Ok(());
    }

    println!("stem:          {}", stem_of(&name));
    println!("class:         {}", class);
    println!("pure_prologue: {}", key.prologue.is_pure());
    println!("has_number:    {}", key.tokens.has_number);
    for (i, s) in key.tokens.segments.iter().enumerate() {
        match s {
            Segment::Numeric(n) => println!("  [{}] numeric {}", i, n),
            Segment::Text(t) => println!("  [{}] text    {:?}", i, t),
        }
    }
    Ok(())
}
