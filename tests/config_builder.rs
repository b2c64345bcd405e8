use anyhow::Result;

use ShelfReader::config::{ReaderBuilder, ReaderConfig};
use ShelfReader::{split_pages, ChapterComparator, Paginator, Punctuation};

#[test]
fn env_overrides_defaults() -> Result<()> {
    // единственный тест в этом бинарнике, который трогает env
    std::env::set_var("SR_PAGE_SIZE", " 1500 ");
    std::env::set_var("SR_MEMO_CHAPTERS", "8");
    let cfg = ReaderConfig::from_env();
    assert_eq!(cfg.page_size, 1500);
    assert_eq!(cfg.memo_chapters, 8);

    let built = ReaderBuilder::new().page_size(300).build()?;
    assert_eq!(built.page_size, 300);
    assert_eq!(built.memo_chapters, 8);

    std::env::set_var("SR_PAGE_SIZE", "not a number");
    assert_eq!(ReaderConfig::from_env().page_size, 2000);

    std::env::remove_var("SR_PAGE_SIZE");
    std::env::remove_var("SR_MEMO_CHAPTERS");
    Ok(())
}

#[test]
fn builder_rejects_invalid() -> Result<()> {
    assert!(ReaderBuilder::from_default().page_size(0).build().is_err());
    assert!(ReaderBuilder::from_default()
        .punctuation(vec!["。", ""])
        .build()
        .is_err());

    let cfg = ReaderBuilder::from_default().memo_chapters(0).build()?;
    assert!(cfg.to_string().contains("memo_chapters: off"));
    Ok(())
}

#[test]
fn custom_punctuation_drives_splits() -> Result<()> {
    let cfg = ReaderBuilder::from_default()
        .page_size(10)
        .punctuation(vec!["|"])
        .build()?;
    let punct = Punctuation::new(&cfg.punctuation);

    // '.' больше не разделитель, '|' разделитель
    let b = split_pages("ab.cd|efgh.ijklmnop", cfg.page_size, &punct);
    assert_eq!(b.as_slice(), &[0, 6, 16, 19]);

    let p = Paginator::new(cfg)?;
    assert_eq!(p.boundaries_uncached("ab.cd|efgh.ijklmnop"), b);
    Ok(())
}

#[test]
fn custom_prologue_keywords_drive_order() -> Result<()> {
    let cfg = ReaderBuilder::from_default()
        .prologue_keywords(vec!["Opening"])
        .build()?;
    let mut cmp = ChapterComparator::new(&cfg.prologue_keywords);

    let mut names = vec![
        "1.txt".to_string(),
        "序.txt".to_string(),
        "opening.txt".to_string(),
    ];
    cmp.sort_names(&mut names);
    // "序" is plain text now, "opening" is the only front matter
    assert_eq!(names, vec!["opening.txt", "1.txt", "序.txt"]);
    Ok(())
}
