use anyhow::Result;
use std::cmp::Ordering;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::time::{SystemTime, UNIX_EPOCH};

use ShelfReader::consts::PROLOGUE_KEYWORDS;
use ShelfReader::{list_books, list_chapters, ChapterComparator, ReaderConfig};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

fn unique_root(prefix: &str) -> PathBuf {
    let pid = std::process::id();
    let t = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let id = NEXT_ID.fetch_add(1, AtomicOrdering::Relaxed);
    std::env::temp_dir().join(format!("srtest-{prefix}-{pid}-{t}-{id}"))
}

// Кусочки, из которых собираются случайные имена глав
const PARTS: &[&str] = &[
    "第", "章", "卷", "十", "二", "百", "零", "1", "2", "10", "007", "Chapter ", "Part ", "iv",
    "X", "mix", "twenty-one", "序", "序章", "Prologue", " ", "-", "后记", "Ⅻ", "番外", "a",
];

fn random_name(rng: &mut oorandom::Rand32) -> String {
    let n = rng.rand_range(1..5);
    let mut s = String::new();
    for _ in 0..n {
        s.push_str(PARTS[rng.rand_range(0..PARTS.len() as u32) as usize]);
    }
    let ext = if rng.rand_range(0..4) == 0 { ".png" } else { ".txt" };
    s.push_str(ext);
    s
}

#[test]
fn comparator_is_strict_weak_order_on_random_names() -> Result<()> {
    let mut rng = oorandom::Rand32::new(0x5eed_cafe);
    let mut cmp = ChapterComparator::new(PROLOGUE_KEYWORDS);

    let names: Vec<String> = (0..60).map(|_| random_name(&mut rng)).collect();

    for a in &names {
        assert_eq!(cmp.compare(a, a), Ordering::Equal, "irreflexive: {a}");
        for b in &names {
            let ab = cmp.compare(a, b);
            assert_eq!(ab, cmp.compare(b, a).reverse(), "antisymmetric: {a} / {b}");
            if ab != Ordering::Less {
                continue;
            }
            for c in &names {
                if cmp.compare(b, c) == Ordering::Less {
                    assert_eq!(cmp.compare(a, c), Ordering::Less, "transitive: {a} < {b} < {c}");
                }
            }
        }
    }
    Ok(())
}

#[test]
fn resort_is_idempotent_and_input_order_free() -> Result<()> {
    let mut rng = oorandom::Rand32::new(42);
    let names: Vec<String> = (0..200).map(|_| random_name(&mut rng)).collect();

    let mut once = names.clone();
    ChapterComparator::new(PROLOGUE_KEYWORDS).sort_names(&mut once);

    let mut twice = once.clone();
    ChapterComparator::new(PROLOGUE_KEYWORDS).sort_names(&mut twice);
    assert_eq!(once, twice);

    // перемешанный вход даёт тот же порядок
    let mut shuffled = names;
    for i in (1..shuffled.len()).rev() {
        let j = rng.rand_range(0..(i as u32 + 1)) as usize;
        shuffled.swap(i, j);
    }
    ChapterComparator::new(PROLOGUE_KEYWORDS).sort_names(&mut shuffled);
    assert_eq!(once, shuffled);
    Ok(())
}

#[test]
fn book_directory_listing_order() -> Result<()> {
    let root = unique_root("listing");
    std::fs::create_dir_all(&root)?;

    for name in [
        "3.txt",
        "序.txt",
        "序章1.txt",
        "1.txt",
        "第二章.txt",
        "插图 2.png",
        "后记.txt",
        "3_pagination.json",
        "book.json",
    ] {
        std::fs::write(root.join(name), "text")?;
    }
    std::fs::create_dir_all(root.join("4"))?;

    let cfg = ReaderConfig::default();
    let list = list_chapters(&root, &cfg)?;
    let got: Vec<&str> = list.iter().map(|c| c.file_name()).collect();
    assert_eq!(
        got,
        vec![
            "序.txt",
            "序章1.txt",
            "1.txt",
            "第二章.txt",
            "插图 2.png",
            "3.txt",
            "后记.txt"
        ]
    );

    let (prev, next) = list.neighbors("插图 2.png");
    assert_eq!(prev.map(|c| c.link_name()), Some("第二章"));
    assert_eq!(next.map(|c| c.link_name()), Some("3"));

    let _ = std::fs::remove_dir_all(&root);
    Ok(())
}

#[test]
fn empty_book_is_an_error() -> Result<()> {
    let root = unique_root("empty");
    std::fs::create_dir_all(&root)?;
    std::fs::write(root.join("only_pagination.json"), "{}")?;

    let err = list_chapters(&root, &ReaderConfig::default()).unwrap_err();
    assert!(format!("{err:#}").contains("no chapters"), "got: {err:#}");

    let _ = std::fs::remove_dir_all(&root);
    Ok(())
}

#[test]
fn shelf_lists_book_directories_in_gbk_order() -> Result<()> {
    let root = unique_root("books");
    std::fs::create_dir_all(&root)?;

    for name in ["中国", "三体", "abc", "阿Q正传", "百年孤独", ".hidden"] {
        std::fs::create_dir_all(root.join(name))?;
    }
    // файлы на полке не книги
    std::fs::write(root.join("notes.txt"), "x")?;

    let books = list_books(&root)?;
    let names: Vec<&str> = books.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["abc", "阿Q正传", "百年孤独", "三体", "中国"]);
    assert_eq!(books[0].path, root.join("abc"));

    let empty = unique_root("books-empty");
    std::fs::create_dir_all(&empty)?;
    assert!(list_books(&empty)?.is_empty());
    assert!(list_books(&empty.join("missing")).is_err());

    let _ = std::fs::remove_dir_all(&root);
    let _ = std::fs::remove_dir_all(&empty);
    Ok(())
}
