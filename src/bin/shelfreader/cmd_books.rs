use anyhow::Result;
use serde_json::json;
use std::path::PathBuf;

use ShelfReader::shelf::list_books;

pub fn exec(root: PathBuf, json: bool) -> Result<()> {
    let books = list_books(&root)?;

    if json {
        let items: Vec<_> = books
            .iter()
            .map(|b| json!({ "name": b.name, "path": b.path.display().to_string() }))
            .collect();
        println!("{}", serde_json::Value::Array(items));
        return Ok(());
    }

    if books.is_empty() {
        println!("(no books in {})", root.display());
        return Ok(());
    }
    for (i, b) in books.iter().enumerate() {
        println!("{:>4}  {}", i + 1, b.name);
    }
    Ok(())
}
