use anyhow::Result;
use env_logger::{Builder, Env};
use log::debug;

use ShelfReader::config::ReaderConfig;
use ShelfReader::metrics;

mod cli;
mod util;
mod cmd_books;
mod cmd_chapters;
mod cmd_tokenize;
mod cmd_paginate;
mod cmd_read;

fn init_logger() {
    // Уровень берём из RUST_LOG, иначе дефолт - info.
    // Пример: RUST_LOG=debug ./shelfreader read --dir ./books/x --chapter 1
    Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();
}

fn main() {
    init_logger();

    let res = run();
    debug!("metrics: {:?}", metrics::snapshot());

    if let Err(e) = res {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = cli::Cli::parse_args();
    // SR_* env first, CLI flags override
    let cfg = ReaderConfig::from_env();

    match cli.cmd {
        cli::Cmd::Books { root, json } =>
            cmd_books::exec(root, json),

        cli::Cmd::Chapters { dir, json } =>
            cmd_chapters::exec(dir, json, cfg),

        cli::Cmd::Tokenize { name, json } =>
            cmd_tokenize::exec(name, json, cfg),

        cli::Cmd::Paginate { file, page_size, json, no_cache } =>
            cmd_paginate::exec(file, page_size, json, no_cache, cfg),

        cli::Cmd::Read { dir, chapter, page, page_size, json } =>
            cmd_read::exec(dir, chapter, page, page_size, json, cfg),
    }
}
