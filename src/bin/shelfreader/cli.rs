use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI для ShelfReader: порядок глав и постраничное чтение
#[derive(Parser, Debug)]
#[command(
    name = "shelfreader",
    version,
    about = "Chapter ordering and cached pagination for plain-text books",
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Cmd,
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as Parser>::parse()
    }
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// List the books (sub-directories) of a shelf root, GBK name order
    Books {
        #[arg(long)]
        root: PathBuf,
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print the chapters of a book directory in reading order
    Chapters {
        #[arg(long)]
        dir: PathBuf,
        /// JSON output (array of objects)
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Show how a file name is tokenized and classified
    ///
    /// Пример:
    ///   shelfreader tokenize --name "第十二章 归来.txt"
    Tokenize {
        #[arg(long)]
        name: String,
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Compute (or load from cache) the page boundary table of a chapter file
    Paginate {
        #[arg(long)]
        file: PathBuf,
        /// Override SR_PAGE_SIZE / default 2000
        #[arg(long)]
        page_size: Option<usize>,
        #[arg(long, default_value_t = false)]
        json: bool,
        /// Do not read or write <stem>_pagination.json
        #[arg(long, default_value_t = false)]
        no_cache: bool,
    },
    /// Print one page of a chapter with navigation
    ///
    /// Номер страницы вне [1, max] приводится к ближайшей границе.
    Read {
        #[arg(long)]
        dir: PathBuf,
        /// Chapter link name: stem for .txt chapters, full name for images
        #[arg(long)]
        chapter: String,
        #[arg(long, default_value_t = 1)]
        page: usize,
        #[arg(long)]
        page_size: Option<usize>,
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}
