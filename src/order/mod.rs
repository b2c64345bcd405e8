//! order: chapter ordering engine (tokenizer + prologue + comparator).

pub mod comparator;
pub mod prologue;
pub mod tokenizer;

pub use comparator::{stem_of, ChapterComparator, ChapterKey, PriorityClass};
pub use prologue::{classify_prologue, Prologue};
pub use tokenizer::{tokenize_with, Segment, TokenizeResult};
