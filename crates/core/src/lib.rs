#![no_std]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]

extern crate alloc;

pub mod concordance;
pub mod counter;
pub mod tokenizer;

pub use concordance::{Concordance, WordTuple};
pub use counter::{FrequencyMap, count_words};
pub use tokenizer::{scrub_word, tokenize};
