//! Word parsing for the interpreter
//!
//! This module turns input text into evaluable word nodes:
//! - [`cursor`]: the mutable parse cursor and `get_word` tokenization
//! - [`resolver`]: case-insensitive lookup from written words to built-ins
//! - [`words`]: the [`words::WordNode`] variants and word-body storage
//! - [`structured`]: the parsers for words that consume tokens beyond
//!   themselves (strings, comments, `IF`, `DO`, `BEGIN`, `:`)
//!
//! # Parsing model
//!
//! There is no separate scanning pass.  The interpreter pulls one word at a
//! time from the cursor; a structured word's parser keeps pulling words
//! (and whole continuation lines from the source) until its terminator,
//! recursively instantiating nested structured words so terminator
//! matching respects nesting.

pub mod cursor;
pub mod resolver;
pub mod structured;
pub mod words;
