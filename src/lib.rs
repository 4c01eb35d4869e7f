//! # Introduction
//!
//! Forsh reads whitespace-separated words from a line-oriented source,
//! dispatches each word against a dictionary of built-in operations and
//! user-defined words, and mutates a shared data stack plus a small linear
//! heap.  Structured words (string literals, comments, `IF`, `DO`, `BEGIN`,
//! colon definitions) parse their own bodies, pulling continuation lines
//! from the source when needed.
//!
//! ## Execution pipeline
//!
//! ```text
//! Source → Interpreter → get_word → resolver → WordNode → eval
//! ```
//!
//! 1. [`source`] — line-oriented input: interactive terminal, script file,
//!    or in-memory lines.
//! 2. [`parser`] — the parse cursor, the word resolver, and the structured
//!    word parsers that build [`parser::words::WordNode`] values.
//! 3. [`interpreter`] — the engine that owns the stack, heap, and
//!    dictionary, and evaluates word nodes.
//! 4. [`memory`] — the data stack and the cell-addressable linear heap.
//! 5. [`console`] — output channel with pending-newline bookkeeping and
//!    diagnostic reporting; can record both channels for tests.

pub mod console;
pub mod interpreter;
pub mod memory;
pub mod parser;
pub mod source;
