//! Word-dispatch execution engine
//!
//! This module provides the core execution logic:
//! - [`engine`]: the interpreter loop that threads a parse cursor through
//!   input lines and stored word bodies
//! - [`dictionary`]: user word definitions and named constants
//! - [`errors`]: the diagnostic taxonomy reported on the error channel
//! - [`ops`]: the built-in operations, grouped by concern
//!
//! # Error Model
//!
//! Diagnostics do not unwind control flow.  Every failing operation is a
//! no-op that preserves the interpreter's invariants, with one exception:
//! an unresolved word halts the current `interpret` call, and enclosing
//! `DO`/`BEGIN` loops detect the halt and terminate early.

pub mod dictionary;
pub mod engine;
pub mod errors;
pub mod ops;
