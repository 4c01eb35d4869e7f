// Word node definitions for the interpreter

use crate::memory::Cell;

/// Built-in operations that consume no tokens beyond themselves.
///
/// Structured words (strings, comments, `IF`, `DO`, `BEGIN`, `:`,
/// `VARIABLE`, `CONSTANT`, `::`) are separate [`WordNode`] variants
/// because they carry parsed bodies or names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinWord {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    // Comparison
    Equal,
    Lesser,
    Greater,
    // Bitwise
    And,
    Or,
    Xor,
    Invert,
    // Stack manipulation
    Dup,
    Drop,
    Swap,
    Over,
    Rot,
    // Output
    Dot,
    Emit,
    Cr,
    Dump,
    // Heap
    Allot,
    Cells,
    Fetch,
    Store,
}

impl BuiltinWord {
    /// The spelling used in diagnostics.
    pub fn symbol(&self) -> &'static str {
        match self {
            BuiltinWord::Add => "+",
            BuiltinWord::Sub => "-",
            BuiltinWord::Mul => "*",
            BuiltinWord::Div => "/",
            BuiltinWord::Mod => "mod",
            BuiltinWord::Equal => "=",
            BuiltinWord::Lesser => "<",
            BuiltinWord::Greater => ">",
            BuiltinWord::And => "and",
            BuiltinWord::Or => "or",
            BuiltinWord::Xor => "xor",
            BuiltinWord::Invert => "invert",
            BuiltinWord::Dup => "dup",
            BuiltinWord::Drop => "drop",
            BuiltinWord::Swap => "swap",
            BuiltinWord::Over => "over",
            BuiltinWord::Rot => "rot",
            BuiltinWord::Dot => ".",
            BuiltinWord::Emit => "emit",
            BuiltinWord::Cr => "cr",
            BuiltinWord::Dump => "dump",
            BuiltinWord::Allot => "allot",
            BuiltinWord::Cells => "cells",
            BuiltinWord::Fetch => "@",
            BuiltinWord::Store => "!",
        }
    }
}

/// One element of a stored word body: either a raw word re-resolved at
/// execution time (this is what makes recursive definitions work), or a
/// structured word already parsed into a node.
#[derive(Debug, Clone, PartialEq)]
pub enum BodyElement {
    Raw(String),
    Parsed(WordNode),
}

/// An ordered word body, as stored for user definitions and control
/// structures.  Raw elements are kept case-folded.
pub type Body = Vec<BodyElement>;

/// An evaluable word.
///
/// Structured variants carry a `good` flag: when the source exhausts
/// before the word's terminator is found, the parser returns the node
/// with `good = false` and evaluation reports a syntax diagnostic
/// instead of executing.
#[derive(Debug, Clone, PartialEq)]
pub enum WordNode {
    Builtin(BuiltinWord),
    Literal(Cell),
    FString {
        text: String,
        good: bool,
    },
    Comment {
        good: bool,
    },
    If {
        true_body: Body,
        false_body: Option<Body>,
        good: bool,
    },
    Do {
        body: Body,
        good: bool,
    },
    Begin {
        body: Body,
        good: bool,
    },
    WordDef {
        name: Option<String>,
        body: Body,
        good: bool,
    },
    VariableDef {
        name: Option<String>,
    },
    ConstantDef {
        name: Option<String>,
    },
    Load {
        path: Option<String>,
    },
}

/// Parse a word as an integer literal: decimal digits with an optional
/// leading `-`.  Anything else (including a leading `+`) is not a
/// literal.
pub fn parse_cell(word: &str) -> Option<Cell> {
    let digits = word.strip_prefix('-').unwrap_or(word);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    word.parse::<Cell>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cell() {
        assert_eq!(parse_cell("0"), Some(0));
        assert_eq!(parse_cell("42"), Some(42));
        assert_eq!(parse_cell("-17"), Some(-17));

        assert_eq!(parse_cell(""), None);
        assert_eq!(parse_cell("-"), None);
        assert_eq!(parse_cell("+5"), None);
        assert_eq!(parse_cell("1.5"), None);
        assert_eq!(parse_cell("abc"), None);
    }
}
