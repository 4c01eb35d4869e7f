//! Word resolution
//!
//! Case-insensitive lookup from a written word to a built-in.  Symbol
//! spellings (`+`, `.`, `."`, …) are matched exactly; everything else is
//! matched against the alphabetic built-in names.  The alphabetic
//! spellings behind the symbols (`add`, `dot`, …) deliberately do not
//! resolve, so only the symbol itself dispatches and the names stay free
//! for user definitions.
//!
//! Terminators (`;`, `then`, `else`, `loop`, `until`, `"`, `)`) are not
//! resolvable; they are only meaningful inside the structured word whose
//! parser is looking for them.

use super::words::BuiltinWord;

/// Structured words: built-ins whose parse consumes tokens beyond the
/// word itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructuredWord {
    FString,
    Comment,
    If,
    Do,
    Begin,
    WordDef,
    Variable,
    Constant,
    Load,
}

impl StructuredWord {
    /// Whether this word becomes a pre-parsed node inside a stored body.
    /// Strings, comments, and control structures nest; definition words
    /// and `::` stay raw and parse again when the body runs.
    pub fn nests_in_bodies(&self) -> bool {
        matches!(
            self,
            StructuredWord::FString
                | StructuredWord::Comment
                | StructuredWord::If
                | StructuredWord::Do
                | StructuredWord::Begin
        )
    }
}

/// A resolved built-in: either a simple operation evaluated immediately,
/// or a structured word whose parser must run first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedWord {
    Simple(BuiltinWord),
    Structured(StructuredWord),
}

/// Resolve a written word to a built-in, or `None` for everything else
/// (user words, literals, variable and constant names, unknown words).
pub fn resolve(word: &str) -> Option<ResolvedWord> {
    use BuiltinWord::*;
    use ResolvedWord::{Simple, Structured};

    // Symbols dispatch on their exact spelling.
    let symbol = match word {
        "+" => Some(Simple(Add)),
        "-" => Some(Simple(Sub)),
        "*" => Some(Simple(Mul)),
        "/" => Some(Simple(Div)),
        "." => Some(Simple(Dot)),
        "=" => Some(Simple(Equal)),
        "<" => Some(Simple(Lesser)),
        ">" => Some(Simple(Greater)),
        "!" => Some(Simple(Store)),
        "@" => Some(Simple(Fetch)),
        ".\"" => Some(Structured(StructuredWord::FString)),
        "(" => Some(Structured(StructuredWord::Comment)),
        ":" => Some(Structured(StructuredWord::WordDef)),
        "::" => Some(Structured(StructuredWord::Load)),
        _ => None,
    };
    if symbol.is_some() {
        return symbol;
    }

    match word.to_ascii_lowercase().as_str() {
        "mod" => Some(Simple(Mod)),
        "and" => Some(Simple(And)),
        "or" => Some(Simple(Or)),
        "xor" => Some(Simple(Xor)),
        "invert" => Some(Simple(Invert)),
        "dup" => Some(Simple(Dup)),
        "drop" => Some(Simple(Drop)),
        "swap" => Some(Simple(Swap)),
        "over" => Some(Simple(Over)),
        "rot" => Some(Simple(Rot)),
        "emit" => Some(Simple(Emit)),
        "cr" => Some(Simple(Cr)),
        "dump" => Some(Simple(Dump)),
        "allot" => Some(Simple(Allot)),
        "cells" => Some(Simple(Cells)),
        "if" => Some(Structured(StructuredWord::If)),
        "do" => Some(Structured(StructuredWord::Do)),
        "begin" => Some(Structured(StructuredWord::Begin)),
        "variable" => Some(Structured(StructuredWord::Variable)),
        "constant" => Some(Structured(StructuredWord::Constant)),
        _ => None,
    }
}

/// For a stray terminator, the opener it belongs to; `None` when the word
/// is not a terminator.
pub fn unmatched_opener(word: &str) -> Option<&'static str> {
    match word.to_ascii_lowercase().as_str() {
        ";" => Some(":"),
        "then" | "else" => Some("if"),
        "loop" => Some("do"),
        "until" => Some("begin"),
        "\"" => Some(".\""),
        ")" => Some("("),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::words::BuiltinWord;

    #[test]
    fn test_symbols_resolve() {
        assert_eq!(resolve("+"), Some(ResolvedWord::Simple(BuiltinWord::Add)));
        assert_eq!(resolve("."), Some(ResolvedWord::Simple(BuiltinWord::Dot)));
        assert_eq!(resolve("!"), Some(ResolvedWord::Simple(BuiltinWord::Store)));
        assert_eq!(resolve("@"), Some(ResolvedWord::Simple(BuiltinWord::Fetch)));
        assert_eq!(
            resolve(".\""),
            Some(ResolvedWord::Structured(StructuredWord::FString))
        );
        assert_eq!(
            resolve("::"),
            Some(ResolvedWord::Structured(StructuredWord::Load))
        );
    }

    #[test]
    fn test_alphabetic_names_resolve_case_insensitively() {
        assert_eq!(
            resolve("DUP"),
            Some(ResolvedWord::Simple(BuiltinWord::Dup))
        );
        assert_eq!(
            resolve("Begin"),
            Some(ResolvedWord::Structured(StructuredWord::Begin))
        );
        assert_eq!(
            resolve("variable"),
            Some(ResolvedWord::Structured(StructuredWord::Variable))
        );
    }

    #[test]
    fn test_symbol_spellings_do_not_resolve_by_name() {
        // Only `+` dispatches Add; `add` stays available to users.
        assert_eq!(resolve("add"), None);
        assert_eq!(resolve("sub"), None);
        assert_eq!(resolve("dot"), None);
        assert_eq!(resolve("fetch"), None);
        assert_eq!(resolve("store"), None);
    }

    #[test]
    fn test_terminators_are_not_resolvable() {
        for terminator in [";", "then", "else", "loop", "until", "\"", ")"] {
            assert_eq!(resolve(terminator), None);
            assert!(unmatched_opener(terminator).is_some());
        }
        assert_eq!(unmatched_opener("LOOP"), Some("do"));
        assert_eq!(unmatched_opener("dup"), None);
    }
}
