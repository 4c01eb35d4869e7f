//! Diagnostic types for the interpreter
//!
//! Every runtime problem maps to one [`Diagnostic`] variant with a fixed
//! bracketed tag.  Diagnostics go to the error channel and never abort the
//! session: the interpreter keeps accepting input after reporting one.

use std::fmt;

use crate::memory::Cell;

/// A reportable runtime problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// Missing or misplaced terminator.
    Syntax { message: String },

    /// Defining a variable, constant, or word with an empty, numeric, or
    /// colliding name.
    BadDef { message: String },

    /// A word that is neither built-in, user-defined, literal, variable,
    /// nor constant.  The only diagnostic that halts the current line.
    BadWord { word: String },

    /// `DO` with a negative bound or start beyond limit.
    BadLoop { start: Cell, limit: Cell },

    /// Heap access outside the allocated range.
    BadAddress { addr: Cell },

    /// An operation needed more cells than the stack holds.
    StackUnderflow {
        op: &'static str,
        required: usize,
        available: usize,
    },

    /// A script file that could not be opened.
    BadLoad { path: String },
}

impl Diagnostic {
    /// The fixed bracketed tag, rendered in red on a terminal.
    pub fn tag(&self) -> &'static str {
        match self {
            Diagnostic::Syntax { .. } => "[SYNTAX]",
            Diagnostic::BadDef { .. } => "[BAD DEF]",
            Diagnostic::BadWord { .. } => "[BAD WORD]",
            Diagnostic::BadLoop { .. } => "[BAD LOOP]",
            Diagnostic::BadAddress { .. } => "[BAD ADDRESS]",
            Diagnostic::StackUnderflow { .. } => "[STACK UNDERFLOW]",
            Diagnostic::BadLoad { .. } => "[BAD LOAD]",
        }
    }

    /// The freeform message following the tag.
    pub fn message(&self) -> String {
        match self {
            Diagnostic::Syntax { message } => message.clone(),
            Diagnostic::BadDef { message } => message.clone(),
            Diagnostic::BadWord { word } => format!("Unknown word '{}'", word),
            Diagnostic::BadLoop { start, limit } => {
                format!("Invalid bounds: start {}, limit {}", start, limit)
            }
            Diagnostic::BadAddress { addr } => format!("No heap cell at address {}", addr),
            Diagnostic::StackUnderflow {
                op,
                required,
                available,
            } => format!(
                "Not enough values for '{}': need {}, have {}",
                op, required, available
            ),
            Diagnostic::BadLoad { path } => format!("File '{}' not found", path),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.tag(), self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_tag_and_message() {
        let diagnostic = Diagnostic::BadWord {
            word: "NOTAWORD".to_string(),
        };
        assert_eq!(
            diagnostic.to_string(),
            "[BAD WORD] Unknown word 'NOTAWORD'"
        );

        let diagnostic = Diagnostic::StackUnderflow {
            op: "+",
            required: 2,
            available: 1,
        };
        assert_eq!(
            diagnostic.to_string(),
            "[STACK UNDERFLOW] Not enough values for '+': need 2, have 1"
        );
    }
}
