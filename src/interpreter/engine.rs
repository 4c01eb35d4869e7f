// Word-dispatch engine for the interpreter

use std::path::Path;

use crate::console::Console;
use crate::memory::heap::Heap;
use crate::memory::stack::DataStack;
use crate::memory::Cell;
use crate::parser::cursor::{CursorWord, ParseCursor};
use crate::parser::resolver::{resolve, unmatched_opener, ResolvedWord};
use crate::parser::structured::parse_structured;
use crate::parser::words::{parse_cell, Body, BodyElement, BuiltinWord, WordNode};
use crate::source::Source;

use super::dictionary::Dictionary;
use super::errors::Diagnostic;

/// The interpreter: owns the input source, the output console, and all
/// mutable language state.
pub struct Interpreter {
    source: Source,
    pub(crate) console: Console,
    pub(crate) stack: DataStack,
    pub(crate) heap: Heap,
    dictionary: Dictionary,
}

impl Interpreter {
    pub fn new(source: Source, console: Console) -> Self {
        Interpreter {
            source,
            console,
            stack: DataStack::new(),
            heap: Heap::new(),
            dictionary: Dictionary::new(),
        }
    }

    /// Read and interpret lines until `quit`/`exit` or end of input.
    ///
    /// After each line the console emits a trailing newline if print words
    /// left the output line open, then resets its state.
    pub fn run(&mut self) {
        while let Some(line) = self.source.read_line(&mut self.console, true) {
            let trimmed = line.trim();
            if trimmed.eq_ignore_ascii_case("quit") || trimmed.eq_ignore_ascii_case("exit") {
                break;
            }
            self.interpret(&line);
            self.console.finish_line();
        }
    }

    /// Interpret one input line.  Returns `false` when an unresolved word
    /// halted interpretation before the line was fully consumed.
    pub fn interpret(&mut self, line: &str) -> bool {
        let mut cursor = ParseCursor::from_line(line);
        self.interpret_cursor(&mut cursor)
    }

    /// Interpret a shallow copy of a stored word body.
    fn interpret_body(&mut self, body: &Body) -> bool {
        let mut cursor = ParseCursor::from_body(body);
        self.interpret_cursor(&mut cursor)
    }

    fn interpret_cursor(&mut self, cursor: &mut ParseCursor) -> bool {
        while let Some(word) = cursor.get_word() {
            let keep_going = match word {
                // Pre-parsed body elements evaluate directly.
                CursorWord::Node(node) => self.eval(&node),
                CursorWord::Text(written) => self.interpret_word(&written, cursor),
            };
            if !keep_going {
                return false;
            }
        }
        true
    }

    /// Dispatch one written word: built-in, user word, literal, variable,
    /// constant, stray terminator, or unknown.
    fn interpret_word(&mut self, written: &str, cursor: &mut ParseCursor) -> bool {
        let folded = written.to_ascii_lowercase();

        if let Some(resolved) = resolve(&folded) {
            let node = match resolved {
                ResolvedWord::Simple(op) => WordNode::Builtin(op),
                ResolvedWord::Structured(kind) => {
                    parse_structured(kind, cursor, &mut self.source, &mut self.console)
                }
            };
            return self.eval(&node);
        }

        if let Some(body) = self.dictionary.word_body(&folded).cloned() {
            return self.interpret_body(&body);
        }

        if let Some(value) = parse_cell(written) {
            return self.eval(&WordNode::Literal(value));
        }

        if let Some(addr) = self.heap.address_of(&folded) {
            self.stack.push(addr);
            return true;
        }

        if let Some(value) = self.dictionary.constant(&folded) {
            self.stack.push(value);
            return true;
        }

        if let Some(opener) = unmatched_opener(&folded) {
            self.err(Diagnostic::Syntax {
                message: format!("'{}' without matching '{}'", folded, opener),
            });
            return true;
        }

        self.err(Diagnostic::BadWord {
            word: written.to_string(),
        });
        false
    }

    /// Evaluate one word node.  Returns `false` when evaluation halted on
    /// an unresolved word somewhere inside.
    fn eval(&mut self, node: &WordNode) -> bool {
        match node {
            WordNode::Builtin(op) => {
                self.eval_builtin(*op);
                true
            }
            WordNode::Literal(value) => {
                self.stack.push(*value);
                true
            }
            WordNode::FString { text, good } => {
                if *good {
                    self.console.print_verbatim(text);
                } else {
                    self.err(Diagnostic::Syntax {
                        message: "No closing '\"' found".to_string(),
                    });
                }
                true
            }
            WordNode::Comment { good } => {
                if !*good {
                    self.err(Diagnostic::Syntax {
                        message: "No closing ')' found".to_string(),
                    });
                }
                true
            }
            WordNode::If {
                true_body,
                false_body,
                good,
            } => self.eval_if(true_body, false_body.as_ref(), *good),
            WordNode::Do { body, good } => self.eval_do(body, *good),
            WordNode::Begin { body, good } => self.eval_begin(body, *good),
            WordNode::WordDef { name, body, good } => {
                self.eval_word_def(name.as_deref(), body, *good);
                true
            }
            WordNode::VariableDef { name } => {
                self.eval_variable_def(name.as_deref());
                true
            }
            WordNode::ConstantDef { name } => {
                self.eval_constant_def(name.as_deref());
                true
            }
            WordNode::Load { path } => {
                self.eval_load(path.as_deref());
                true
            }
        }
    }

    fn eval_builtin(&mut self, op: BuiltinWord) {
        use BuiltinWord::*;
        match op {
            Add | Sub | Mul | Div | Mod | Equal | Lesser | Greater | And | Or | Xor => {
                self.op_binary(op)
            }
            Invert => self.op_invert(),
            Dup => self.op_dup(),
            Drop => self.op_drop(),
            Swap => self.op_swap(),
            Over => self.op_over(),
            Rot => self.op_rot(),
            Dot => self.op_dot(),
            Emit => self.op_emit(),
            Cr => self.op_cr(),
            Dump => self.op_dump(),
            Allot => self.op_allot(),
            // Cell size is 1, so CELLS leaves its count untouched.
            Cells => {}
            Fetch => self.op_fetch(),
            Store => self.op_store(),
        }
    }

    fn eval_if(&mut self, true_body: &Body, false_body: Option<&Body>, good: bool) -> bool {
        if !good {
            self.err(Diagnostic::Syntax {
                message: "No closing 'then' found".to_string(),
            });
            return true;
        }
        let flag = match self.take1("if") {
            Some(flag) => flag,
            None => return true,
        };
        if flag != 0 {
            self.interpret_body(true_body)
        } else if let Some(body) = false_body {
            self.interpret_body(body)
        } else {
            true
        }
    }

    fn eval_do(&mut self, body: &Body, good: bool) -> bool {
        if !good {
            self.err(Diagnostic::Syntax {
                message: "No closing 'loop' found".to_string(),
            });
            return true;
        }
        let (limit, start) = match self.take2("do") {
            Some(bounds) => bounds,
            None => return true,
        };
        if start < 0 || limit < 0 || start > limit {
            self.err(Diagnostic::BadLoop { start, limit });
            return true;
        }
        for index in start..limit {
            let iteration = substitute_index(body, index);
            if !self.interpret_body(&iteration) {
                return false;
            }
        }
        true
    }

    fn eval_begin(&mut self, body: &Body, good: bool) -> bool {
        if !good {
            self.err(Diagnostic::Syntax {
                message: "No closing 'until' found".to_string(),
            });
            return true;
        }
        loop {
            if !self.interpret_body(body) {
                return false;
            }
            match self.take1("until") {
                // Underflow at the loop test aborts the loop.
                None => return true,
                Some(flag) => {
                    if flag != 0 {
                        return true;
                    }
                }
            }
        }
    }

    fn eval_word_def(&mut self, name: Option<&str>, body: &Body, good: bool) {
        if !good {
            self.err(Diagnostic::Syntax {
                message: "No closing ';' found".to_string(),
            });
            return;
        }
        let name = match self.check_definable(name, ":") {
            Some(name) => name,
            None => return,
        };
        if self.heap.is_defined(&name) {
            self.err(Diagnostic::BadDef {
                message: format!("'{}' is already a variable", name),
            });
            return;
        }
        if self.dictionary.is_constant(&name) {
            self.err(Diagnostic::BadDef {
                message: format!("'{}' is already a constant", name),
            });
            return;
        }
        self.dictionary.define_word(name, body.clone());
    }

    fn eval_variable_def(&mut self, name: Option<&str>) {
        let name = match self.check_definable(name, "variable") {
            Some(name) => name,
            None => return,
        };
        if self.heap.is_defined(&name) {
            self.err(Diagnostic::BadDef {
                message: format!("Cannot redefine variable '{}'", name),
            });
            return;
        }
        if self.dictionary.is_constant(&name) {
            self.err(Diagnostic::BadDef {
                message: format!("'{}' is already a constant", name),
            });
            return;
        }
        if self.dictionary.is_user_word(&name) {
            self.err(Diagnostic::BadDef {
                message: format!("'{}' is already a word", name),
            });
            return;
        }
        self.heap.create(&name);
    }

    fn eval_constant_def(&mut self, name: Option<&str>) {
        let name = match self.check_definable(name, "constant") {
            Some(name) => name,
            None => return,
        };
        if self.dictionary.is_constant(&name) {
            self.err(Diagnostic::BadDef {
                message: format!("Cannot redefine constant '{}'", name),
            });
            return;
        }
        if self.heap.is_defined(&name) {
            self.err(Diagnostic::BadDef {
                message: format!("'{}' is already a variable", name),
            });
            return;
        }
        if self.dictionary.is_user_word(&name) {
            self.err(Diagnostic::BadDef {
                message: format!("'{}' is already a word", name),
            });
            return;
        }
        let value = match self.take1("constant") {
            Some(value) => value,
            None => return,
        };
        self.dictionary.define_constant(name, value);
    }

    /// Shared name validation for the defining words: present, not a
    /// number, not a built-in.
    fn check_definable(&mut self, name: Option<&str>, kind: &str) -> Option<String> {
        let name = match name {
            Some(name) => name,
            None => {
                self.err(Diagnostic::BadDef {
                    message: format!("Missing name for '{}'", kind),
                });
                return None;
            }
        };
        if parse_cell(name).is_some() {
            self.err(Diagnostic::BadDef {
                message: format!("Cannot use number '{}' as a name", name),
            });
            return None;
        }
        if resolve(name).is_some() {
            self.err(Diagnostic::BadDef {
                message: format!("'{}' is a built-in word", name),
            });
            return None;
        }
        Some(name.to_string())
    }

    fn eval_load(&mut self, path: Option<&str>) {
        match path {
            Some(path) => self.load(path),
            None => self.err(Diagnostic::Syntax {
                message: "Missing filename after '::'".to_string(),
            }),
        }
    }

    /// Interpret a script file in place, then restore the previous source.
    /// The file handle is closed when the temporary source is dropped.
    pub fn load(&mut self, path: &str) {
        match Source::from_path(Path::new(path)) {
            Ok(file_source) => {
                let previous = std::mem::replace(&mut self.source, file_source);
                self.run();
                self.source = previous;
            }
            Err(_) => self.err(Diagnostic::BadLoad {
                path: path.to_string(),
            }),
        }
    }

    /// Report a diagnostic on the error channel.
    pub(crate) fn err(&mut self, diagnostic: Diagnostic) {
        self.console.report(diagnostic.tag(), &diagnostic.message());
    }

    /// Pop one cell for `op`, or report underflow and leave the stack
    /// unchanged.
    pub(crate) fn take1(&mut self, op: &'static str) -> Option<Cell> {
        if self.stack.is_empty() {
            self.underflow(op, 1);
            return None;
        }
        self.stack.pop()
    }

    /// Pop two cells for `op` in push order, or report underflow.
    pub(crate) fn take2(&mut self, op: &'static str) -> Option<(Cell, Cell)> {
        if self.stack.depth() < 2 {
            self.underflow(op, 2);
            return None;
        }
        self.stack.pop2()
    }

    /// Pop three cells for `op` in push order, or report underflow.
    pub(crate) fn take3(&mut self, op: &'static str) -> Option<(Cell, Cell, Cell)> {
        if self.stack.depth() < 3 {
            self.underflow(op, 3);
            return None;
        }
        self.stack.pop3()
    }

    fn underflow(&mut self, op: &'static str, required: usize) {
        let available = self.stack.depth();
        self.err(Diagnostic::StackUnderflow {
            op,
            required,
            available,
        });
    }

    /// The data stack, bottom to top.
    pub fn stack(&self) -> &[Cell] {
        self.stack.cells()
    }

    /// The output console (for inspecting captured output in tests).
    pub fn console(&self) -> &Console {
        &self.console
    }
}

/// Copy a loop body with every raw `i` replaced by the decimal iteration
/// index, recursing into nested control structures.
fn substitute_index(body: &Body, index: Cell) -> Body {
    body.iter()
        .map(|element| match element {
            BodyElement::Raw(word) if word == "i" => BodyElement::Raw(index.to_string()),
            BodyElement::Raw(word) => BodyElement::Raw(word.clone()),
            BodyElement::Parsed(node) => BodyElement::Parsed(substitute_index_node(node, index)),
        })
        .collect()
}

fn substitute_index_node(node: &WordNode, index: Cell) -> WordNode {
    match node {
        WordNode::If {
            true_body,
            false_body,
            good,
        } => WordNode::If {
            true_body: substitute_index(true_body, index),
            false_body: false_body.as_ref().map(|body| substitute_index(body, index)),
            good: *good,
        },
        WordNode::Do { body, good } => WordNode::Do {
            body: substitute_index(body, index),
            good: *good,
        },
        WordNode::Begin { body, good } => WordNode::Begin {
            body: substitute_index(body, index),
            good: *good,
        },
        other => other.clone(),
    }
}
