// Print words
//
// `.` and `EMIT` print without a trailing newline and separate successive
// values with single spaces; `CR` and `DUMP` flush the open line.  The
// console tracks the pending-newline and pending-space state.

use crate::interpreter::engine::Interpreter;

impl Interpreter {
    /// Pop and print the top cell.
    pub(crate) fn op_dot(&mut self) {
        if let Some(value) = self.take1(".") {
            self.console.print_value(&value.to_string());
        }
    }

    /// Pop a cell and print the decimal codepoint of the first character
    /// of its decimal representation.  Nonstandard, but programs written
    /// for this interpreter depend on it.
    pub(crate) fn op_emit(&mut self) {
        if let Some(value) = self.take1("emit") {
            let text = value.to_string();
            if let Some(first) = text.chars().next() {
                self.console.print_value(&(first as u32).to_string());
            }
        }
    }

    pub(crate) fn op_cr(&mut self) {
        self.console.newline();
    }

    /// Print the whole stack, bottom to top, on its own line.  The stack
    /// is left untouched.
    pub(crate) fn op_dump(&mut self) {
        let cells: Vec<String> = self.stack.cells().iter().map(|c| c.to_string()).collect();
        self.console.print_line(&format!("[{}]", cells.join(", ")));
    }
}
