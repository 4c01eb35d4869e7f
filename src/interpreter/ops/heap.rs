// Heap access words
//
// `VARIABLE` and `CONSTANT` are handled by the engine because they parse
// names; the words here only move cells between the stack and the heap.

use crate::interpreter::engine::Interpreter;
use crate::interpreter::errors::Diagnostic;

impl Interpreter {
    /// Pop a count and advance the heap frontier by that many cells.
    pub(crate) fn op_allot(&mut self) {
        if let Some(count) = self.take1("allot") {
            self.heap.allot(count);
        }
    }

    /// `@` — pop an address and push the cell stored there.  An allocated
    /// but unwritten cell reads as `0`.
    pub(crate) fn op_fetch(&mut self) {
        let addr = match self.take1("@") {
            Some(addr) => addr,
            None => return,
        };
        match self.heap.get(addr) {
            Ok(Some(value)) => self.stack.push(value),
            Ok(None) => self.stack.push(0),
            Err(bad) => self.err(Diagnostic::BadAddress { addr: bad.0 }),
        }
    }

    /// `!` — pop an address (top) then a value, and store the value at
    /// the address.
    pub(crate) fn op_store(&mut self) {
        let (value, addr) = match self.take2("!") {
            Some(operands) => operands,
            None => return,
        };
        if let Err(bad) = self.heap.set(addr, value) {
            self.err(Diagnostic::BadAddress { addr: bad.0 });
        }
    }
}
