// Stack manipulation words

use crate::interpreter::engine::Interpreter;

impl Interpreter {
    pub(crate) fn op_dup(&mut self) {
        if let Some(top) = self.take1("dup") {
            self.stack.push(top);
            self.stack.push(top);
        }
    }

    pub(crate) fn op_drop(&mut self) {
        let _ = self.take1("drop");
    }

    /// `(… a b)` → `(… b a)`
    pub(crate) fn op_swap(&mut self) {
        if let Some((a, b)) = self.take2("swap") {
            self.stack.push(b);
            self.stack.push(a);
        }
    }

    /// `(… a b)` → `(… a b a)`
    pub(crate) fn op_over(&mut self) {
        if let Some((a, b)) = self.take2("over") {
            self.stack.push(a);
            self.stack.push(b);
            self.stack.push(a);
        }
    }

    /// `(… a b c)` → `(… b c a)`
    pub(crate) fn op_rot(&mut self) {
        if let Some((a, b, c)) = self.take3("rot") {
            self.stack.push(b);
            self.stack.push(c);
            self.stack.push(a);
        }
    }

    /// Bitwise complement of the top cell.
    pub(crate) fn op_invert(&mut self) {
        if let Some(top) = self.take1("invert") {
            self.stack.push(!top);
        }
    }
}
