// Two-operand arithmetic, comparison, and bitwise words

use crate::interpreter::engine::Interpreter;
use crate::memory::truth;
use crate::parser::words::BuiltinWord;

impl Interpreter {
    /// Pop `v2` then `v1` (`v1` being the earlier push), compute
    /// `v1 OP v2`, and push the result.  Arithmetic wraps; division and
    /// modulo by zero yield `0` rather than aborting.
    pub(crate) fn op_binary(&mut self, op: BuiltinWord) {
        let (v1, v2) = match self.take2(op.symbol()) {
            Some(operands) => operands,
            None => return,
        };
        let result = match op {
            BuiltinWord::Add => v1.wrapping_add(v2),
            BuiltinWord::Sub => v1.wrapping_sub(v2),
            BuiltinWord::Mul => v1.wrapping_mul(v2),
            BuiltinWord::Div => {
                if v2 == 0 {
                    0
                } else {
                    v1.wrapping_div(v2)
                }
            }
            BuiltinWord::Mod => {
                if v2 == 0 {
                    0
                } else {
                    v1.wrapping_rem(v2)
                }
            }
            BuiltinWord::Equal => truth(v1 == v2),
            BuiltinWord::Lesser => truth(v1 < v2),
            BuiltinWord::Greater => truth(v1 > v2),
            BuiltinWord::And => v1 & v2,
            BuiltinWord::Or => v1 | v2,
            BuiltinWord::Xor => v1 ^ v2,
            _ => unreachable!("not a binary word: {:?}", op),
        };
        self.stack.push(result);
    }
}
