// src/value/debug.rs

use super::Value;
use std::fmt;

// Operands are not printed: a deep graph would flood the output.
impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.read_data();
        let mut s = f.debug_struct("Value");
        s.field("id", &guard.id)
            .field("data", &guard.data)
            .field("grad", &guard.grad)
            .field("op", &guard.grad_fn.kind());
        if let Some(label) = &guard.label {
            s.field("label", label);
        }
        s.finish()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.read_data();
        write!(f, "Value(data={}, grad={})", guard.data, guard.grad)
    }
}
