// zengrad-core/src/ops/arithmetic/add.rs

use crate::autograd::BackwardOp;
use crate::value::Value;

/// Adds two nodes: `out = a + b`.
///
/// Backward: both operands receive the upstream gradient unchanged.
pub fn add_op(a: &Value, b: &Value) -> Value {
    let data = a.data() + b.data();
    Value::from_op(
        data,
        BackwardOp::Add {
            lhs: a.clone(),
            rhs: b.clone(),
        },
    )
}

impl_binary_op!(Add, add, add_op);

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
