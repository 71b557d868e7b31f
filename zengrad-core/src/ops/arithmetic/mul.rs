// zengrad-core/src/ops/arithmetic/mul.rs

use crate::autograd::BackwardOp;
use crate::value::Value;

/// Multiplies two nodes: `out = a * b`.
///
/// Backward: `a.grad += b * g`, `b.grad += a * g`, with `g` the upstream gradient.
pub fn mul_op(a: &Value, b: &Value) -> Value {
    let data = a.data() * b.data();
    Value::from_op(
        data,
        BackwardOp::Mul {
            lhs: a.clone(),
            rhs: b.clone(),
        },
    )
}

impl_binary_op!(Mul, mul, mul_op);

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
