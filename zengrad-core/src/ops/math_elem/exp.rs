// zengrad-core/src/ops/math_elem/exp.rs

use crate::autograd::BackwardOp;
use crate::value::Value;

/// Exponential: `out = e^x`.
///
/// Backward: `x.grad += out * g`.
pub fn exp_op(a: &Value) -> Value {
    let data = a.data().exp();
    Value::from_op(data, BackwardOp::Exp { input: a.clone() })
}

impl Value {
    /// See [`exp_op`].
    pub fn exp(&self) -> Value {
        exp_op(self)
    }
}

#[cfg(test)]
#[path = "exp_test.rs"]
mod tests;
