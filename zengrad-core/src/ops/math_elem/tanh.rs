// zengrad-core/src/ops/math_elem/tanh.rs

use crate::autograd::BackwardOp;
use crate::value::Value;

/// Hyperbolic tangent, `t = (e^(2x) - 1) / (e^(2x) + 1)`.
///
/// Backward: `x.grad += (1 - t^2) * g`, with `t` cached on the node.
pub fn tanh_op(a: &Value) -> Value {
    let x = a.data();
    let e2x = (2.0 * x).exp();
    let t = (e2x - 1.0) / (e2x + 1.0);
    // e^(2x) overflows for x > ~355 and the quotient turns into inf/inf.
    let t = if t.is_nan() && !x.is_nan() { x.tanh() } else { t };
    Value::from_op(
        t,
        BackwardOp::Tanh {
            input: a.clone(),
            output: t,
        },
    )
}

impl Value {
    /// See [`tanh_op`].
    pub fn tanh(&self) -> Value {
        tanh_op(self)
    }
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
