// zengrad-core/src/ops/arithmetic/div.rs

use crate::ops::arithmetic::{mul::mul_op, pow::powf_op};
use crate::value::Value;

/// Divides two nodes, expressed as `a * b^(-1)`.
///
/// Division by zero is not an error: it produces an infinite (or NaN) result
/// and gradient, like IEEE division. Use [`Value::ensure_finite`] to reject it.
pub fn div_op(a: &Value, b: &Value) -> Value {
    mul_op(a, &powf_op(b, -1.0))
}

impl_binary_op!(Div, div, div_op);

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
