// zengrad-core/src/ops/arithmetic/neg.rs

use crate::ops::arithmetic::mul::mul_op;
use crate::value::Value;
use std::ops::Neg;

/// Negates a node, expressed as `a * (-1)`.
pub fn neg_op(a: &Value) -> Value {
    mul_op(a, &Value::new(-1.0))
}

impl Neg for &Value {
    type Output = Value;
    fn neg(self) -> Value {
        neg_op(self)
    }
}

impl Neg for Value {
    type Output = Value;
    fn neg(self) -> Value {
        neg_op(&self)
    }
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
