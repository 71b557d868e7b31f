// zengrad-core/src/ops/mod.rs

//! Forward operations on [`Value`](crate::value::Value) nodes.
//!
//! Every primitive operation computes its result eagerly and records a
//! [`BackwardOp`](crate::autograd::BackwardOp) on the new node. `neg`, `sub`
//! and `div` are expressed through the primitives.

/// Implements a `std::ops` binary operator for every combination of owned and
/// borrowed `Value` operands, plus bare `f64` constants on either side. The
/// constant is promoted to a fresh leaf.
macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $op_fn:path) => {
        impl std::ops::$trait<&$crate::value::Value> for &$crate::value::Value {
            type Output = $crate::value::Value;
            fn $method(self, rhs: &$crate::value::Value) -> Self::Output {
                $op_fn(self, rhs)
            }
        }

        impl std::ops::$trait<$crate::value::Value> for $crate::value::Value {
            type Output = $crate::value::Value;
            fn $method(self, rhs: $crate::value::Value) -> Self::Output {
                $op_fn(&self, &rhs)
            }
        }

        impl std::ops::$trait<&$crate::value::Value> for $crate::value::Value {
            type Output = $crate::value::Value;
            fn $method(self, rhs: &$crate::value::Value) -> Self::Output {
                $op_fn(&self, rhs)
            }
        }

        impl std::ops::$trait<$crate::value::Value> for &$crate::value::Value {
            type Output = $crate::value::Value;
            fn $method(self, rhs: $crate::value::Value) -> Self::Output {
                $op_fn(self, &rhs)
            }
        }

        impl std::ops::$trait<f64> for &$crate::value::Value {
            type Output = $crate::value::Value;
            fn $method(self, rhs: f64) -> Self::Output {
                $op_fn(self, &$crate::value::Value::new(rhs))
            }
        }

        impl std::ops::$trait<f64> for $crate::value::Value {
            type Output = $crate::value::Value;
            fn $method(self, rhs: f64) -> Self::Output {
                $op_fn(&self, &$crate::value::Value::new(rhs))
            }
        }

        impl std::ops::$trait<$crate::value::Value> for f64 {
            type Output = $crate::value::Value;
            fn $method(self, rhs: $crate::value::Value) -> Self::Output {
                $op_fn(&$crate::value::Value::new(self), &rhs)
            }
        }

        impl std::ops::$trait<&$crate::value::Value> for f64 {
            type Output = $crate::value::Value;
            fn $method(self, rhs: &$crate::value::Value) -> Self::Output {
                $op_fn(&$crate::value::Value::new(self), rhs)
            }
        }
    };
}

pub mod arithmetic;
pub mod math_elem;
pub mod reduction;

pub use arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, powf_op, sub_op};
pub use math_elem::{exp_op, tanh_op};
pub use reduction::sum_op;
