// zengrad-core/src/ops/arithmetic/pow.rs

use crate::autograd::BackwardOp;
use crate::error::ZenGradError;
use crate::value::Value;
use num_traits::ToPrimitive;

/// Raises a node to a constant power: `out = base^k`.
///
/// The exponent is any number convertible to `f64`. Graph nodes are not
/// accepted as exponents (`Value` does not implement `ToPrimitive`).
///
/// # Errors
/// [`ZenGradError::UnsupportedExponentType`] if `exponent` has no `f64`
/// representation.
pub fn pow_op<E>(base: &Value, exponent: E) -> Result<Value, ZenGradError>
where
    E: ToPrimitive,
{
    let k = exponent
        .to_f64()
        .ok_or_else(|| ZenGradError::UnsupportedExponentType {
            type_name: std::any::type_name::<E>().to_string(),
        })?;
    Ok(powf_op(base, k))
}

/// Infallible form of [`pow_op`] for an `f64` exponent.
///
/// Backward: `base.grad += k * base^(k-1) * g`. A zero base with a negative
/// exponent, or a negative base with a fractional one, gives non-finite
/// values rather than an error.
pub fn powf_op(base: &Value, exponent: f64) -> Value {
    let data = base.data().powf(exponent);
    Value::from_op(
        data,
        BackwardOp::Pow {
            base: base.clone(),
            exponent,
        },
    )
}

impl Value {
    /// See [`pow_op`].
    pub fn pow<E: ToPrimitive>(&self, exponent: E) -> Result<Value, ZenGradError> {
        pow_op(self, exponent)
    }

    pub fn powf(&self, exponent: f64) -> Value {
        powf_op(self, exponent)
    }

    pub fn powi(&self, exponent: i32) -> Value {
        powf_op(self, f64::from(exponent))
    }
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
