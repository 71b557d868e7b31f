use crate::error::ZenGradError;
use crate::value::Value;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical_grad} != numerical grad {numerical_grad}. Difference: {difference}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },

    #[error("Numerical gradient is NaN or infinite for input {input_index}. Loss+: {loss_plus}, Loss-: {loss_minus}")]
    NumericalGradNonFinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value}")]
    AnalyticalGradNonFinite { input_index: usize, value: f64 },

    #[error("Forward function execution failed during gradient check: {0}")]
    Forward(ZenGradError),

    #[error("Backward pass execution failed during gradient check: {0}")]
    Backward(ZenGradError),
}

/// Checks analytical gradients against central finite differences.
///
/// `func` is evaluated once on fresh leaves holding `inputs` and
/// back-propagated, then twice more per input with that input shifted by
/// `±epsilon`. The two gradients agree when
/// `|analytical - numerical| <= tolerance * (1 + max(|analytical|, |numerical|))`.
///
/// Returns the analytical gradients on success.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<Vec<f64>, GradCheckError>
where
    F: Fn(&[Value]) -> Result<Value, ZenGradError>,
{
    let leaves: Vec<Value> = inputs.iter().copied().map(Value::new).collect();
    let output = func(&leaves).map_err(GradCheckError::Forward)?;
    output.backward().map_err(GradCheckError::Backward)?;
    let analytical: Vec<f64> = leaves.iter().map(Value::grad).collect();

    let evaluate = |shifted: &[f64]| -> Result<f64, GradCheckError> {
        let leaves: Vec<Value> = shifted.iter().copied().map(Value::new).collect();
        func(&leaves).map(|v| v.data()).map_err(GradCheckError::Forward)
    };

    for (i, &analytical_grad) in analytical.iter().enumerate() {
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNonFinite {
                input_index: i,
                value: analytical_grad,
            });
        }
        let mut plus = inputs.to_vec();
        plus[i] += epsilon;
        let mut minus = inputs.to_vec();
        minus[i] -= epsilon;

        let loss_plus = evaluate(&plus)?;
        let loss_minus = evaluate(&minus)?;
        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);
        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNonFinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }

        let difference = (analytical_grad - numerical_grad).abs();
        let scale = 1.0 + analytical_grad.abs().max(numerical_grad.abs());
        if difference > tolerance * scale {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad,
                difference,
            });
        }
        log::trace!(
            "grad check input {}: analytical={} numerical={}",
            i,
            analytical_grad,
            numerical_grad
        );
    }
    Ok(analytical)
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
