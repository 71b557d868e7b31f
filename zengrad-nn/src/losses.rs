use zengrad_core::ops::sum_op;
use zengrad_core::{Value, ZenGradError};

/// Sum (not mean) of squared errors, `Σ (pred - target)²`.
///
/// Targets are plain numbers; each one becomes a constant leaf.
///
/// # Errors
/// [`ZenGradError::ShapeMismatch`] if the two slices differ in length.
pub fn squared_error_loss(
    predictions: &[Value],
    targets: &[f64],
) -> Result<Value, ZenGradError> {
    if predictions.len() != targets.len() {
        return Err(ZenGradError::ShapeMismatch {
            expected: predictions.len(),
            actual: targets.len(),
            context: "squared_error_loss targets".to_string(),
        });
    }
    let squared: Vec<Value> = predictions
        .iter()
        .zip(targets)
        .map(|(pred, &target)| (pred - target).powi(2))
        .collect();
    Ok(sum_op(&Value::new(0.0), &squared))
}

#[cfg(test)]
#[path = "losses_test.rs"]
mod tests;
