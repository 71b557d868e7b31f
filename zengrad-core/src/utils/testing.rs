use crate::value::Value;

/// Checks that `actual` is within `tolerance` of `expected`.
/// Panics with both values and the difference otherwise.
pub fn check_value_near(actual: f64, expected: f64, tolerance: f64) {
    let diff = (actual - expected).abs();
    if !(diff <= tolerance) {
        panic!(
            "Value mismatch: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            actual, expected, diff, tolerance
        );
    }
}

/// Checks the gradient of each node against its expected value.
pub fn check_grads_near(expected: &[(&Value, f64)], tolerance: f64) {
    for (i, (node, grad)) in expected.iter().enumerate() {
        let diff = (node.grad() - grad).abs();
        if !(diff <= tolerance) {
            panic!(
                "Gradient mismatch at entry {} ({:?}): actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i,
                node.label().unwrap_or_else(|| node.id().to_string()),
                node.grad(),
                grad,
                diff,
                tolerance
            );
        }
    }
}
