use zengrad_core::{Value, ZenGradError};

/// Trait defining the common interface for all optimizers.
///
/// Optimizers are responsible for updating parameters based on their gradients.
pub trait Optimizer {
    /// Performs a single optimization step using the parameters' current
    /// gradients.
    fn step(&mut self) -> Result<(), ZenGradError>;

    /// Clears the gradients of all parameters managed by the optimizer.
    ///
    /// `Value::backward` accumulates into parameter gradients, so this is
    /// called once per training iteration, before the backward pass.
    fn zero_grad(&mut self);

    /// The parameters managed by the optimizer.
    fn params(&self) -> &[Value];
}
