use zengrad_core::Value;

/// The base trait for all network components (neurons, layers, networks).
pub trait Module {
    /// Returns handles to every learnable parameter, sub-modules included.
    ///
    /// The handles share state with the module: updating their `data` updates
    /// the module.
    fn parameters(&self) -> Vec<Value>;

    /// Returns every parameter with a hierarchical name such as
    /// `"layers.0.neurons.1.w.2"`.
    fn named_parameters(&self) -> Vec<(String, Value)>;

    /// Resets the gradient of every parameter to zero.
    ///
    /// `Value::backward` accumulates into leaf gradients, so this must run
    /// between training steps.
    fn zero_grad(&self) {
        for p in self.parameters() {
            p.zero_grad();
        }
    }

    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }
}

/// Prefixes each name with `prefix.`.
pub(crate) fn prefixed(prefix: &str, named: Vec<(String, Value)>) -> Vec<(String, Value)> {
    named
        .into_iter()
        .map(|(name, value)| (format!("{}.{}", prefix, name), value))
        .collect()
}
