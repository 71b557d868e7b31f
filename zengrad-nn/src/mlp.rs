use crate::layer::Layer;
use crate::module::{prefixed, Module};
use rand::Rng;
use zengrad_core::{Value, ZenGradError};

/// A multi-layer perceptron: layers applied in sequence, each feeding its
/// outputs to the next.
#[derive(Debug, Clone)]
pub struct Mlp {
    layers: Vec<Layer>,
}

impl Mlp {
    /// Creates a network with `nin` inputs and one layer per entry of `nouts`.
    ///
    /// `Mlp::new(2, &[4, 4, 1], rng)` is `2 -> 4 -> 4 -> 1`.
    pub fn new<R: Rng + ?Sized>(nin: usize, nouts: &[usize], rng: &mut R) -> Self {
        let mut sizes = Vec::with_capacity(nouts.len() + 1);
        sizes.push(nin);
        sizes.extend_from_slice(nouts);
        let layers = sizes
            .windows(2)
            .map(|pair| Layer::new(pair[0], pair[1], &mut *rng))
            .collect();
        log::debug!("Mlp::new sizes={:?}", sizes);
        Mlp { layers }
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ZenGradError> {
        let mut x = inputs.to_vec();
        for layer in &self.layers {
            x = layer.forward(&x)?;
        }
        Ok(x)
    }

    /// Forward pass for a network with exactly one output.
    pub fn forward_scalar(&self, inputs: &[Value]) -> Result<Value, ZenGradError> {
        let mut outputs = self.forward(inputs)?;
        if outputs.len() != 1 {
            return Err(ZenGradError::ShapeMismatch {
                expected: 1,
                actual: outputs.len(),
                context: "Mlp::forward_scalar outputs".to_string(),
            });
        }
        Ok(outputs.remove(0))
    }
}

impl Module for Mlp {
    fn parameters(&self) -> Vec<Value> {
        self.layers.iter().flat_map(Module::parameters).collect()
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        self.layers
            .iter()
            .enumerate()
            .flat_map(|(i, l)| prefixed(&format!("layers.{}", i), l.named_parameters()))
            .collect()
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
