use crate::module::Module;
use rand::Rng;
use zengrad_core::ops::sum_op;
use zengrad_core::{Value, ZenGradError};

/// A single neuron: `tanh(w · x + b)`.
#[derive(Debug, Clone)]
pub struct Neuron {
    weights: Vec<Value>,
    bias: Value,
}

impl Neuron {
    /// Creates a neuron with `nin` inputs. Weights and bias are drawn
    /// uniformly from `[-1, 1)` using `rng`.
    pub fn new<R: Rng + ?Sized>(nin: usize, rng: &mut R) -> Self {
        let weights = (0..nin)
            .map(|i| Value::with_label(rng.gen_range(-1.0..1.0), format!("w{}", i)))
            .collect();
        let bias = Value::with_label(rng.gen_range(-1.0..1.0), "b");
        Neuron { weights, bias }
    }

    /// Creates a neuron with fixed weights and bias.
    pub fn from_parameters(weights: &[f64], bias: f64) -> Self {
        Neuron {
            weights: weights
                .iter()
                .enumerate()
                .map(|(i, &w)| Value::with_label(w, format!("w{}", i)))
                .collect(),
            bias: Value::with_label(bias, "b"),
        }
    }

    pub fn nin(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[Value] {
        &self.weights
    }

    pub fn bias(&self) -> &Value {
        &self.bias
    }

    /// Forward pass.
    ///
    /// # Errors
    /// [`ZenGradError::ShapeMismatch`] if `inputs.len() != self.nin()`.
    pub fn forward(&self, inputs: &[Value]) -> Result<Value, ZenGradError> {
        if inputs.len() != self.weights.len() {
            return Err(ZenGradError::ShapeMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
                context: "Neuron::forward inputs".to_string(),
            });
        }
        let products: Vec<Value> = self
            .weights
            .iter()
            .zip(inputs)
            .map(|(w, x)| w * x)
            .collect();
        let activation = sum_op(&self.bias, &products);
        Ok(activation.tanh())
    }
}

impl Module for Neuron {
    fn parameters(&self) -> Vec<Value> {
        let mut params = self.weights.clone();
        params.push(self.bias.clone());
        params
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        let mut named: Vec<(String, Value)> = self
            .weights
            .iter()
            .enumerate()
            .map(|(i, w)| (format!("w.{}", i), w.clone()))
            .collect();
        named.push(("b".to_string(), self.bias.clone()));
        named
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
