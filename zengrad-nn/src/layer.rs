use crate::module::{prefixed, Module};
use crate::neuron::Neuron;
use rand::Rng;
use zengrad_core::{Value, ZenGradError};

/// A fully connected layer: `nout` neurons reading the same `nin` inputs.
#[derive(Debug, Clone)]
pub struct Layer {
    neurons: Vec<Neuron>,
}

impl Layer {
    pub fn new<R: Rng + ?Sized>(nin: usize, nout: usize, rng: &mut R) -> Self {
        let neurons = (0..nout).map(|_| Neuron::new(nin, &mut *rng)).collect();
        Layer { neurons }
    }

    /// Builds a layer from existing neurons, which must all take the same
    /// number of inputs.
    pub fn from_neurons(neurons: Vec<Neuron>) -> Result<Self, ZenGradError> {
        if let Some(first) = neurons.first() {
            let nin = first.nin();
            if let Some(bad) = neurons.iter().find(|n| n.nin() != nin) {
                return Err(ZenGradError::ShapeMismatch {
                    expected: nin,
                    actual: bad.nin(),
                    context: "Layer::from_neurons fan-in".to_string(),
                });
            }
        }
        Ok(Layer { neurons })
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    pub fn nout(&self) -> usize {
        self.neurons.len()
    }

    /// One output per neuron, in neuron order.
    pub fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ZenGradError> {
        self.neurons.iter().map(|n| n.forward(inputs)).collect()
    }
}

impl Module for Layer {
    fn parameters(&self) -> Vec<Value> {
        self.neurons.iter().flat_map(Module::parameters).collect()
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        self.neurons
            .iter()
            .enumerate()
            .flat_map(|(i, n)| prefixed(&format!("neurons.{}", i), n.named_parameters()))
            .collect()
    }
}

#[cfg(test)]
#[path = "layer_test.rs"]
mod tests;
