use crate::value::NodeId;
use thiserror::Error;

/// Custom error type for the ZenGrad engine.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum ZenGradError {
    /// The exponent given to `pow` could not be used as a plain `f64` constant.
    #[error("Unsupported exponent type: {type_name} cannot be used as a constant f64 exponent")]
    UnsupportedExponentType { type_name: String },

    #[error("Non-finite result {value} produced by operation '{op}'")]
    NonFiniteResult { op: String, value: f64 },

    #[error("Cycle detected in the computation graph at node {node:?} during backward pass.")]
    CyclicGraph { node: NodeId },

    #[error("Cannot build an evaluation order from an empty set of roots")]
    EmptyGraph,

    #[error("Length mismatch in {context}: expected {expected}, got {actual}")]
    ShapeMismatch {
        expected: usize,
        actual: usize,
        context: String,
    },

    #[error("Invalid hyperparameter '{name}': {value}")]
    InvalidHyperparameter { name: String, value: f64 },
}
