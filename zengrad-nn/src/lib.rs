//! # zengrad-nn
//!
//! Small neural-network building blocks on top of `zengrad-core`: tanh
//! neurons, fully connected layers, multi-layer perceptrons, a squared-error
//! loss and plain gradient descent.
//!
//! Parameters are ordinary [`Value`](zengrad_core::Value) leaves. A training
//! step is: build the loss, zero the gradients, call `backward()`, then let an
//! [`Optimizer`] update the parameters.

pub mod layer;
pub mod losses;
pub mod mlp;
pub mod module;
pub mod neuron;
pub mod optim;

pub use layer::Layer;
pub use losses::squared_error_loss;
pub use mlp::Mlp;
pub use module::Module;
pub use neuron::Neuron;
pub use optim::{Optimizer, Sgd};
