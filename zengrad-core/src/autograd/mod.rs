//! Reverse-mode machinery: per-node gradient rules, graph linearization and
//! the backward replay, plus tracing and numerical gradient checking helpers.

pub mod backward_op;
pub mod grad_check;
pub mod graph;
pub mod trace;

pub use backward_op::BackwardOp;
pub use grad_check::{check_grad, GradCheckError};
pub use graph::ComputationGraph;
pub use trace::{to_dot, trace, RankDir};
