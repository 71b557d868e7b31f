// src/autograd/backward_op.rs

use crate::value::{OpKind, Value};

/// Gradient rule of a node, tagged by the operation that produced it.
///
/// Each variant holds handles to its operands plus whatever forward-pass
/// quantity the rule needs (the constant exponent of `Pow`, the output `t` of
/// `Tanh`). During the backward pass, [`BackwardOp::propagate`] adds this
/// node's contribution into each operand's gradient:
///
/// \\[ \frac{dL}{d\text{input}} \mathrel{+}= \frac{dL}{d\text{out}} \cdot \frac{d\text{out}}{d\text{input}} \\]
///
/// The rule accumulates (`+=`) instead of assigning so that an operand used by
/// several consumers, or twice by the same one, receives the sum of every
/// contribution.
#[derive(Debug, Clone)]
pub enum BackwardOp {
    /// Created directly from a scalar; nothing to propagate.
    Leaf,
    Add { lhs: Value, rhs: Value },
    Mul { lhs: Value, rhs: Value },
    Pow { base: Value, exponent: f64 },
    Tanh { input: Value, output: f64 },
    Exp { input: Value },
}

impl BackwardOp {
    pub fn kind(&self) -> OpKind {
        match self {
            BackwardOp::Leaf => OpKind::Leaf,
            BackwardOp::Add { .. } => OpKind::Add,
            BackwardOp::Mul { .. } => OpKind::Mul,
            BackwardOp::Pow { .. } => OpKind::Pow,
            BackwardOp::Tanh { .. } => OpKind::Tanh,
            BackwardOp::Exp { .. } => OpKind::Exp,
        }
    }

    pub fn tag(&self) -> String {
        match self {
            BackwardOp::Leaf => String::new(),
            BackwardOp::Add { .. } => "+".to_string(),
            BackwardOp::Mul { .. } => "*".to_string(),
            BackwardOp::Pow { exponent, .. } => format!("**{}", exponent),
            BackwardOp::Tanh { .. } => "tanh".to_string(),
            BackwardOp::Exp { .. } => "exp".to_string(),
        }
    }

    /// Operands in argument order. May contain the same node twice (`a * a`).
    pub fn inputs(&self) -> Vec<&Value> {
        match self {
            BackwardOp::Leaf => Vec::new(),
            BackwardOp::Add { lhs, rhs } | BackwardOp::Mul { lhs, rhs } => vec![lhs, rhs],
            BackwardOp::Pow { base, .. } => vec![base],
            BackwardOp::Tanh { input, .. } | BackwardOp::Exp { input } => vec![input],
        }
    }

    /// Consumes the rule, returning its operand handles.
    pub(crate) fn into_inputs(self) -> Vec<Value> {
        match self {
            BackwardOp::Leaf => Vec::new(),
            BackwardOp::Add { lhs, rhs } | BackwardOp::Mul { lhs, rhs } => vec![lhs, rhs],
            BackwardOp::Pow { base, .. } => vec![base],
            BackwardOp::Tanh { input, .. } | BackwardOp::Exp { input } => vec![input],
        }
    }

    /// Distributes `out_grad` (dL/dOut) of the node holding this rule into its
    /// operands. `out_data` is that node's forward value.
    pub(crate) fn propagate(&self, out_data: f64, out_grad: f64) {
        match self {
            BackwardOp::Leaf => {}
            BackwardOp::Add { lhs, rhs } => {
                lhs.accumulate_grad(out_grad);
                rhs.accumulate_grad(out_grad);
            }
            BackwardOp::Mul { lhs, rhs } => {
                // Read both before writing: lhs and rhs may be the same node.
                let (a, b) = (lhs.data(), rhs.data());
                lhs.accumulate_grad(b * out_grad);
                rhs.accumulate_grad(a * out_grad);
            }
            BackwardOp::Pow { base, exponent } => {
                let x = base.data();
                base.accumulate_grad(exponent * x.powf(exponent - 1.0) * out_grad);
            }
            BackwardOp::Tanh { input, output } => {
                input.accumulate_grad((1.0 - output * output) * out_grad);
            }
            BackwardOp::Exp { input } => {
                input.accumulate_grad(out_data * out_grad);
            }
        }
    }
}
