// src/value/accessors.rs

use super::{NodeId, OpKind, Value};
use crate::error::ZenGradError;
use std::collections::HashSet;

impl Value {
    /// Returns the identity of this node.
    pub fn id(&self) -> NodeId {
        self.read_data().id
    }

    /// Returns the forward value.
    pub fn data(&self) -> f64 {
        self.read_data().data
    }

    /// Overwrites the forward value.
    ///
    /// Meant for parameter updates between training steps. Nodes computed from
    /// this one keep their old `data`; rebuild the expression to see the change.
    pub fn set_data(&self, data: f64) {
        self.write_data().data = data;
    }

    /// Returns the accumulated gradient of the last backward pass(es).
    pub fn grad(&self) -> f64 {
        self.read_data().grad
    }

    pub fn set_grad(&self, grad: f64) {
        self.write_data().grad = grad;
    }

    /// Resets the gradient of this node to zero.
    pub fn zero_grad(&self) {
        self.write_data().grad = 0.0;
    }

    pub fn label(&self) -> Option<String> {
        self.read_data().label.clone()
    }

    pub fn set_label(&self, label: impl Into<String>) {
        self.write_data().label = Some(label.into());
    }

    /// Returns which operation produced this node.
    pub fn op(&self) -> OpKind {
        self.read_data().grad_fn.kind()
    }

    /// Short diagnostic tag of the producing operation (`"+"`, `"*"`, `"**2"`,
    /// `"tanh"`, `"exp"`), empty for leaves.
    pub fn op_tag(&self) -> String {
        self.read_data().grad_fn.tag()
    }

    pub fn is_leaf(&self) -> bool {
        self.op() == OpKind::Leaf
    }

    /// Returns the distinct operands this node was computed from.
    ///
    /// `a * a` has a single operand `a`. The order follows the operation's
    /// argument order with duplicates removed by identity.
    pub fn operands(&self) -> Vec<Value> {
        let guard = self.read_data();
        let mut seen = HashSet::new();
        guard
            .grad_fn
            .inputs()
            .into_iter()
            .filter(|input| seen.insert(input.id()))
            .cloned()
            .collect()
    }

    /// Fails with [`ZenGradError::NonFiniteResult`] when `data` is NaN or infinite.
    pub fn ensure_finite(&self) -> Result<(), ZenGradError> {
        let guard = self.read_data();
        if guard.data.is_finite() {
            Ok(())
        } else {
            let op = match guard.grad_fn.tag() {
                tag if tag.is_empty() => "leaf".to_string(),
                tag => tag,
            };
            Err(ZenGradError::NonFiniteResult {
                op,
                value: guard.data,
            })
        }
    }
}
