// src/value/mod.rs

use crate::autograd::BackwardOp;
use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};

pub mod accessors;
pub mod autograd;
pub mod debug;

static NEXT_NODE_ID: AtomicUsize = AtomicUsize::new(0);

/// Identity of a node in the computation graph.
///
/// Ids are handed out from a process-wide counter, so two nodes never share one
/// even when they hold the same numeric `data`. Every visited set and map in the
/// engine is keyed by `NodeId`, never by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    fn next() -> Self {
        NodeId(NEXT_NODE_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw integer behind the id.
    pub fn as_usize(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// Which operation produced a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpKind {
    Leaf,
    Add,
    Mul,
    Pow,
    Tanh,
    Exp,
}

/// Shared state behind a [`Value`] handle.
#[derive(Debug)]
pub(crate) struct ValueData {
    pub(crate) id: NodeId,
    pub(crate) data: f64,
    pub(crate) grad: f64,
    pub(crate) grad_fn: BackwardOp,
    pub(crate) label: Option<String>,
}

// Unlinks the operand chain iteratively. Letting each node drop its operands
// in turn recurses once per node and overflows the stack on deep graphs.
impl Drop for ValueData {
    fn drop(&mut self) {
        let mut pending = std::mem::replace(&mut self.grad_fn, BackwardOp::Leaf).into_inputs();
        while let Some(value) = pending.pop() {
            if Rc::strong_count(&value.node) != 1 {
                continue;
            }
            if let Ok(mut inner) = value.node.try_borrow_mut() {
                let grad_fn = std::mem::replace(&mut inner.grad_fn, BackwardOp::Leaf);
                pending.extend(grad_fn.into_inputs());
            }
        }
    }
}

/// A scalar node of the computation graph.
///
/// `Value` is a cheap handle: cloning it clones the `Rc`, not the node, so the
/// clone refers to the same graph vertex. A node keeps its operands alive
/// through the handles stored in its [`BackwardOp`], which means the whole
/// graph reachable from a terminal lives exactly as long as some handle to it.
///
/// `Value` is neither `Send` nor `Sync`; the backward pass mutates gradients
/// on shared operands and is strictly single-threaded.
pub struct Value {
    pub(crate) node: Rc<RefCell<ValueData>>,
}

impl Value {
    /// Creates a leaf node holding `data`, with a zero gradient.
    pub fn new(data: f64) -> Self {
        Self::build(data, BackwardOp::Leaf, None)
    }

    /// Creates a leaf node carrying a debug label.
    pub fn with_label(data: f64, label: impl Into<String>) -> Self {
        Self::build(data, BackwardOp::Leaf, Some(label.into()))
    }

    /// Creates the output node of an operation.
    ///
    /// Non-finite forward results are kept (they poison downstream values the
    /// same way IEEE arithmetic does) but reported through the log.
    pub(crate) fn from_op(data: f64, grad_fn: BackwardOp) -> Self {
        if !data.is_finite() {
            log::warn!(
                "Operation '{}' produced a non-finite value: {}",
                grad_fn.tag(),
                data
            );
        }
        Self::build(data, grad_fn, None)
    }

    fn build(data: f64, grad_fn: BackwardOp, label: Option<String>) -> Self {
        let inner = ValueData {
            id: NodeId::next(),
            data,
            grad: 0.0,
            grad_fn,
            label,
        };
        Value {
            node: Rc::new(RefCell::new(inner)),
        }
    }

    pub(crate) fn read_data(&self) -> Ref<'_, ValueData> {
        self.node.borrow()
    }

    pub(crate) fn write_data(&self) -> RefMut<'_, ValueData> {
        self.node.borrow_mut()
    }

    /// Adds `delta` into this node's gradient.
    pub(crate) fn accumulate_grad(&self, delta: f64) {
        self.write_data().grad += delta;
    }
}

// Manual implementation: a clone is another handle to the same node.
impl Clone for Value {
    fn clone(&self) -> Self {
        Value {
            node: Rc::clone(&self.node),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

impl From<f64> for Value {
    fn from(data: f64) -> Self {
        Value::new(data)
    }
}

impl From<f32> for Value {
    fn from(data: f32) -> Self {
        Value::new(f64::from(data))
    }
}

#[cfg(test)]
#[path = "value_test.rs"]
mod tests;
