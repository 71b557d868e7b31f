use crate::error::ZenGradError;
use crate::value::{NodeId, Value};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    InProgress,
    Done,
}

struct Frame<N> {
    node: N,
    operands: Vec<N>,
    cursor: usize,
}

/// Depth-first post-order over the operand relation, starting from `roots`.
///
/// Every node is emitted once, after all of its operands. Revisits of finished
/// nodes are skipped; meeting a node that is still on the DFS stack means the
/// relation has a cycle. Uses an explicit stack so deep chains do not recurse.
pub(crate) fn post_order<N, I, O>(
    roots: &[N],
    id_of: I,
    operands_of: O,
) -> Result<Vec<N>, ZenGradError>
where
    N: Clone,
    I: Fn(&N) -> NodeId,
    O: Fn(&N) -> Vec<N>,
{
    if roots.is_empty() {
        return Err(ZenGradError::EmptyGraph);
    }

    let mut marks: HashMap<NodeId, Mark> = HashMap::new();
    let mut order = Vec::new();

    for root in roots {
        if marks.contains_key(&id_of(root)) {
            continue;
        }
        marks.insert(id_of(root), Mark::InProgress);
        let mut stack = vec![Frame {
            operands: operands_of(root),
            node: root.clone(),
            cursor: 0,
        }];

        loop {
            let next = match stack.last_mut() {
                Some(frame) => {
                    let child = frame.operands.get(frame.cursor).cloned();
                    frame.cursor += 1;
                    child
                }
                None => break,
            };

            match next {
                Some(child) => match marks.get(&id_of(&child)) {
                    Some(Mark::Done) => {}
                    Some(Mark::InProgress) => {
                        return Err(ZenGradError::CyclicGraph {
                            node: id_of(&child),
                        });
                    }
                    None => {
                        marks.insert(id_of(&child), Mark::InProgress);
                        stack.push(Frame {
                            operands: operands_of(&child),
                            node: child,
                            cursor: 0,
                        });
                    }
                },
                None => {
                    if let Some(frame) = stack.pop() {
                        marks.insert(id_of(&frame.node), Mark::Done);
                        order.push(frame.node);
                    }
                }
            }
        }
    }
    Ok(order)
}

/// The linearized graph reachable from one or more root nodes.
///
/// `order()` lists operands before their consumers; the backward pass walks it
/// in reverse so that a node's rule only runs once every consumer has added
/// its contribution into the node's gradient.
#[derive(Debug)]
pub struct ComputationGraph {
    order: Vec<Value>,
}

impl ComputationGraph {
    /// Builds the evaluation order for everything reachable from `roots`.
    ///
    /// # Errors
    /// * [`ZenGradError::EmptyGraph`] if `roots` is empty.
    /// * [`ZenGradError::CyclicGraph`] if the operand relation has a cycle.
    pub fn build(roots: &[Value]) -> Result<Self, ZenGradError> {
        let order = post_order(roots, Value::id, Value::operands)?;
        Ok(ComputationGraph { order })
    }

    pub fn order(&self) -> &[Value] {
        &self.order
    }

    pub fn into_order(self) -> Vec<Value> {
        self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Zeroes the gradient of every non-leaf node in the graph.
    pub(crate) fn clear_interior_grads(&self) {
        self.order
            .iter()
            .filter(|node| !node.is_leaf())
            .for_each(Value::zero_grad);
    }

    /// Runs every node's gradient rule once, in reverse emission order.
    /// The caller seeds the terminal's gradient beforehand.
    pub(crate) fn replay(&self) {
        for node in self.order.iter().rev() {
            let guard = node.read_data();
            log::trace!(
                "replay {} ({}) grad={}",
                guard.id,
                guard.grad_fn.tag(),
                guard.grad
            );
            guard.grad_fn.propagate(guard.data, guard.grad);
        }
    }
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
