// src/value/autograd.rs

use super::Value;
use crate::autograd::graph::ComputationGraph;
use crate::error::ZenGradError;

impl Value {
    /// Computes the gradient of this node with respect to every node it
    /// depends on.
    ///
    /// Seeds `self.grad` with 1.0 and replays each reachable node's gradient
    /// rule once, consumers before operands.
    ///
    /// Interior (non-leaf) nodes hold the gradient of the current pass only:
    /// they are cleared before the replay. Leaves are never cleared, so their
    /// gradients accumulate across calls: calling `backward` twice without
    /// zeroing doubles every leaf gradient. Nodes outside the reachable set are
    /// left untouched. Zeroing parameters between training steps is the
    /// caller's job.
    ///
    /// # Errors
    /// [`ZenGradError::CyclicGraph`] if the operand relation is not acyclic.
    pub fn backward(&self) -> Result<(), ZenGradError> {
        let graph = ComputationGraph::build(std::slice::from_ref(self))?;
        log::debug!(
            "backward() from {} over {} nodes",
            self.id(),
            graph.len()
        );

        graph.clear_interior_grads();
        self.set_grad(1.0);
        graph.replay();

        let non_finite = graph
            .order()
            .iter()
            .filter(|node| !node.grad().is_finite())
            .count();
        if non_finite > 0 {
            log::warn!(
                "backward() from {} left {} node(s) with a non-finite gradient",
                self.id(),
                non_finite
            );
        }
        Ok(())
    }

    /// Returns every node reachable from this one, each exactly once, with
    /// all operands of a node placed before the node itself. The last entry
    /// is `self`.
    pub fn topological_order(&self) -> Result<Vec<Value>, ZenGradError> {
        ComputationGraph::build(std::slice::from_ref(self)).map(ComputationGraph::into_order)
    }
}
