mod common;

use std::collections::{HashMap, HashSet};
use zengrad_core::autograd::ComputationGraph;
use zengrad_core::{NodeId, Value, ZenGradError};

/// Every node exactly once, every operand strictly before its consumer.
fn assert_valid_order(order: &[Value]) {
    let positions: HashMap<NodeId, usize> = order
        .iter()
        .enumerate()
        .map(|(i, v)| (v.id(), i))
        .collect();
    assert_eq!(positions.len(), order.len(), "node emitted more than once");

    for (i, node) in order.iter().enumerate() {
        for operand in node.operands() {
            let pos = positions
                .get(&operand.id())
                .unwrap_or_else(|| panic!("operand {} missing from order", operand.id()));
            assert!(*pos < i, "operand {} after consumer {}", operand.id(), node.id());
        }
    }
}

fn mlp_like_graph() -> (Vec<Value>, Value) {
    let inputs: Vec<Value> = (0..3).map(|i| Value::new(i as f64 * 0.5 - 0.5)).collect();
    let mut hidden = Vec::new();
    for j in 0..4 {
        let bias = Value::new(0.1 * j as f64);
        let act: Value = inputs
            .iter()
            .enumerate()
            .map(|(i, x)| x * Value::new(((i + j) as f64).sin()))
            .fold(bias, |acc, term| acc + term);
        hidden.push(act.tanh());
    }
    let out: Value = hidden.iter().sum();
    (inputs, out)
}

#[test]
fn order_is_valid_for_layered_graph() -> Result<(), ZenGradError> {
    common::init_logger();
    let (inputs, out) = mlp_like_graph();
    let order = out.topological_order()?;
    assert_valid_order(&order);
    assert_eq!(order.last(), Some(&out));
    for x in &inputs {
        assert!(order.contains(x));
    }
    Ok(())
}

#[test]
fn order_is_valid_for_diamonds_and_reused_leaves() -> Result<(), ZenGradError> {
    let x = Value::new(2.0);
    let y = &x + &x;
    let z = &y * &y;
    let w = (&z + &x).exp() / &y;
    let order = w.topological_order()?;
    assert_valid_order(&order);

    let ids: HashSet<NodeId> = order.iter().map(Value::id).collect();
    assert!(ids.contains(&x.id()));
    assert!(ids.contains(&y.id()));
    assert!(ids.contains(&z.id()));
    Ok(())
}

#[test]
fn order_is_deterministic() -> Result<(), ZenGradError> {
    let (_, out) = mlp_like_graph();
    let first: Vec<NodeId> = out.topological_order()?.iter().map(Value::id).collect();
    let second: Vec<NodeId> = out.topological_order()?.iter().map(Value::id).collect();
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn numerically_equal_nodes_are_all_visited() -> Result<(), ZenGradError> {
    let ones: Vec<Value> = (0..5).map(|_| Value::new(1.0)).collect();
    let total: Value = ones.iter().sum();
    let order = total.topological_order()?;
    for one in &ones {
        assert_eq!(order.iter().filter(|v| *v == one).count(), 1);
    }
    total.backward()?;
    assert!(ones.iter().all(|v| v.grad() == 1.0));
    Ok(())
}

#[test]
fn multi_root_graph_shares_nodes() -> Result<(), ZenGradError> {
    let w = Value::new(0.3);
    let a = &w * 2.0;
    let b = w.tanh();
    let graph = ComputationGraph::build(&[a.clone(), b.clone()])?;
    assert_valid_order(graph.order());
    assert_eq!(graph.order().iter().filter(|v| **v == w).count(), 1);
    assert!(matches!(
        ComputationGraph::build(&[]),
        Err(ZenGradError::EmptyGraph)
    ));
    Ok(())
}
