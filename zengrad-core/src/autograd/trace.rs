use crate::autograd::graph::ComputationGraph;
use crate::error::ZenGradError;
use crate::value::Value;
use std::fmt::{self, Write};

/// Layout direction of a rendered graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RankDir {
    #[default]
    LeftRight,
    TopBottom,
}

impl RankDir {
    fn as_dot(self) -> &'static str {
        match self {
            RankDir::LeftRight => "LR",
            RankDir::TopBottom => "TB",
        }
    }
}

/// Collects the nodes reachable from `root` and the `(operand, consumer)`
/// edges between them.
///
/// Nodes come back in topological order (operands first, `root` last). An
/// operand used twice by the same consumer yields a single edge.
pub fn trace(root: &Value) -> Result<(Vec<Value>, Vec<(Value, Value)>), ZenGradError> {
    let nodes = ComputationGraph::build(std::slice::from_ref(root))?.into_order();
    let edges = nodes
        .iter()
        .flat_map(|consumer| {
            consumer
                .operands()
                .into_iter()
                .map(move |operand| (operand, consumer.clone()))
        })
        .collect();
    Ok((nodes, edges))
}

/// Renders the graph under `root` as Graphviz DOT source.
///
/// Each node is a record `{ label | data | grad }`. A node produced by an
/// operation gets an extra small node carrying the op tag, with operands
/// pointing at the op node and the op node pointing at its result.
pub fn to_dot(root: &Value, rankdir: RankDir) -> Result<String, ZenGradError> {
    let (nodes, edges) = trace(root)?;
    let mut out = String::new();
    // fmt::Write for String never returns an error.
    if write_dot(&mut out, &nodes, &edges, rankdir).is_err() {
        log::error!("to_dot: formatting into a String failed");
    }
    Ok(out)
}

fn write_dot(
    out: &mut String,
    nodes: &[Value],
    edges: &[(Value, Value)],
    rankdir: RankDir,
) -> fmt::Result {
    writeln!(out, "digraph {{")?;
    writeln!(out, "    graph [rankdir={}];", rankdir.as_dot())?;
    for node in nodes {
        let id = node.id();
        let label = node.label().unwrap_or_default();
        writeln!(
            out,
            "    \"{}\" [label=\"{{ {} | data {:.4} | grad {:.4} }}\", shape=record];",
            id,
            escape_record(&label),
            node.data(),
            node.grad()
        )?;
        let tag = node.op_tag();
        if !tag.is_empty() {
            writeln!(out, "    \"{}{}\" [label=\"{}\"];", id, tag, escape_record(&tag))?;
            writeln!(out, "    \"{}{}\" -> \"{}\";", id, tag, id)?;
        }
    }
    for (operand, consumer) in edges {
        writeln!(
            out,
            "    \"{}\" -> \"{}{}\";",
            operand.id(),
            consumer.id(),
            consumer.op_tag()
        )?;
    }
    writeln!(out, "}}")
}

fn escape_record(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '"' | '{' | '}' | '|' | '<' | '>' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
#[path = "trace_test.rs"]
mod tests;
