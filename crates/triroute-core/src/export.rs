//! Graphviz rendering of the combined graph

use petgraph::dot::Dot;
use petgraph::graph::DiGraph;

use crate::matrix::SquareMatrix;

/// Renders the combined matrix as a Graphviz DOT digraph.
///
/// Only finite off-diagonal entries become edges; poisoned or absent pairs
/// are simply omitted. Nodes are named by label when labels are available.
pub fn combined_to_dot(combined: &SquareMatrix, labels: Option<&[String]>) -> String {
    let dim = combined.dim();
    let mut graph: DiGraph<String, f64> = DiGraph::with_capacity(dim, dim * dim);

    let indices: Vec<_> = (0..dim)
        .map(|i| {
            let name = match labels {
                Some(labels) => labels[i].clone(),
                None => i.to_string(),
            };
            graph.add_node(name)
        })
        .collect();

    for i in 0..dim {
        for j in 0..dim {
            if i != j && combined.is_finite_at(i, j) {
                graph.add_edge(indices[i], indices[j], combined.get(i, j));
            }
        }
    }

    format!("{}", Dot::new(&graph))
}
