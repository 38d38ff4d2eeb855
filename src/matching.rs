//! Maximum bipartite matching as a unit-capacity flow problem solved by Dinic.

use crate::error::FlowError;
use crate::maximum_flow::dinic::Dinic;
use crate::maximum_flow::graph::Graph;
use crate::maximum_flow::MaximumFlowSolver;
use log::debug;

/// Builds `source -> left -> right -> sink` with unit capacities and returns the matched
/// `(left, right)` pairs, sorted by left vertex.
pub fn maximum_bipartite_matching(num_left: usize, num_right: usize, pairs: &[(usize, usize)]) -> Result<Vec<(usize, usize)>, FlowError> {
    let mut graph = Graph::<i64>::default();
    let source = graph.add_node();
    let left = graph.add_nodes(num_left);
    let right = graph.add_nodes(num_right);
    let sink = graph.add_node();

    for &u in left.iter() {
        graph.add_directed_edge(source, u, 1)?;
    }
    for &v in right.iter() {
        graph.add_directed_edge(v, sink, 1)?;
    }

    let mut pair_edges = Vec::with_capacity(pairs.len());
    for &(l, r) in pairs {
        if l >= num_left {
            return Err(FlowError::NodeOutOfRange { node: l, num_nodes: num_left });
        }
        if r >= num_right {
            return Err(FlowError::NodeOutOfRange { node: r, num_nodes: num_right });
        }
        pair_edges.push((graph.add_directed_edge(left[l], right[r], 1)?, l, r));
    }

    let result = Dinic::default().solve(source, sink, &mut graph)?;
    debug!("bipartite matching of size {} found in {} phases", result.value, result.rounds);

    let mut matching: Vec<(usize, usize)> = pair_edges.into_iter().filter(|&(edge_id, _, _)| graph.edges[edge_id].flow > 0).map(|(_, l, r)| (l, r)).collect();
    matching.sort();
    Ok(matching)
}
