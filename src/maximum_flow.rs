pub mod blocking_flow;
pub mod config;
pub mod dinic;
pub mod edmonds_karp;
pub mod graph;
pub mod level_graph;
pub mod observer;
pub mod path;
pub mod residual;
pub mod shortest_path;
pub mod status;

use crate::error::FlowError;
use crate::maximum_flow::graph::Graph;
use crate::maximum_flow::observer::{FlowObserver, NoObserver};
use crate::maximum_flow::status::MaxFlow;

/// A strategy that computes a maximum `source`-`sink` flow and writes it back into the graph.
pub trait MaximumFlowSolver<Flow> {
    fn solve_with<O>(&mut self, source: usize, sink: usize, graph: &mut Graph<Flow>, observer: &mut O) -> Result<MaxFlow<Flow>, FlowError>
    where
        O: FlowObserver<Flow>;

    fn solve(&mut self, source: usize, sink: usize, graph: &mut Graph<Flow>) -> Result<MaxFlow<Flow>, FlowError> {
        self.solve_with(source, sink, graph, &mut NoObserver)
    }
}

// f64 is only PartialOrd
#[inline]
pub(crate) fn min<Flow: PartialOrd>(a: Flow, b: Flow) -> Flow {
    if b < a {
        b
    } else {
        a
    }
}
