use crate::maximum_flow::level_graph::LevelGraph;
use crate::maximum_flow::path::AugmentingPath;
use crate::maximum_flow::residual::ResidualGraph;
use num_traits::NumAssign;

/// Depth-first search over the level graph with one arc pointer per node.
///
/// Pointers only move forward within a phase, so an arc that led to a dead end is never
/// tried again, and a node whose pointer runs out is removed from the level graph until
/// the next phase. The search keeps the partial path on an explicit arc stack.
#[derive(Default, Debug)]
pub struct BlockingFlow {
    current_edge: Vec<usize>,
    stack: Vec<usize>,
}

impl BlockingFlow {
    /// Rewinds every pointer. Called once at the start of a phase.
    pub fn reset<Flow>(&mut self, residual: &ResidualGraph<Flow>)
    where
        Flow: NumAssign + PartialOrd + Copy,
    {
        self.current_edge.clear();
        self.current_edge.extend((0..residual.num_nodes()).map(|u| residual.arc_range(u).start));
    }

    /// Next source-to-sink path of the level graph, or `None` once the phase's flow is blocking.
    /// The caller augments along the returned path before asking for another one.
    pub fn find_path<Flow>(&mut self, residual: &ResidualGraph<Flow>, level_graph: &mut LevelGraph, source: usize, sink: usize) -> Option<AugmentingPath<Flow>>
    where
        Flow: NumAssign + PartialOrd + Copy,
    {
        self.stack.clear();
        let mut u = source;
        loop {
            if u == sink {
                return Some(AugmentingPath::new(residual, self.stack.clone()));
            }

            let end = residual.arc_range(u).end;
            while self.current_edge[u] < end && !level_graph.is_admissible(residual, self.current_edge[u]) {
                self.current_edge[u] += 1;
            }

            // advance
            if self.current_edge[u] < end {
                let i = self.current_edge[u];
                self.stack.push(i);
                u = residual.arc(i).to;
                continue;
            }

            // retreat
            level_graph.prune(u);
            match self.stack.pop() {
                Some(i) => {
                    u = residual.arc(i).from;
                    self.current_edge[u] += 1;
                }
                None => return None,
            }
        }
    }

    /// Whether `u` ran out of arcs in the current phase.
    #[inline]
    pub fn is_exhausted<Flow>(&self, residual: &ResidualGraph<Flow>, u: usize) -> bool
    where
        Flow: NumAssign + PartialOrd + Copy,
    {
        self.current_edge[u] >= residual.arc_range(u).end
    }
}
