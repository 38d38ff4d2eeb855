use crate::maximum_flow::path::AugmentingPath;
use crate::maximum_flow::residual::ResidualGraph;
use num_traits::NumAssign;
use std::collections::VecDeque;

/// Plain BFS for one fewest-hops augmenting path, with no level restriction and no pointers.
#[derive(Default, Debug)]
pub struct ShortestPath {
    prev: Vec<usize>,
    visited: Vec<bool>,
    que: VecDeque<usize>,
}

impl ShortestPath {
    pub fn find<Flow>(&mut self, residual: &ResidualGraph<Flow>, source: usize, sink: usize) -> Option<AugmentingPath<Flow>>
    where
        Flow: NumAssign + PartialOrd + Copy,
    {
        self.prev.clear();
        self.prev.resize(residual.num_nodes(), usize::MAX);
        self.visited.clear();
        self.visited.resize(residual.num_nodes(), false);
        self.que.clear();

        self.visited[source] = true;
        self.que.push_back(source);
        while let Some(u) = self.que.pop_front() {
            if u == sink {
                break;
            }

            for i in residual.arc_range(u) {
                let v = residual.arc(i).to;
                if self.visited[v] || !(residual.arc_residual(i) > Flow::zero()) {
                    continue;
                }

                self.visited[v] = true;
                self.prev[v] = i;
                self.que.push_back(v);
            }
        }

        if !self.visited[sink] {
            return None;
        }

        let mut arcs = Vec::new();
        let mut v = sink;
        while v != source {
            let i = self.prev[v];
            arcs.push(i);
            v = residual.arc(i).from;
        }
        arcs.reverse();

        Some(AugmentingPath::new(residual, arcs))
    }
}
