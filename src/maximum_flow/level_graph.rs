use crate::maximum_flow::residual::ResidualGraph;
use num_traits::NumAssign;
use std::collections::VecDeque;

const UNREACHED: usize = usize::MAX;

/// BFS distances from the source over arcs with positive residual capacity.
/// Valid for one phase; rebuilt from scratch at the start of the next.
#[derive(Default, Debug, Clone)]
pub struct LevelGraph {
    levels: Vec<usize>,
    que: VecDeque<usize>,
}

impl LevelGraph {
    // O(n + m)
    // returns whether the sink was reached
    pub fn build<Flow>(&mut self, residual: &ResidualGraph<Flow>, source: usize, sink: usize) -> bool
    where
        Flow: NumAssign + PartialOrd + Copy,
    {
        self.levels.clear();
        self.levels.resize(residual.num_nodes(), UNREACHED);
        self.que.clear();

        self.levels[source] = 0;
        self.que.push_back(source);
        while let Some(u) = self.que.pop_front() {
            for i in residual.arc_range(u) {
                let v = residual.arc(i).to;
                if self.levels[v] == UNREACHED && residual.arc_residual(i) > Flow::zero() {
                    self.levels[v] = self.levels[u] + 1;
                    self.que.push_back(v);
                }
            }
        }

        self.is_reached(sink)
    }

    #[inline]
    pub fn level(&self, u: usize) -> Option<usize> {
        self.levels.get(u).copied().filter(|&l| l != UNREACHED)
    }

    #[inline]
    pub fn is_reached(&self, u: usize) -> bool {
        self.level(u).is_some()
    }

    /// Whether arc `i` belongs to the level graph: positive residual and one level deeper.
    #[inline]
    pub fn is_admissible<Flow>(&self, residual: &ResidualGraph<Flow>, i: usize) -> bool
    where
        Flow: NumAssign + PartialOrd + Copy,
    {
        let arc = residual.arc(i);
        self.levels[arc.from] != UNREACHED && self.levels[arc.to] == self.levels[arc.from] + 1 && residual.arc_residual(i) > Flow::zero()
    }

    /// Drops a dead-end node from the level graph for the rest of the phase.
    #[inline]
    pub fn prune(&mut self, u: usize) {
        self.levels[u] = UNREACHED;
    }

    pub fn levels(&self) -> impl Iterator<Item = Option<usize>> + '_ {
        self.levels.iter().map(|&l| if l == UNREACHED { None } else { Some(l) })
    }
}
