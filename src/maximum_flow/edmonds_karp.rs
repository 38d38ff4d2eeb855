use crate::error::FlowError;
use crate::maximum_flow::config::SolverConfig;
use crate::maximum_flow::graph::Graph;
use crate::maximum_flow::observer::FlowObserver;
use crate::maximum_flow::residual::{ResidualGraph, ResidualUpdate};
use crate::maximum_flow::shortest_path::ShortestPath;
use crate::maximum_flow::status::{MaxFlow, Status};
use crate::maximum_flow::MaximumFlowSolver;
use log::{debug, trace, warn};
use num_traits::NumAssign;
use std::fmt::Debug;

/// Edmonds-Karp: augment along one BFS shortest path at a time until the sink is cut off.
#[derive(Default)]
pub struct EdmondsKarp<Flow> {
    residual: ResidualGraph<Flow>,
    shortest_path: ShortestPath,
    config: SolverConfig,
}

impl<Flow> EdmondsKarp<Flow>
where
    Flow: NumAssign + PartialOrd + Copy + Debug + Default,
{
    pub fn new(config: SolverConfig) -> Self {
        Self { config, ..Default::default() }
    }

    pub fn residual(&self) -> &ResidualGraph<Flow> {
        &self.residual
    }
}

impl<Flow> MaximumFlowSolver<Flow> for EdmondsKarp<Flow>
where
    Flow: NumAssign + PartialOrd + Copy + Debug + Default,
{
    fn solve_with<O>(&mut self, source: usize, sink: usize, graph: &mut Graph<Flow>, observer: &mut O) -> Result<MaxFlow<Flow>, FlowError>
    where
        O: FlowObserver<Flow>,
    {
        graph.check_terminals(source, sink)?;
        self.residual.build(graph);

        // O(nm) augmentations
        let max_augmentations = self.config.round_cap(graph.num_nodes() * graph.num_edges());
        let mut flow = Flow::zero();
        let mut augmentations = 0;
        let status = loop {
            let path = match self.shortest_path.find(&self.residual, source, sink) {
                Some(path) => path,
                None => break Status::Optimal,
            };
            if augmentations >= max_augmentations {
                warn!("edmonds-karp stopped after {} augmentations with a path left, flow {:?} is a lower bound", augmentations, flow);
                break Status::RoundLimit;
            }

            trace!("augmenting path {:?} by {:?}", path.nodes, path.bottleneck);
            observer.path_found(&path);

            self.residual.augment(&path.arcs, path.bottleneck)?;
            flow += path.bottleneck;
            augmentations += 1;

            let updates: Vec<ResidualUpdate<Flow>> = path.arcs.iter().map(|&i| self.residual.residual_update(self.residual.arc(i).kind.edge())).collect();
            observer.flow_augmented(&updates, flow);
            debug!("edmonds-karp iteration {} pushed {:?}, total {:?}", augmentations, path.bottleneck, flow);
            observer.round_complete(augmentations, path.bottleneck, flow);
        };

        self.residual.set_flow(graph);
        let result = MaxFlow { value: flow, status, rounds: augmentations };
        debug!("edmonds-karp finished with {:?}", result);
        observer.terminated(&result);
        Ok(result)
    }
}
