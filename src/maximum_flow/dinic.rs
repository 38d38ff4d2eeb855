use crate::error::FlowError;
use crate::maximum_flow::blocking_flow::BlockingFlow;
use crate::maximum_flow::config::SolverConfig;
use crate::maximum_flow::graph::Graph;
use crate::maximum_flow::level_graph::LevelGraph;
use crate::maximum_flow::observer::FlowObserver;
use crate::maximum_flow::residual::{ResidualGraph, ResidualUpdate};
use crate::maximum_flow::status::{MaxFlow, Status};
use crate::maximum_flow::MaximumFlowSolver;
use log::{debug, trace, warn};
use num_traits::NumAssign;
use std::fmt::Debug;

/// Dinic's algorithm: BFS level graph, then a blocking flow found by pointer DFS, per phase.
/// The number of phases is at most `n - 1`.
#[derive(Default)]
pub struct Dinic<Flow> {
    residual: ResidualGraph<Flow>,
    level_graph: LevelGraph,
    blocking_flow: BlockingFlow,
    config: SolverConfig,
}

impl<Flow> Dinic<Flow>
where
    Flow: NumAssign + PartialOrd + Copy + Debug + Default,
{
    pub fn new(config: SolverConfig) -> Self {
        Self { config, ..Default::default() }
    }

    /// Residual graph of the last run.
    pub fn residual(&self) -> &ResidualGraph<Flow> {
        &self.residual
    }

    /// Level table of the last phase. Nodes pruned as dead ends during that phase read as unreached.
    pub fn level_graph(&self) -> &LevelGraph {
        &self.level_graph
    }

    // returns the flow pushed in this phase
    fn find_blocking_flow<O>(&mut self, source: usize, sink: usize, total: &mut Flow, observer: &mut O) -> Result<Flow, FlowError>
    where
        O: FlowObserver<Flow>,
    {
        self.blocking_flow.reset(&self.residual);

        let mut pushed = Flow::zero();
        while let Some(path) = self.blocking_flow.find_path(&self.residual, &mut self.level_graph, source, sink) {
            trace!("augmenting path {:?} by {:?}", path.nodes, path.bottleneck);
            observer.path_found(&path);

            self.residual.augment(&path.arcs, path.bottleneck)?;
            pushed += path.bottleneck;
            *total += path.bottleneck;

            let updates: Vec<ResidualUpdate<Flow>> = path.arcs.iter().map(|&i| self.residual.residual_update(self.residual.arc(i).kind.edge())).collect();
            observer.flow_augmented(&updates, *total);
        }
        Ok(pushed)
    }
}

impl<Flow> MaximumFlowSolver<Flow> for Dinic<Flow>
where
    Flow: NumAssign + PartialOrd + Copy + Debug + Default,
{
    fn solve_with<O>(&mut self, source: usize, sink: usize, graph: &mut Graph<Flow>, observer: &mut O) -> Result<MaxFlow<Flow>, FlowError>
    where
        O: FlowObserver<Flow>,
    {
        graph.check_terminals(source, sink)?;
        self.residual.build(graph);

        let max_phases = self.config.round_cap(graph.num_nodes());
        let mut flow = Flow::zero();
        let mut phases = 0;
        let status = loop {
            let sink_reachable = self.level_graph.build(&self.residual, source, sink);
            observer.level_graph_built(&self.level_graph, sink_reachable);

            // no s-t path
            if !sink_reachable {
                break Status::Optimal;
            }
            if phases >= max_phases {
                warn!("dinic stopped after {} phases with an augmenting path left, flow {:?} is a lower bound", phases, flow);
                break Status::RoundLimit;
            }

            let pushed = self.find_blocking_flow(source, sink, &mut flow, observer)?;
            if !(pushed > Flow::zero()) {
                warn!("dinic phase {} reached the sink but pushed no flow", phases + 1);
                break Status::Stalled;
            }

            phases += 1;
            debug!("dinic phase {} pushed {:?}, total {:?}", phases, pushed, flow);
            observer.round_complete(phases, pushed, flow);
        };

        self.residual.set_flow(graph);
        let result = MaxFlow { value: flow, status, rounds: phases };
        debug!("dinic finished with {:?}", result);
        observer.terminated(&result);
        Ok(result)
    }
}
