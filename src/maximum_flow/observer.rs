use crate::maximum_flow::level_graph::LevelGraph;
use crate::maximum_flow::path::AugmentingPath;
use crate::maximum_flow::residual::ResidualUpdate;
use crate::maximum_flow::status::MaxFlow;

/// Hooks called by the solvers at each step of a run. Every method defaults to doing nothing.
pub trait FlowObserver<Flow> {
    fn level_graph_built(&mut self, _level_graph: &LevelGraph, _sink_reachable: bool) {}

    fn path_found(&mut self, _path: &AugmentingPath<Flow>) {}

    /// `updates` holds one entry per original edge touched by the augmentation.
    fn flow_augmented(&mut self, _updates: &[ResidualUpdate<Flow>], _total: Flow) {}

    fn round_complete(&mut self, _round: usize, _pushed: Flow, _total: Flow) {}

    fn terminated(&mut self, _result: &MaxFlow<Flow>) {}
}

pub struct NoObserver;

impl<Flow> FlowObserver<Flow> for NoObserver {}

#[derive(PartialEq, Debug, Clone)]
pub enum FlowEvent<Flow> {
    LevelGraphBuilt { levels: Vec<Option<usize>>, sink_reachable: bool },
    PathFound { nodes: Vec<usize>, bottleneck: Flow },
    FlowAugmented { updates: Vec<ResidualUpdate<Flow>>, total: Flow },
    RoundComplete { round: usize, pushed: Flow, total: Flow },
    Terminated(MaxFlow<Flow>),
}

/// Keeps every notification of a run, in order.
#[derive(Debug, Clone)]
pub struct FlowRecorder<Flow> {
    events: Vec<FlowEvent<Flow>>,
}

impl<Flow> Default for FlowRecorder<Flow> {
    fn default() -> Self {
        Self { events: Vec::new() }
    }
}

impl<Flow> FlowRecorder<Flow>
where
    Flow: Copy,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[FlowEvent<Flow>] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Total flow after each augmentation.
    pub fn totals(&self) -> Vec<Flow> {
        self.events
            .iter()
            .filter_map(|event| match event {
                FlowEvent::FlowAugmented { total, .. } => Some(*total),
                _ => None,
            })
            .collect()
    }

    pub fn paths(&self) -> Vec<(Vec<usize>, Flow)> {
        self.events
            .iter()
            .filter_map(|event| match event {
                FlowEvent::PathFound { nodes, bottleneck } => Some((nodes.clone(), *bottleneck)),
                _ => None,
            })
            .collect()
    }

    /// Level tables of every level graph built, in order.
    pub fn level_tables(&self) -> Vec<Vec<Option<usize>>> {
        self.events
            .iter()
            .filter_map(|event| match event {
                FlowEvent::LevelGraphBuilt { levels, .. } => Some(levels.clone()),
                _ => None,
            })
            .collect()
    }
}

impl<Flow> FlowObserver<Flow> for FlowRecorder<Flow>
where
    Flow: Copy,
{
    fn level_graph_built(&mut self, level_graph: &LevelGraph, sink_reachable: bool) {
        self.events.push(FlowEvent::LevelGraphBuilt { levels: level_graph.levels().collect(), sink_reachable });
    }

    fn path_found(&mut self, path: &AugmentingPath<Flow>) {
        self.events.push(FlowEvent::PathFound { nodes: path.nodes.clone(), bottleneck: path.bottleneck });
    }

    fn flow_augmented(&mut self, updates: &[ResidualUpdate<Flow>], total: Flow) {
        self.events.push(FlowEvent::FlowAugmented { updates: updates.to_vec(), total });
    }

    fn round_complete(&mut self, round: usize, pushed: Flow, total: Flow) {
        self.events.push(FlowEvent::RoundComplete { round, pushed, total });
    }

    fn terminated(&mut self, result: &MaxFlow<Flow>) {
        self.events.push(FlowEvent::Terminated(result.clone()));
    }
}
