//! Networks whose nodes carry caller-chosen labels (integers, strings, ...) instead of
//! dense indices. Labels are mapped to indices once, at construction.

use crate::error::FlowError;
use crate::maximum_flow::graph::Graph;
use crate::maximum_flow::observer::{FlowObserver, NoObserver};
use crate::maximum_flow::status::MaxFlow;
use crate::maximum_flow::MaximumFlowSolver;
use num_traits::NumAssign;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

#[derive(Debug, Clone)]
pub struct NodeMap<Label> {
    labels: Vec<Label>,
    indices: HashMap<Label, usize>,
}

impl<Label> Default for NodeMap<Label> {
    fn default() -> Self {
        Self { labels: Vec::new(), indices: HashMap::new() }
    }
}

impl<Label> NodeMap<Label>
where
    Label: Eq + Hash + Clone + Debug,
{
    /// Index of `label`, inserting it if it is new.
    pub fn get_or_insert(&mut self, label: &Label) -> usize {
        if let Some(&index) = self.indices.get(label) {
            return index;
        }
        self.labels.push(label.clone());
        self.indices.insert(label.clone(), self.labels.len() - 1);
        self.labels.len() - 1
    }

    pub fn insert_new(&mut self, label: &Label) -> Result<usize, FlowError> {
        if self.indices.contains_key(label) {
            return Err(FlowError::DuplicateNode(format!("{:?}", label)));
        }
        Ok(self.get_or_insert(label))
    }

    pub fn index(&self, label: &Label) -> Result<usize, FlowError> {
        self.indices.get(label).copied().ok_or_else(|| FlowError::UnknownNode(format!("{:?}", label)))
    }

    pub fn label(&self, index: usize) -> Option<&Label> {
        self.labels.get(index)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// A flow network built from `(u, v, capacity)` triples plus a designated source and sink.
#[derive(Debug, Clone)]
pub struct LabeledNetwork<Label, Flow> {
    graph: Graph<Flow>,
    nodes: NodeMap<Label>,
    source: usize,
    sink: usize,
}

impl<Label, Flow> LabeledNetwork<Label, Flow>
where
    Label: Eq + Hash + Clone + Debug,
    Flow: NumAssign + PartialOrd + Copy,
{
    /// The node set is whatever the edges mention; the source and sink must be among them.
    pub fn new<I>(edges: I, source: Label, sink: Label) -> Result<Self, FlowError>
    where
        I: IntoIterator<Item = (Label, Label, Flow)>,
    {
        let edges: Vec<(Label, Label, Flow)> = edges.into_iter().collect();
        let mut nodes = NodeMap::default();
        for (u, v, _) in edges.iter() {
            nodes.get_or_insert(u);
            nodes.get_or_insert(v);
        }
        Self::build(nodes, edges, source, sink)
    }

    /// Like [`LabeledNetwork::new`], but every edge must reference a declared node.
    pub fn with_nodes<N, I>(nodes: N, edges: I, source: Label, sink: Label) -> Result<Self, FlowError>
    where
        N: IntoIterator<Item = Label>,
        I: IntoIterator<Item = (Label, Label, Flow)>,
    {
        let mut node_map = NodeMap::default();
        for label in nodes {
            node_map.insert_new(&label)?;
        }
        Self::build(node_map, edges.into_iter().collect(), source, sink)
    }

    fn build(nodes: NodeMap<Label>, edges: Vec<(Label, Label, Flow)>, source: Label, sink: Label) -> Result<Self, FlowError> {
        let source = nodes.index(&source)?;
        let sink = nodes.index(&sink)?;
        if source == sink {
            return Err(FlowError::SourceIsSink(source));
        }

        let mut graph = Graph::from_edges(nodes.len(), &[])?;
        for (u, v, upper) in edges.iter() {
            graph.add_directed_edge(nodes.index(u)?, nodes.index(v)?, *upper)?;
        }

        Ok(Self { graph, nodes, source, sink })
    }

    pub fn solve<S>(&mut self, solver: &mut S) -> Result<MaxFlow<Flow>, FlowError>
    where
        S: MaximumFlowSolver<Flow>,
    {
        self.solve_with(solver, &mut NoObserver)
    }

    pub fn solve_with<S, O>(&mut self, solver: &mut S, observer: &mut O) -> Result<MaxFlow<Flow>, FlowError>
    where
        S: MaximumFlowSolver<Flow>,
        O: FlowObserver<Flow>,
    {
        solver.solve_with(self.source, self.sink, &mut self.graph, observer)
    }

    pub fn graph(&self) -> &Graph<Flow> {
        &self.graph
    }

    pub fn nodes(&self) -> &NodeMap<Label> {
        &self.nodes
    }

    pub fn source(&self) -> &Label {
        &self.nodes.labels[self.source]
    }

    pub fn sink(&self) -> &Label {
        &self.nodes.labels[self.sink]
    }

    pub fn index(&self, label: &Label) -> Result<usize, FlowError> {
        self.nodes.index(label)
    }

    pub fn label(&self, index: usize) -> Option<&Label> {
        self.nodes.label(index)
    }

    /// Flow on the edges `u -> v` after the last solve.
    pub fn flow(&self, u: &Label, v: &Label) -> Result<Flow, FlowError> {
        let (u, v) = (self.index(u)?, self.index(v)?);
        Ok(self.graph.edges().filter(|e| e.from == u && e.to == v).fold(Flow::zero(), |sum, e| sum + e.flow))
    }

    /// Residual capacity of the pair `(u, v)` under the current flow, counting both the
    /// unused capacity of `u -> v` edges and the cancellable flow of `v -> u` edges.
    pub fn residual_capacity(&self, u: &Label, v: &Label) -> Result<Flow, FlowError> {
        let (u, v) = (self.index(u)?, self.index(v)?);
        Ok(self.graph.edges().fold(Flow::zero(), |sum, e| {
            if e.from == u && e.to == v {
                sum + e.residual_capacity()
            } else if e.from == v && e.to == u {
                sum + e.flow
            } else {
                sum
            }
        }))
    }

    pub fn value(&self) -> Flow {
        self.graph.maximum_flow(self.source)
    }

    /// Source side of a minimum cut, valid after a solve that reported an optimal flow.
    pub fn minimum_cut(&self) -> Vec<Label> {
        self.graph.minimum_cut(self.source).into_iter().map(|u| self.nodes.labels[u].clone()).collect()
    }
}
