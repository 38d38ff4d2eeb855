use crate::error::FlowError;
use crate::maximum_flow::graph::Graph;
use num_traits::NumAssign;
use std::ops::Range;

/// Which side of an original edge an arc stands for. Carries the edge id.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ArcKind {
    Forward(usize),
    Reverse(usize),
}

impl ArcKind {
    #[inline]
    pub fn edge(self) -> usize {
        match self {
            ArcKind::Forward(edge) | ArcKind::Reverse(edge) => edge,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ResidualArc {
    pub from: usize,
    pub to: usize,
    pub kind: ArcKind,
    pub rev: usize,
}

#[derive(Clone, PartialEq, Debug)]
pub struct EdgeState<Flow> {
    pub from: usize,
    pub to: usize,
    pub upper: Flow,
    pub flow: Flow,
}

/// Residual capacities of one original edge right after it was pushed on.
#[derive(Clone, PartialEq, Debug)]
pub struct ResidualUpdate<Flow> {
    pub edge: usize,
    pub from: usize,
    pub to: usize,
    pub forward: Flow,
    pub backward: Flow,
}

#[derive(Default, Debug)]
pub struct ResidualGraph<Flow> {
    num_nodes: usize,
    start: Vec<usize>,
    arcs: Vec<ResidualArc>,
    edges: Vec<EdgeState<Flow>>,
    edge_to_arc: Vec<usize>,
}

impl<Flow> ResidualGraph<Flow>
where
    Flow: NumAssign + PartialOrd + Copy,
{
    pub fn build(&mut self, graph: &Graph<Flow>) {
        self.num_nodes = graph.num_nodes();
        let num_edges = graph.num_edges();

        self.edges.clear();
        self.edges.extend(graph.edges().map(|e| EdgeState { from: e.from, to: e.to, upper: e.upper, flow: Flow::zero() }));
        self.edge_to_arc.clear();
        self.edge_to_arc.resize(num_edges, usize::MAX);
        self.start.clear();
        self.start.resize(self.num_nodes + 1, 0);

        let mut degree = vec![0; self.num_nodes];
        for edge in self.edges.iter() {
            degree[edge.from] += 1;
            degree[edge.to] += 1;
        }

        for i in 1..=self.num_nodes {
            self.start[i] = self.start[i - 1] + degree[i - 1];
        }

        let placeholder = ResidualArc { from: 0, to: 0, kind: ArcKind::Forward(0), rev: 0 };
        self.arcs.clear();
        self.arcs.resize(2 * num_edges, placeholder);

        let mut counter = vec![0; self.num_nodes];
        for (edge_id, e) in self.edges.iter().enumerate() {
            let (u, v) = (e.from, e.to);
            let forward = self.start[u] + counter[u];
            counter[u] += 1;
            let backward = self.start[v] + counter[v];
            counter[v] += 1;
            self.edge_to_arc[edge_id] = forward;

            self.arcs[forward] = ResidualArc { from: u, to: v, kind: ArcKind::Forward(edge_id), rev: backward };
            self.arcs[backward] = ResidualArc { from: v, to: u, kind: ArcKind::Reverse(edge_id), rev: forward };
        }
    }

    pub fn set_flow(&self, graph: &mut Graph<Flow>) {
        for (edge, state) in graph.edges.iter_mut().zip(self.edges.iter()) {
            edge.flow = state.flow;
        }
    }

    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn arc(&self, i: usize) -> &ResidualArc {
        &self.arcs[i]
    }

    #[inline]
    pub fn edge(&self, edge_id: usize) -> &EdgeState<Flow> {
        &self.edges[edge_id]
    }

    /// Arc index of the forward side of an original edge.
    #[inline]
    pub fn forward_arc(&self, edge_id: usize) -> usize {
        self.edge_to_arc[edge_id]
    }

    /// Indices of the arcs leaving `u`: one per original successor and one per original predecessor.
    #[inline]
    pub fn arc_range(&self, u: usize) -> Range<usize> {
        self.start[u]..self.start[u + 1]
    }

    #[inline]
    pub fn neighbors(&self, u: usize) -> std::slice::Iter<'_, ResidualArc> {
        self.arcs[self.arc_range(u)].iter()
    }

    #[inline]
    pub fn arc_residual(&self, i: usize) -> Flow {
        match self.arcs[i].kind {
            ArcKind::Forward(e) => self.edges[e].upper - self.edges[e].flow,
            ArcKind::Reverse(e) => self.edges[e].flow,
        }
    }

    /// Residual capacity of the pair `(u, v)`, summed over every arc `u -> v`.
    /// Zero when no original edge joins the two nodes in either direction.
    pub fn residual_capacity(&self, u: usize, v: usize) -> Flow {
        self.arc_range(u).filter(|&i| self.arcs[i].to == v).fold(Flow::zero(), |sum, i| sum + self.arc_residual(i))
    }

    /// Flow carried by the original edges `u -> v`.
    pub fn flow(&self, u: usize, v: usize) -> Flow {
        self.edges.iter().filter(|e| e.from == u && e.to == v).fold(Flow::zero(), |sum, e| sum + e.flow)
    }

    /// Net flow leaving `source`.
    pub fn value(&self, source: usize) -> Flow {
        self.edges.iter().fold(Flow::zero(), |mut value, e| {
            if e.from == source {
                value += e.flow;
            } else if e.to == source {
                value -= e.flow;
            }
            value
        })
    }

    pub fn residual_update(&self, edge_id: usize) -> ResidualUpdate<Flow> {
        let e = &self.edges[edge_id];
        ResidualUpdate { edge: edge_id, from: e.from, to: e.to, forward: e.upper - e.flow, backward: e.flow }
    }

    /// Pushes `amount` along a single arc: a forward arc raises the flow of its edge,
    /// a reverse arc cancels flow on the edge it mirrors.
    pub fn push(&mut self, i: usize, amount: Flow) -> Result<(), FlowError> {
        self.check_push(i, amount)?;
        match self.arcs[i].kind {
            ArcKind::Forward(e) => self.edges[e].flow += amount,
            ArcKind::Reverse(e) => self.edges[e].flow -= amount,
        }
        Ok(())
    }

    /// Pushes `amount` along every arc of a path. Every arc is checked before any flow
    /// changes, so a rejected path leaves the graph untouched.
    pub fn augment(&mut self, arcs: &[usize], amount: Flow) -> Result<(), FlowError> {
        for &i in arcs {
            self.check_push(i, amount)?;
        }
        for &i in arcs {
            self.push(i, amount)?;
        }
        Ok(())
    }

    fn check_push(&self, i: usize, amount: Flow) -> Result<(), FlowError> {
        if amount > self.arc_residual(i) {
            let arc = &self.arcs[i];
            return Err(FlowError::ExcessAugmentation { from: arc.from, to: arc.to });
        }
        Ok(())
    }
}
