use crate::error::FlowError;
use num_traits::NumAssign;
use std::collections::VecDeque;

#[derive(PartialEq, Debug, Clone)]
pub struct Edge<Flow> {
    pub from: usize,
    pub to: usize,
    pub flow: Flow,
    pub upper: Flow,
}

impl<Flow> Edge<Flow>
where
    Flow: NumAssign + PartialOrd + Copy,
{
    #[inline]
    pub fn residual_capacity(&self) -> Flow {
        self.upper - self.flow
    }
}

#[derive(Default, Debug, Clone)]
pub struct Graph<Flow> {
    num_nodes: usize,
    num_edges: usize,
    pub(crate) edges: Vec<Edge<Flow>>,
}

impl<Flow> Graph<Flow>
where
    Flow: NumAssign + PartialOrd + Copy,
{
    /// Builds a graph with `num_nodes` nodes from `(from, to, upper)` triples.
    /// Nothing is returned if any triple is rejected.
    pub fn from_edges(num_nodes: usize, edges: &[(usize, usize, Flow)]) -> Result<Self, FlowError> {
        let mut graph = Self { num_nodes: 0, num_edges: 0, edges: Vec::with_capacity(edges.len()) };
        graph.add_nodes(num_nodes);
        for &(from, to, upper) in edges {
            graph.add_directed_edge(from, to, upper)?;
        }
        Ok(graph)
    }

    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    #[inline]
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    pub fn add_node(&mut self) -> usize {
        self.num_nodes += 1;
        self.num_nodes - 1
    }

    pub fn add_nodes(&mut self, num_nodes: usize) -> Vec<usize> {
        self.num_nodes += num_nodes;
        ((self.num_nodes - num_nodes)..self.num_nodes).collect()
    }

    // return edge index
    pub fn add_directed_edge(&mut self, from: usize, to: usize, upper: Flow) -> Result<usize, FlowError> {
        self.check_node(from)?;
        self.check_node(to)?;
        if from == to {
            return Err(FlowError::SelfLoop { from, to });
        }
        // also rejects values that do not compare with zero, such as NaN
        if !(upper >= Flow::zero()) {
            return Err(FlowError::InvalidCapacity { from, to });
        }

        self.edges.push(Edge { from, to, flow: Flow::zero(), upper });

        self.num_edges += 1;
        Ok(self.num_edges - 1)
    }

    pub fn get_edge(&self, edge_id: usize) -> Option<Edge<Flow>> {
        self.edges.get(edge_id).cloned()
    }

    pub fn edges(&self) -> std::slice::Iter<'_, Edge<Flow>> {
        self.edges.iter()
    }

    pub(crate) fn check_node(&self, node: usize) -> Result<(), FlowError> {
        if node >= self.num_nodes {
            return Err(FlowError::NodeOutOfRange { node, num_nodes: self.num_nodes });
        }
        Ok(())
    }

    pub(crate) fn check_terminals(&self, source: usize, sink: usize) -> Result<(), FlowError> {
        self.check_node(source)?;
        self.check_node(sink)?;
        if source == sink {
            return Err(FlowError::SourceIsSink(source));
        }
        Ok(())
    }

    pub fn reset_flow(&mut self) {
        self.edges.iter_mut().for_each(|e| e.flow = Flow::zero());
    }

    /// Net flow leaving `source`.
    pub fn maximum_flow(&self, source: usize) -> Flow {
        self.edges.iter().fold(Flow::zero(), |mut flow, edge| {
            if edge.from == source {
                flow += edge.flow;
            } else if edge.to == source {
                flow -= edge.flow;
            }
            flow
        })
    }

    /// Inflow minus outflow of `u`. Zero for every node but the source and sink of a valid flow.
    pub fn excess(&self, u: usize) -> Flow {
        self.edges.iter().fold(Flow::zero(), |mut excess, edge| {
            if edge.to == u {
                excess += edge.flow;
            }
            if edge.from == u {
                excess -= edge.flow;
            }
            excess
        })
    }

    /// Nodes reachable from `source` in the residual network of the current flow.
    /// After a maximum flow has been computed this is the source side of a minimum cut.
    pub fn minimum_cut(&self, source: usize) -> Vec<usize> {
        let mut cut = Vec::new();
        let mut visited = vec![false; self.num_nodes];
        if source >= self.num_nodes {
            return cut;
        }

        let mut adjacency = vec![Vec::new(); self.num_nodes];
        for (edge_id, e) in self.edges.iter().enumerate() {
            adjacency[e.from].push(edge_id);
            adjacency[e.to].push(edge_id);
        }

        let mut que = VecDeque::from([source]);
        visited[source] = true;
        while let Some(u) = que.pop_front() {
            cut.push(u);
            for &edge_id in adjacency[u].iter() {
                let e = &self.edges[edge_id];
                let (v, open) = if e.from == u { (e.to, e.residual_capacity() > Flow::zero()) } else { (e.from, e.flow > Flow::zero()) };
                if !visited[v] && open {
                    visited[v] = true;
                    que.push_back(v);
                }
            }
        }

        cut
    }

    /// Total capacity of the original edges leaving the node set `cut`.
    pub fn cut_capacity(&self, cut: &[usize]) -> Flow {
        let mut inside = vec![false; self.num_nodes];
        cut.iter().filter(|&&u| u < self.num_nodes).for_each(|&u| inside[u] = true);
        self.edges.iter().filter(|e| inside[e.from] && !inside[e.to]).fold(Flow::zero(), |sum, e| sum + e.upper)
    }
}
