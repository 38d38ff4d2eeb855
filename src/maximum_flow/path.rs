use crate::maximum_flow::min;
use crate::maximum_flow::residual::ResidualGraph;
use num_traits::NumAssign;

/// A source-to-sink path in the residual graph, valid only until the next augmentation.
#[derive(Clone, PartialEq, Debug)]
pub struct AugmentingPath<Flow> {
    pub nodes: Vec<usize>,
    pub arcs: Vec<usize>,
    pub bottleneck: Flow,
}

impl<Flow> AugmentingPath<Flow>
where
    Flow: NumAssign + PartialOrd + Copy,
{
    /// `arcs` must be consecutive and non-empty.
    pub fn new(residual: &ResidualGraph<Flow>, arcs: Vec<usize>) -> Self {
        let mut nodes = Vec::with_capacity(arcs.len() + 1);
        if let Some(&first) = arcs.first() {
            nodes.push(residual.arc(first).from);
        }
        nodes.extend(arcs.iter().map(|&i| residual.arc(i).to));

        let bottleneck = arcs.iter().map(|&i| residual.arc_residual(i)).reduce(min).unwrap_or_else(Flow::zero);
        Self { nodes, arcs, bottleneck }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.arcs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }

    /// The path as `(u, v)` node pairs.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.nodes.windows(2).map(|w| (w[0], w[1]))
    }
}
