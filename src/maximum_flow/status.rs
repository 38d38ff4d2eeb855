#[derive(Default, PartialEq, Eq, Debug, Clone, Copy)]
pub enum Status {
    #[default]
    NotSolved,
    /// The sink is unreachable in the final residual graph.
    Optimal,
    /// The round cap fired while an augmenting path still existed. The value is a lower bound.
    RoundLimit,
    /// A phase reached the sink but pushed nothing. The value is a lower bound.
    Stalled,
}

#[derive(PartialEq, Debug, Clone)]
pub struct MaxFlow<Flow> {
    pub value: Flow,
    pub status: Status,
    /// Dinic phases that pushed flow, or Edmonds-Karp augmentations.
    pub rounds: usize,
}

impl<Flow> MaxFlow<Flow> {
    #[inline]
    pub fn is_optimal(&self) -> bool {
        self.status == Status::Optimal
    }
}
