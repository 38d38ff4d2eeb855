#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// Safety cap on phases (Dinic) or augmentations (Edmonds-Karp).
    /// `None` uses the strategy's worst-case bound for the graph being solved.
    pub max_rounds: Option<usize>,
}

impl SolverConfig {
    pub fn with_max_rounds(max_rounds: usize) -> Self {
        Self { max_rounds: Some(max_rounds) }
    }

    pub(crate) fn round_cap(&self, worst_case: usize) -> usize {
        self.max_rounds.unwrap_or(worst_case)
    }
}
