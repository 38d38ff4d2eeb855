use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    #[error("node {node} is out of range (graph has {num_nodes} nodes)")]
    NodeOutOfRange { node: usize, num_nodes: usize },

    #[error("unknown node {0}")]
    UnknownNode(String),

    #[error("node {0} is declared more than once")]
    DuplicateNode(String),

    #[error("edge {from} -> {to} has a negative or undefined capacity")]
    InvalidCapacity { from: usize, to: usize },

    #[error("edge {from} -> {to} is a self-loop")]
    SelfLoop { from: usize, to: usize },

    #[error("source and sink are the same node {0}")]
    SourceIsSink(usize),

    /// Raised when a push exceeds the residual capacity of an arc. Indicates a bug in
    /// the path finder that produced the amount.
    #[error("augmentation on arc {from} -> {to} exceeds its residual capacity")]
    ExcessAugmentation { from: usize, to: usize },
}
