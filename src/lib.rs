//! Maximum flow by blocking flows (Dinic) and shortest augmenting paths (Edmonds-Karp)
//! over an explicit residual graph.
//!
//! ```
//! use blocking_flow::maximum_flow::dinic::Dinic;
//! use blocking_flow::maximum_flow::graph::Graph;
//! use blocking_flow::maximum_flow::status::Status;
//! use blocking_flow::maximum_flow::MaximumFlowSolver;
//!
//! let mut graph = Graph::from_edges(4, &[(0, 1, 3), (0, 2, 2), (1, 2, 1), (1, 3, 2), (2, 3, 3)]).unwrap();
//! let result = Dinic::default().solve(0, 3, &mut graph).unwrap();
//!
//! assert_eq!(result.status, Status::Optimal);
//! assert_eq!(result.value, 5);
//! assert_eq!(graph.maximum_flow(0), 5);
//! ```

pub mod error;
pub mod labeled;
pub mod matching;
pub mod maximum_flow;

pub use error::FlowError;
