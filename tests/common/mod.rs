#![allow(dead_code)]

use blocking_flow::labeled::LabeledNetwork;
use blocking_flow::maximum_flow::dinic::Dinic;
use blocking_flow::maximum_flow::edmonds_karp::EdmondsKarp;
use blocking_flow::maximum_flow::graph::Graph;
use blocking_flow::maximum_flow::observer::FlowRecorder;
use blocking_flow::maximum_flow::status::MaxFlow;
use blocking_flow::maximum_flow::MaximumFlowSolver;
use num_traits::NumAssign;
use std::fmt::Debug;

/// The golden ratio conjugate (sqrt(5) - 1) / 2.
pub fn phi() -> f64 {
    (5f64.sqrt() - 1.0) / 2.0
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    Dinic,
    EdmondsKarp,
}

pub fn solve<Flow>(strategy: Strategy, source: usize, sink: usize, graph: &mut Graph<Flow>) -> (MaxFlow<Flow>, FlowRecorder<Flow>)
where
    Flow: NumAssign + PartialOrd + Copy + Debug + Default,
{
    let mut recorder = FlowRecorder::new();
    let result = match strategy {
        Strategy::Dinic => Dinic::default().solve_with(source, sink, graph, &mut recorder),
        Strategy::EdmondsKarp => EdmondsKarp::default().solve_with(source, sink, graph, &mut recorder),
    };
    (result.expect("valid network"), recorder)
}

pub fn solve_labeled<Flow>(strategy: Strategy, network: &mut LabeledNetwork<u32, Flow>) -> (MaxFlow<Flow>, FlowRecorder<Flow>)
where
    Flow: NumAssign + PartialOrd + Copy + Debug + Default,
{
    let mut recorder = FlowRecorder::new();
    let result = match strategy {
        Strategy::Dinic => network.solve_with(&mut Dinic::default(), &mut recorder),
        Strategy::EdmondsKarp => network.solve_with(&mut EdmondsKarp::default(), &mut recorder),
    };
    (result.expect("valid network"), recorder)
}

/// The ten-node reference network, nodes labeled 1 to 10, source 1, sink 10.
pub fn ten_node_network() -> LabeledNetwork<u32, i64> {
    let edges = vec![
        (1, 2, 25),
        (1, 3, 30),
        (1, 4, 20),
        (3, 4, 30),
        (2, 5, 25),
        (3, 5, 35),
        (4, 6, 30),
        (5, 7, 40),
        (4, 8, 40),
        (6, 8, 35),
        (6, 9, 30),
        (7, 10, 20),
        (8, 10, 20),
        (9, 10, 20),
    ];
    LabeledNetwork::new(edges, 1, 10).expect("valid network")
}

/// s = 0, x1 = 1, x2 = 2, t = 3 with the irrational capacity phi on x2 -> t.
pub fn golden_ratio_graph() -> Graph<f64> {
    Graph::from_edges(4, &[(0, 1, 1.0), (0, 2, 100.0), (1, 2, 1.0), (1, 3, 100.0), (2, 3, phi())]).expect("valid network")
}

/// Unit-capacity bipartite network: source 0, left 1..=3, right 4..=6, sink 7.
pub fn bipartite_graph() -> Graph<i32> {
    Graph::from_edges(8, &[(0, 1, 1), (0, 2, 1), (0, 3, 1), (1, 4, 1), (1, 5, 1), (2, 4, 1), (3, 5, 1), (3, 6, 1), (4, 7, 1), (5, 7, 1), (6, 7, 1)]).expect("valid network")
}

/// Nothing enters the sink 3.
pub fn disconnected_sink_graph() -> Graph<i32> {
    Graph::from_edges(4, &[(0, 1, 5), (1, 2, 5), (3, 0, 5)]).expect("valid network")
}

/// s = 0, a = 1, b = 2, t = 3 with a unit cross edge a -> b and capacity `m` elsewhere.
pub fn cross_edge_graph(m: i64) -> Graph<i64> {
    Graph::from_edges(4, &[(0, 1, m), (0, 2, m), (1, 2, 1), (1, 3, m), (2, 3, m)]).expect("valid network")
}

/// Deterministic pseudo-random network with `num_nodes` nodes.
pub fn pseudo_random_graph(seed: u64, num_nodes: usize, num_edges: usize) -> Graph<i64> {
    let mut state = seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
    let mut next = move |bound: u64| {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state % bound
    };

    let mut graph = Graph::default();
    graph.add_nodes(num_nodes);
    while graph.num_edges() < num_edges {
        let from = next(num_nodes as u64) as usize;
        let to = next(num_nodes as u64) as usize;
        if from != to {
            graph.add_directed_edge(from, to, next(20) as i64).expect("valid edge");
        }
    }
    graph
}

/// Capacity respect and conservation, comparing amounts with `close`.
pub fn assert_valid_flow<Flow>(graph: &Graph<Flow>, source: usize, sink: usize, close: impl Fn(Flow, Flow) -> bool)
where
    Flow: NumAssign + PartialOrd + Copy + Debug,
{
    for edge in graph.edges() {
        assert!(edge.flow >= Flow::zero() || close(edge.flow, Flow::zero()), "negative flow on {:?}", edge);
        assert!(edge.flow <= edge.upper || close(edge.flow, edge.upper), "capacity exceeded on {:?}", edge);
    }
    for u in (0..graph.num_nodes()).filter(|&u| u != source && u != sink) {
        assert!(close(graph.excess(u), Flow::zero()), "flow is not conserved at {}", u);
    }
}

/// The source side of the final residual graph is a cut whose capacity equals the flow value.
pub fn assert_min_cut<Flow>(graph: &Graph<Flow>, source: usize, sink: usize, value: Flow, close: impl Fn(Flow, Flow) -> bool)
where
    Flow: NumAssign + PartialOrd + Copy + Debug,
{
    let cut = graph.minimum_cut(source);
    assert!(cut.contains(&source));
    assert!(!cut.contains(&sink));
    assert!(close(graph.cut_capacity(&cut), value), "cut {:?} has capacity {:?}, flow is {:?}", cut, graph.cut_capacity(&cut), value);
}

pub fn exact<Flow: PartialEq>(a: Flow, b: Flow) -> bool {
    a == b
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
