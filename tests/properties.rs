mod common;

use blocking_flow::maximum_flow::blocking_flow::BlockingFlow;
use blocking_flow::maximum_flow::dinic::Dinic;
use blocking_flow::maximum_flow::graph::Graph;
use blocking_flow::maximum_flow::level_graph::LevelGraph;
use blocking_flow::maximum_flow::observer::FlowEvent;
use blocking_flow::maximum_flow::residual::ResidualGraph;
use blocking_flow::maximum_flow::status::Status;
use common::*;
use rstest::rstest;

fn assert_residual_invariants(residual: &ResidualGraph<i64>, source: usize, sink: usize) {
    let mut excess = vec![0; residual.num_nodes()];
    for edge_id in 0..residual.num_edges() {
        let e = residual.edge(edge_id);
        assert!(0 <= e.flow && e.flow <= e.upper, "edge {} carries {} of {}", edge_id, e.flow, e.upper);
        excess[e.to] += e.flow;
        excess[e.from] -= e.flow;
    }
    for (u, &x) in excess.iter().enumerate() {
        if u != source && u != sink {
            assert_eq!(x, 0, "flow is not conserved at {}", u);
        }
    }
}

#[rstest]
#[case(pseudo_random_graph(1, 8, 20))]
#[case(pseudo_random_graph(2, 8, 30))]
#[case(pseudo_random_graph(3, 10, 25))]
#[case(cross_edge_graph(7))]
fn invariants_hold_after_every_augmentation(#[case] graph: Graph<i64>) {
    let (source, sink) = (0, graph.num_nodes() - 1);
    let mut residual = ResidualGraph::default();
    residual.build(&graph);
    let mut level_graph = LevelGraph::default();
    let mut blocking_flow = BlockingFlow::default();

    let mut total = 0;
    let mut phases = 0;
    while level_graph.build(&residual, source, sink) {
        blocking_flow.reset(&residual);
        while let Some(path) = blocking_flow.find_path(&residual, &mut level_graph, source, sink) {
            assert!(path.bottleneck > 0);
            residual.augment(&path.arcs, path.bottleneck).unwrap();
            total += path.bottleneck;
            assert_residual_invariants(&residual, source, sink);
            assert_eq!(residual.value(source), total);
        }
        phases += 1;
        assert!(phases < graph.num_nodes());
    }
}

#[rstest]
#[case(1, 8, 20)]
#[case(2, 8, 30)]
#[case(3, 10, 25)]
#[case(4, 12, 40)]
#[case(5, 6, 12)]
fn strategies_agree_and_meet_the_cut(#[case] seed: u64, #[case] num_nodes: usize, #[case] num_edges: usize) {
    let (source, sink) = (0, num_nodes - 1);

    let mut dinic_graph = pseudo_random_graph(seed, num_nodes, num_edges);
    let (dinic, _) = solve(Strategy::Dinic, source, sink, &mut dinic_graph);
    let mut ek_graph = pseudo_random_graph(seed, num_nodes, num_edges);
    let (ek, _) = solve(Strategy::EdmondsKarp, source, sink, &mut ek_graph);

    assert_eq!(dinic.status, Status::Optimal);
    assert_eq!(ek.status, Status::Optimal);
    assert_eq!(dinic.value, ek.value);

    for graph in [&dinic_graph, &ek_graph] {
        assert_valid_flow(graph, source, sink, exact);
        assert_min_cut(graph, source, sink, dinic.value, exact);
    }
}

#[rstest]
fn total_flow_never_decreases(#[values(Strategy::Dinic, Strategy::EdmondsKarp)] strategy: Strategy, #[values(1, 2, 3)] seed: u64) {
    let mut graph = pseudo_random_graph(seed, 9, 24);
    let (result, recorder) = solve(strategy, 0, 8, &mut graph);

    let totals = recorder.totals();
    assert!(totals.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(totals.last().copied().unwrap_or(0), result.value);
}

#[rstest]
#[case(pseudo_random_graph(6, 10, 30))]
#[case(pseudo_random_graph(7, 12, 36))]
#[case(cross_edge_graph(3))]
fn sink_distance_grows_every_phase(#[case] graph: Graph<i64>) {
    let mut graph = graph;
    let sink = graph.num_nodes() - 1;
    let (result, recorder) = solve(Strategy::Dinic, 0, sink, &mut graph);

    let distances: Vec<usize> = recorder.level_tables().iter().filter_map(|levels| levels[sink]).collect();
    assert!(distances.windows(2).all(|w| w[0] < w[1]), "{:?}", distances);
    assert_eq!(distances.len(), result.rounds);
    assert!(result.rounds < graph.num_nodes());
}

#[test]
fn level_graph_is_idempotent() {
    let mut network = ten_node_network();
    let mut dinic = Dinic::default();
    let (source, sink) = (network.index(&1).unwrap(), network.index(&10).unwrap());

    let mut residual = ResidualGraph::default();
    residual.build(network.graph());
    let mut first = LevelGraph::default();
    let mut second = LevelGraph::default();
    first.build(&residual, source, sink);
    second.build(&residual, source, sink);
    assert_eq!(first.levels().collect::<Vec<_>>(), second.levels().collect::<Vec<_>>());
    assert_eq!(first.level(sink), Some(3));

    network.solve(&mut dinic).unwrap();
    let reached = first.build(dinic.residual(), source, sink);
    let reached_again = second.build(dinic.residual(), source, sink);
    assert!(!reached && !reached_again);
    assert_eq!(first.levels().collect::<Vec<_>>(), second.levels().collect::<Vec<_>>());
}

#[test]
fn events_arrive_in_order() {
    let mut graph = cross_edge_graph(4);
    let (_, recorder) = solve(Strategy::Dinic, 0, 3, &mut graph);
    let events = recorder.events();

    assert!(matches!(events.first(), Some(FlowEvent::LevelGraphBuilt { sink_reachable: true, .. })));
    assert!(matches!(events[1], FlowEvent::PathFound { .. }));
    assert!(matches!(events[2], FlowEvent::FlowAugmented { total: 4, .. }));
    assert!(matches!(events[events.len() - 2], FlowEvent::LevelGraphBuilt { sink_reachable: false, .. }));
    match events.last() {
        Some(FlowEvent::Terminated(result)) => assert_eq!(result.value, 8),
        other => panic!("unexpected last event {:?}", other),
    }

    // the augmentation of s -> a -> t touched exactly its two edges
    match &events[2] {
        FlowEvent::FlowAugmented { updates, .. } => {
            let touched: Vec<(usize, usize, i64, i64)> = updates.iter().map(|u| (u.from, u.to, u.forward, u.backward)).collect();
            assert_eq!(touched, vec![(0, 1, 0, 4), (1, 3, 0, 4)]);
        }
        other => panic!("unexpected event {:?}", other),
    }
}
