use blocking_flow::labeled::LabeledNetwork;
use blocking_flow::maximum_flow::dinic::Dinic;
use blocking_flow::maximum_flow::observer::{FlowEvent, FlowRecorder};
use blocking_flow::maximum_flow::status::Status;

fn main() {
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
    let mut network: LabeledNetwork<u32, i64> = LabeledNetwork::new(edges, 1, 10).unwrap();

    let mut recorder = FlowRecorder::new();
    let result = network.solve_with(&mut Dinic::default(), &mut recorder).unwrap();

    let label = |u: usize| *network.label(u).unwrap();
    for event in recorder.events() {
        match event {
            FlowEvent::LevelGraphBuilt { levels, sink_reachable } => {
                let levels: Vec<String> = levels.iter().enumerate().map(|(u, l)| format!("{}:{}", label(u), l.map_or("-".to_string(), |l| l.to_string()))).collect();
                println!("level graph [{}] sink reachable: {}", levels.join(" "), sink_reachable);
            }
            FlowEvent::PathFound { nodes, bottleneck } => {
                let nodes: Vec<String> = nodes.iter().map(|&u| label(u).to_string()).collect();
                println!("  path {} bottleneck {}", nodes.join(" -> "), bottleneck);
            }
            FlowEvent::FlowAugmented { updates, total } => {
                for update in updates {
                    println!("    {} -> {} residual {} / back {}", label(update.from), label(update.to), update.forward, update.backward);
                }
                println!("  total {}", total);
            }
            FlowEvent::RoundComplete { round, pushed, total } => {
                println!("phase {} pushed {}, total {}", round, pushed, total);
            }
            FlowEvent::Terminated(result) => {
                println!("terminated: {:?}", result);
            }
        }
    }

    match result.status {
        Status::Optimal => {
            println!("maximum flow:{}", result.value);
            println!("minimum cut source side:{:?}", network.minimum_cut());
            for edge in network.graph().edges() {
                println!("{} -> {}: {} / {}", label(edge.from), label(edge.to), edge.flow, edge.upper);
            }
        }
        _ => unreachable!(),
    }
}
