//! Dead ends stay dead ends, through initialization and splits alike.

use super::common::{goals, strict_config, v, TestGraph};
use crate::Engine;
use cartograph_common::INF;

fn self_loop_pair() -> (TestGraph, Engine) {
    let mut graph = TestGraph::new(2);
    graph.add_edge(0, 0, 0);
    graph.add_edge(1, 1, 1);
    let mut engine = Engine::new(&[1, 1], strict_config());
    engine.initialize_from_goals(&graph.incoming, &goals(&[1]));
    (graph, engine)
}

#[test]
fn test_unreachable_vertex_has_no_solution() {
    let (_, engine) = self_loop_pair();
    assert_eq!(engine.decoded_distances(), vec![INF, 0]);
    assert_eq!(engine.extract_solution(v(0), &goals(&[1])), None);
    assert_eq!(engine.extract_solution(v(1), &goals(&[1])), Some(vec![]));
}

#[test]
fn test_splitting_an_unreachable_vertex_keeps_both_halves_unreachable() {
    let (_, mut engine) = self_loop_pair();

    // Split 0 into 0 and 2; the former self-loop becomes a two-cycle
    // between the halves. Neither gains a path to the goal.
    let mut graph = TestGraph::new(3);
    graph.add_edge(0, 0, 2);
    graph.add_edge(2, 0, 0);
    graph.add_edge(1, 1, 1);
    engine.apply_split(&graph.incoming, &graph.outgoing, v(0), v(0), v(2), true);

    assert_eq!(engine.decoded_distances(), vec![INF, 0, INF]);
    assert_eq!(engine.extract_solution(v(0), &goals(&[1])), None);
    assert_eq!(engine.extract_solution(v(2), &goals(&[1])), None);
    assert!(engine.verify(&graph.incoming, &graph.outgoing, &goals(&[1]), v(0)));

    // Nothing was orphaned or expanded.
    assert_eq!(engine.metrics().orphans, 0);
    assert_eq!(engine.metrics().expansions, 0);
}
