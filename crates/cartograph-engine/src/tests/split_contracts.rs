//! Caller-contract violations and verifier divergence abort instead of
//! corrupting the tree.

use super::common::{goals, strict_config, v, TestGraph};
use crate::Engine;
use cartograph_common::INF;

fn chain_engine() -> Engine {
    let mut graph = TestGraph::new(3);
    graph.add_edge(0, 0, 1);
    graph.add_edge(1, 1, 2);
    let mut engine = Engine::new(&[3, 4], strict_config());
    engine.initialize_from_goals(&graph.incoming, &goals(&[2]));
    engine
}

#[test]
#[should_panic(expected = "exactly one replacement")]
fn test_split_where_no_half_keeps_the_tree_arc_aborts() {
    let mut engine = chain_engine();

    // op1 into the goal disappears from both halves; a same-cost op0 arc
    // on the new half is not the old arc and must not pass for it.
    let mut graph = TestGraph::new(4);
    graph.add_edge(0, 0, 1);
    graph.add_edge(3, 0, 2);
    engine.apply_split(&graph.incoming, &graph.outgoing, v(1), v(1), v(3), true);
}

#[test]
#[should_panic(expected = "exactly one replacement")]
fn test_split_where_both_halves_keep_the_tree_arc_aborts() {
    let mut engine = chain_engine();

    let mut graph = TestGraph::new(4);
    graph.add_edge(0, 0, 1);
    graph.add_edge(1, 1, 2);
    graph.add_edge(3, 1, 2);
    engine.apply_split(&graph.incoming, &graph.outgoing, v(1), v(1), v(3), true);
}

#[test]
#[should_panic(expected = "goal vertices are never split")]
fn test_splitting_a_goal_vertex_aborts() {
    let mut engine = chain_engine();

    let mut graph = TestGraph::new(4);
    graph.add_edge(0, 0, 1);
    graph.add_edge(1, 1, 2);
    engine.apply_split(&graph.incoming, &graph.outgoing, v(2), v(2), v(3), true);
}

#[test]
#[should_panic(expected = "infinite-cost operator")]
fn test_infinite_cost_edge_into_the_repaired_region_aborts() {
    // Parallel arcs 0 -> 1: a finite op0 and an infinite op2. The losing
    // half keeps only the costlier op3 way to the goal, so it is re-seeded
    // and re-expanded, and the op2 arc reaches the relaxation loop.
    let mut graph = TestGraph::new(3);
    graph.add_edge(0, 0, 1);
    graph.add_edge(0, 2, 1);
    graph.add_edge(1, 1, 2);
    graph.add_edge(1, 3, 2);
    let mut engine = Engine::new(&[3, 4, INF, 5], strict_config());
    engine.initialize_from_goals(&graph.incoming, &goals(&[2]));
    assert_eq!(engine.decoded_distances(), vec![7, 4, 0]);

    let mut split = TestGraph::new(4);
    split.add_edge(0, 0, 1);
    split.add_edge(0, 2, 1);
    split.add_edge(1, 3, 2);
    split.add_edge(3, 1, 2);
    engine.apply_split(&split.incoming, &split.outgoing, v(1), v(1), v(3), true);
}

#[test]
#[should_panic(expected = "diverged")]
fn test_verifier_detects_stale_distances() {
    let mut graph = TestGraph::new(3);
    graph.add_edge(0, 0, 1);
    graph.add_edge(1, 1, 2);
    let mut engine = Engine::new(&[3, 4, 1], strict_config());
    engine.initialize_from_goals(&graph.incoming, &goals(&[2]));
    assert_eq!(engine.decoded_distances(), vec![7, 4, 0]);

    // A cheap shortcut the engine never saw. The maintained tree is still
    // internally consistent, but the recomputed distances disagree.
    graph.add_edge(0, 2, 2);
    engine.verify(&graph.incoming, &graph.outgoing, &goals(&[2]), v(0));
}

#[test]
#[should_panic(expected = "keeps its slot")]
fn test_first_half_must_reuse_the_split_slot() {
    let mut engine = chain_engine();

    let mut graph = TestGraph::new(4);
    graph.add_edge(0, 0, 1);
    graph.add_edge(1, 1, 2);
    engine.apply_split(&graph.incoming, &graph.outgoing, v(1), v(3), v(1), true);
}
