//! Randomized split sequences: after every repair the maintained distances
//! must match a recomputation from scratch, vertex by vertex.

use super::common::{goals, strict_config, v, TestGraph};
use crate::{compute_distances, Engine};
use cartograph_common::Transition;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_graph(rng: &mut StdRng, num_vertices: usize, num_ops: usize) -> TestGraph {
    let mut graph = TestGraph::new(num_vertices);
    for from in 0..num_vertices {
        let degree = rng.gen_range(1..=3);
        let mut chosen: Vec<(usize, usize)> = Vec::new();
        for _ in 0..degree {
            let to = rng.gen_range(0..num_vertices);
            let op = rng.gen_range(0..num_ops);
            // No self-loops and no duplicate arcs, so that a split's
            // inherited arc is unambiguous.
            if to == from || chosen.contains(&(op, to)) {
                continue;
            }
            chosen.push((op, to));
            graph.add_edge(from, op, to);
        }
    }
    graph
}

/// Split `target` by distributing its edges at random over the two halves.
/// Every edge stays on at least one half; the old tree arc lands on exactly
/// one (chosen at random, exercising dynamic inheritor discovery). Returns
/// the appended half's id.
fn random_split(
    rng: &mut StdRng,
    graph: &mut TestGraph,
    target: usize,
    old_arc: Transition,
) -> usize {
    let out_old = graph.out_edges(target);
    let in_old = graph.in_edges(target);
    let half2 = graph.add_vertex();
    graph.detach(target);

    let inheritor_is_first = rng.gen_bool(0.5);
    for (op, to) in out_old {
        let inherited = old_arc.is_defined()
            && old_arc.op.index() == op
            && old_arc.target.index() == to;
        if inherited {
            let keeper = if inheritor_is_first { target } else { half2 };
            graph.add_edge(keeper, op, to);
            continue;
        }
        match rng.gen_range(0..3) {
            0 => graph.add_edge(target, op, to),
            1 => graph.add_edge(half2, op, to),
            _ => {
                graph.add_edge(target, op, to);
                graph.add_edge(half2, op, to);
            }
        }
    }
    for (op, from) in in_old {
        match rng.gen_range(0..3) {
            0 => graph.add_edge(from, op, target),
            1 => graph.add_edge(from, op, half2),
            _ => {
                graph.add_edge(from, op, target);
                graph.add_edge(from, op, half2);
            }
        }
    }
    half2
}

fn run_split_sequence(costs: &[u32], seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = random_graph(&mut rng, 8, costs.len());
    let goal_set = goals(&[7]);

    let mut engine = Engine::new(costs, strict_config());
    engine.initialize_from_goals(&graph.incoming, &goal_set);
    assert_eq!(
        engine.decoded_distances(),
        compute_distances(&graph.incoming, costs, &goal_set)
    );

    for round in 0..40 {
        let target = loop {
            let candidate = rng.gen_range(0..graph.num_vertices());
            if !goal_set.contains(&v(candidate)) {
                break candidate;
            }
        };
        let half2 = random_split(&mut rng, &mut graph, target, engine.parent(v(target)));
        engine.apply_split(
            &graph.incoming,
            &graph.outgoing,
            v(target),
            v(target),
            v(half2),
            rng.gen_bool(0.5),
        );

        let fresh = compute_distances(&graph.incoming, costs, &goal_set);
        assert_eq!(
            engine.decoded_distances(),
            fresh,
            "diverged after splitting v{target} in round {round}"
        );
        assert!(engine.verify(&graph.incoming, &graph.outgoing, &goal_set, v(0)));
    }
}

#[test]
fn test_split_sequences_match_fresh_recomputation() {
    run_split_sequence(&[3, 1, 4, 2, 6], 0xC0FFEE);
    run_split_sequence(&[3, 1, 4, 2, 6], 99);
    run_split_sequence(&[1, 1, 1], 7);
}

#[test]
fn test_split_sequences_with_zero_cost_operators() {
    run_split_sequence(&[0, 2, 1, 0, 5], 11);
    run_split_sequence(&[0, 1], 2024);
}
