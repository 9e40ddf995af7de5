//! Verification by recomputation.
//!
//! Debug aid: recomputes every distance from scratch in external 32-bit
//! cost space, independent of the engine's internal encoding, and
//! cross-checks the maintained tree. Meant to run after repairs while
//! chasing a bug, not in production loops.

use crate::engine::{Engine, GoalSet};
use cartograph_common::{add_costs, EngineError, Transitions, VertexId, DIRTY, INF, INF_COST};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Reference multi-source Dijkstra over `adjacency` in 32-bit cost space.
///
/// Distances are measured from `sources` along the given edge direction:
/// pass a backward adjacency to get goal distances, a forward adjacency to
/// get reachability from an initial vertex.
pub fn compute_distances(
    adjacency: &[Transitions],
    operator_costs: &[u32],
    sources: &GoalSet,
) -> Vec<u32> {
    let mut distances = vec![INF; adjacency.len()];
    let mut heap: BinaryHeap<Reverse<(u32, u32)>> = BinaryHeap::new();
    for &source in sources {
        distances[source.index()] = 0;
        heap.push(Reverse((0, source.index() as u32)));
    }
    while let Some(Reverse((d, idx))) = heap.pop() {
        let idx = idx as usize;
        if d > distances[idx] {
            continue;
        }
        for &arc in &adjacency[idx] {
            let next = add_saturating_32(d, operator_costs[arc.op.index()]);
            if next < distances[arc.target.index()] {
                distances[arc.target.index()] = next;
                heap.push(Reverse((next, arc.target.index() as u32)));
            }
        }
    }
    distances
}

fn add_saturating_32(a: u32, b: u32) -> u32 {
    if a == INF || b == INF {
        return INF;
    }
    let sum = a as u64 + b as u64;
    if sum >= INF as u64 { INF } else { sum as u32 }
}

impl Engine {
    /// Cross-check the maintained tree against a fresh recomputation.
    ///
    /// Checks, for every vertex reachable from `init`: the decoded
    /// distance matches the reference Dijkstra, and (when finite and not a
    /// goal) the parent arc is a real outgoing edge satisfying the cost
    /// equation. Aborts with diagnostics on divergence; returns `true`
    /// otherwise.
    pub fn verify(
        &self,
        incoming: &[Transitions],
        outgoing: &[Transitions],
        goals: &GoalSet,
        init: VertexId,
    ) -> bool {
        assert_eq!(self.tree.dirty_len(), 0);
        assert!(self.tree.distances().iter().all(|&d| d != DIRTY));

        let costs32: Vec<u32> = self
            .encoded_operator_costs()
            .iter()
            .map(|&c| self.cost_model().external(c))
            .collect();

        let init_set: GoalSet = std::iter::once(init).collect();
        let reachable = compute_distances(outgoing, &costs32, &init_set);

        for i in 0..self.num_vertices() {
            let vertex = VertexId::new(i as u32);
            if self.internal_distance(vertex) == INF_COST
                || reachable[i] == INF
                || goals.contains(&vertex)
            {
                continue;
            }
            let arc = self.tree.parent(vertex);
            assert!(arc.is_defined(), "no parent arc at reachable {vertex}");
            assert!(
                outgoing[i].contains(&arc),
                "parent arc {arc} of {vertex} is not an outgoing edge"
            );
            assert_eq!(
                self.internal_distance(vertex),
                add_costs(self.internal_distance(arc.target), self.op_cost(arc.op)),
                "cost equation violated at {vertex}"
            );
        }

        let fresh = compute_distances(incoming, &costs32, goals);
        for i in 0..self.num_vertices() {
            let vertex = VertexId::new(i as u32);
            let maintained = self.goal_distance(vertex);
            if maintained != fresh[i] && reachable[i] != INF {
                panic!(
                    "{}",
                    EngineError::DistanceMismatch {
                        vertex,
                        maintained,
                        recomputed: fresh[i],
                    }
                );
            }
        }
        true
    }
}
