//! Incremental repair of the shortest-path tree after a vertex split.
//!
//! A split replaces vertex `v` by two vertices whose combined edge sets
//! cover `v`'s old edges. Exactly one half keeps the arc the old tree
//! leaves `v` through; that half is settled at the old distance. The other
//! half, and transitively every predecessor whose tree path ran through it,
//! may have lost its path. The repair identifies exactly those vertices,
//! reconnects the ones that still have an equal-cost way out, and re-runs a
//! Dijkstra bounded to the rest. Distances never decrease under a split,
//! which is what makes repairing instead of recomputing sound.

use crate::engine::Engine;
use cartograph_common::{
    add_costs, EngineError, Transition, Transitions, VertexId, DIRTY, INF_COST,
};
use tracing::{debug, trace};

impl Engine {
    /// Repair the tree after `v` was split into `v1` (reusing `v`'s slot)
    /// and `v2` (freshly appended). `incoming` and `outgoing` describe the
    /// post-split graph.
    ///
    /// With `filter_orphans`, vertices that can keep their old distance via
    /// another edge are salvaged before any re-expansion; without it, the
    /// whole subtree hanging off the losing half is re-expanded.
    pub fn apply_split(
        &mut self,
        incoming: &[Transitions],
        outgoing: &[Transitions],
        v: VertexId,
        v1: VertexId,
        v2: VertexId,
        filter_orphans: bool,
    ) {
        assert_eq!(incoming.len(), outgoing.len());
        assert_eq!(v, v1, "the split vertex keeps its slot as the first half");
        assert!(v2.index() < incoming.len(), "adjacency must include {v2}");
        debug_assert_eq!(incoming.len(), self.tree.len() + 1);
        debug_assert_eq!(self.tree.dirty_len(), 0);
        debug_assert!(self.open.is_empty());
        debug_assert!(self.candidates.is_empty());

        debug!(%v, %v1, %v2, filter_orphans, "repairing shortest paths after split");
        self.metrics.splits += 1;
        self.tree.grow(incoming.len());

        self.split_repair(incoming, outgoing, v, v1, v2, filter_orphans);

        if self.config.validate_repairs {
            self.validate_tree(outgoing);
        }
    }

    fn split_repair(
        &mut self,
        incoming: &[Transitions],
        outgoing: &[Transitions],
        v: VertexId,
        v1: VertexId,
        v2: VertexId,
        filter_orphans: bool,
    ) {
        // A vertex that cannot reach the goal stays that way: a split only
        // partitions or duplicates existing edges, so no vertex gains a
        // path. Both halves inherit unreachability and nothing else moves.
        if self.tree.distance(v) == INF_COST {
            return;
        }
        assert_ne!(self.tree.distance(v), 0, "goal vertices are never split");

        // Exactly one half must have kept the arc the old tree leaves `v`
        // through; that half is settled at the old distance.
        let old_arc = self.tree.parent(v);
        debug_assert!(old_arc.is_defined());
        let v1_keeps = outgoing[v1.index()].contains(&old_arc);
        let v2_keeps = outgoing[v2.index()].contains(&old_arc);
        if v1_keeps == v2_keeps {
            panic!(
                "{}",
                EngineError::SplitArcInheritance {
                    v1,
                    v2,
                    v1_keeps,
                    v2_keeps,
                }
            );
        }
        let (settled, orphan) = if v2_keeps { (v2, v1) } else { (v1, v2) };

        let dist_v = self.tree.distance(v);
        self.tree.set_distance(v1, dist_v);
        self.tree.set_distance(v2, dist_v);
        self.tree.set_parent(settled, old_arc);

        // Redirect predecessors whose tree arc targeted `v` onto whichever
        // half kept an incoming operator of equal cost. The settled half is
        // scanned last so it wins when both halves qualify: arcs into the
        // settled half never dirty anyone downstream.
        for &arc in &incoming[orphan.index()] {
            let pred = arc.target;
            let tree_arc = self.tree.parent(pred);
            if tree_arc.target == v && self.op_cost(arc.op) == self.op_cost(tree_arc.op) {
                trace!(%pred, half = %orphan, "redirecting parent arc");
                self.tree.set_parent(pred, Transition::new(arc.op, orphan));
                self.metrics.redirected_parents += 1;
            }
        }
        for &arc in &incoming[settled.index()] {
            let pred = arc.target;
            let tree_arc = self.tree.parent(pred);
            if (tree_arc.target == v || tree_arc.target == orphan)
                && self.op_cost(arc.op) == self.op_cost(tree_arc.op)
            {
                trace!(%pred, half = %settled, "redirecting parent arc");
                self.tree.set_parent(pred, Transition::new(arc.op, settled));
                self.metrics.redirected_parents += 1;
            }
        }

        if filter_orphans {
            self.salvage_candidates(incoming, outgoing, orphan);
        } else {
            self.mark_orphaned_predecessors(incoming, orphan);
        }

        self.expand_dirty_frontier(incoming, outgoing);
    }

    /// Orphan-candidate salvage pass.
    ///
    /// Candidates are processed in non-decreasing old distance, which is
    /// sound because internal arc costs are strictly positive: a tree
    /// predecessor always has a strictly larger old distance than its
    /// child, so by the time a candidate is popped, every vertex its old
    /// distance depends on has already been classified. A candidate that
    /// still has a successor offering exactly its old distance keeps it;
    /// everything else is a true orphan.
    fn salvage_candidates(
        &mut self,
        incoming: &[Transitions],
        outgoing: &[Transitions],
        orphan: VertexId,
    ) {
        debug_assert!(!self.dirty_candidate.contains(&true));
        if self.dirty_candidate.len() < incoming.len() {
            self.dirty_candidate.resize(incoming.len(), false);
        }
        self.dirty_candidate[orphan.index()] = true;
        self.candidates.push(self.tree.distance(orphan), orphan);

        while let Some((_, state)) = self.candidates.pop() {
            debug_assert!(self.dirty_candidate[state.index()]);
            debug_assert_ne!(self.tree.distance(state), DIRTY);
            debug_assert_ne!(self.tree.distance(state), INF_COST);

            let mut reconnected = false;
            for &arc in &outgoing[state.index()] {
                let succ_dist = self.tree.distance(arc.target);
                let op_cost = self.op_cost(arc.op);
                if succ_dist != DIRTY
                    && succ_dist != INF_COST
                    && op_cost != INF_COST
                    && add_costs(succ_dist, op_cost) == self.tree.distance(state)
                {
                    trace!(%state, succ = %arc.target, "reconnected at old distance");
                    self.tree.set_parent(state, arc);
                    self.metrics.reconnections += 1;
                    reconnected = true;
                    break;
                }
            }
            if !reconnected {
                trace!(%state, "marking orphan");
                self.tree.mark_dirty(state);
                for &arc in &incoming[state.index()] {
                    let pred = arc.target;
                    if !self.dirty_candidate[pred.index()]
                        && self.tree.distance(pred) != DIRTY
                        && self.tree.parent(pred).target == state
                    {
                        trace!(%pred, "queueing candidate");
                        self.dirty_candidate[pred.index()] = true;
                        self.candidates.push(self.tree.distance(pred), pred);
                    }
                }
            }
            self.dirty_candidate[state.index()] = false;
        }
    }

    /// Unfiltered orphan marking: the losing half and, transitively, every
    /// predecessor whose tree arc leads into the marked set.
    ///
    /// Iterative on purpose: the tree depth can exceed the call stack on
    /// large abstractions.
    fn mark_orphaned_predecessors(&mut self, incoming: &[Transitions], orphan: VertexId) {
        let mut stack = vec![orphan];
        self.tree.mark_dirty(orphan);
        while let Some(state) = stack.pop() {
            for &arc in &incoming[state.index()] {
                let pred = arc.target;
                if self.tree.distance(pred) != DIRTY && self.tree.parent(pred).target == state {
                    trace!(%pred, "marking orphaned predecessor");
                    self.tree.mark_dirty(pred);
                    stack.push(pred);
                }
            }
        }
    }

    /// Bounded Dijkstra over the dirty set.
    ///
    /// A virtual source stands for all settled vertices. Seeding assigns
    /// every dirty vertex its best jump back into the settled region; the
    /// loop then relaxes only arcs between repaired vertices. Every
    /// relaxation strictly lowers a finite distance, so this terminates.
    fn expand_dirty_frontier(&mut self, incoming: &[Transitions], outgoing: &[Transitions]) {
        self.open.clear();
        self.metrics.orphans += self.tree.dirty_len() as u64;

        for i in 0..self.tree.dirty_len() {
            let state = self.tree.dirty_at(i);
            debug_assert_eq!(self.tree.distance(state), DIRTY);
            let mut best_dist = INF_COST;
            let mut best_arc = Transition::UNDEFINED;
            for &arc in &outgoing[state.index()] {
                if self.tree.distance(arc.target) == DIRTY {
                    continue;
                }
                let new_dist = add_costs(self.tree.distance(arc.target), self.op_cost(arc.op));
                if new_dist < best_dist {
                    best_dist = new_dist;
                    best_arc = arc;
                }
            }
            self.tree.set_distance(state, best_dist);
            self.tree.set_parent(state, best_arc);
            if best_dist != INF_COST {
                self.open.push(best_dist, state);
            }
        }

        while let Some((g, state)) = self.open.pop() {
            debug_assert_ne!(self.tree.distance(state), DIRTY);
            if g > self.tree.distance(state) {
                continue; // stale entry
            }
            debug_assert_ne!(g, INF_COST);
            for &arc in &incoming[state.index()] {
                let pred = arc.target;
                let op_cost = self.op_cost(arc.op);
                if op_cost == INF_COST {
                    panic!("{}", EngineError::InfiniteCostRelaxation { op: arc.op });
                }
                let pred_g = add_costs(g, op_cost);
                if self.tree.distance(pred) == DIRTY || pred_g < self.tree.distance(pred) {
                    self.tree.set_distance(pred, pred_g);
                    self.tree.set_parent(pred, Transition::new(arc.op, state));
                    self.open.push(pred_g, pred);
                    self.metrics.expansions += 1;
                }
            }
        }

        self.tree.clear_dirty();
    }
}
