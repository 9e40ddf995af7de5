use crate::metrics::RepairMetrics;
use crate::queue::OpenQueue;
use crate::tree::PathTree;
use crate::EngineConfig;
use cartograph_common::{
    add_costs, Cost, CostModel, OpId, Transition, Transitions, VertexId, DIRTY, INF_COST,
};
use rustc_hash::FxHashSet;
use tracing::debug;

/// The designated target vertices. Distances are measured *to* this set.
pub type GoalSet = FxHashSet<VertexId>;

/// Incremental shortest-path engine over an abstract transition system.
///
/// Owns the shortest-path tree and all scratch buffers; adjacency
/// snapshots, goal sets and the external cost table are borrowed per call
/// and must stay unchanged for the duration of that call. The engine is
/// strictly single-owner: no method suspends, and no two methods may run
/// concurrently.
#[derive(Debug, Clone)]
pub struct Engine {
    model: CostModel,
    operator_costs: Vec<Cost>,
    pub(crate) tree: PathTree,
    pub(crate) open: OpenQueue,
    pub(crate) candidates: OpenQueue,
    pub(crate) dirty_candidate: Vec<bool>,
    pub(crate) metrics: RepairMetrics,
    pub(crate) config: EngineConfig,
}

impl Engine {
    /// Capture the cost encoding. No graph is known yet; call
    /// [`initialize_from_goals`](Self::initialize_from_goals) next.
    pub fn new(operator_costs: &[u32], config: EngineConfig) -> Self {
        let model = CostModel::new(operator_costs);
        let operator_costs = operator_costs.iter().map(|&c| model.internal(c)).collect();
        Self {
            model,
            operator_costs,
            tree: PathTree::with_capacity(config.reserve_vertices),
            open: OpenQueue::new(),
            candidates: OpenQueue::new(),
            dirty_candidate: Vec::with_capacity(config.reserve_vertices),
            metrics: RepairMetrics::new(),
            config,
        }
    }

    /// Establish distances and parent arcs for the whole vertex space by
    /// running a backward Dijkstra from the goal set over `incoming`.
    pub fn initialize_from_goals(&mut self, incoming: &[Transitions], goals: &GoalSet) {
        assert!(!goals.is_empty(), "goal set must be non-empty");
        debug!(
            num_vertices = incoming.len(),
            num_goals = goals.len(),
            "computing goal distances from scratch"
        );
        self.metrics.initializations += 1;

        self.open.clear();
        self.tree.reset(incoming.len());
        for &goal in goals {
            self.tree.set_goal(goal);
            self.open.push(0, goal);
        }

        while let Some((popped_g, state)) = self.open.pop() {
            let g = self.tree.distance(state);
            debug_assert!(g <= popped_g);
            if g < popped_g {
                continue; // stale entry
            }
            for &arc in &incoming[state.index()] {
                let pred = arc.target;
                let pred_g = add_costs(g, self.op_cost(arc.op));
                if pred_g < self.tree.distance(pred) {
                    self.tree.set_distance(pred, pred_g);
                    self.tree.set_parent(pred, Transition::new(arc.op, state));
                    self.open.push(pred_g, pred);
                }
            }
        }
        debug_assert!(self.open.is_empty());
    }

    #[inline]
    pub(crate) fn op_cost(&self, op: OpId) -> Cost {
        self.operator_costs[op.index()]
    }

    pub fn num_vertices(&self) -> usize {
        self.tree.len()
    }

    pub fn cost_model(&self) -> &CostModel {
        &self.model
    }

    pub(crate) fn encoded_operator_costs(&self) -> &[Cost] {
        &self.operator_costs
    }

    /// Decoded goal distance of `v`; `u32::MAX` means unreachable.
    pub fn goal_distance(&self, v: VertexId) -> u32 {
        self.model.external(self.tree.distance(v))
    }

    /// Current parent arc of `v`; undefined for goals and unreachable
    /// vertices.
    pub fn parent(&self, v: VertexId) -> Transition {
        self.tree.parent(v)
    }

    #[inline]
    pub(crate) fn internal_distance(&self, v: VertexId) -> Cost {
        self.tree.distance(v)
    }

    /// All goal distances, decoded to 32 bits.
    pub fn decoded_distances(&self) -> Vec<u32> {
        self.tree
            .distances()
            .iter()
            .map(|&d| self.model.external(d))
            .collect()
    }

    pub fn metrics(&self) -> &RepairMetrics {
        &self.metrics
    }

    pub fn reset_metrics(&mut self) {
        self.metrics.reset();
    }

    /// Check the invariants that hold between public operations and are
    /// decidable without a goal set. Panics on violation.
    pub(crate) fn validate_tree(&self, outgoing: &[Transitions]) {
        assert_eq!(self.tree.dirty_len(), 0, "dirty list must drain");
        for i in 0..self.tree.len() {
            let v = VertexId::new(i as u32);
            let dist = self.tree.distance(v);
            assert_ne!(dist, DIRTY, "residual DIRTY at {v}");
            let arc = self.tree.parent(v);
            if arc.is_defined() {
                assert!(
                    outgoing[v.index()].contains(&arc),
                    "parent arc {arc} of {v} is not an outgoing edge"
                );
                assert_eq!(
                    dist,
                    add_costs(self.tree.distance(arc.target), self.op_cost(arc.op)),
                    "cost equation violated at {v}"
                );
            } else if dist != 0 && dist != INF_COST {
                panic!("finite non-goal vertex {v} has no parent arc");
            }
            if dist == INF_COST {
                for &out in &outgoing[v.index()] {
                    let reach = add_costs(self.tree.distance(out.target), self.op_cost(out.op));
                    assert_eq!(
                        reach, INF_COST,
                        "unreachable {v} has a finite-distance successor {}",
                        out.target
                    );
                }
            }
        }
    }
}
