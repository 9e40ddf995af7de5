use crate::engine::{Engine, GoalSet};
use cartograph_common::{Solution, VertexId, INF_COST};
use tracing::debug;

impl Engine {
    /// Walk the tree from `init` to a goal and return the transitions
    /// taken, or `None` if the goal set is unreachable from `init`.
    ///
    /// An `init` that is itself a goal yields the empty solution. The walk
    /// terminates because every parent arc strictly decreases the internal
    /// goal distance.
    pub fn extract_solution(&self, init: VertexId, goals: &GoalSet) -> Option<Solution> {
        if self.tree.distance(init) == INF_COST {
            debug!(%init, "no solution: goal set unreachable");
            return None;
        }

        let mut solution = Solution::new();
        let mut current = init;
        while !goals.contains(&current) {
            let arc = self.tree.parent(current);
            assert!(
                arc.is_defined(),
                "finite non-goal vertex {current} has no parent arc"
            );
            assert_ne!(arc.target, current, "parent arc of {current} self-loops");
            assert!(
                self.tree.distance(arc.target) < self.tree.distance(current),
                "parent arc of {current} does not decrease the goal distance"
            );
            solution.push(arc);
            current = arc.target;
        }
        Some(solution)
    }
}
