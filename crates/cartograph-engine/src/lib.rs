//! Cartograph incremental shortest-path engine.
//!
//! Maintains, under a stream of vertex-splitting refinements, the
//! shortest-path tree from every vertex of an abstract transition system
//! *to* its goal set. After each split the tree is repaired incrementally:
//! only the vertices whose distance may actually have changed are touched.

pub mod engine;
pub mod metrics;
pub mod queue;
pub mod repair;
pub mod solution;
pub mod tree;
pub mod verify;

#[cfg(test)]
mod tests;

pub use engine::{Engine, GoalSet};
pub use metrics::RepairMetrics;
pub use queue::OpenQueue;
pub use tree::PathTree;
pub use verify::compute_distances;

/// Configuration for the shortest-path engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Re-check the tree invariants after every split repair. Expensive
    /// (one pass over all edges); meant for tests and debugging.
    pub validate_repairs: bool,
    /// Pre-allocate engine buffers for this many vertices.
    pub reserve_vertices: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            validate_repairs: false,
            reserve_vertices: 0,
        }
    }
}
