//! Lightweight counters for repair behavior.

/// Counters collected across engine operations.
///
/// The engine is single-owner, so these are plain integers rather than
/// atomics. They exist to answer "how much work did that split cost":
/// a healthy refinement loop reconnects most candidates and re-expands few.
#[derive(Debug, Clone, Default)]
pub struct RepairMetrics {
    /// Full Dijkstra runs from the goal set.
    pub initializations: u64,
    /// Split repairs applied.
    pub splits: u64,
    /// Parent arcs redirected onto a replacement vertex at equal cost.
    pub redirected_parents: u64,
    /// Salvage-pass candidates reconnected at their old distance.
    pub reconnections: u64,
    /// Vertices marked dirty and re-expanded.
    pub orphans: u64,
    /// Relaxations performed by the bounded Dijkstra.
    pub expansions: u64,
}

impl RepairMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all counters to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// One-line digest for debugging.
    #[cfg(test)]
    pub fn summary(&self) -> String {
        format!(
            "RepairMetrics {{ inits: {}, splits: {}, redirects: {}, reconnects: {}, orphans: {}, expansions: {} }}",
            self.initializations,
            self.splits,
            self.redirected_parents,
            self.reconnections,
            self.orphans,
            self.expansions,
        )
    }
}
