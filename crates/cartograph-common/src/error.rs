//! Diagnostic vocabulary for contract-violation aborts.
//!
//! The engine is a deterministic transformer of its inputs and has no
//! recoverable errors: unreachability is reported through an absent
//! solution, and everything else is a broken caller contract or an internal
//! bug. Those abort, and `EngineError` is the message they abort with.

use crate::cost::Cost;
use crate::transition::{OpId, VertexId};
use std::{error::Error, fmt};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A finite cost addition left the representable range.
    CostOverflow { left: Cost, right: Cost },

    /// A finite internal distance does not fit back into 32 bits.
    CostTruncation { cost: Cost },

    /// A split must hand the old shortest-path arc to exactly one of the
    /// two replacement vertices; this one gave it to neither or both.
    SplitArcInheritance {
        v1: VertexId,
        v2: VertexId,
        v1_keeps: bool,
        v2_keeps: bool,
    },

    /// An infinite-cost operator reached the repair Dijkstra's relaxation
    /// loop.
    InfiniteCostRelaxation { op: OpId },

    /// The verifier found a maintained distance that diverges from a fresh
    /// recomputation.
    DistanceMismatch {
        vertex: VertexId,
        maintained: u32,
        recomputed: u32,
    },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CostOverflow { left, right } => {
                write!(f, "cost overflow adding {left} and {right}")
            }
            Self::CostTruncation { cost } => {
                write!(f, "internal cost {cost} does not fit into 32 bits")
            }
            Self::SplitArcInheritance {
                v1,
                v2,
                v1_keeps,
                v2_keeps,
            } => {
                write!(
                    f,
                    "split must hand the old shortest-path arc to exactly one \
                     replacement vertex: {v1} keeps it: {v1_keeps}, {v2} keeps it: {v2_keeps}"
                )
            }
            Self::InfiniteCostRelaxation { op } => {
                write!(f, "infinite-cost operator {op} in repair relaxation")
            }
            Self::DistanceMismatch {
                vertex,
                maintained,
                recomputed,
            } => {
                write!(
                    f,
                    "goal distance of {vertex} diverged: maintained {maintained}, \
                     recomputed {recomputed}"
                )
            }
        }
    }
}

impl Error for EngineError {}
