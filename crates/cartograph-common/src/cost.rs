//! 32↔64-bit cost encoding.
//!
//! Callers hand the engine non-negative 32-bit operator costs with
//! `u32::MAX` as infinity. Internally the engine works in 64 bits so that
//! zero-cost operators can be lifted to a positive epsilon: when the task
//! has at least one zero-cost operator, every cost is scaled by 2^32 and
//! zero becomes 1. Along any shortest path the epsilons round away under a
//! right shift, so decoded distances still carry the exact original cost,
//! while every internal arc cost stays strictly positive.

use crate::error::EngineError;

/// Internal 64-bit cost scalar.
pub type Cost = u64;

/// External 32-bit infinity.
pub const INF: u32 = u32::MAX;

/// Internal infinity: unreachable.
pub const INF_COST: Cost = u64::MAX;

/// Transient marker for "distance unknown, pending recomputation".
///
/// Never escapes the engine: it must not appear in decoded values or in any
/// distance after a public operation returns.
pub const DIRTY: Cost = u64::MAX - 1;

/// Captures once whether the operator cost table contains a zero.
#[derive(Debug, Copy, Clone)]
pub struct CostModel {
    has_zero_costs: bool,
}

impl CostModel {
    pub fn new(operator_costs: &[u32]) -> Self {
        Self {
            has_zero_costs: operator_costs.iter().any(|&c| c == 0),
        }
    }

    #[inline]
    pub fn has_zero_costs(&self) -> bool {
        self.has_zero_costs
    }

    /// Encode an external cost. Monotone, and `internal(0) > 0`.
    pub fn internal(&self, cost: u32) -> Cost {
        if cost == INF {
            INF_COST
        } else if self.has_zero_costs {
            if cost == 0 {
                1
            } else {
                (cost as u64) << 32
            }
        } else {
            cost as u64
        }
    }

    /// Decode an internal cost back to 32 bits.
    ///
    /// `DIRTY` is a contract violation; a finite value that does not fit in
    /// 32 bits aborts rather than truncating.
    pub fn external(&self, cost: Cost) -> u32 {
        assert_ne!(cost, DIRTY, "DIRTY must never be decoded");
        if cost == INF_COST {
            INF
        } else {
            let decoded = if self.has_zero_costs { cost >> 32 } else { cost };
            if decoded > INF as u64 {
                panic!("{}", EngineError::CostTruncation { cost });
            }
            decoded as u32
        }
    }
}

/// The single saturating addition for internal costs.
///
/// Any infinite operand yields infinity; a finite sum that leaves the
/// representable range aborts. All cost additions in the engine go through
/// here.
#[inline]
pub fn add_costs(left: Cost, right: Cost) -> Cost {
    if left == INF_COST || right == INF_COST {
        return INF_COST;
    }
    match left.checked_add(right) {
        Some(sum) if sum < DIRTY => sum,
        _ => panic!("{}", EngineError::CostOverflow { left, right }),
    }
}
