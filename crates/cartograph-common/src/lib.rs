//! Shared vocabulary for the cartograph shortest-path engine.
//!
//! The engine crate owns all algorithms; this crate owns the plain data
//! every caller touches: dense vertex and operator ids, labeled transitions,
//! the 32↔64-bit cost encoding, and the diagnostic error type used when a
//! contract is violated.

pub mod cost;
pub mod error;
pub mod transition;

pub use cost::{add_costs, Cost, CostModel, DIRTY, INF, INF_COST};
pub use error::EngineError;
pub use transition::{OpId, Solution, Transition, Transitions, VertexId};
