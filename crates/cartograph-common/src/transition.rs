use serde::{Deserialize, Serialize};
use std::fmt;

/// Dense abstract-state id.
///
/// Ids are stable across splits: the split vertex keeps its slot as the
/// first replacement half and one fresh id is appended for the second.
#[derive(
    Debug, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct VertexId(u32);

impl VertexId {
    /// Marks "no vertex" inside an undefined transition.
    pub const UNDEFINED: VertexId = VertexId(u32::MAX);

    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Self::UNDEFINED {
            f.write_str("v#undef")
        } else {
            write!(f, "v{}", self.0)
        }
    }
}

/// Dense operator id indexing the fixed cost table.
#[derive(
    Debug, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct OpId(u32);

impl OpId {
    pub const UNDEFINED: OpId = OpId(u32::MAX);

    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for OpId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Self::UNDEFINED {
            f.write_str("op#undef")
        } else {
            write!(f, "op{}", self.0)
        }
    }
}

/// One labeled edge endpoint: taking `op` leads to `target`.
///
/// Adjacency snapshots are rows of these, and the shortest-path tree stores
/// one per vertex as its parent arc. [`Transition::UNDEFINED`] marks "no
/// parent": goal vertices and freshly invalidated tree slots.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub op: OpId,
    pub target: VertexId,
}

impl Transition {
    pub const UNDEFINED: Transition = Transition {
        op: OpId::UNDEFINED,
        target: VertexId::UNDEFINED,
    };

    pub const fn new(op: OpId, target: VertexId) -> Self {
        Self { op, target }
    }

    #[inline]
    pub fn is_defined(&self) -> bool {
        *self != Self::UNDEFINED
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_defined() {
            write!(f, "[{} -> {}]", self.op, self.target)
        } else {
            f.write_str("[undef]")
        }
    }
}

/// One adjacency row: all transitions out of (or into) a vertex.
pub type Transitions = Vec<Transition>;

/// An extracted plan: the transitions from an initial vertex to a goal.
pub type Solution = Vec<Transition>;
