use cartograph_common::{Cost, VertexId};
use std::cmp::Reverse;
use std::collections::BinaryHeap;


/// Min-heap of `(cost, vertex)` pairs.
///
/// Multiple entries per vertex are permitted; whoever pops must skip
/// entries whose cost exceeds the vertex's current distance. The engine
/// keeps two instances alive across calls to reuse their allocations, so
/// every public operation leaves them empty.
#[derive(Debug, Clone, Default)]
pub struct OpenQueue {
    heap: BinaryHeap<Reverse<(Cost, VertexId)>>,
}

impl OpenQueue {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, cost: Cost, vertex: VertexId) {
        self.heap.push(Reverse((cost, vertex)));
    }

    #[inline]
    pub fn pop(&mut self) -> Option<(Cost, VertexId)> {
        self.heap.pop().map(|Reverse(pair)| pair)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }
}
