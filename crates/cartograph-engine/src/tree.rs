use cartograph_common::{Cost, Transition, VertexId, DIRTY, INF_COST};


/// The shortest-path tree: per-vertex goal distance and parent arc, plus
/// the list of vertices currently marked dirty.
///
/// Pure data; the repair algorithms live in the engine. Outside a repair
/// call the dirty list is empty and no distance is `DIRTY`.
#[derive(Debug, Clone, Default)]
pub struct PathTree {
    distances: Vec<Cost>,
    parents: Vec<Transition>,
    dirty: Vec<VertexId>,
}

impl PathTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            distances: Vec::with_capacity(capacity),
            parents: Vec::with_capacity(capacity),
            dirty: Vec::new(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Reinitialize for `num_vertices` vertices: everything unreachable,
    /// no parents, no dirty marks. Keeps allocations.
    pub fn reset(&mut self, num_vertices: usize) {
        self.distances.clear();
        self.distances.resize(num_vertices, INF_COST);
        self.parents.clear();
        self.parents.resize(num_vertices, Transition::UNDEFINED);
        self.dirty.clear();
    }

    /// Extend the id space to `num_vertices`. Never shrinks.
    pub fn grow(&mut self, num_vertices: usize) {
        debug_assert!(num_vertices >= self.len());
        self.distances.resize(num_vertices, INF_COST);
        self.parents.resize(num_vertices, Transition::UNDEFINED);
    }

    #[inline]
    pub fn distance(&self, v: VertexId) -> Cost {
        self.distances[v.index()]
    }

    #[inline]
    pub fn set_distance(&mut self, v: VertexId, distance: Cost) {
        self.distances[v.index()] = distance;
    }

    #[inline]
    pub fn parent(&self, v: VertexId) -> Transition {
        self.parents[v.index()]
    }

    #[inline]
    pub fn set_parent(&mut self, v: VertexId, arc: Transition) {
        self.parents[v.index()] = arc;
    }

    pub fn set_goal(&mut self, v: VertexId) {
        self.distances[v.index()] = 0;
        self.parents[v.index()] = Transition::UNDEFINED;
    }

    /// Flag `v` as pending recomputation. Its previous parent arc is
    /// invalid from here on. `v` must not already be dirty.
    pub fn mark_dirty(&mut self, v: VertexId) {
        debug_assert!(!self.dirty.contains(&v));
        self.distances[v.index()] = DIRTY;
        self.parents[v.index()] = Transition::UNDEFINED;
        self.dirty.push(v);
    }

    #[inline]
    pub fn dirty(&self) -> &[VertexId] {
        &self.dirty
    }

    #[inline]
    pub fn dirty_len(&self) -> usize {
        self.dirty.len()
    }

    #[inline]
    pub fn dirty_at(&self, i: usize) -> VertexId {
        self.dirty[i]
    }

    pub fn clear_dirty(&mut self) {
        self.dirty.clear();
    }

    #[inline]
    pub fn distances(&self) -> &[Cost] {
        &self.distances
    }
}
