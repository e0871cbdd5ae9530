//! Visited sets for graph traversals.
//!
//! Traversals address vertices by their dense index in the adjacency store, so
//! visited state is a flat flag vector sized to the graph at the start of the
//! traversal. Keeping it here lets BFS, the cycle check and residual
//! construction express visited logic the same way.

/// A per-vertex visited flag vector.
pub(crate) struct VisitedFlags {
    flags: Vec<bool>,
    remaining: usize,
    cursor: usize,
}

impl VisitedFlags {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            flags: vec![false; len],
            remaining: len,
            cursor: 0,
        }
    }

    /// Returns `true` iff the vertex was not yet visited, marking it visited.
    #[inline(always)]
    pub(crate) fn try_visit(&mut self, vertex: usize) -> bool {
        let slot = &mut self.flags[vertex];
        if *slot {
            return false;
        }
        *slot = true;
        self.remaining -= 1;
        true
    }

    #[inline(always)]
    pub(crate) fn is_visited(&self, vertex: usize) -> bool {
        self.flags[vertex]
    }

    /// The lowest-indexed vertex not yet visited.
    ///
    /// Flags are never cleared, so the scan resumes where the previous call
    /// stopped and a full sweep costs \(O(n)\) overall.
    pub(crate) fn first_unvisited(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        while self.flags[self.cursor] {
            self.cursor += 1;
        }
        Some(self.cursor)
    }
}
