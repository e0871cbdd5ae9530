//! Traversals and cycle detection for [`DirectedGraph`].
//!
//! All traversals are iterative: an explicit queue or stack replaces the call
//! stack, and ancestry is recorded as parent indices rather than recursion
//! frames, so deep graphs cannot overflow the stack.

use std::collections::{BTreeMap, VecDeque};

use serde::{Deserialize, Serialize};

use super::{DirectedGraph, Label, Vertex};
use crate::error::{GraphError, Result};
use crate::graph::access::visited::VisitedFlags;

/// Traversal result: each reached vertex's label mapped to the label of the
/// vertex that discovered it. The traversal source maps to itself.
///
/// Serializes as a list of `[child, parent]` pairs so integer labels survive
/// formats whose map keys must be strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<(Label, Label)>", from = "Vec<(Label, Label)>")]
pub struct ParentMap {
    parents: BTreeMap<Label, Label>,
}

impl ParentMap {
    /// Number of reached vertices.
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    /// Returns `true` if nothing was reached.
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Returns `true` if the vertex of this label was reached.
    pub fn contains(&self, label: &Label) -> bool {
        self.parents.contains_key(label)
    }

    /// The discovering predecessor of `label`.
    pub fn parent_of(&self, label: &Label) -> Option<&Label> {
        self.parents.get(label)
    }

    /// The traversal source, i.e. the entry mapped to itself.
    pub fn root(&self) -> Option<&Label> {
        self.parents
            .iter()
            .find_map(|(child, parent)| (child == parent).then_some(child))
    }

    /// The discovery path from the root to `label`, both included.
    ///
    /// Returns `None` if `label` was not reached or the chain does not lead
    /// back to a root.
    pub fn path_to(&self, label: &Label) -> Option<Vec<Label>> {
        let mut path = vec![label.clone()];
        let mut current = label;
        loop {
            let parent = self.parents.get(current)?;
            if parent == current {
                path.reverse();
                return Some(path);
            }
            if path.len() > self.parents.len() {
                return None;
            }
            path.push(parent.clone());
            current = parent;
        }
    }

    /// `(child, parent)` pairs in label order.
    pub fn iter(&self) -> impl Iterator<Item = (&Label, &Label)> {
        self.parents.iter()
    }

    /// Unwraps the underlying map.
    pub fn into_inner(self) -> BTreeMap<Label, Label> {
        self.parents
    }

    fn record(&mut self, child: &Vertex, parent: &Vertex) {
        self.parents
            .insert(child.label().clone(), parent.label().clone());
    }
}

impl From<ParentMap> for Vec<(Label, Label)> {
    fn from(map: ParentMap) -> Self {
        map.parents.into_iter().collect()
    }
}

impl From<Vec<(Label, Label)>> for ParentMap {
    fn from(pairs: Vec<(Label, Label)>) -> Self {
        pairs.into_iter().collect()
    }
}

impl<L: Into<Label>> FromIterator<(L, L)> for ParentMap {
    fn from_iter<I: IntoIterator<Item = (L, L)>>(iter: I) -> Self {
        Self {
            parents: iter
                .into_iter()
                .map(|(child, parent)| (child.into(), parent.into()))
                .collect(),
        }
    }
}

impl DirectedGraph {
    /// Breadth-first search from `source`.
    ///
    /// Every vertex is enqueued at most once, so the map records the first
    /// vertex to discover it. Vertices unreachable from `source` are absent.
    /// Fails with [`GraphError::InvalidArgument`] if `source` is not in the graph.
    pub fn breadth_first_search(&self, source: &Vertex) -> Result<ParentMap> {
        let start = self.index_of(source).ok_or_else(|| {
            GraphError::invalid(format!("source vertex {source} is not in the graph"))
        })?;

        let mut parents = ParentMap::default();
        let mut visited = VisitedFlags::new(self.vertex_count());
        let mut queue = VecDeque::new();

        visited.try_visit(start);
        parents.record(source, source);
        queue.push_back(start);

        while let Some(u) = queue.pop_front() {
            for &v in self.successors(u) {
                if visited.try_visit(v) {
                    parents.record(self.vertex_at(v), self.vertex_at(u));
                    queue.push_back(v);
                }
            }
        }

        Ok(parents)
    }

    /// Vertices reachable from `source` in depth-first preorder.
    ///
    /// Neighbors are explored in insertion order.
    pub fn depth_first_order(&self, source: &Vertex) -> Result<Vec<Vertex>> {
        let start = self.index_of(source).ok_or_else(|| {
            GraphError::invalid(format!("source vertex {source} is not in the graph"))
        })?;

        let mut order = Vec::new();
        let mut visited = VisitedFlags::new(self.vertex_count());
        let mut stack = vec![start];

        while let Some(u) = stack.pop() {
            if !visited.try_visit(u) {
                continue;
            }
            order.push(self.vertex_at(u).clone());
            for &v in self.successors(u).iter().rev() {
                if !visited.is_visited(v) {
                    stack.push(v);
                }
            }
        }

        Ok(order)
    }

    /// Returns `true` if the graph contains no cycle, self-loops included.
    ///
    /// Runs one iterative depth-first dive per component. Each dive records,
    /// for every vertex it visits, the vertex whose exploration reached it,
    /// and sets aside arcs that point at already visited vertices. Once the
    /// dive is over, such an arc `u -> v` closes a cycle iff `u` descends from
    /// `v` along the recorded parents; arcs into other branches or into
    /// earlier dives do not.
    pub fn is_acyclic(&self) -> bool {
        let n = self.vertex_count();
        let mut visited = VisitedFlags::new(n);
        let mut parent: Vec<usize> = (0..n).collect();
        let mut dives = 0usize;

        while let Some(root) = visited.first_unvisited() {
            dives += 1;
            let mut untaken: Vec<(usize, usize)> = Vec::new();
            let mut stack = vec![(root, root)];

            while let Some((u, from)) = stack.pop() {
                if !visited.try_visit(u) {
                    continue;
                }
                parent[u] = from;
                for &v in self.successors(u) {
                    if v == u {
                        tracing::debug!(vertex = %self.vertex_at(u), "self-loop closes a cycle");
                        return false;
                    }
                    if visited.is_visited(v) {
                        untaken.push((u, v));
                    } else {
                        stack.push((v, u));
                    }
                }
            }

            for (u, v) in untaken {
                if descends_from(&parent, u, v) {
                    tracing::debug!(
                        tail = %self.vertex_at(u),
                        head = %self.vertex_at(v),
                        "back edge closes a cycle"
                    );
                    return false;
                }
            }
        }

        tracing::trace!(dives, vertices = n, "graph is acyclic");
        true
    }
}

/// Walks the parent chain from `u` looking for `ancestor`.
///
/// Stops at a dive root (a vertex that is its own parent), and after as many
/// steps as there are vertices, so a malformed chain cannot loop forever.
fn descends_from(parent: &[usize], u: usize, ancestor: usize) -> bool {
    let mut current = u;
    for _ in 0..=parent.len() {
        if current == ancestor {
            return true;
        }
        let next = parent[current];
        if next == current {
            return false;
        }
        current = next;
    }
    false
}
