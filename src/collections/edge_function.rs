//! Persistent mappings from edges to values.
//!
//! Capacities, weights and flows are all edge functions. Every "mutating"
//! call returns a new function and leaves the receiver untouched, so a
//! function can be handed out freely (to residual construction, to another
//! network, across threads) without fear of retroactive change.
//!
//! ## Representation
//!
//! A function is a chain of immutable layers behind `Arc`s. The bottom layer is
//! a sorted map; every update pushes one small layer (`Bind` or `Unbind`) on
//! top of the previous version, sharing the whole chain underneath. Once a
//! chain grows past [`MAX_LAYER_DEPTH`] the next update flattens it into a
//! fresh base map, which keeps lookups and drops bounded.
//!
//! Requests that cannot change anything (adding an already mapped edge,
//! removing an unmapped one) return a handle to the *same* layer chain, which
//! [`EdgeFunction::ptr_eq`] detects in O(1).
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `get` | \(O(d + \log n)\) | `d` ≤ `MAX_LAYER_DEPTH` layers, then the base map |
//! | `get_by_labels` | \(O(n)\) | Linear scan over mapped edges |
//! | `add` / `remove` | \(O(d + \log n)\) amortized | Flattening costs \(O(n \log n)\) every `MAX_LAYER_DEPTH` updates |
//! | `len` | \(O(1)\) | Cached per layer |

use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::sync::Arc;

use num_traits::{CheckedAdd, Zero};

use crate::error::{GraphError, Result};
use crate::graph::basic::{Edge, Label};

/// Number of update layers tolerated above the base map before flattening.
pub const MAX_LAYER_DEPTH: usize = 32;

enum Layer<V> {
    Base(BTreeMap<Edge, V>),
    Bind {
        edge: Edge,
        value: V,
        len: usize,
        depth: usize,
        rest: Arc<Layer<V>>,
    },
    Unbind {
        edge: Edge,
        len: usize,
        depth: usize,
        rest: Arc<Layer<V>>,
    },
}

impl<V> Layer<V> {
    fn len(&self) -> usize {
        match self {
            Layer::Base(map) => map.len(),
            Layer::Bind { len, .. } | Layer::Unbind { len, .. } => *len,
        }
    }

    fn depth(&self) -> usize {
        match self {
            Layer::Base(_) => 0,
            Layer::Bind { depth, .. } | Layer::Unbind { depth, .. } => *depth,
        }
    }

    fn lookup(&self, key: &Edge) -> Option<&V> {
        let mut layer = self;
        loop {
            match layer {
                Layer::Base(map) => return map.get(key),
                Layer::Bind {
                    edge, value, rest, ..
                } => {
                    if edge == key {
                        return Some(value);
                    }
                    layer = rest.as_ref();
                }
                Layer::Unbind { edge, rest, .. } => {
                    if edge == key {
                        return None;
                    }
                    layer = rest.as_ref();
                }
            }
        }
    }

    /// Visits every live association exactly once, newest layers first.
    fn for_each_live<'a>(&'a self, mut f: impl FnMut(&'a Edge, &'a V)) {
        let mut shadowed: HashSet<&Edge> = HashSet::new();
        let mut layer = self;
        loop {
            match layer {
                Layer::Base(map) => {
                    for (edge, value) in map {
                        if !shadowed.contains(edge) {
                            f(edge, value);
                        }
                    }
                    return;
                }
                Layer::Bind {
                    edge, value, rest, ..
                } => {
                    if shadowed.insert(edge) {
                        f(edge, value);
                    }
                    layer = rest.as_ref();
                }
                Layer::Unbind { edge, rest, .. } => {
                    shadowed.insert(edge);
                    layer = rest.as_ref();
                }
            }
        }
    }
}

/// A persistent function from edges to values of type `V`.
///
/// Cloning is O(1) and shares all storage.
pub struct EdgeFunction<V> {
    root: Arc<Layer<V>>,
}

/// Maps each edge to the maximum flow it may carry.
pub type CapacityFunction = EdgeFunction<i64>;
/// Maps each edge to the flow routed through it.
pub type FlowFunction = EdgeFunction<i64>;
/// Maps each edge to its weight.
pub type WeightFunction = EdgeFunction<i64>;

impl<V> Clone for EdgeFunction<V> {
    fn clone(&self) -> Self {
        Self {
            root: Arc::clone(&self.root),
        }
    }
}

impl<V> Default for EdgeFunction<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> EdgeFunction<V> {
    /// Creates the empty function.
    pub fn new() -> Self {
        Self {
            root: Arc::new(Layer::Base(BTreeMap::new())),
        }
    }

    /// Number of mapped edges.
    #[inline]
    pub fn len(&self) -> usize {
        self.root.len()
    }

    /// Returns `true` if no edge is mapped.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if `edge` has an associated value.
    #[inline]
    pub fn contains(&self, edge: &Edge) -> bool {
        self.root.lookup(edge).is_some()
    }

    /// Returns `true` if both handles share the same version.
    ///
    /// This is how callers learn that `add`/`remove` had no effect.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.root, &other.root)
    }

    /// Returns a reference to the value mapped to `edge`.
    pub fn value_of(&self, edge: &Edge) -> Result<&V> {
        self.root
            .lookup(edge)
            .ok_or_else(|| GraphError::not_found(format!("no value associated to {edge}")))
    }

    /// Finds the mapped edge joining the vertices of the given labels.
    pub fn find_by_labels(&self, tail: &Label, head: &Label) -> Option<&Edge> {
        let mut found = None;
        self.root.for_each_live(|edge, _| {
            if found.is_none() && edge.joins(tail, head) {
                found = Some(edge);
            }
        });
        found
    }

    /// Mapped edges in ascending order.
    pub fn edges(&self) -> Vec<Edge> {
        let mut edges = Vec::with_capacity(self.len());
        self.root.for_each_live(|edge, _| edges.push(edge.clone()));
        edges.sort();
        edges
    }

    /// Returns a function without the association of `edge`.
    ///
    /// If `edge` is unmapped the returned handle is this very version.
    pub fn remove(&self, edge: &Edge) -> Self
    where
        V: Clone,
    {
        if !self.contains(edge) {
            return self.clone();
        }
        self.push(|rest| Layer::Unbind {
            edge: edge.clone(),
            len: rest.len() - 1,
            depth: rest.depth() + 1,
            rest,
        })
    }

    /// Returns a function without the association of the edge joining the
    /// vertices of the given labels, or this very version if there is none.
    pub fn remove_by_labels(&self, tail: &Label, head: &Label) -> Self
    where
        V: Clone,
    {
        match self.find_by_labels(tail, head).cloned() {
            Some(edge) => self.remove(&edge),
            None => self.clone(),
        }
    }

    fn push(&self, layer: impl FnOnce(Arc<Layer<V>>) -> Layer<V>) -> Self
    where
        V: Clone,
    {
        let rest = if self.root.depth() >= MAX_LAYER_DEPTH {
            tracing::trace!(len = self.len(), "flattening edge function layers");
            Arc::new(Layer::Base(self.to_map()))
        } else {
            Arc::clone(&self.root)
        };
        Self {
            root: Arc::new(layer(rest)),
        }
    }

    /// Materializes the live associations into a sorted map.
    pub fn to_map(&self) -> BTreeMap<Edge, V>
    where
        V: Clone,
    {
        let mut map = BTreeMap::new();
        self.root.for_each_live(|edge, value| {
            map.insert(edge.clone(), value.clone());
        });
        map
    }
}

impl<V: Clone> EdgeFunction<V> {
    /// Returns a function that also maps `edge` to `value`.
    ///
    /// If `edge` is already mapped nothing changes and the returned handle is
    /// this very version; see [`EdgeFunction::set`] to overwrite.
    pub fn add(&self, edge: Edge, value: V) -> Self {
        if self.contains(&edge) {
            return self.clone();
        }
        self.push(|rest| Layer::Bind {
            edge,
            value,
            len: rest.len() + 1,
            depth: rest.depth() + 1,
            rest,
        })
    }

    /// Returns a function mapping `edge` to `value`, replacing any previous
    /// association.
    pub fn set(&self, edge: Edge, value: V) -> Self {
        let present = self.contains(&edge);
        self.push(|rest| Layer::Bind {
            edge,
            value,
            len: if present { rest.len() } else { rest.len() + 1 },
            depth: rest.depth() + 1,
            rest,
        })
    }

    /// Live associations in ascending edge order.
    pub fn entries(&self) -> Vec<(Edge, V)> {
        self.to_map().into_iter().collect()
    }
}

impl<V: Copy> EdgeFunction<V> {
    /// Returns the value mapped to `edge`.
    pub fn get(&self, edge: &Edge) -> Result<V> {
        self.value_of(edge).copied()
    }

    /// Returns the value mapped to the edge joining the vertices of the given
    /// labels. Linear in the number of mapped edges.
    pub fn get_by_labels(&self, tail: &Label, head: &Label) -> Result<V> {
        self.find_by_labels(tail, head)
            .and_then(|edge| self.root.lookup(edge).copied())
            .ok_or_else(|| GraphError::not_found(format!("no value associated to ({tail}, {head})")))
    }

    /// Sum of all mapped values, or `None` if the sum overflows `V`.
    pub fn total(&self) -> Option<V>
    where
        V: Zero + CheckedAdd,
    {
        let mut sum = Some(V::zero());
        self.root
            .for_each_live(|_, value| sum = sum.and_then(|acc| acc.checked_add(value)));
        sum
    }
}

impl<V: Clone> FromIterator<(Edge, V)> for EdgeFunction<V> {
    /// Builds a function from associations; the first value given for an edge wins.
    fn from_iter<I: IntoIterator<Item = (Edge, V)>>(iter: I) -> Self {
        let mut map = BTreeMap::new();
        for (edge, value) in iter {
            map.entry(edge).or_insert(value);
        }
        Self {
            root: Arc::new(Layer::Base(map)),
        }
    }
}

impl<V: PartialEq> PartialEq for EdgeFunction<V> {
    /// Observable equality: same mapped edges with equal values.
    fn eq(&self, other: &Self) -> bool {
        if self.ptr_eq(other) {
            return true;
        }
        if self.len() != other.len() {
            return false;
        }
        let mut equal = true;
        self.root.for_each_live(|edge, value| {
            if equal && other.root.lookup(edge) != Some(value) {
                equal = false;
            }
        });
        equal
    }
}

impl<V: Eq> Eq for EdgeFunction<V> {}

impl<V: fmt::Debug> fmt::Debug for EdgeFunction<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries = Vec::with_capacity(self.len());
        self.root.for_each_live(|edge, value| entries.push((edge, value)));
        entries.sort_by(|a, b| a.0.cmp(b.0));
        f.debug_map().entries(entries).finish()
    }
}
