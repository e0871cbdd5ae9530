//! Residual networks.
//!
//! Given a feasible flow, the residual network keeps every arc reachable from
//! the source whose capacity is not saturated, with its capacity reduced by
//! the flow already routed through it. Searching it for a source-to-sink path
//! is the augmenting step of Ford–Fulkerson, which is left to the caller.

use super::network::Network;
use crate::collections::FlowFunction;
use crate::error::{GraphError, Result};
use crate::graph::access::visited::VisitedFlags;
use crate::graph::basic::Edge;

impl Network {
    /// Builds the residual network of `flow`.
    ///
    /// Explores the network depth-first from the source, entering every vertex
    /// once. For each arc met, the residual capacity is `capacity - flow`;
    /// saturated arcs are left out and the others are added to a fresh network
    /// with the same source and sink.
    ///
    /// Fails with [`GraphError::CapacityViolated`] if the flow on an arc is
    /// negative or exceeds its capacity, and with [`GraphError::NotFound`] if a
    /// reachable arc has no flow value. No partial result is returned.
    pub fn residual(&self, flow: &FlowFunction) -> Result<Network> {
        let graph = self.graph();
        // The source is inserted at construction and networks never drop vertices.
        debug_assert!(graph.contains_vertex(self.source()));
        let start = graph
            .index_of(self.source())
            .ok_or_else(|| GraphError::not_found(format!("no such vertex: {}", self.source())))?;

        let mut residual = Network::new(self.source().clone(), self.sink().clone())?;
        let mut visited = VisitedFlags::new(graph.vertex_count());
        let mut stack = vec![start];
        visited.try_visit(start);

        tracing::debug!(
            source = %self.source(),
            sink = %self.sink(),
            arcs = graph.edge_count(),
            "building residual network"
        );

        while let Some(u) = stack.pop() {
            for &v in graph.successors(u) {
                let edge = Edge::new(graph.vertex_at(u).clone(), graph.vertex_at(v).clone());
                let capacity = self.capacity_of(&edge)?;
                let routed = flow.get(&edge)?;
                let remaining = match capacity.checked_sub(routed) {
                    Some(remaining) if routed >= 0 && remaining >= 0 => remaining,
                    _ => {
                        return Err(GraphError::CapacityViolated {
                            tail: edge.tail().label().clone(),
                            head: edge.head().label().clone(),
                            capacity,
                            flow: routed,
                        })
                    }
                };

                if remaining == 0 {
                    tracing::trace!(%edge, "saturated arc left out of residual network");
                } else {
                    let (tail, head) = edge.into_endpoints();
                    residual.add_edge(tail, head, remaining)?;
                }

                if visited.try_visit(v) {
                    stack.push(v);
                }
            }
        }

        tracing::debug!(arcs = residual.edge_count(), "residual network built");
        Ok(residual)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::basic::{Label, Vertex};

    fn e(t: i64, h: i64) -> Edge {
        Edge::of(t, h)
    }

    /// 0 is the source, 4 the sink.
    fn sample() -> Network {
        let mut net = Network::new(0, 4).unwrap();
        for (t, h, c) in [(0, 1, 5), (0, 2, 8), (0, 3, 6), (1, 3, 9), (2, 1, 7), (2, 3, 4), (3, 4, 3)] {
            net.add_edge(t, h, c).unwrap();
        }
        net
    }

    fn flow(values: &[(i64, i64, i64)]) -> FlowFunction {
        values.iter().map(|&(t, h, f)| (e(t, h), f)).collect()
    }

    #[test]
    fn test_flow_above_capacity_is_rejected() {
        let f = flow(&[(0, 1, 6), (0, 2, 0), (0, 3, 0), (1, 3, 6), (2, 1, 0), (2, 3, 0), (3, 4, 3)]);
        let err = sample().residual(&f).unwrap_err();
        assert_eq!(
            err,
            GraphError::CapacityViolated {
                tail: Label::from(0),
                head: Label::from(1),
                capacity: 5,
                flow: 6,
            }
        );
    }

    #[test]
    fn test_negative_flow_is_rejected() {
        let f = flow(&[(0, 1, -1), (0, 2, 0), (0, 3, 0), (1, 3, 0), (2, 1, 0), (2, 3, 0), (3, 4, 0)]);
        assert!(matches!(
            sample().residual(&f),
            Err(GraphError::CapacityViolated { flow: -1, .. })
        ));
    }

    #[test]
    fn test_feasible_flow_residual_capacities() {
        let f = flow(&[(0, 1, 1), (0, 2, 2), (0, 3, 0), (1, 3, 1), (2, 1, 0), (2, 3, 2), (3, 4, 3)]);
        let net = sample();
        let res = net.residual(&f).unwrap();

        assert_eq!(res.source(), net.source());
        assert_eq!(res.sink(), net.sink());
        let expected = [(0, 1, 4), (0, 2, 6), (0, 3, 6), (1, 3, 8), (2, 1, 7), (2, 3, 2)];
        for (t, h, c) in expected {
            assert_eq!(res.capacity_of(&e(t, h)).unwrap(), c, "arc ({t}, {h})");
        }
        // 3 -> 4 is saturated.
        assert!(!res.graph().contains_edge(&e(3, 4)));
        assert!(res.capacity_of(&e(3, 4)).unwrap_err().is_not_found());
        assert_eq!(res.edge_count(), expected.len());
    }

    #[test]
    fn test_missing_flow_value_is_not_found() {
        let f = flow(&[(0, 1, 1)]);
        assert!(sample().residual(&f).unwrap_err().is_not_found());
    }

    #[test]
    fn test_unreachable_arcs_are_ignored() {
        let mut net = Network::new("s", "t").unwrap();
        net.add_edge("s", "t", 2).unwrap();
        net.add_edge("x", "t", 5).unwrap();
        let f: FlowFunction = [(Edge::of("s", "t"), 1)].into_iter().collect();
        let res = net.residual(&f).unwrap();
        assert_eq!(res.edges(), vec![Edge::of("s", "t")]);
        assert!(!res.graph().contains_vertex(&Vertex::new("x")));
    }

    #[test]
    fn test_zero_flow_residual_equals_network() {
        let net = sample();
        let zero: FlowFunction = net.edges().into_iter().map(|edge| (edge, 0)).collect();
        let res = net.residual(&zero).unwrap();
        assert_eq!(res.capacity_function(), net.capacity_function());
        assert_eq!(res.edge_count(), net.edge_count());
    }
}
