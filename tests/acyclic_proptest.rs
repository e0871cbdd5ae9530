use arcflow::{DirectedGraph, Vertex};
use petgraph::algo::is_cyclic_directed;
use petgraph::graph::{DiGraph, NodeIndex};
use proptest::prelude::*;

fn build(n: usize, arcs: &[(usize, usize)]) -> (DirectedGraph, DiGraph<(), ()>) {
    let mut ours = DirectedGraph::new();
    let mut reference = DiGraph::new();
    for i in 0..n {
        ours.add_vertex(i64::try_from(i).unwrap());
        reference.add_node(());
    }
    for &(t, h) in arcs {
        let (t, h) = (t % n, h % n);
        ours.add_edge(i64::try_from(t).unwrap(), i64::try_from(h).unwrap())
            .unwrap();
        reference.update_edge(NodeIndex::new(t), NodeIndex::new(h), ());
    }
    (ours, reference)
}

proptest! {
    #[test]
    fn test_is_acyclic_agrees_with_petgraph(
        n in 1usize..12,
        arcs in proptest::collection::vec((0usize..12, 0usize..12), 0..30),
    ) {
        let (ours, reference) = build(n, &arcs);
        prop_assert_eq!(ours.is_acyclic(), !is_cyclic_directed(&reference));
    }

    #[test]
    fn test_forward_arcs_are_acyclic(
        n in 2usize..20,
        arcs in proptest::collection::vec((0usize..20, 0usize..20), 0..60),
    ) {
        // Arcs from lower to higher labels only.
        let forward: Vec<_> = arcs
            .into_iter()
            .map(|(a, b)| (a % n, b % n))
            .filter(|(a, b)| a < b)
            .collect();
        let (ours, _) = build(n, &forward);
        prop_assert!(ours.is_acyclic());
    }

    #[test]
    fn test_bfs_reaches_what_petgraph_reaches(
        n in 1usize..12,
        arcs in proptest::collection::vec((0usize..12, 0usize..12), 0..30),
    ) {
        let (ours, reference) = build(n, &arcs);
        let parents = ours.breadth_first_search(&Vertex::new(0)).unwrap();
        let mut bfs = petgraph::visit::Bfs::new(&reference, NodeIndex::new(0));
        let mut reached = 0;
        while bfs.next(&reference).is_some() {
            reached += 1;
        }
        prop_assert_eq!(parents.len(), reached);
    }
}
