use anyhow::Result;
use arcflow::{DirectedGraph, Edge, GraphError, GraphOptions, Label, ParentMap, Vertex};

fn labels(ns: &[i64]) -> Vec<Label> {
    ns.iter().copied().map(Label::from).collect()
}

#[test]
fn test_vertices_and_edges_compare_by_label() {
    assert_eq!(Vertex::new(3), Vertex::new(3));
    assert_ne!(Vertex::new(3), Vertex::new("3"));
    assert_eq!(Edge::of("a", "b"), Edge::new(Vertex::new("a"), Vertex::new("b")));
    assert_ne!(Edge::of("a", "b"), Edge::of("b", "a"));
}

#[test]
fn test_build_query_and_shrink() -> Result<()> {
    let mut g = DirectedGraph::new();
    assert!(g.add_edge(1, 2)?);
    assert!(g.add_edge(1, 3)?);
    assert!(!g.add_edge(1, 2)?);
    g.add_vertex(4);

    assert_eq!(g.vertex_count(), 4);
    assert_eq!(g.edge_count(), 2);
    assert_eq!(g.neighbors_of(&Vertex::new(1))?, vec![Vertex::new(2), Vertex::new(3)]);
    assert!(g.neighbors_of(&Vertex::new(4))?.is_empty());
    assert!(g.neighbors_of(&Vertex::new(9)).unwrap_err().is_not_found());

    assert!(g.remove_vertex(&Vertex::new(1)));
    assert_eq!(g.edge_count(), 0);
    assert_eq!(g.vertex_count(), 3);
    Ok(())
}

#[test]
fn test_loopless_graph_rejects_loops() {
    let mut g = DirectedGraph::with_options(GraphOptions::loopless());
    let err = g.add_edge("x", "x").unwrap_err();
    assert!(matches!(err, GraphError::IllegalConfiguration(_)));
    assert!(g.is_empty());
}

#[test]
fn test_bfs_parent_map_and_paths() -> Result<()> {
    let mut g = DirectedGraph::new();
    for (t, h) in [(0, 1), (0, 2), (1, 3), (2, 4), (3, 5), (4, 5), (6, 0)] {
        g.add_edge(t, h)?;
    }
    let parents = g.breadth_first_search(&Vertex::new(0))?;
    assert_eq!(parents.len(), 6);
    assert!(!parents.contains(&Label::from(6)));
    assert_eq!(parents.path_to(&Label::from(5)), Some(labels(&[0, 1, 3, 5])));
    assert_eq!(parents.root(), Some(&Label::from(0)));
    Ok(())
}

#[test]
fn test_bfs_from_absent_source_is_invalid_argument() {
    let g = DirectedGraph::new();
    let err = g.breadth_first_search(&Vertex::new("nowhere")).unwrap_err();
    assert!(matches!(err, GraphError::InvalidArgument(_)));
}

#[test]
fn test_acyclicity_across_components() -> Result<()> {
    let mut g = DirectedGraph::new();
    for (t, h) in [(1, 2), (2, 3), (10, 11), (11, 12)] {
        g.add_edge(t, h)?;
    }
    assert!(g.is_acyclic());

    g.add_edge(12, 10)?;
    assert!(!g.is_acyclic());

    g.remove_edge(&Edge::of(12, 10));
    g.add_edge(3, 3)?;
    assert!(!g.is_acyclic());
    Ok(())
}

#[test]
fn test_long_chain_does_not_overflow_stack() -> Result<()> {
    let mut g = DirectedGraph::new();
    for i in 0..100_000 {
        g.add_edge(i, i + 1)?;
    }
    assert!(g.is_acyclic());
    assert_eq!(g.breadth_first_search(&Vertex::new(0))?.len(), 100_001);

    g.add_edge(100_000, 0)?;
    assert!(!g.is_acyclic());
    Ok(())
}

#[test]
fn test_symmetrized_graph_is_cyclic() -> Result<()> {
    let mut g = DirectedGraph::new();
    g.add_edge("a", "b")?;
    g.add_edge("b", "c")?;
    assert!(g.is_acyclic());
    g.symmetrize();
    assert_eq!(g.edge_count(), 4);
    assert!(!g.is_acyclic());
    Ok(())
}

#[test]
fn test_parent_map_from_pairs() {
    let parents: ParentMap = [("r", "r"), ("a", "r"), ("b", "a")].into_iter().collect();
    assert_eq!(
        parents.path_to(&Label::from("b")),
        Some(vec![Label::from("r"), Label::from("a"), Label::from("b")])
    );
}
