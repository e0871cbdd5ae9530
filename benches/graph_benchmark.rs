use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use arcflow::{DirectedGraph, Edge, FlowFunction, Network, Vertex};

/// A layered graph: `width` vertices per layer, each wired to every vertex of
/// the next layer.
fn layered(layers: i64, width: i64) -> DirectedGraph {
    let mut graph = DirectedGraph::new();
    for layer in 0..layers - 1 {
        for a in 0..width {
            for b in 0..width {
                graph
                    .add_edge(layer * width + a, (layer + 1) * width + b)
                    .unwrap();
            }
        }
    }
    graph
}

fn layered_network(layers: i64, width: i64) -> Network {
    let source = -1;
    let sink = -2;
    let mut net = Network::new(source, sink).unwrap();
    for edge in layered(layers, width).edges() {
        let (tail, head) = edge.into_endpoints();
        net.add_edge(tail, head, 10).unwrap();
    }
    for v in 0..width {
        net.add_edge(source, v, 10).unwrap();
        net.add_edge((layers - 1) * width + v, sink, 10).unwrap();
    }
    net
}

fn bench_breadth_first_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("breadth_first_search");
    for layers in [10, 100] {
        let graph = layered(layers, 8);
        group.bench_with_input(BenchmarkId::from_parameter(layers), &graph, |b, graph| {
            b.iter(|| black_box(graph.breadth_first_search(&Vertex::new(0)).unwrap()));
        });
    }
    group.finish();
}

fn bench_is_acyclic(c: &mut Criterion) {
    let chain = {
        let mut graph = DirectedGraph::new();
        for i in 0..10_000 {
            graph.add_edge(i, i + 1).unwrap();
        }
        graph
    };
    c.bench_function("is_acyclic_chain_10k", |b| {
        b.iter(|| black_box(chain.is_acyclic()));
    });

    let dense = layered(50, 8);
    c.bench_function("is_acyclic_layered_50x8", |b| {
        b.iter(|| black_box(dense.is_acyclic()));
    });
}

fn bench_residual(c: &mut Criterion) {
    let net = layered_network(20, 8);
    let flow: FlowFunction = net
        .edges()
        .into_iter()
        .map(|edge: Edge| (edge, 5))
        .collect();
    c.bench_function("residual_layered_20x8", |b| {
        b.iter(|| black_box(net.residual(&flow).unwrap()));
    });
}

fn bench_edge_function_updates(c: &mut Criterion) {
    c.bench_function("edge_function_set_1k", |b| {
        b.iter(|| {
            let mut function = FlowFunction::new();
            for i in 0..1_000 {
                function = function.set(Edge::of(i, i + 1), i64::from(i));
            }
            black_box(function.len())
        });
    });
}

criterion_group!(
    benches,
    bench_breadth_first_search,
    bench_is_acyclic,
    bench_residual,
    bench_edge_function_updates
);
criterion_main!(benches);
