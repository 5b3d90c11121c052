use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use ragno::algo::{build_view, CentralityEngine, ClusteringAnalyzer, EntityMeta, PageRankEngine};
use ragno::graph::{EdgeKind, GraphBuilder, NodeMetadata};
use ragno::GraphAnalyzer;

/// Documents each linked to a window of entities, plus an entity chain
fn corpus_graph(docs: usize, entities: usize) -> GraphBuilder {
    let mut graph = GraphBuilder::new();
    for d in 0..docs {
        graph.add_node(format!("d{}", d), NodeMetadata::document(format!("Doc {}", d)));
    }
    for e in 0..entities {
        graph.add_node(format!("e{}", e), NodeMetadata::entity(format!("Entity {}", e)));
    }
    for d in 0..docs {
        for offset in 0..5 {
            let e = (d * 3 + offset) % entities;
            graph
                .add_edge(format!("d{}", d), format!("e{}", e), 1.0, EdgeKind::Contains)
                .unwrap();
        }
    }
    for e in 1..entities {
        graph
            .add_edge(format!("e{}", e - 1), format!("e{}", e), 0.5, EdgeKind::Cooccurrence)
            .unwrap();
    }
    graph
}

/// Benchmark graph construction throughput
fn bench_graph_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph_build");

    for size in [100, 1000, 5000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let graph = corpus_graph(size, size * 2);
                criterion::black_box(graph.edge_count());
            });
        });
    }
    group.finish();
}

/// Benchmark bridging betweenness and closeness
fn bench_centrality(c: &mut Criterion) {
    let mut group = c.benchmark_group("centrality");

    for size in [100, 500, 1000].iter() {
        let graph = corpus_graph(*size, size * 2);
        let view = build_view(&graph);

        group.bench_with_input(BenchmarkId::new("betweenness", size), size, |b, _| {
            b.iter(|| criterion::black_box(CentralityEngine::new(&view).betweenness()));
        });
        group.bench_with_input(BenchmarkId::new("closeness", size), size, |b, _| {
            b.iter(|| criterion::black_box(CentralityEngine::new(&view).closeness()));
        });
    }
    group.finish();
}

/// Benchmark local clustering
fn bench_clustering(c: &mut Criterion) {
    let mut group = c.benchmark_group("clustering");

    for size in [100, 1000, 5000].iter() {
        let graph = corpus_graph(*size, size * 2);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let mut graph = graph.clone();
                let view = build_view(&graph);
                criterion::black_box(ClusteringAnalyzer::new(&view).apply(&mut graph));
            });
        });
    }
    group.finish();
}

/// Benchmark personalized PageRank on a ring with chords
fn bench_pagerank(c: &mut Criterion) {
    let mut group = c.benchmark_group("pagerank");

    for size in [1000, 10_000].iter() {
        let mut engine = PageRankEngine::default();
        for i in 0..*size {
            engine.add_entity(format!("n{}", i), EntityMeta::new(format!("Node {}", i), "concept"));
        }
        for i in 0..*size {
            engine
                .add_edge(format!("n{}", i), format!("n{}", (i + 1) % size), 1.0)
                .unwrap();
            engine
                .add_edge(format!("n{}", i), format!("n{}", (i * 7 + 3) % size), 0.5)
                .unwrap();
        }
        let topic = engine.create_topic_personalization(&["n0", "n1", "n2"]);

        group.bench_with_input(BenchmarkId::new("global", size), size, |b, _| {
            b.iter(|| criterion::black_box(engine.calculate_ppr(None)));
        });
        group.bench_with_input(BenchmarkId::new("topic", size), size, |b, _| {
            b.iter(|| criterion::black_box(engine.calculate_ppr(Some(&topic))));
        });
    }
    group.finish();
}

/// Benchmark the full structural analysis pipeline
fn bench_full_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_analysis");
    group.sample_size(10);

    for size in [100, 500].iter() {
        let graph = corpus_graph(*size, size * 2);
        let analyzer = GraphAnalyzer::default();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let mut graph = graph.clone();
                criterion::black_box(analyzer.analyze(&mut graph));
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_graph_build,
    bench_centrality,
    bench_clustering,
    bench_pagerank,
    bench_full_analysis
);
criterion_main!(benches);
