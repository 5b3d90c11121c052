use anyhow::Context;
use ragno::graph::{EdgeKind, GraphBuilder, GraphSnapshot, NodeMetadata};
use ragno::{entities_from_graph, AnalysisConfig, GraphAnalyzer, TopicQuery};
use serde_json::json;

/// Usage: `ragno [SNAPSHOT.json] [CONFIG.yaml|CONFIG.json]`
///
/// Without a snapshot a small built-in graph is analyzed.
fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let snapshot_path = args.next();
    let config = match args.next() {
        Some(path) => AnalysisConfig::from_file(&path)
            .with_context(|| format!("failed to load config {}", path))?,
        None => AnalysisConfig::default(),
    };

    eprintln!("Ragno Graph Analytics v{}", ragno::version());

    let analyzer = GraphAnalyzer::new(config);
    let mut graph = match snapshot_path {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read snapshot {}", path))?;
            analyzer.build_graph(GraphSnapshot::from_json_str(&text)?)?
        }
        None => demo_graph()?,
    };

    let analysis = analyzer.analyze(&mut graph);

    let engine = analyzer.build_ppr_engine(&entities_from_graph(&graph), &[])?;
    let topics = vec![
        TopicQuery::new("neuroscience", ["e_neuron", "e_plasticity"]),
        TopicQuery::new("graphs", ["e_graph"]),
    ];
    let ranking = analyzer.rank(&engine, &topics);

    let output = json!({
        "analysis": analysis,
        "ranking": ranking,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn demo_graph() -> anyhow::Result<GraphBuilder> {
    let mut graph = GraphBuilder::new();

    graph.add_node("d_brain", NodeMetadata::document("Brain Networks").with_size(3.0));
    graph.add_node("d_algo", NodeMetadata::document("Graph Algorithms").with_size(2.0));

    let entities = [
        ("e_neuron", "Neuron Network", "concept"),
        ("e_plasticity", "Synaptic Plasticity", "process"),
        ("e_graph", "Graph Network", "concept"),
        ("e_hebb", "Donald Hebb", "person"),
        ("e_euler", "Leonhard Euler", "person"),
    ];
    for (id, label, kind) in entities {
        graph.add_node(id, NodeMetadata::entity(label).with_property("type", kind));
    }

    for entity in ["e_neuron", "e_plasticity", "e_hebb"] {
        graph.add_edge("d_brain", entity, 1.0, EdgeKind::Contains)?;
    }
    for entity in ["e_graph", "e_euler"] {
        graph.add_edge("d_algo", entity, 1.0, EdgeKind::Contains)?;
    }
    graph.add_edge("e_neuron", "e_plasticity", 0.8, EdgeKind::Cooccurrence)?;
    graph.add_edge("e_neuron", "e_graph", 0.6, EdgeKind::CrossDomain)?;

    Ok(graph)
}
