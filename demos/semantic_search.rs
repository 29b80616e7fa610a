//! Ranks a small mixed corpus against a few queries.
//! `RUST_LOG=tf_idf_search=debug cargo run --example semantic_search`

use std::time::Instant;

use tf_idf_search::{Index, IndexConfig};
use tracing_subscriber::EnvFilter;

const DOCUMENTS: [&str; 15] = [
    "Attention is all you need. We propose a new network architecture based solely on attention mechanisms.",
    "BERT pre-trains deep bidirectional representations from unlabeled text by jointly conditioning on both left and right context.",
    "GPT-4 is a large multimodal model that exhibits human-level performance on various professional benchmarks.",
    "Docker containers provide lightweight isolation for running applications in reproducible environments.",
    "Kubernetes orchestrates containerized workloads across a cluster of machines with automatic scaling.",
    "Modal lets you run any Python function in the cloud with a single decorator. No infrastructure to manage.",
    "FastAPI is a modern web framework for building APIs with Python based on standard type hints.",
    "NumPy provides support for large multi-dimensional arrays and matrices along with mathematical functions.",
    "The transformer architecture uses self-attention to process sequences in parallel rather than sequentially.",
    "Serverless computing abstracts away infrastructure management so developers focus purely on code.",
    "Batch inference pipelines process large datasets by distributing work across many GPU workers in parallel.",
    "Vector databases store embeddings and enable fast approximate nearest neighbor search at scale.",
    "Fine-tuning a pre-trained language model on domain-specific data dramatically improves task performance.",
    "Cloud container runtimes execute user code in isolated sandboxes with sub-second cold start times.",
    "The Python GIL limits true parallelism but async IO and multiprocessing provide effective workarounds.",
];

const QUERIES: [&str; 3] = [
    "running code in the cloud without managing servers",
    "machine learning language models",
    "container orchestration and deployment",
];

fn main() -> tf_idf_search::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let start = Instant::now();
    let index: Index = Index::build_texts(DOCUMENTS, IndexConfig::default())?;
    println!(
        "Indexed {} documents ({} terms) in {:.1}ms\n",
        index.size(),
        index.vocabulary_size(),
        start.elapsed().as_secs_f64() * 1000.0
    );

    for query in QUERIES {
        let hits = index.query(query, 3)?;
        println!("Query: \"{query}\"");
        for (rank, hit) in hits.iter().enumerate() {
            let snippet: String = DOCUMENTS[hit.position].chars().take(70).collect();
            println!("  {}. [{:.3}] {}...", rank + 1, hit.score, snippet);
        }
        println!();
    }

    let elapsed = start.elapsed().as_secs_f64();
    println!(
        "Total: {:.1}ms | {:.0} queries/sec",
        elapsed * 1000.0,
        QUERIES.len() as f64 / elapsed
    );
    Ok(())
}
