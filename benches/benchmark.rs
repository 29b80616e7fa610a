use criterion::{criterion_group, criterion_main, Criterion};
use tf_idf_search::{Index, IndexConfig};

const WORDS: &[&str] = &[
    "attention", "network", "architecture", "container", "cluster", "scaling", "python",
    "function", "cloud", "serverless", "inference", "pipeline", "dataset", "vector",
    "embedding", "search", "language", "model", "runtime", "sandbox", "parallel", "worker",
    "matrix", "array", "framework", "deployment", "orchestration", "benchmark", "gpu", "cache",
];

/// Deterministic synthetic corpus, xorshift32 word picks
fn synthetic_corpus(docs: usize, words_per_doc: usize) -> Vec<String> {
    let mut state = 0x9E37_79B9u32;
    let mut next = || {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        state
    };
    (0..docs)
        .map(|_| {
            (0..words_per_doc)
                .map(|_| WORDS[next() as usize % WORDS.len()])
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

fn build_and_query_benchmark(c: &mut Criterion) {
    let texts = synthetic_corpus(2_000, 80);

    c.bench_function("build_index", |b| {
        b.iter(|| Index::<usize>::build_texts(texts.iter().cloned(), IndexConfig::default()))
    });

    let index: Index = match Index::build_texts(texts.iter().cloned(), IndexConfig::default()) {
        Ok(index) => index,
        Err(err) => panic!("benchmark corpus failed to index: {err}"),
    };

    c.bench_function("query_top10", |b| {
        b.iter(|| index.query("container orchestration on a gpu cluster", 10))
    });
}

criterion_group!(benches, build_and_query_benchmark);
criterion_main!(benches);
