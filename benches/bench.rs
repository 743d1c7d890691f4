//! Criterion benchmarks for fz.
//!
//! - Single candidate matching, including the worst case for the restart
//!   strategy (a long run of the term's first character)
//! - The full pipeline over many such candidates

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use fz::matching::{SearchTerm, best_match};
use fz::pipeline::Searcher;
use std::hint::black_box;

/// `len - 2` copies of `m` followed by `oo`.
fn pathological_line(len: usize) -> String {
    format!("{}oo", "m".repeat(len - 2))
}

/// Generate path-like candidates.
fn generate_paths(count: usize) -> Vec<String> {
    let dirs = ["src", "tests", "benches", "docs", "examples", "target"];
    let names = ["lib", "main", "engine", "searcher", "batch", "highlight"];

    (0..count)
        .map(|i| {
            format!(
                "./{}/{}_{}/{}.rs",
                dirs[i % dirs.len()],
                names[(i * 7) % names.len()],
                i,
                names[(i * 13) % names.len()]
            )
        })
        .collect()
}

fn bench_match_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("match_engine");
    let term = SearchTerm::new("moo");

    for len in [10, 100, 1000] {
        let line = pathological_line(len);
        group.bench_with_input(BenchmarkId::new("pathological", len), &line, |b, line| {
            b.iter(|| best_match(black_box(line), black_box(&term)))
        });
    }

    let term = SearchTerm::new("srchrs");
    let paths = generate_paths(1000);
    group.throughput(Throughput::Elements(paths.len() as u64));
    group.bench_function("paths", |b| {
        b.iter(|| {
            for path in &paths {
                black_box(best_match(path, &term));
            }
        })
    });

    group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    group.sample_size(10); // Whole-corpus runs are slow

    for count in [1_000, 10_000, 50_000] {
        let corpus: Vec<String> = (0..count).map(|_| pathological_line(100)).collect();
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("pathological_find", count), &corpus, |b, corpus| {
            b.iter(|| {
                let mut searcher = Searcher::new("moo").unwrap();
                for line in corpus {
                    searcher.append(line).unwrap();
                }
                black_box(searcher.ranked_results(25).unwrap())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_match_engine, bench_pipeline);
criterion_main!(benches);
