//! Criterion benchmarks for the kotoba analysis pipeline.

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use kotoba::WordCounter;
use std::hint::black_box;

/// Generate space-delimited Latin text.
fn latin_text(words: usize) -> String {
    let vocabulary = [
        "content", "platform", "editor", "reading", "time", "estimate", "word", "count",
        "language", "script", "token", "segment", "search", "keyword", "relevance", "score",
    ];

    let mut text = String::new();
    for i in 0..words {
        if i > 0 {
            text.push(' ');
        }
        text.push_str(vocabulary[i % vocabulary.len()]);
    }
    text
}

/// Generate unspaced Japanese text with interleaved Latin runs.
fn mixed_text(repeats: usize) -> String {
    "さらに「やり遂げる」ためのEnjin。".repeat(repeats)
}

fn bench_count(c: &mut Criterion) {
    let counter = WordCounter::new();
    let latin = latin_text(1000);
    let mixed = mixed_text(100);

    let mut group = c.benchmark_group("count");

    group.throughput(Throughput::Bytes(latin.len() as u64));
    group.bench_function("latin_1000_words", |b| {
        b.iter(|| counter.count(black_box(&latin)))
    });

    group.throughput(Throughput::Bytes(mixed.len() as u64));
    group.bench_function("mixed_script_100_phrases", |b| {
        b.iter(|| counter.count(black_box(&mixed)))
    });

    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let counter = WordCounter::new();
    let mixed = mixed_text(100);

    c.bench_function("parse_mixed_script", |b| {
        b.iter(|| counter.parse(black_box(&mixed)))
    });
}

fn bench_search(c: &mut Criterion) {
    let counter = WordCounter::new();
    let content = latin_text(1000);

    c.bench_function("search_keywords", |b| {
        b.iter(|| counter.search(black_box("reading time estimate"), black_box(&content)))
    });
}

fn bench_metrics(c: &mut Criterion) {
    let counter = WordCounter::new();
    let content = latin_text(5000);

    c.bench_function("metrics_5000_words", |b| {
        b.iter(|| counter.metrics(black_box(&content)))
    });
}

criterion_group!(benches, bench_count, bench_parse, bench_search, bench_metrics);
criterion_main!(benches);
