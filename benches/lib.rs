// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

use closure_slides::deck;
use closure_slides::syntax::{HighlightPool, HighlightingService, Language, SourceDocument, highlight};

fn bench_highlight(c: &mut Criterion) {
    let mut group = c.benchmark_group("highlight");

    for entry in deck::catalog() {
        group.throughput(Throughput::Bytes(entry.code.len() as u64));
        group.bench_with_input(BenchmarkId::new("slide", entry.slug()), entry.code, |b, code| {
            b.iter(|| highlight(black_box(code), Language::Tsx))
        });
    }

    let large = vec![deck::default_entry().code; 100].join("\n");
    group.throughput(Throughput::Bytes(large.len() as u64));
    group.bench_function("large-tsx", |b| b.iter(|| highlight(black_box(&large), Language::Tsx)));
    group.bench_function("large-escape-only", |b| {
        b.iter(|| highlight(black_box(&large), Language::Css))
    });

    group.finish();
}

fn bench_service(c: &mut Criterion) {
    let mut service = HighlightingService::new();
    let doc = deck::default_entry().document(false);
    service.highlight(&doc);

    c.bench_function("service-cache-hit", |b| b.iter(|| service.highlight(black_box(&doc))));
}

fn bench_pool(c: &mut Criterion) {
    let pool = HighlightPool::new(4);
    let docs: Vec<SourceDocument> = deck::catalog().iter().map(|e| e.document(false)).collect();

    c.bench_function("pool-deck", |b| {
        b.iter(|| pool.highlight_all(black_box(docs.clone())))
    });
}

criterion_group!(benches, bench_highlight, bench_service, bench_pool);
criterion_main!(benches);
