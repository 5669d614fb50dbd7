use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use json_core::{parse, to_string, ArrayBuilder, ObjectBuilder};

/// A document of `rows` user records, built with the builders.
fn sample_document(rows: usize) -> String {
    let users: ArrayBuilder = (0..rows)
        .map(|i| {
            ObjectBuilder::new()
                .with("id", i as i64)
                .with("name", format!("user-{i}"))
                .with("email", format!("user{i}@example.com"))
                .with("score", i as f64 * 1.25)
                .with("active", i % 3 != 0)
                .with("tags", vec!["alpha", "beta", "gamma"])
                .with("bio", "line one\nline \"two\"\twith escapes")
        })
        .collect();
    ObjectBuilder::new()
        .with("total", rows as i64)
        .with("users", users)
        .build()
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for rows in [10, 100, 1000] {
        let text = sample_document(rows);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rows), &text, |b, text| {
            b.iter(|| parse(black_box(text)))
        });
    }
    group.finish();
}

fn bench_serialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize");
    for rows in [10, 100, 1000] {
        let value = parse(&sample_document(rows)).expect("sample document must parse");
        group.bench_with_input(BenchmarkId::from_parameter(rows), &value, |b, value| {
            b.iter(|| to_string(black_box(value)))
        });
    }
    group.finish();
}

fn bench_build(c: &mut Criterion) {
    c.bench_function("build_100_rows", |b| b.iter(|| sample_document(black_box(100))));
}

criterion_group!(benches, bench_parse, bench_serialize, bench_build);
criterion_main!(benches);
