use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use prodclean_cleaning::{clean, clean_batch, parse_rating, RawProduct};

fn sample(i: usize) -> RawProduct {
    RawProduct {
        title: format!("  eco   friendly bottle {i}ml green and the blue cap  "),
        price: format!("₹{},{:03}.50", i / 1000 + 1, i % 1000),
        rating: match i % 3 {
            0 => "4.2 out of 5".to_string(),
            1 => format!("{}/10", i % 11),
            _ => "rated 3.5 stars".to_string(),
        },
        category: "Kitchen".to_string(),
    }
}

fn bench_single(c: &mut Criterion) {
    let raw = sample(500);
    c.bench_function("clean_single_record", |b| b.iter(|| clean(black_box(&raw))));
}

fn bench_rating_notations(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_rating");
    for input in ["4.2 out of 5", "8 / 10", "rated 3.5 stars", "no rating"] {
        group.bench_with_input(BenchmarkId::from_parameter(input), input, |b, s| {
            b.iter(|| parse_rating(black_box(s)))
        });
    }
    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("clean_batch");
    for size in [10usize, 100, 1_000] {
        let batch: Vec<RawProduct> = (0..size).map(sample).collect();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &batch, |b, batch| {
            b.iter(|| clean_batch(black_box(batch)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_single, bench_rating_notations, bench_batch);
criterion_main!(benches);
