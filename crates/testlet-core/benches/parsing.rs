use std::path::PathBuf;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use testlet_core::parser::{parse_testlet_str, validate_testlet_file};

fn testlet_toml(items: usize) -> String {
    let mut s = String::from("[testlet]\nid = \"bench\"\n");
    for i in 0..items {
        let category = if i % 5 < 2 { "calibration" } else { "scored" };
        s.push_str(&format!(
            "\n[[items]]\nid = \"item{i}\"\ncategory = \"{category}\"\n"
        ));
    }
    s
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_testlet");
    let source = PathBuf::from("bench.toml");

    let standard = testlet_toml(10);
    let large = testlet_toml(500);

    group.bench_function("standard", |b| {
        b.iter(|| parse_testlet_str(black_box(&standard), &source))
    });

    group.bench_function("large_500", |b| {
        b.iter(|| parse_testlet_str(black_box(&large), &source))
    });

    let parsed = parse_testlet_str(&large, &source).unwrap();
    group.bench_function("validate_large_500", |b| {
        b.iter(|| validate_testlet_file(black_box(&parsed)))
    });

    group.finish();
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
