use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use testlet_core::config::TestletConfig;
use testlet_core::model::Item;
use testlet_core::testlet::Testlet;

fn make_testlet(config: &TestletConfig) -> Testlet {
    let mut items = Vec::with_capacity(config.total_count);
    items.extend((0..config.calibration_total).map(|i| Item::calibration(format!("pretest{i}"))));
    items.extend((0..config.scored_total).map(|j| Item::scored(format!("operational{j}"))));
    Testlet::new("bench", Some(items), config).unwrap()
}

fn bench_randomize(c: &mut Criterion) {
    let mut group = c.benchmark_group("randomize");

    let standard = make_testlet(&TestletConfig::default());
    group.bench_function("standard_seeded_rng", |b| {
        let mut rng = StdRng::seed_from_u64(42);
        b.iter(|| black_box(&standard).randomize_with(&mut rng))
    });

    group.bench_function("standard_fresh_rng", |b| {
        b.iter(|| black_box(&standard).randomize())
    });

    let large_config = TestletConfig::new(200, 80, 120, 20).unwrap();
    let large = make_testlet(&large_config);
    group.bench_function("large_200", |b| {
        let mut rng = StdRng::seed_from_u64(42);
        b.iter(|| black_box(&large).randomize_with(&mut rng))
    });

    group.finish();
}

fn bench_construct(c: &mut Criterion) {
    let config = TestletConfig::default();
    let items = make_testlet(&config).items().to_vec();

    c.bench_function("construct_standard", |b| {
        b.iter(|| Testlet::from_slice("bench", black_box(&items), &config))
    });
}

criterion_group!(benches, bench_randomize, bench_construct);
criterion_main!(benches);
