use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use rand_distr::{Distribution, Zipf};

use topfreq::TopFreq;

fn benchmark_observe(c: &mut Criterion, num_requests: usize) {
    let mut rng = rand::rng();
    let zipf = Zipf::new(100_000.0, 1.03).unwrap();
    let mut cache = TopFreq::with_capacity(100);

    let mut data = Vec::with_capacity(num_requests);
    for _ in 0..num_requests {
        let key = zipf.sample(&mut rng) as u64;
        data.push(key);
    }

    let mut group = c.benchmark_group(format!("Observe_{}", num_requests));
    group.sample_size(60); // Reduce the sample count
    group.warm_up_time(std::time::Duration::from_secs(3)); // Increase the warm-up time
    group.measurement_time(std::time::Duration::from_secs(10)); // Increase the measurement time

    group.bench_function("Observe", |b| {
        b.iter(|| {
            for &key in data.iter() {
                cache.observe(black_box(key)).unwrap();
            }
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    benchmark_observe_100,
    benchmark_observe_10_000,
    benchmark_observe_1_000_000
);
criterion_main!(benches);

fn benchmark_observe_100(c: &mut Criterion) {
    benchmark_observe(c, 100);
}

fn benchmark_observe_10_000(c: &mut Criterion) {
    benchmark_observe(c, 10_000);
}

fn benchmark_observe_1_000_000(c: &mut Criterion) {
    benchmark_observe(c, 1_000_000);
}
