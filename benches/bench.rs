use std::io;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::SeedableRng;

use pyscripts::{condd_to, gen_normal, Kwargs, Shape};

fn bench_gen_normal(c: &mut Criterion) {
    let mut group = c.benchmark_group("gen_normal");
    for &n in &[8usize, 100, 1000] {
        let shape = Shape::new(n, n);
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &shape, |b, &shape| {
            let mut rng = StdRng::seed_from_u64(0);
            b.iter(|| gen_normal(&mut rng, shape));
        });
    }
    group.finish();
}

fn bench_condd(c: &mut Criterion) {
    let sample = [[0.0; 8]; 8];
    let params: Kwargs = [("start", 2), ("step", 2), ("end", 8)].into_iter().collect();
    c.bench_function("condd_4x7", |b| {
        let mut rng = StdRng::seed_from_u64(0);
        b.iter(|| condd_to(&mut io::sink(), &sample, &params, &mut rng).unwrap());
    });
}

criterion_group!(benches, bench_gen_normal, bench_condd);
criterion_main!(benches);
