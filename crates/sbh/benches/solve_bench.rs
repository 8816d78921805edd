//! Criterion benches for graph construction and full reconstruction.
//!
//! Inputs are spectra of seeded random sequences; results live under
//! `target/criterion`.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::{rngs::StdRng, SeedableRng};
use sbh::{build_graph, degree_table, eulerian_walk, random_sequence, solve_with_defaults, spectrum};

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("sbh");
    for &(len, l) in &[(1_000usize, 8usize), (10_000, 12), (100_000, 16)] {
        let mut rng = StdRng::seed_from_u64(len as u64);
        let seq = random_sequence(&mut rng, len);
        let lmers = spectrum(&seq, l);
        let tag = format!("n{len}-l{l}");

        group.bench_function(BenchmarkId::new("build_graph", &tag), |b| {
            b.iter(|| build_graph(&lmers).unwrap())
        });
        group.bench_function(BenchmarkId::new("eulerian_walk", &tag), |b| {
            b.iter_batched(
                || {
                    let g = build_graph(&lmers).unwrap();
                    let d = degree_table(&g);
                    (g, d)
                },
                |(g, d)| eulerian_walk(&g, &d).unwrap(),
                BatchSize::LargeInput,
            )
        });
        group.bench_function(BenchmarkId::new("solve", &tag), |b| {
            b.iter(|| solve_with_defaults(&lmers).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_solve);
criterion_main!(benches);
