/*!
 * Scheduler Benchmarks
 *
 * Full runs of each algorithm over workloads of increasing size
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sched_sim::{Algorithm, ProcessLifecycle, ProcessSpec, Simulator};

fn populated(count: u32) -> Simulator {
    let mut sim = Simulator::builder().with_seed(17).build().unwrap();
    for i in 0..count {
        sim.create(
            ProcessSpec::new(format!("p{i}"))
                .with_cpu(1 + (i * 7) % 10)
                .with_priority(1 + (i % 5) as i32),
        );
    }
    sim
}

fn bench_full_run(c: &mut Criterion) {
    for algorithm in Algorithm::ALL {
        let mut group = c.benchmark_group(format!("full_run_{}", algorithm.as_str()));

        for count in [10u32, 100, 1_000] {
            group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
                b.iter_batched(
                    || populated(count),
                    |mut sim| black_box(sim.run_algorithm(algorithm).finish()),
                    criterion::BatchSize::SmallInput,
                );
            });
        }

        group.finish();
    }
}

fn bench_admin_ops(c: &mut Criterion) {
    c.bench_function("block_unblock_cycle", |b| {
        let mut sim = populated(1_000);
        b.iter(|| {
            for pid in (1..=1_000).step_by(3) {
                sim.block(black_box(pid)).ok();
            }
            for pid in (1..=1_000).step_by(3) {
                sim.unblock(black_box(pid)).ok();
            }
        });
    });
}

criterion_group!(benches, bench_full_run, bench_admin_ops);
criterion_main!(benches);
