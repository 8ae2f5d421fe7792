use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use knapsack_dag::{KnapsackEngine, KnapsackInstance, Strategy};
use rand::{rngs::StdRng, Rng, SeedableRng};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

fn random_instance(rng: &mut StdRng, n: usize) -> KnapsackInstance {
    let values = (0..n).map(|_| f64::from(rng.gen_range(1u32..1_000))).collect();
    let volumes: Vec<f64> = (0..n).map(|_| f64::from(rng.gen_range(1u32..100))).collect();
    let capacity = volumes.iter().sum::<f64>() / 2.0;
    KnapsackInstance::new(values, volumes, capacity).unwrap()
}

fn rss_kib() -> u64 {
    let mut sys = System::new();
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    if let Some(p) = sys.process(get_current_pid().unwrap()) {
        p.memory()
    } else {
        0
    }
}

fn bench_knapsack_perf(c: &mut Criterion) {
    let mut group = c.benchmark_group("knapsack_perf");
    group.sample_size(10);
    for strategy in [Strategy::Layered, Strategy::Dijkstra] {
        for &n in &[50usize, 100, 200] {
            group.bench_function(format!("{strategy}_items_{n}"), |b| {
                b.iter_batched(
                    || {
                        let mut rng = StdRng::seed_from_u64(42);
                        random_instance(&mut rng, n)
                    },
                    |inst| {
                        let before = rss_kib();
                        let solution = KnapsackEngine::with_strategy(strategy).run(&inst);
                        let after = rss_kib();
                        criterion::black_box(solution.value);
                        eprintln!(
                            "RSS KiB delta ({strategy} {n}): {}",
                            after.saturating_sub(before)
                        );
                    },
                    BatchSize::PerIteration,
                )
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_knapsack_perf);
criterion_main!(benches);
