//! Criterion benchmarks for novel rule discovery.
//!
//! Uses synthetic baskets built from a few item communities so that strong,
//! diverse rules exist to be found.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;
use u_novelrule::data::{mine_frequent_itemsets, Transaction};
use u_novelrule::discovery::metrics::RuleMetrics;
use u_novelrule::discovery::{DiscoveryConfig, DiscoveryRunner};
use u_novelrule::random::create_rng;

/// `n` baskets, each drawn mostly from one of `communities` groups of 5 items.
fn synthetic_baskets(n: usize, communities: u32) -> Vec<Transaction<u32>> {
    let mut rng = create_rng(42);
    (0..n)
        .map(|_| {
            let base = rng.random_range(0..communities) * 5;
            let mut basket: Transaction<u32> = Transaction::new();
            for offset in 0..5 {
                if rng.random_bool(0.6) {
                    basket.insert(base + offset);
                }
            }
            basket.insert(rng.random_range(0..communities * 5));
            basket
        })
        .collect()
}

fn bench_mining(c: &mut Criterion) {
    let mut group = c.benchmark_group("apriori");
    for &n in &[200, 1000] {
        let transactions = synthetic_baskets(n, 4);
        group.bench_with_input(BenchmarkId::from_parameter(n), &transactions, |b, t| {
            b.iter(|| black_box(mine_frequent_itemsets(black_box(t), 0.05, 3)))
        });
    }
    group.finish();
}

fn bench_metrics(c: &mut Criterion) {
    let transactions = synthetic_baskets(1000, 4);
    let antecedent: Transaction<u32> = [0, 1].into();
    let consequent: Transaction<u32> = [2].into();
    c.bench_function("rule_metrics_1000", |b| {
        b.iter(|| {
            black_box(RuleMetrics::compute(
                black_box(&antecedent),
                black_box(&consequent),
                &transactions,
            ))
        })
    });
}

fn bench_discovery(c: &mut Criterion) {
    let mut group = c.benchmark_group("discovery");
    group.sample_size(10);

    for &n in &[200, 500] {
        let transactions = synthetic_baskets(n, 4);
        let config = DiscoveryConfig::default()
            .with_min_support(0.05)
            .with_max_k(3)
            .with_population_size(50)
            .with_max_generations(30)
            .with_seed(42);
        let itemsets = mine_frequent_itemsets(&transactions, config.min_support, config.max_k);
        group.bench_with_input(
            BenchmarkId::from_parameter(n),
            &(itemsets, transactions, config),
            |b, (i, t, c)| {
                b.iter(|| {
                    let result = DiscoveryRunner::run(black_box(i), black_box(t), black_box(c));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_mining, bench_metrics, bench_discovery);
criterion_main!(benches);
