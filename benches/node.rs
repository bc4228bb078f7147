//! Benchmarks for DLOB node construction and price resolution.
//!
//! ## Running Benchmarks
//!
//! ```bash
//! cargo bench
//! cargo bench -- get_price
//! ```
//!
//! Results are saved to `target/criterion/` with HTML reports.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use dlob_node::{create_node, Direction, DlobNode, NodeType, OraclePriceData, Order, UserAccount};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

// ============================================================================
// HELPER FUNCTIONS - Deterministic order generation
// ============================================================================

fn generate_orders(count: usize, seed: u64) -> Vec<Order> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    (0..count)
        .map(|i| {
            Order::new(
                i as u32,
                if rng.gen_bool(0.5) { Direction::Long } else { Direction::Short },
                rng.gen_range(1..=10_000_000_000),
                0,
                rng.gen_range(0..1_000),
            )
            .with_oracle_price_offset(rng.gen_range(-5_000_000..=5_000_000))
            .with_auction(
                100_000_000,
                rng.gen_range(90_000_000..=110_000_000),
                rng.gen_range(0..=20),
            )
        })
        .collect()
}

// ============================================================================
// BENCHMARKS
// ============================================================================

fn bench_create_node(c: &mut Criterion) {
    let orders = generate_orders(1_000, 42);
    let account = UserAccount::new([1; 32]);

    let mut group = c.benchmark_group("create_node");
    group.throughput(Throughput::Elements(orders.len() as u64));

    for node_type in NodeType::ALL {
        group.bench_with_input(
            BenchmarkId::from_parameter(node_type),
            &node_type,
            |b, node_type| {
                b.iter(|| {
                    for order in &orders {
                        let node = create_node(node_type.as_str(), order.clone(), account);
                        black_box(node.ok());
                    }
                })
            },
        );
    }
    group.finish();
}

fn bench_get_price(c: &mut Criterion) {
    let account = UserAccount::new([1; 32]);
    let nodes: Vec<_> = generate_orders(1_000, 7)
        .into_iter()
        .filter_map(|order| create_node("floatingLimit", order, account).ok())
        .collect();
    let oracle = OraclePriceData::new(100_000_000, 10_000, 500);

    let mut group = c.benchmark_group("get_price");
    group.throughput(Throughput::Elements(nodes.len() as u64));
    group.bench_function("floating_with_auction", |b| {
        b.iter(|| {
            for node in &nodes {
                black_box(node.get_price(black_box(&oracle), black_box(510)).ok());
            }
        })
    });
    group.finish();
}

criterion_group!(benches, bench_create_node, bench_get_price);
criterion_main!(benches);
