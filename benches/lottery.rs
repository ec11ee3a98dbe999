//! Benchmark suite for registry hot paths
//!
//! Measures the weighted lottery draw and the account listing over registries
//! of increasing size using the divan benchmarking framework.
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench
//! ```

use interest_bank::AccountRegistry;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() {
    divan::main();
}

/// Registry holding `count` special accounts plus as many short-term accounts
fn populated_registry(count: u64) -> AccountRegistry {
    let mut registry = AccountRegistry::new();
    for i in 0..count {
        registry.open_special(2000 * (i % 50 + 1));
        registry.open_short_term(1000 * i);
    }
    registry
}

/// Benchmark a random lottery draw
#[divan::bench(args = [100, 1_000, 100_000])]
fn draw_lottery(bencher: divan::Bencher, count: u64) {
    let registry = populated_registry(count);
    let mut rng = StdRng::seed_from_u64(42);

    bencher
        .with_inputs(|| registry.clone())
        .bench_local_refs(|registry| registry.draw_lottery(&mut rng));
}

/// Benchmark listing every account with freshly computed interest
#[divan::bench(args = [100, 1_000, 100_000])]
fn list_accounts(bencher: divan::Bencher, count: u64) {
    let registry = populated_registry(count);

    bencher.bench_local(|| registry.list_accounts().count());
}
