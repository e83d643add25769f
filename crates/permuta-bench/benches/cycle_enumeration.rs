//! Cycle enumeration benchmarks: swaps, fixed-length cycles and route search.
#![allow(clippy::expect_used)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use permuta_bench::{SizeTier, generate_participants};
use permuta_core::{CycleQuery, ExchangeEngine, RouteFilter, build_graph};

const TIERS: [(&str, SizeTier); 3] = [
    ("S", SizeTier::Small),
    ("M", SizeTier::Medium),
    ("L", SizeTier::Large),
];

fn engine(tier: SizeTier) -> ExchangeEngine {
    ExchangeEngine::new(generate_participants(&tier.config(42)))
}

/// A route that at least one participant actually wants, so the search is
/// not cut short by the feasibility check.
fn busy_route(engine: &ExchangeEngine) -> CycleQuery {
    let p = engine
        .participants()
        .iter()
        .find(|p| !p.desired_courts().is_empty())
        .expect("generated data has preferences");
    CycleQuery::for_route(p.current_court(), &p.desired_courts()[0])
}

fn bench_graph_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_graph");
    for (name, tier) in TIERS {
        let participants = generate_participants(&tier.config(42));
        group.bench_function(BenchmarkId::from_parameter(name), |b| {
            b.iter(|| build_graph(&participants));
        });
    }
    group.finish();
}

fn bench_direct_swaps(c: &mut Criterion) {
    let mut group = c.benchmark_group("direct_swaps");
    for (name, tier) in TIERS {
        let e = engine(tier);
        group.bench_function(BenchmarkId::from_parameter(name), |b| {
            b.iter(|| e.direct_swaps(&RouteFilter::none()));
        });
    }
    group.finish();
}

fn bench_cycles_by_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("cycles");
    group.sample_size(20);
    for (name, tier) in TIERS {
        let e = engine(tier);
        let lengths: &[usize] = match tier {
            SizeTier::Small => &[3, 4, 5, 6],
            SizeTier::Medium => &[3, 4],
            SizeTier::Large => &[3],
        };
        for &k in lengths {
            group.bench_function(BenchmarkId::new(format!("k{k}"), name), |b| {
                b.iter(|| e.cycles(k, &CycleQuery::all()));
            });
        }
    }
    group.finish();
}

fn bench_route_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10);
    for (name, tier) in [("S", SizeTier::Small), ("M", SizeTier::Medium)] {
        let e = engine(tier);
        let query = busy_route(&e);
        group.bench_function(BenchmarkId::from_parameter(name), |b| {
            b.iter(|| e.search(&query));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_graph_construction,
    bench_direct_swaps,
    bench_cycles_by_length,
    bench_route_search
);
criterion_main!(benches);
