use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use electrovault_core::ItemId;
use electrovault_inventory::{Inventory, Item, NewItem, Price, DEFAULT_TOP_N, KNOWN_CATEGORIES};

/// Deterministic inventory of `size` items spread over the known categories.
fn build_inventory(size: usize) -> Inventory {
    let items = (0..size)
        .map(|i| {
            let category = KNOWN_CATEGORIES[i % KNOWN_CATEGORIES.len()];
            let price = Price::new(10.0 + (i % 997) as f64 * 3.25).unwrap();
            Item::new(
                ItemId::new(i as u64 + 1),
                format!("Component {i}"),
                category,
                price,
                (i % 40) as u32,
            )
        })
        .collect();
    Inventory::from_items(items).unwrap()
}

fn bench_aggregates(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregates");

    for size in [10usize, 500, 5_000] {
        let inventory = build_inventory(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("summary", size), &inventory, |b, inv| {
            b.iter(|| black_box(inv.summary()));
        });

        group.bench_with_input(
            BenchmarkId::new("category_value_distribution", size),
            &inventory,
            |b, inv| {
                b.iter(|| black_box(inv.category_value_distribution()));
            },
        );

        group.bench_with_input(BenchmarkId::new("top_expensive", size), &inventory, |b, inv| {
            b.iter(|| black_box(inv.top_expensive(DEFAULT_TOP_N).len()));
        });
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    let inventory = build_inventory(5_000);

    for term in ["", "gpu", "component 42", "no such part"] {
        group.bench_with_input(BenchmarkId::from_parameter(term), &term, |b, term| {
            b.iter(|| black_box(inventory.search(term).len()));
        });
    }

    group.finish();
}

fn bench_add(c: &mut Criterion) {
    let inventory = build_inventory(5_000);

    // Clone + add mirrors what the store does per mutation.
    c.bench_function("clone_and_add_5000", |b| {
        b.iter(|| {
            let mut next = inventory.clone();
            next.add(NewItem::new("RTX 4090", "GPU", 1599.99, 3)).unwrap();
            black_box(next.len())
        });
    });
}

criterion_group!(benches, bench_aggregates, bench_search, bench_add);
criterion_main!(benches);
