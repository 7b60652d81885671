use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use itemforge_core::ItemId;
use itemforge_items::{InMemoryItemStore, ItemStore, NewItem};

fn seeded_store(n: u64) -> InMemoryItemStore {
    let store = InMemoryItemStore::new();
    for i in 0..n {
        store.create(NewItem::new(format!("item-{i}"), Some("seeded".to_string())));
    }
    store
}

fn bench_operation_latency(c: &mut Criterion) {
    let mut group = c.benchmark_group("store_operation_latency");

    group.bench_function("create", |b| {
        let store = InMemoryItemStore::new();
        b.iter(|| {
            black_box(store.create(NewItem::new(black_box("Test Item"), None)));
        });
    });

    group.bench_function("get_hit", |b| {
        let store = seeded_store(1_000);
        b.iter(|| {
            black_box(store.get(black_box(ItemId::new(500))).unwrap());
        });
    });

    group.bench_function("get_miss", |b| {
        let store = seeded_store(1_000);
        b.iter(|| {
            black_box(store.get(black_box(ItemId::new(999_999))).unwrap_err());
        });
    });

    group.bench_function("update", |b| {
        let store = seeded_store(1_000);
        b.iter(|| {
            black_box(
                store
                    .update(ItemId::new(500), NewItem::new(black_box("Updated"), None))
                    .unwrap(),
            );
        });
    });

    // Each iteration creates then deletes so the store size stays fixed.
    group.bench_function("create_delete", |b| {
        let store = seeded_store(1_000);
        b.iter(|| {
            let item = store.create(NewItem::new("transient", None));
            store.delete(black_box(item.id)).unwrap();
        });
    });

    group.finish();
}

fn bench_list_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("store_list");

    for size in [10u64, 100, 1_000, 10_000].iter() {
        group.throughput(Throughput::Elements(*size));
        group.bench_with_input(BenchmarkId::new("list", size), size, |b, &size| {
            let store = seeded_store(size);
            b.iter(|| black_box(store.list()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_operation_latency, bench_list_scaling);
criterion_main!(benches);
