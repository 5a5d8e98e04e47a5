use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use owned_avl::AvlTree;
use rand::seq::SliceRandom;
use rand::{Rng, thread_rng};
use std::collections::BTreeSet;

fn random_values(count: usize) -> Vec<u64> {
    let mut rng = thread_rng();
    let mut values: Vec<u64> = (0..count).map(|_| rng.r#gen()).collect();
    values.sort_unstable();
    values.dedup();
    values.shuffle(&mut rng);
    values
}

fn bench_avl_insert(c: &mut Criterion) {
    let values = random_values(10000);

    let mut group = c.benchmark_group("avl_insert");
    group.throughput(Throughput::Elements(values.len() as u64));
    group.bench_function("insert_10000_u64", |b| {
        b.iter(|| {
            let mut tree = AvlTree::new();
            for &value in &values {
                tree.insert(black_box(value));
            }
        })
    });
    group.bench_function("insert_10000_u64_sequential", |b| {
        b.iter(|| {
            let mut tree = AvlTree::new();
            for value in 0..values.len() as u64 {
                tree.insert(black_box(value));
            }
        })
    });
    group.finish();
}

fn bench_btreeset_insert(c: &mut Criterion) {
    let values = random_values(10000);

    let mut group = c.benchmark_group("btreeset_insert");
    group.throughput(Throughput::Elements(values.len() as u64));
    group.bench_function("insert_10000_u64", |b| {
        b.iter(|| {
            let mut tree = BTreeSet::new();
            for &value in &values {
                tree.insert(black_box(value));
            }
        })
    });
    group.finish();
}

fn bench_avl_remove(c: &mut Criterion) {
    let mut values = random_values(10000);
    values.shuffle(&mut thread_rng());

    let mut group = c.benchmark_group("avl_remove");
    group.throughput(Throughput::Elements(values.len() as u64));
    group.bench_function("remove_10000_u64", |b| {
        b.iter_batched(
            || values.iter().copied().collect::<AvlTree<u64>>(),
            |mut tree| {
                for value in &values {
                    black_box(tree.remove(value));
                }
            },
            criterion::BatchSize::LargeInput,
        )
    });
    group.bench_function("remove_absent_10000_u64", |b| {
        let mut evens: AvlTree<u64> = (0..10000u64).map(|v| v * 2).collect();
        b.iter(|| {
            for value in 0..10000u64 {
                black_box(evens.remove(&(value * 2 + 1)));
            }
        })
    });
    group.finish();
}

fn bench_avl_search(c: &mut Criterion) {
    let mut values = random_values(10000);
    let tree: AvlTree<u64> = values.iter().copied().collect();
    values.shuffle(&mut thread_rng());

    let mut group = c.benchmark_group("avl_search");
    group.throughput(Throughput::Elements(values.len() as u64));
    group.bench_function("search_10000_u64", |b| {
        b.iter(|| {
            for value in &values {
                black_box(tree.contains(value));
            }
        })
    });
    group.finish();
}

fn bench_btreeset_search(c: &mut Criterion) {
    let mut values = random_values(10000);
    let tree: BTreeSet<u64> = values.iter().copied().collect();
    values.shuffle(&mut thread_rng());

    let mut group = c.benchmark_group("btreeset_search");
    group.throughput(Throughput::Elements(values.len() as u64));
    group.bench_function("search_10000_u64", |b| {
        b.iter(|| {
            for value in &values {
                black_box(tree.contains(value));
            }
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_avl_insert,
    bench_btreeset_insert,
    bench_avl_remove,
    bench_avl_search,
    bench_btreeset_search
);
criterion_main!(benches);
