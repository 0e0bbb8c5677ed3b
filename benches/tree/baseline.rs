use std::collections::BTreeSet;

use critbit::{CritBitTree, RecordBuf};
use criterion::{criterion_group, Criterion};

use crate::common::get_samples;

fn btree_insert(samples: &[RecordBuf]) -> BTreeSet<&[u8]> {
    let mut btree = BTreeSet::new();
    for record in samples {
        btree.insert(record.as_ref());
    }
    btree
}

fn critbit_insert(samples: &[RecordBuf]) -> CritBitTree<'_> {
    let mut tree = CritBitTree::new();
    for record in samples {
        tree.insert(record.as_record()).expect("unbounded tree");
    }
    tree
}

pub fn bench(c: &mut Criterion) {
    let samples = get_samples(rand::random(), 32, 2..18, 256, 8);
    let nbytes = samples.iter().map(|s| s.as_ref().len() as u64).sum();
    {
        let mut group = c.benchmark_group("baseline/search");
        group.throughput(criterion::Throughput::Bytes(nbytes));
        group.bench_function("btree", |b| {
            let btree = btree_insert(&samples);
            b.iter(|| {
                for record in &samples {
                    assert!(btree.contains(record.as_ref()));
                }
            });
        });
        group.bench_function("critbit", |b| {
            let tree = critbit_insert(&samples);
            b.iter(|| {
                for record in &samples {
                    assert!(tree.contains(record.as_record()));
                }
            });
        });
    }
    {
        let mut group = c.benchmark_group("baseline/insert");
        group.throughput(criterion::Throughput::Bytes(nbytes));
        group.bench_function("btree", |b| b.iter(|| btree_insert(&samples)));
        group.bench_function("critbit", |b| b.iter(|| critbit_insert(&samples)));
    }
    {
        let mut group = c.benchmark_group("baseline/remove");
        group.throughput(criterion::Throughput::Bytes(nbytes));
        group.bench_function("btree", |b| {
            b.iter_batched(
                || btree_insert(&samples),
                |mut btree| {
                    for record in &samples {
                        assert!(btree.remove(record.as_ref()));
                    }
                },
                criterion::BatchSize::SmallInput,
            )
        });
        group.bench_function("critbit", |b| {
            b.iter_batched(
                || critbit_insert(&samples),
                |mut tree| {
                    for record in &samples {
                        assert!(tree.remove(record.as_record()).is_some());
                    }
                },
                criterion::BatchSize::SmallInput,
            )
        });
    }
}

criterion_group!(bench_baseline_group, bench);
