//! Criterion benchmarks for `find_first`/`find_last` over synthetic sorted
//! `u32` arrays of varying size.
//!
//! Run with:
//!   cargo bench --bench search

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use binsearch::{find_first, find_last, BigEndian, Layout, SearchRange};

fn sorted_column(n: usize) -> Vec<u8> {
    let mut buf = vec![0u8; n * 4];
    for i in 0..n {
        let v = (i as u32) * 2;
        buf[i * 4..i * 4 + 4].copy_from_slice(&v.to_be_bytes());
    }
    buf
}

fn bench_find_first_last(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_first_last");

    for &n in &[1_000usize, 100_000, 1_000_000] {
        let bytes = sorted_column(n);
        let layout = Layout::Column { width: 4 };
        let range = SearchRange::new(0, (n - 1) as u64);
        let target = ((n / 2) as u32) * 2;

        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("find_first", n), &target, |b, &target| {
            b.iter(|| find_first::<u32, BigEndian>(&bytes, layout, range, target, None))
        });
        group.bench_with_input(BenchmarkId::new("find_last", n), &target, |b, &target| {
            b.iter(|| find_last::<u32, BigEndian>(&bytes, layout, range, target, None))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_find_first_last);
criterion_main!(benches);
