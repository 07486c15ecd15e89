//! Queue throughput benchmarks
//!
//! Measures pushes through repeated growth and steady-state push/pop cycling
//! on a buffer that keeps wrapping around.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ringqueue::RingQueue;

fn push_from_empty(n: usize) -> RingQueue<u64> {
    let mut queue = RingQueue::new();
    for i in 0..n as u64 {
        queue.push(i).unwrap();
    }
    queue
}

fn cycle(queue: &mut RingQueue<u64>, rounds: usize) -> u64 {
    let mut sum = 0;
    for i in 0..rounds as u64 {
        queue.push(i).unwrap();
        sum += queue.pop_front().unwrap_or(0);
    }
    sum
}

fn growth_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_growth");

    for n in [64usize, 4096, 65536] {
        group.bench_with_input(BenchmarkId::new("from_empty", n), &n, |b, &n| {
            b.iter(|| push_from_empty(black_box(n)))
        });
    }

    group.finish();
}

fn cycle_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_pop_cycle");

    for depth in [1usize, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("depth", depth), &depth, |b, &depth| {
            let mut queue = push_from_empty(depth);
            b.iter(|| cycle(&mut queue, black_box(1024)))
        });
    }

    group.finish();
}

fn clone_benchmark(c: &mut Criterion) {
    let queue = push_from_empty(4096);
    c.bench_function("clone_4096", |b| b.iter(|| black_box(&queue).clone()));
}

criterion_group!(benches, growth_benchmark, cycle_benchmark, clone_benchmark);
criterion_main!(benches);
