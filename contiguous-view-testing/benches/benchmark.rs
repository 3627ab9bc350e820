use contiguous_view::View;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rand::{RngCore, SeedableRng, rngs::StdRng};

const LEN: usize = 1 << 16;

struct Rng(StdRng);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    fn collect_u32(&mut self, count: usize) -> Vec<u32> {
        std::iter::repeat_with(|| self.0.next_u32())
            .take(count)
            .collect()
    }

    fn indices(&mut self, count: usize, bound: usize) -> Vec<usize> {
        std::iter::repeat_with(|| self.0.next_u32() as usize % bound)
            .take(count)
            .collect()
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut rng = Rng::new(42);
    let numbers = rng.collect_u32(LEN);
    let indices = rng.indices(1 << 12, LEN);

    c.bench_function("index-slice", |b| {
        let slice = &numbers[..];
        b.iter(|| indices.iter().map(|&i| slice[i] as u64).sum::<u64>())
    });

    c.bench_function("index-view", |b| {
        let view = View::new(&numbers);
        b.iter(|| indices.iter().map(|&i| view[i] as u64).sum::<u64>())
    });

    c.bench_function("at-view", |b| {
        let view = View::new(&numbers);
        b.iter(|| {
            indices
                .iter()
                .filter_map(|&i| view.at(i).ok())
                .map(|&n| n as u64)
                .sum::<u64>()
        })
    });

    c.bench_function("subview-dynamic", |b| {
        let view = View::new(&numbers);
        b.iter(|| {
            indices
                .iter()
                .filter_map(|&i| view.subview(i, Some(8)).ok())
                .map(|sub| sub.iter().map(|&n| n as u64).sum::<u64>())
                .sum::<u64>()
        })
    });

    c.bench_function("subview-static", |b| {
        let view = View::new(&numbers);
        b.iter(|| {
            indices
                .iter()
                .filter_map(|&i| view.subview(i, None).ok())
                .filter_map(|rest| rest.first_static::<8>().ok())
                .map(|sub| sub.iter().map(|&n| n as u64).sum::<u64>())
                .sum::<u64>()
        })
    });

    c.bench_function("bytes", |b| {
        let view = View::new(&numbers);
        b.iter(|| {
            black_box(view)
                .as_bytes()
                .iter()
                .map(|&byte| byte as u64)
                .sum::<u64>()
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
