use criterion::{black_box, criterion_group, BenchmarkId, Criterion};
use rv_schemas::coordinates::BlockPos;

fn bench_key_encode(c: &mut Criterion) {
    let some_pos = BlockPos::new(12989, -2173, 889);
    c.bench_with_input(BenchmarkId::new("key_encode", some_pos), &some_pos, |b, &i| {
        b.iter(move || black_box(i).to_key())
    });
}

fn bench_key_decode(c: &mut Criterion) {
    let some_key = BlockPos::new(12989, -2173, 889).to_key();
    c.bench_with_input(BenchmarkId::new("key_decode", &some_key), &some_key, |b, k| {
        b.iter(|| BlockPos::from_key(black_box(k)).unwrap())
    });
}

criterion_group!(key_benches, bench_key_encode, bench_key_decode);
