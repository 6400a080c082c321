use criterion::{black_box, criterion_group, criterion_main, Criterion};

use pmaze::{generate, Dims, GeneratorKind};

const SIZE: Dims = Dims(32, 32);

pub fn prim(c: &mut Criterion) {
    c.bench_function("prim_32x32", |b| {
        b.iter(|| generate(GeneratorKind::Prim, black_box(SIZE), Some(77)).unwrap())
    });
}

pub fn wilson(c: &mut Criterion) {
    c.bench_function("wilson_32x32", |b| {
        b.iter(|| generate(GeneratorKind::Wilson, black_box(SIZE), Some(77)).unwrap())
    });
}

criterion_group! {name = benches; config = Criterion::default().sample_size(10); targets = prim, wilson}
criterion_main!(benches);
