use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;
use std::time::Duration;
use swf_codec::prelude::*;

const N: usize = 10_000;

fn gen_rects(rng: &mut SmallRng) -> Vec<Rect> {
    (0..N)
        .map(|_| {
            let mut coord = || Twips(rng.random::<i32>() >> rng.random_range(8..32_u32));
            Rect::new(coord(), coord(), coord(), coord())
        })
        .collect()
}

fn gen_matrices(rng: &mut SmallRng) -> Vec<Matrix> {
    (0..N)
        .map(|_| {
            let mut fb = || (rng.random::<i32>() >> rng.random_range(8..32_u32)) as f64 / 65536.0;
            Matrix::new(fb(), fb(), fb(), fb(), Twips(rng.random_range(-8000..8000)), Twips(0))
        })
        .collect()
}

fn encode_all<T: Encode>(values: &[T]) -> Vec<u8> {
    let mut buffer: Vec<u8> = Vec::with_capacity(values.iter().map(Encode::byte_size).sum());
    let mut writer = MemByteWriterVec::new(&mut buffer);
    for value in values {
        value.encode(&mut writer).unwrap();
    }
    buffer
}

fn decode_all<T: Decode>(bytes: &[u8]) {
    let mut reader = MemByteReader::new(bytes);
    for _ in 0..N {
        black_box(T::decode(&mut reader).unwrap());
    }
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(0);
    let rects = gen_rects(&mut rng);
    let matrices = gen_matrices(&mut rng);
    let varints: Vec<EncodedU32> = (0..N)
        .map(|_| EncodedU32(rng.random::<u32>() >> rng.random_range(0..32_u32)))
        .collect();

    c.bench_function("encode Rect", |b| b.iter(|| black_box(encode_all(&rects))));
    c.bench_function("encode Matrix", |b| {
        b.iter(|| black_box(encode_all(&matrices)))
    });
    c.bench_function("encode EncodedU32", |b| {
        b.iter(|| black_box(encode_all(&varints)))
    });

    let rect_bytes = encode_all(&rects);
    let matrix_bytes = encode_all(&matrices);
    let varint_bytes = encode_all(&varints);
    c.bench_function("decode Rect", |b| b.iter(|| decode_all::<Rect>(&rect_bytes)));
    c.bench_function("decode Matrix", |b| {
        b.iter(|| decode_all::<Matrix>(&matrix_bytes))
    });
    c.bench_function("decode EncodedU32", |b| {
        b.iter(|| decode_all::<EncodedU32>(&varint_bytes))
    });

    c.bench_function("write_sb (random widths)", |b| {
        b.iter_batched(
            || Vec::<u8>::with_capacity(4 * N),
            |mut buffer| {
                let mut writer = BitWriter::new(MemByteWriterVec::new(&mut buffer));
                for rect in &rects {
                    let width = len_sb(rect.x_min.0);
                    writer.write_sb(rect.x_min.0, width).unwrap();
                }
                writer.into_inner().unwrap();
                buffer
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .warm_up_time(Duration::from_secs(1))
        .measurement_time(Duration::from_secs(3));
    targets = criterion_benchmark
}
criterion_main!(benches);
