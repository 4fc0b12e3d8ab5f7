#![allow(unused_crate_dependencies)]
use std::hint::black_box;

use bin_text::{base32, hex};
use criterion::{Criterion, criterion_group, criterion_main};
use smallvec::SmallVec;

fn bench_to_hex(c: &mut Criterion) {
    fn bench(c: &mut Criterion, name: &str, data: &[u8]) {
        c.bench_function(name, |b| b.iter(|| hex::to_string(black_box(data))));
    }

    bench(c, "to_hex_small", &create_data::<16>());
    bench(c, "to_hex_large", &create_data::<12000>());
}

fn bench_encode_hex(c: &mut Criterion) {
    fn bench(c: &mut Criterion, name: &str, data: &[u8]) {
        c.bench_function(name, |b| {
            b.iter(|| {
                let mut buf = String::with_capacity(hex::encoded_len(data.len()));
                black_box(hex::encode(&mut buf, black_box(data))).expect("write cannot fail");
                buf
            })
        });
    }

    bench(c, "encode_hex_small", &create_data::<16>());
    bench(c, "encode_hex_large", &create_data::<12000>());
}

fn bench_from_hex(c: &mut Criterion) {
    fn bench(c: &mut Criterion, name: &str, data: &[u8]) {
        let data = hex::to_string(data);

        c.bench_function(name, |b| {
            b.iter(|| {
                let mut vec = <SmallVec<[u8; 16]>>::new();
                black_box(hex::decode(&mut vec, &data)).expect("data is valid");
                vec
            })
        });
    }

    bench(c, "from_hex_small", &create_data::<16>());
    bench(c, "from_hex_large", &create_data::<12000>());
}

fn bench_to_base32(c: &mut Criterion) {
    fn bench(c: &mut Criterion, name: &str, data: &[u8]) {
        c.bench_function(name, |b| {
            b.iter(|| base32::to_string(black_box(data)).expect("len is a multiple of 5"))
        });
    }

    bench(c, "to_base32_small", &create_data::<20>());
    bench(c, "to_base32_large", &create_data::<12000>());
}

fn create_data<const LEN: usize>() -> [u8; LEN] {
    let mut buf = [0u8; LEN];

    #[expect(clippy::cast_possible_truncation)]
    for (index, b) in buf.iter_mut().enumerate() {
        *b = u8::MAX - index as u8;
    }

    buf
}

criterion_group!(
    codec,
    bench_to_hex,
    bench_encode_hex,
    bench_from_hex,
    bench_to_base32
);
criterion_main!(codec);
